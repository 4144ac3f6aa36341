/// Score tracking for the current run and across runs
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub current: u32, // Resets every run
    pub best: u32,    // Persisted between sessions
}

impl Score {
    pub fn new(best: u32) -> Self {
        Self { current: 0, best }
    }

    pub fn increment(&mut self) {
        self.current += 1;
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Raise `best` to `current` if the run beat it; returns whether it did
    pub fn commit_best(&mut self) -> bool {
        if self.current > self.best {
            self.best = self.current;
            true
        } else {
            false
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub pipes_scored: u32,
    pub hit_ground: bool,
    pub hit_pipe: bool,
    pub pipe_spawned: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.pipes_scored = 0;
        self.hit_ground = false;
        self.hit_pipe = false;
        self.pipe_spawned = false;
    }

    pub fn crashed(&self) -> bool {
        self.hit_ground || self.hit_pipe
    }
}
