//! The whole game: state machine, entities, scores and host capabilities
//!
//! Hosts feed [`InputEvent`]s and call [`Game::tick`] once per display
//! refresh, then draw [`Game::render`] and apply [`Game::overlay`].

use crate::render::{self, DrawCommand, RenderView};
use crate::systems::{spawn_flap_burst, update_particles};
use crate::{
    load_best, save_best, step, Config, Events, FsmState, GameAction, GameFsm, GameRng,
    InputEvent, OverlayView, Params, Score, ScoreStore, Sound, SoundHook, World,
};

pub struct Game {
    pub config: Config,
    pub fsm: GameFsm,
    pub world: World,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub frame: i64, // negative during the grace period after a run starts
    store: Box<dyn ScoreStore>,
    sound: Box<dyn SoundHook>,
}

impl Game {
    /// New game on the start screen with the best score read from `store`
    pub fn new(
        config: Config,
        seed: u64,
        store: Box<dyn ScoreStore>,
        sound: Box<dyn SoundHook>,
    ) -> Self {
        let best = load_best(store.as_ref());
        log::info!("Best score loaded: {}", best);

        Self {
            world: World::new(&config),
            config,
            fsm: GameFsm::new(),
            score: Score::new(best),
            events: Events::new(),
            rng: GameRng::new(seed),
            frame: 0,
            store,
            sound,
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    /// Route a raw input event. Returns true when the host should suppress
    /// the event's default browser action.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if event.is_primary() {
            self.primary_input();
        }
        event.suppresses_default()
    }

    /// Space, click, tap or the flap button
    pub fn primary_input(&mut self) {
        match self.fsm.state() {
            FsmState::Start => self.begin_run(),
            FsmState::Playing => self.flap(),
            FsmState::GameOver => {}
        }
    }

    /// Drive the state machine, logging the outcome
    fn apply(&mut self, action: GameAction) -> bool {
        let result = self.fsm.transition(action);
        if result.success {
            log::info!(
                "{:?} --{:?}--> {:?}",
                result.from_state,
                result.action,
                result.to_state
            );
        } else {
            log::debug!("Ignored {:?} in {:?}", result.action, result.from_state);
        }
        result.success
    }

    fn begin_run(&mut self) {
        if !self.apply(GameAction::Begin) {
            return;
        }
        self.score.reset();
        self.frame = -Params::GRACE_FRAMES;
        self.world.reset(&self.config);
    }

    fn flap(&mut self) {
        // Replaces the current velocity rather than adding to it
        self.world.bird.vel = self.config.flap_strength;
        spawn_flap_burst(&mut self.world.particles, &self.world.bird, &mut self.rng);
        self.sound.play(Sound::Flap);
    }

    fn game_over(&mut self) {
        if !self.apply(GameAction::Crash) {
            return;
        }
        if self.score.commit_best() {
            log::info!("New best score: {}", self.score.best);
            save_best(self.store.as_mut(), self.score.best);
        }
        self.sound.play(Sound::GameOver);
    }

    /// Back to the start screen; entities are reset when the next run begins
    pub fn restart(&mut self) {
        if !self.fsm.can_transition(GameAction::Restart) {
            log::debug!("Restart ignored in {:?}", self.fsm.state());
            return;
        }
        self.apply(GameAction::Restart);
    }

    /// Switch profile for a new viewport size. Score and pipes are kept.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.config = Config::for_viewport(width, height);
        self.world.bird.size = self.config.bird_size;
        self.world.bird.reset(self.config.bird_spawn());
        log::info!(
            "Resized to {}x{} ({:?})",
            self.config.canvas_width,
            self.config.canvas_height,
            self.config.profile
        );
    }

    /// Advance one display frame
    pub fn tick(&mut self) {
        self.frame += 1;

        // Sparkles keep fading on the game-over and start screens
        update_particles(&mut self.world.particles);

        if !self.fsm.is_playing() {
            return;
        }

        step(
            &mut self.world,
            &self.config,
            self.frame,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        for _ in 0..self.events.pipes_scored {
            self.sound.play(Sound::Score);
        }
        if self.events.crashed() {
            self.game_over();
        }
    }

    pub fn render(&self) -> Vec<DrawCommand> {
        render::render(&RenderView {
            config: &self.config,
            world: &self.world,
            frame: self.frame,
        })
    }

    pub fn overlay(&self) -> OverlayView {
        OverlayView::project(self.fsm.state(), &self.score, &self.config)
    }

    pub fn store(&self) -> &dyn ScoreStore {
        self.store.as_ref()
    }
}
