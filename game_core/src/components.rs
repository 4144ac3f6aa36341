use crate::Aabb;
use glam::Vec2;

/// The player-controlled bird
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    pub pos: Vec2, // top-left corner; x stays fixed during a run
    pub vel: f32,  // vertical velocity, positive = falling
    pub size: f32,
}

impl Bird {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, vel: 0.0, size }
    }

    /// Put the bird back at `spawn` with no velocity
    pub fn reset(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = 0.0;
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(self.size))
    }
}

/// A pipe pair with a vertical gap between the top and bottom segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub x: f32,          // left edge
    pub top_height: f32, // bottom edge of the top segment
    pub bottom_y: f32,   // top edge of the bottom segment
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f32, top_height: f32, gap: f32) -> Self {
        Self {
            x,
            top_height,
            bottom_y: top_height + gap,
            scored: false,
        }
    }

    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Short-lived sparkle emitted when the bird flaps
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, life: u32) -> Self {
        Self {
            pos,
            vel,
            life,
            max_life: life,
        }
    }

    /// Advance one tick
    pub fn step(&mut self) {
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Remaining life as a fraction of the starting life, in [0, 1]
    pub fn alpha(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bird_reset() {
        let mut bird = Bird::new(Vec2::new(100.0, 50.0), 20.0);
        bird.vel = 4.0;
        bird.reset(Vec2::new(100.0, 200.0));
        assert_eq!(bird.pos.y, 200.0);
        assert_eq!(bird.vel, 0.0);
    }

    #[test]
    fn test_bird_center() {
        let bird = Bird::new(Vec2::new(100.0, 200.0), 20.0);
        assert_eq!(bird.center(), Vec2::new(110.0, 210.0));
        assert_eq!(bird.bottom(), 220.0);
    }

    #[test]
    fn test_pipe_gap() {
        let pipe = Pipe::new(800.0, 120.0, 140.0);
        assert_eq!(pipe.bottom_y, 260.0);
        assert!(!pipe.scored);
        assert_eq!(pipe.right(60.0), 860.0);
    }

    #[test]
    fn test_particle_step_and_alpha() {
        let mut particle = Particle::new(Vec2::ZERO, Vec2::new(1.0, 2.0), 2);
        assert_eq!(particle.alpha(), 1.0);

        particle.step();
        assert_eq!(particle.pos, Vec2::new(1.0, 2.0));
        assert_eq!(particle.life, 1);
        assert_eq!(particle.alpha(), 0.5);

        particle.step();
        assert!(!particle.is_alive());
        assert_eq!(particle.alpha(), 0.0);
    }
}
