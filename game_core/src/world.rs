use crate::{Bird, Config, Particle, Pipe};

/// Every live entity in the game
///
/// Pipes are kept in spawn order (oldest first); particles in emission order.
#[derive(Debug, Clone)]
pub struct World {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub particles: Vec<Particle>,
}

impl World {
    pub fn new(config: &Config) -> Self {
        Self {
            bird: Bird::new(config.bird_spawn(), config.bird_size),
            pipes: Vec::new(),
            particles: Vec::new(),
        }
    }

    /// Fresh run: bird back at spawn, no pipes, no particles
    pub fn reset(&mut self, config: &Config) {
        self.bird.reset(config.bird_spawn());
        self.bird.size = config.bird_size;
        self.pipes.clear();
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_reset_clears_entities() {
        let config = Config::new();
        let mut world = World::new(&config);
        world.pipes.push(Pipe::new(400.0, 100.0, 140.0));
        world
            .particles
            .push(Particle::new(Vec2::ZERO, Vec2::ZERO, 25));
        world.bird.pos.y = 10.0;
        world.bird.vel = -3.0;

        world.reset(&config);

        assert!(world.pipes.is_empty());
        assert!(world.particles.is_empty());
        assert_eq!(world.bird.pos, Vec2::new(100.0, 200.0));
        assert_eq!(world.bird.vel, 0.0);
    }
}
