use crate::{Bird, Config, Events, Particle, Pipe};

/// Apply gravity to the bird and keep it between the ceiling and the ground
pub fn update_bird(bird: &mut Bird, config: &Config, events: &mut Events) {
    bird.vel = (bird.vel + config.gravity).clamp(config.max_up_speed, config.max_fall_speed);
    bird.pos.y += bird.vel;

    let ground_y = config.ground_y();
    if bird.bottom() >= ground_y {
        bird.pos.y = ground_y - bird.size;
        bird.vel = 0.0;
        events.hit_ground = true;
    }

    // Ceiling stops the bird but is not fatal
    if bird.pos.y <= 0.0 {
        bird.pos.y = 0.0;
        bird.vel = 0.0;
    }
}

/// Scroll every pipe left at the configured speed
pub fn move_pipes(pipes: &mut [Pipe], config: &Config) {
    for pipe in pipes {
        pipe.x -= config.pipe_speed;
    }
}

/// Advance particles and drop the ones that burned out in the same pass
pub fn update_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(|particle| {
        particle.step();
        particle.is_alive()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup_bird() -> (Bird, Config, Events) {
        let config = Config::new();
        let bird = Bird::new(config.bird_spawn(), config.bird_size);
        (bird, config, Events::new())
    }

    #[test]
    fn test_gravity_accelerates_bird() {
        let (mut bird, config, mut events) = setup_bird();
        update_bird(&mut bird, &config, &mut events);
        assert_eq!(bird.vel, 0.25);
        assert_eq!(bird.pos.y, 200.25);
        assert!(!events.hit_ground);
    }

    #[test]
    fn test_fall_speed_is_capped() {
        let (mut bird, config, mut events) = setup_bird();
        bird.vel = 4.9;
        update_bird(&mut bird, &config, &mut events);
        assert_eq!(bird.vel, 5.0, "Velocity clamps at max fall speed");
    }

    #[test]
    fn test_rise_speed_is_capped() {
        let (mut bird, config, mut events) = setup_bird();
        bird.vel = -20.0;
        update_bird(&mut bird, &config, &mut events);
        assert_eq!(bird.vel, -6.0, "Velocity clamps at max up speed");
    }

    #[test]
    fn test_ground_hit_clamps_and_reports() {
        let (mut bird, config, mut events) = setup_bird();
        bird.pos.y = config.ground_y() - bird.size - 1.0;
        bird.vel = 5.0;
        update_bird(&mut bird, &config, &mut events);
        assert!(events.hit_ground);
        assert_eq!(bird.pos.y, config.ground_y() - bird.size);
        assert_eq!(bird.vel, 0.0);
    }

    #[test]
    fn test_ceiling_hit_is_not_fatal() {
        let (mut bird, config, mut events) = setup_bird();
        bird.pos.y = 2.0;
        bird.vel = -6.0;
        update_bird(&mut bird, &config, &mut events);
        assert_eq!(bird.pos.y, 0.0);
        assert_eq!(bird.vel, 0.0);
        assert!(!events.crashed());
    }

    #[test]
    fn test_move_pipes() {
        let config = Config::new();
        let mut pipes = vec![Pipe::new(800.0, 100.0, 140.0), Pipe::new(500.0, 90.0, 140.0)];
        move_pipes(&mut pipes, &config);
        assert_eq!(pipes[0].x, 798.5);
        assert_eq!(pipes[1].x, 498.5);
    }

    #[test]
    fn test_update_particles_removes_expired_immediately() {
        let mut particles = vec![
            Particle::new(Vec2::ZERO, Vec2::new(1.0, 1.0), 1),
            Particle::new(Vec2::ZERO, Vec2::new(-1.0, 2.0), 3),
        ];
        update_particles(&mut particles);
        assert_eq!(particles.len(), 1, "Particle with no life left is dropped");
        assert_eq!(particles[0].life, 2);
        assert_eq!(particles[0].pos, Vec2::new(-1.0, 2.0));
        assert!(particles.iter().all(|p| p.life > 0));
    }
}
