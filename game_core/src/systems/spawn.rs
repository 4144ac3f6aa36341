use crate::{Bird, Config, GameRng, Params, Particle, Pipe};
use glam::Vec2;
use rand::Rng;

/// Pipes spawn on every `pipe_spawn_rate`-th frame once the grace period is over
pub fn should_spawn_pipe(frame: i64, config: &Config) -> bool {
    frame > 0 && frame % config.pipe_spawn_rate == 0
}

/// Append a new pipe at the right edge with a random gap height
pub fn spawn_pipe(pipes: &mut Vec<Pipe>, config: &Config, rng: &mut GameRng) {
    let (min, max) = config.gap_range();
    let top_height = if max > min {
        rng.0.gen_range(min..max)
    } else {
        min
    };

    log::debug!("Spawned pipe with gap at {:.1}", top_height);
    pipes.push(Pipe::new(config.canvas_width, top_height, config.pipe_gap));
}

/// Emit a burst of sparkles from the bird's centre
pub fn spawn_flap_burst(particles: &mut Vec<Particle>, bird: &Bird, rng: &mut GameRng) {
    let origin = bird.center();
    let half_spread = Params::PARTICLE_SPREAD_X / 2.0;

    for _ in 0..Params::FLAP_PARTICLES {
        let vel = Vec2::new(
            rng.0.gen_range(-half_spread..half_spread),
            rng.0.gen_range(Params::PARTICLE_MIN_VY..Params::PARTICLE_MAX_VY),
        );
        particles.push(Particle::new(origin, vel, Params::PARTICLE_LIFE));
    }
}
