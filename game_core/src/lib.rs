pub mod bounds;
pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod input;
pub mod overlay;
pub mod params;
pub mod render;
pub mod resources;
pub mod sound;
pub mod storage;
pub mod systems;
pub mod world;

pub use bounds::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use input::*;
pub use overlay::*;
pub use params::*;
pub use resources::*;
pub use sound::*;
pub use storage::*;
pub use world::*;

use systems::*;

/// Run one tick of the Flappy simulation
///
/// Only called while playing. `frame` is the already-advanced frame counter.
/// Everything that happened is reported through `events`. Particles are not
/// touched here; they fade in every state (see [`Game::tick`]).
pub fn step(
    world: &mut World,
    config: &Config,
    frame: i64,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Gravity, ceiling and ground
    update_bird(&mut world.bird, config, events);

    // 2. A ground crash freezes everything else this tick
    if events.hit_ground {
        return;
    }

    // 3. Spawn pipes on schedule
    if should_spawn_pipe(frame, config) {
        spawn_pipe(&mut world.pipes, config, rng);
        events.pipe_spawned = true;
    }

    // 4. Scroll pipes, award points, test for hits, drop offscreen pipes
    move_pipes(&mut world.pipes, config);
    score_passed_pipes(&mut world.pipes, &world.bird, config, score, events);
    check_pipe_collisions(&world.pipes, &world.bird, config, events);
    despawn_offscreen_pipes(&mut world.pipes, config);

    if events.pipe_spawned {
        log::debug!("Frame {}: {} pipes on screen", frame, world.pipes.len());
    }
}
