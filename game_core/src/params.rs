/// Game tuning parameters for Flappy
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas (desktop profile)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;
    pub const NARROW_MAX_WIDTH: f32 = 480.0; // viewports this wide or narrower use the narrow profile

    // Bird
    pub const BIRD_X: f32 = 100.0;
    pub const BIRD_SIZE: f32 = 20.0;
    pub const GRAVITY: f32 = 0.25;
    pub const FLAP_STRENGTH: f32 = -6.0;
    pub const MAX_UP_SPEED: f32 = -6.0;
    pub const MAX_FALL_SPEED: f32 = 5.0;

    // Narrow profile overrides (easier)
    pub const NARROW_GRAVITY: f32 = 0.2;
    pub const NARROW_FLAP_STRENGTH: f32 = -5.0;
    pub const NARROW_PIPE_GAP: f32 = 160.0;
    pub const NARROW_PIPE_SPEED: f32 = 1.2;

    // Pipes
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 140.0;
    pub const PIPE_SPEED: f32 = 1.5;
    pub const PIPE_SPAWN_RATE: i64 = 150; // ticks between spawns
    pub const GAP_MARGIN: f32 = 80.0; // keeps gaps away from the top and bottom edges
    pub const PIPE_CAP_HEIGHT: f32 = 25.0;
    pub const PIPE_CAP_OVERHANG: f32 = 5.0;

    // World
    pub const GROUND_HEIGHT: f32 = 30.0;
    pub const COLLISION_TOLERANCE: f32 = 3.0;
    pub const GRACE_FRAMES: i64 = 60; // ~1 second at 60 Hz before the first pipe can spawn

    // Particles
    pub const FLAP_PARTICLES: usize = 5;
    pub const PARTICLE_LIFE: u32 = 25;
    pub const PARTICLE_SPREAD_X: f32 = 4.0; // vx in [-2, 2)
    pub const PARTICLE_MIN_VY: f32 = 1.0;
    pub const PARTICLE_MAX_VY: f32 = 4.0;
}
