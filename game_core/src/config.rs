use crate::Params;
use glam::Vec2;

/// Which tuning profile a config was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Desktop,
    Narrow,
}

/// Game configuration
///
/// Replaced wholesale on viewport resize; read-only during a tick.
#[derive(Debug, Clone)]
pub struct Config {
    pub profile: Profile,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub bird_x: f32,
    pub bird_size: f32,
    pub gravity: f32,
    pub flap_strength: f32,
    pub max_up_speed: f32,
    pub max_fall_speed: f32,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    pub pipe_spawn_rate: i64,
    pub gap_margin: f32,
    pub ground_height: f32,
    pub collision_tolerance: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Profile::Desktop,
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            bird_x: Params::BIRD_X,
            bird_size: Params::BIRD_SIZE,
            gravity: Params::GRAVITY,
            flap_strength: Params::FLAP_STRENGTH,
            max_up_speed: Params::MAX_UP_SPEED,
            max_fall_speed: Params::MAX_FALL_SPEED,
            pipe_width: Params::PIPE_WIDTH,
            pipe_gap: Params::PIPE_GAP,
            pipe_speed: Params::PIPE_SPEED,
            pipe_spawn_rate: Params::PIPE_SPAWN_RATE,
            gap_margin: Params::GAP_MARGIN,
            ground_height: Params::GROUND_HEIGHT,
            collision_tolerance: Params::COLLISION_TOLERANCE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed 800x400 canvas with the standard physics
    pub fn desktop() -> Self {
        Self::default()
    }

    /// Full-viewport canvas with gentler physics and a wider gap
    pub fn narrow(width: f32, height: f32) -> Self {
        Self {
            profile: Profile::Narrow,
            canvas_width: width,
            canvas_height: height,
            gravity: Params::NARROW_GRAVITY,
            flap_strength: Params::NARROW_FLAP_STRENGTH,
            pipe_gap: Params::NARROW_PIPE_GAP,
            pipe_speed: Params::NARROW_PIPE_SPEED,
            ..Self::default()
        }
    }

    /// Pick the profile for a viewport of the given size
    pub fn for_viewport(width: f32, height: f32) -> Self {
        if width <= Params::NARROW_MAX_WIDTH {
            Self::narrow(width, height)
        } else {
            Self::desktop()
        }
    }

    pub fn is_narrow(&self) -> bool {
        self.profile == Profile::Narrow
    }

    /// Y coordinate of the top of the ground band
    pub fn ground_y(&self) -> f32 {
        self.canvas_height - self.ground_height
    }

    /// Bounds for a pipe's top height, as `(min, max)`.
    ///
    /// `max` is never below `min`; a canvas too short for the margins pins
    /// the gap at the minimum.
    pub fn gap_range(&self) -> (f32, f32) {
        let min = self.gap_margin;
        let max = self.canvas_height - self.pipe_gap - self.gap_margin;
        (min, max.max(min))
    }

    /// Starting position for the bird
    pub fn bird_spawn(&self) -> Vec2 {
        Vec2::new(self.bird_x, self.canvas_height / 2.0)
    }
}
