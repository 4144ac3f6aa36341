use crate::{Bird, Config, Events, Pipe};

/// Check whether the bird touches either segment of `pipe`.
///
/// Both the bird's box and the gap edges are shrunk by the configured
/// tolerance, so grazing contact is forgiven.
pub fn check_pipe_collision(bird: &Bird, pipe: &Pipe, config: &Config) -> bool {
    let tolerance = config.collision_tolerance;
    let hitbox = bird.bounds().inset(tolerance);

    if !hitbox.overlaps_x(pipe.x, pipe.right(config.pipe_width)) {
        return false;
    }

    hitbox.top() < pipe.top_height - tolerance || hitbox.bottom() > pipe.bottom_y + tolerance
}

/// Flag a pipe hit if the bird collides with any pipe
pub fn check_pipe_collisions(pipes: &[Pipe], bird: &Bird, config: &Config, events: &mut Events) {
    if pipes
        .iter()
        .any(|pipe| check_pipe_collision(bird, pipe, config))
    {
        events.hit_pipe = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (Config, Events) {
        (Config::new(), Events::new())
    }

    fn bird_at(y: f32, config: &Config) -> Bird {
        Bird::new(Vec2::new(config.bird_x, y), config.bird_size)
    }

    #[test]
    fn test_bird_inside_gap_is_safe() {
        let (config, _) = setup();
        // Gap spans 100..240, bird spans 150..170
        let pipe = Pipe::new(90.0, 100.0, 140.0);
        assert!(!check_pipe_collision(&bird_at(150.0, &config), &pipe, &config));
    }

    #[test]
    fn test_bird_hits_top_segment() {
        let (config, _) = setup();
        let pipe = Pipe::new(90.0, 100.0, 140.0);
        // Hitbox top = 50 + 3 < 100 - 3
        assert!(check_pipe_collision(&bird_at(50.0, &config), &pipe, &config));
    }

    #[test]
    fn test_bird_hits_bottom_segment() {
        let (config, _) = setup();
        let pipe = Pipe::new(90.0, 100.0, 140.0);
        // Hitbox bottom = 240 + 20 - 3 = 257 > 240 + 3
        assert!(check_pipe_collision(&bird_at(240.0, &config), &pipe, &config));
    }

    #[test]
    fn test_tolerance_forgives_grazing_top() {
        let (config, _) = setup();
        let pipe = Pipe::new(90.0, 100.0, 140.0);
        // Bird top at 94: hitbox top 97 == 100 - 3, not strictly above
        assert!(!check_pipe_collision(&bird_at(94.0, &config), &pipe, &config));
        // One pixel higher is a hit
        assert!(check_pipe_collision(&bird_at(93.0, &config), &pipe, &config));
    }

    #[test]
    fn test_tolerance_forgives_grazing_bottom() {
        let (config, _) = setup();
        let pipe = Pipe::new(90.0, 100.0, 140.0);
        // Bird bottom at 246: hitbox bottom 243 == 240 + 3, not strictly below
        assert!(!check_pipe_collision(&bird_at(226.0, &config), &pipe, &config));
        assert!(check_pipe_collision(&bird_at(227.0, &config), &pipe, &config));
    }

    #[test]
    fn test_no_collision_outside_horizontal_span() {
        let (config, _) = setup();
        // Bird hitbox spans 103..117; pipe ahead starts at 117
        let ahead = Pipe::new(117.0, 300.0, 20.0);
        assert!(!check_pipe_collision(&bird_at(0.0, &config), &ahead, &config));
        // Pipe behind ends at 103
        let behind = Pipe::new(43.0, 300.0, 20.0);
        assert!(!check_pipe_collision(&bird_at(0.0, &config), &behind, &config));
    }

    #[test]
    fn test_check_pipe_collisions_sets_event() {
        let (config, mut events) = setup();
        let bird = bird_at(50.0, &config);
        let pipes = vec![Pipe::new(600.0, 100.0, 140.0), Pipe::new(90.0, 100.0, 140.0)];

        check_pipe_collisions(&pipes, &bird, &config, &mut events);

        assert!(events.hit_pipe);
    }

    #[test]
    fn test_check_pipe_collisions_clear_path() {
        let (config, mut events) = setup();
        let bird = bird_at(150.0, &config);
        let pipes = vec![Pipe::new(90.0, 100.0, 140.0)];

        check_pipe_collisions(&pipes, &bird, &config, &mut events);

        assert!(!events.hit_pipe);
    }
}
