use crate::{Config, Pipe};

/// Garbage collection: drop pipes that have scrolled fully past the left edge
pub fn despawn_offscreen_pipes(pipes: &mut Vec<Pipe>, config: &Config) {
    pipes.retain(|pipe| pipe.right(config.pipe_width) >= 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offscreen_pipes_removed_in_order() {
        let config = Config::new();
        let mut pipes = vec![
            Pipe::new(-61.0, 100.0, 140.0),
            Pipe::new(-60.0, 110.0, 140.0),
            Pipe::new(200.0, 120.0, 140.0),
        ];

        despawn_offscreen_pipes(&mut pipes, &config);

        assert_eq!(pipes.len(), 2);
        assert_eq!(pipes[0].top_height, 110.0, "Right edge at 0 is still kept");
        assert_eq!(pipes[1].top_height, 120.0, "Survivors keep their order");
    }
}
