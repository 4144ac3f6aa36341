//! Immediate-mode renderer
//!
//! [`render`] turns the current world into a list of [`DrawCommand`]s. It
//! reads entities and never mutates them; the host replays the list on its
//! 2D surface every frame, whatever the game state.

pub mod background;
pub mod bird;
pub mod paint;
pub mod particles;
pub mod pipes;

pub use paint::*;

use crate::{Config, World};
use glam::Vec2;

/// One drawing operation on a canvas-like surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { size: Vec2 },
    /// Push the current transform
    Save,
    /// Pop the transform pushed by the matching `Save`
    Restore,
    Translate(Vec2),
    /// Rotate by radians, clockwise in canvas space
    Rotate(f32),
    FillRect {
        pos: Vec2,
        size: Vec2,
        paint: Paint,
    },
    StrokeRect {
        pos: Vec2,
        size: Vec2,
        color: Color,
        width: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
    FillEllipse {
        center: Vec2,
        radii: Vec2,
        paint: Paint,
    },
    StrokeEllipse {
        center: Vec2,
        radii: Vec2,
        color: Color,
        width: f32,
    },
    FillPolygon {
        points: Vec<Vec2>,
        paint: Paint,
    },
    StrokePolygon {
        points: Vec<Vec2>,
        color: Color,
        width: f32,
    },
    /// Union of circles filled in a single path, as `(center, radius)`
    FillCircles {
        circles: Vec<(Vec2, f32)>,
        paint: Paint,
    },
}

/// Everything the renderer reads
#[derive(Debug, Clone, Copy)]
pub struct RenderView<'a> {
    pub config: &'a Config,
    pub world: &'a World,
    pub frame: i64,
}

/// Build the full frame: background, ground, clouds, pipes, bird, particles
pub fn render(view: &RenderView) -> Vec<DrawCommand> {
    let config = view.config;
    let mut commands = Vec::with_capacity(128);

    commands.push(DrawCommand::Clear {
        size: Vec2::new(config.canvas_width, config.canvas_height),
    });
    background::draw_sky(&mut commands, config);
    background::draw_ground(&mut commands, config, view.frame);
    background::draw_clouds(&mut commands, config, view.frame);
    pipes::draw_pipes(&mut commands, &view.world.pipes, config);
    bird::draw_bird(&mut commands, &view.world.bird);
    particles::draw_particles(&mut commands, &view.world.particles, view.frame);

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Particle, Pipe};

    fn count_saves(commands: &[DrawCommand]) -> (usize, usize) {
        let saves = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Save))
            .count();
        let restores = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Restore))
            .count();
        (saves, restores)
    }

    #[test]
    fn test_frame_starts_with_clear() {
        let config = Config::new();
        let world = World::new(&config);
        let commands = render(&RenderView {
            config: &config,
            world: &world,
            frame: 0,
        });

        assert_eq!(
            commands[0],
            DrawCommand::Clear {
                size: Vec2::new(800.0, 400.0)
            }
        );
    }

    #[test]
    fn test_transforms_are_balanced() {
        let config = Config::new();
        let mut world = World::new(&config);
        world.pipes.push(Pipe::new(300.0, 120.0, 140.0));
        world
            .particles
            .push(Particle::new(Vec2::new(110.0, 210.0), Vec2::ZERO, 10));

        let commands = render(&RenderView {
            config: &config,
            world: &world,
            frame: 42,
        });

        let (saves, restores) = count_saves(&commands);
        assert_eq!(saves, restores);
        // Bird and one particle each use a transform
        assert_eq!(saves, 2);
    }

    #[test]
    fn test_more_entities_more_commands() {
        let config = Config::new();
        let mut world = World::new(&config);
        let view = RenderView {
            config: &config,
            world: &world,
            frame: 5,
        };
        let empty = render(&view).len();

        world.pipes.push(Pipe::new(300.0, 120.0, 140.0));
        let with_pipe = render(&RenderView {
            config: &config,
            world: &world,
            frame: 5,
        })
        .len();

        assert!(with_pipe > empty);
    }

    #[test]
    fn test_render_is_repeatable_for_same_frame() {
        let config = Config::new();
        let world = World::new(&config);
        let view = RenderView {
            config: &config,
            world: &world,
            frame: 77,
        };
        assert_eq!(render(&view), render(&view));
    }

    #[test]
    fn test_layers_drawn_back_to_front() {
        let config = Config::new();
        let mut world = World::new(&config);
        let pipe = Pipe::new(300.0, 120.0, 140.0);
        let particle = Particle::new(Vec2::new(60.0, 70.0), Vec2::ZERO, 10);
        world.pipes.push(pipe);
        world.particles.push(particle);
        let frame = 12;

        let commands = render(&RenderView {
            config: &config,
            world: &world,
            frame,
        });

        let mut expected = vec![DrawCommand::Clear {
            size: Vec2::new(800.0, 400.0),
        }];
        background::draw_sky(&mut expected, &config);
        background::draw_ground(&mut expected, &config, frame);
        background::draw_clouds(&mut expected, &config, frame);
        pipes::draw_pipes(&mut expected, &world.pipes, &config);
        bird::draw_bird(&mut expected, &world.bird);
        particles::draw_particles(&mut expected, &world.particles, frame);
        assert_eq!(commands, expected);

        let position = |target: &DrawCommand| commands.iter().position(|c| c == target);
        let pipe_border = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::StrokeRect { pos, .. } if pos.x == pipe.x))
            .expect("pipe border drawn");
        let bird_origin = position(&DrawCommand::Translate(world.bird.center()))
            .expect("bird drawn");
        let particle_origin =
            position(&DrawCommand::Translate(particle.pos)).expect("particle drawn");

        assert_eq!(commands[bird_origin - 1], DrawCommand::Save);
        assert!(pipe_border < bird_origin - 1, "Pipes sit behind the bird");
        assert!(bird_origin < particle_origin, "Particles sit on top of the bird");
    }
}
