use super::{Color, DrawCommand, Paint};
use crate::Particle;
use glam::Vec2;
use std::f32::consts::TAU;

const STAR_POINTS: usize = 5;
const STAR_RADIUS: f32 = 3.0;
const SPIN_PER_FRAME: f32 = 0.1;

fn star() -> Vec<Vec2> {
    (0..STAR_POINTS)
        .map(|i| Vec2::from_angle(i as f32 * TAU / STAR_POINTS as f32) * STAR_RADIUS)
        .collect()
}

/// Yellow sparkles fading with remaining life, all spinning together
pub fn draw_particles(commands: &mut Vec<DrawCommand>, particles: &[Particle], frame: i64) {
    let spin = frame as f32 * SPIN_PER_FRAME;
    for particle in particles {
        commands.push(DrawCommand::Save);
        commands.push(DrawCommand::Translate(particle.pos));
        commands.push(DrawCommand::Rotate(spin));
        commands.push(DrawCommand::FillPolygon {
            points: star(),
            paint: Paint::Solid(Color::rgba(255, 255, 0, particle.alpha())),
        });
        commands.push(DrawCommand::Restore);
    }
}
