use super::{Color, DrawCommand, Paint};
use crate::Bird;
use glam::Vec2;

const TILT_PER_VELOCITY: f32 = 0.08;
const MAX_TILT: f32 = 0.5;
const BEAK_LENGTH: f32 = 10.0;

/// Nose-up when rising, nose-down when falling, within ±0.5 rad
pub fn bird_rotation(vel: f32) -> f32 {
    (vel * TILT_PER_VELOCITY).clamp(-MAX_TILT, MAX_TILT)
}

/// Draws the bird in its own rotated frame centred on the body
pub fn draw_bird(commands: &mut Vec<DrawCommand>, bird: &Bird) {
    let s = bird.size;
    let body_radii = Vec2::new(s / 2.0, s / 2.5);
    let outline = Color::hex(0xFF6347);

    commands.push(DrawCommand::Save);
    commands.push(DrawCommand::Translate(bird.center()));
    commands.push(DrawCommand::Rotate(bird_rotation(bird.vel)));

    // Shadow
    commands.push(DrawCommand::FillEllipse {
        center: Vec2::splat(2.0),
        radii: body_radii,
        paint: Paint::Solid(Color::rgba(0, 0, 0, 0.2)),
    });

    // Body
    commands.push(DrawCommand::FillEllipse {
        center: Vec2::ZERO,
        radii: body_radii,
        paint: Paint::radial(
            Vec2::ZERO,
            0.0,
            s / 2.0,
            &[
                (0.0, Color::hex(0xFFD700)),
                (0.7, Color::hex(0xFFA500)),
                (1.0, Color::hex(0xFF8C00)),
            ],
        ),
    });
    commands.push(DrawCommand::StrokeEllipse {
        center: Vec2::ZERO,
        radii: body_radii,
        color: outline,
        width: 2.0,
    });

    // Wing
    let wing_center = Vec2::new(-s / 6.0, -s / 8.0);
    let wing_radii = Vec2::new(s / 3.0, s / 4.0);
    commands.push(DrawCommand::FillEllipse {
        center: wing_center,
        radii: wing_radii,
        paint: Paint::Solid(Color::hex(0xFF8C00)),
    });
    commands.push(DrawCommand::StrokeEllipse {
        center: wing_center,
        radii: wing_radii,
        color: outline,
        width: 1.0,
    });

    // Eye
    let eye_center = Vec2::new(s / 6.0, -s / 6.0);
    let eye_radii = Vec2::new(s / 5.0, s / 4.0);
    commands.push(DrawCommand::FillEllipse {
        center: eye_center,
        radii: eye_radii,
        paint: Paint::Solid(Color::WHITE),
    });
    commands.push(DrawCommand::StrokeEllipse {
        center: eye_center,
        radii: eye_radii,
        color: Color::hex(0x333333),
        width: 1.0,
    });
    commands.push(DrawCommand::FillEllipse {
        center: Vec2::new(s / 4.0, -s / 6.0),
        radii: Vec2::new(s / 8.0, s / 7.0),
        paint: Paint::Solid(Color::BLACK),
    });
    commands.push(DrawCommand::FillEllipse {
        center: Vec2::new(s / 3.5, -s / 5.0),
        radii: Vec2::new(s / 15.0, s / 12.0),
        paint: Paint::Solid(Color::WHITE),
    });

    // Beak
    let beak = vec![
        Vec2::new(s / 2.0, -s / 8.0),
        Vec2::new(s / 2.0 + BEAK_LENGTH, 0.0),
        Vec2::new(s / 2.0, s / 8.0),
    ];
    commands.push(DrawCommand::FillPolygon {
        points: beak.clone(),
        paint: Paint::Solid(Color::hex(0xFF4500)),
    });
    commands.push(DrawCommand::StrokePolygon {
        points: beak,
        color: Color::hex(0xDC143C),
        width: 1.0,
    });

    commands.push(DrawCommand::Restore);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_clamped() {
        assert_eq!(bird_rotation(0.0), 0.0);
        assert!((bird_rotation(5.0) - 0.4).abs() < 1e-6);
        assert!((bird_rotation(-6.0) + 0.48).abs() < 1e-6);
        assert_eq!(bird_rotation(20.0), 0.5);
        assert_eq!(bird_rotation(-20.0), -0.5);
    }

    #[test]
    fn test_bird_drawn_in_local_frame() {
        let mut bird = Bird::new(Vec2::new(100.0, 190.0), 20.0);
        bird.vel = 100.0;
        let mut commands = Vec::new();
        draw_bird(&mut commands, &bird);

        assert_eq!(commands[0], DrawCommand::Save);
        assert_eq!(commands[1], DrawCommand::Translate(Vec2::new(110.0, 200.0)));
        assert_eq!(commands[2], DrawCommand::Rotate(0.5));
        assert_eq!(commands.last(), Some(&DrawCommand::Restore));
    }
}
