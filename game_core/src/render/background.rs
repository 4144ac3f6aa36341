use super::{Color, DrawCommand, Paint};
use crate::{Config, GameRng};
use glam::Vec2;
use rand::Rng;

const GRASS_SPACING: f32 = 10.0;
const GRASS_WIDTH: f32 = 2.0;
const GRASS_MIN_HEIGHT: f32 = 3.0;
const GRASS_MAX_HEIGHT: f32 = 8.0;

/// Clouds wrap once they are this far past the left edge
const CLOUD_WRAP_MARGIN: f32 = 150.0;

/// One parallax cloud layer
#[derive(Debug, Clone, Copy)]
pub struct CloudLayer {
    pub speed: f32, // pixels per frame
    pub offset: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
}

/// Front to back; the last layer is the faint background one
pub const CLOUD_LAYERS: [CloudLayer; 4] = [
    CloudLayer {
        speed: 0.3,
        offset: 0.0,
        y: 60.0,
        size: 35.0,
        opacity: 0.9,
    },
    CloudLayer {
        speed: 0.2,
        offset: 200.0,
        y: 100.0,
        size: 25.0,
        opacity: 0.9,
    },
    CloudLayer {
        speed: 0.15,
        offset: 400.0,
        y: 80.0,
        size: 30.0,
        opacity: 0.9,
    },
    CloudLayer {
        speed: 0.1,
        offset: 300.0,
        y: 120.0,
        size: 40.0,
        opacity: 0.6,
    },
];

pub fn draw_sky(commands: &mut Vec<DrawCommand>, config: &Config) {
    let size = Vec2::new(config.canvas_width, config.canvas_height);
    commands.push(DrawCommand::FillRect {
        pos: Vec2::ZERO,
        size,
        paint: Paint::linear(
            Vec2::ZERO,
            Vec2::new(0.0, size.y),
            &[
                (0.0, Color::hex(0x87CEEB)),
                (0.3, Color::hex(0x98D8E8)),
                (0.7, Color::hex(0x90EE90)),
                (1.0, Color::hex(0x32CD32)),
            ],
        ),
    });
}

/// Heights of the grass blades for a frame, one per blade from left to right.
///
/// Seeded by the frame number so the grass flickers between frames while
/// the renderer stays a pure function.
pub fn grass_heights(frame: i64, width: f32) -> Vec<f32> {
    let mut rng = GameRng::new(frame as u64);
    let blades = (width / GRASS_SPACING).ceil().max(0.0) as usize;
    (0..blades)
        .map(|_| rng.0.gen_range(GRASS_MIN_HEIGHT..GRASS_MAX_HEIGHT))
        .collect()
}

pub fn draw_ground(commands: &mut Vec<DrawCommand>, config: &Config, frame: i64) {
    let ground_y = config.ground_y();

    commands.push(DrawCommand::FillRect {
        pos: Vec2::new(0.0, ground_y),
        size: Vec2::new(config.canvas_width, config.ground_height),
        paint: Paint::linear(
            Vec2::new(0.0, ground_y),
            Vec2::new(0.0, config.canvas_height),
            &[
                (0.0, Color::hex(0x8B4513)),
                (0.5, Color::hex(0xA0522D)),
                (1.0, Color::hex(0x654321)),
            ],
        ),
    });
    commands.push(DrawCommand::Line {
        from: Vec2::new(0.0, ground_y),
        to: Vec2::new(config.canvas_width, ground_y),
        color: Color::hex(0x654321),
        width: 2.0,
    });

    let grass = Paint::Solid(Color::hex(0x228B22));
    for (i, height) in grass_heights(frame, config.canvas_width).into_iter().enumerate() {
        commands.push(DrawCommand::FillRect {
            pos: Vec2::new(i as f32 * GRASS_SPACING, ground_y - height),
            size: Vec2::new(GRASS_WIDTH, height),
            paint: grass.clone(),
        });
    }
}

/// Horizontal position of a cloud layer, wrapping around the canvas
pub fn cloud_x(layer: &CloudLayer, frame: i64, canvas_width: f32) -> f32 {
    let span = canvas_width + CLOUD_WRAP_MARGIN;
    (frame as f32 * layer.speed + layer.offset).rem_euclid(span) - CLOUD_WRAP_MARGIN
}

/// Five overlapping puffs making up one cloud, as `(center, radius)`
fn cloud_puffs(origin: Vec2, size: f32) -> Vec<(Vec2, f32)> {
    vec![
        (origin, size * 0.5),
        (origin + Vec2::new(size * 0.5, 0.0), size * 0.7),
        (origin + Vec2::new(size, 0.0), size * 0.5),
        (origin + Vec2::new(size * 0.2, -size * 0.3), size * 0.4),
        (origin + Vec2::new(size * 0.8, -size * 0.3), size * 0.4),
    ]
}

fn draw_cloud(commands: &mut Vec<DrawCommand>, origin: Vec2, size: f32, opacity: f32) {
    let shadow_offset = Vec2::splat(2.0);
    commands.push(DrawCommand::FillCircles {
        circles: cloud_puffs(origin + shadow_offset, size),
        paint: Paint::Solid(Color::rgba(200, 200, 200, 0.3)),
    });
    commands.push(DrawCommand::FillCircles {
        circles: cloud_puffs(origin, size),
        paint: Paint::Solid(Color::WHITE.with_alpha(opacity)),
    });
    // Highlight
    commands.push(DrawCommand::FillCircles {
        circles: vec![(origin + Vec2::new(size * 0.3, -size * 0.2), size * 0.15)],
        paint: Paint::Solid(Color::WHITE),
    });
}

pub fn draw_clouds(commands: &mut Vec<DrawCommand>, config: &Config, frame: i64) {
    for layer in &CLOUD_LAYERS {
        let x = cloud_x(layer, frame, config.canvas_width);
        draw_cloud(commands, Vec2::new(x, layer.y), layer.size, layer.opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grass_heights_in_range() {
        let heights = grass_heights(10, 800.0);
        assert_eq!(heights.len(), 80);
        assert!(heights.iter().all(|h| (3.0..8.0).contains(h)));
    }

    #[test]
    fn test_grass_is_stable_within_a_frame() {
        assert_eq!(grass_heights(99, 800.0), grass_heights(99, 800.0));
        assert_ne!(grass_heights(99, 800.0), grass_heights(100, 800.0));
    }

    #[test]
    fn test_cloud_x_moves_with_frame() {
        let layer = CLOUD_LAYERS[0];
        assert_eq!(cloud_x(&layer, 0, 800.0), -150.0);
        assert!((cloud_x(&layer, 10, 800.0) - (-147.0)).abs() < 1e-3);
    }

    #[test]
    fn test_cloud_x_wraps() {
        let layer = CLOUD_LAYERS[0];
        // 0.3 * 3500 = 1050 → 1050 mod 950 = 100
        let x = cloud_x(&layer, 3500, 800.0);
        assert!((x - (-50.0)).abs() < 1e-3);
    }

    #[test]
    fn test_cloud_x_stays_in_band_for_negative_frames() {
        for layer in &CLOUD_LAYERS {
            let x = cloud_x(layer, -60, 800.0);
            assert!(x >= -150.0 && x < 800.0, "x = {}", x);
        }
    }

    #[test]
    fn test_background_cloud_is_faint() {
        let config = Config::new();
        let mut commands = Vec::new();
        draw_clouds(&mut commands, &config, 0);

        // Shadow, body and highlight per cloud
        assert_eq!(commands.len(), 12);
        match &commands[10] {
            DrawCommand::FillCircles {
                paint: Paint::Solid(color),
                ..
            } => assert_eq!(color.a, 0.6),
            other => panic!("Unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_ground_sits_above_canvas_bottom() {
        let config = Config::new();
        let mut commands = Vec::new();
        draw_ground(&mut commands, &config, 3);

        match &commands[0] {
            DrawCommand::FillRect { pos, size, .. } => {
                assert_eq!(pos.y, 370.0);
                assert_eq!(size.y, 30.0);
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }
}
