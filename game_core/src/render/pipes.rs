use super::{Color, DrawCommand, Paint};
use crate::{Config, Params, Pipe};
use glam::Vec2;

const BORDER_WIDTH: f32 = 3.0;
const TEXTURE_LINES: usize = 2;

fn body_paint(pipe: &Pipe, width: f32) -> Paint {
    Paint::linear(
        Vec2::new(pipe.x, 0.0),
        Vec2::new(pipe.x + width, 0.0),
        &[
            (0.0, Color::hex(0x228B22)),
            (0.3, Color::hex(0x32CD32)),
            (0.7, Color::hex(0x228B22)),
            (1.0, Color::hex(0x006400)),
        ],
    )
}

fn cap_paint(pipe: &Pipe, width: f32) -> Paint {
    let overhang = Params::PIPE_CAP_OVERHANG;
    Paint::linear(
        Vec2::new(pipe.x - overhang, 0.0),
        Vec2::new(pipe.x + width + overhang, 0.0),
        &[
            (0.0, Color::hex(0x32CD32)),
            (0.5, Color::hex(0x90EE90)),
            (1.0, Color::hex(0x228B22)),
        ],
    )
}

/// Rectangles of a pipe pair as `(pos, size)`: top body, top cap, bottom body, bottom cap
pub fn pipe_rects(pipe: &Pipe, config: &Config) -> [(Vec2, Vec2); 4] {
    let w = config.pipe_width;
    let cap_h = Params::PIPE_CAP_HEIGHT;
    let overhang = Params::PIPE_CAP_OVERHANG;
    let cap_size = Vec2::new(w + overhang * 2.0, cap_h);

    [
        (Vec2::new(pipe.x, 0.0), Vec2::new(w, pipe.top_height)),
        (Vec2::new(pipe.x - overhang, pipe.top_height - cap_h), cap_size),
        (
            Vec2::new(pipe.x, pipe.bottom_y),
            Vec2::new(w, config.canvas_height - pipe.bottom_y),
        ),
        (Vec2::new(pipe.x - overhang, pipe.bottom_y), cap_size),
    ]
}

pub fn draw_pipes(commands: &mut Vec<DrawCommand>, pipes: &[Pipe], config: &Config) {
    for pipe in pipes {
        let body = body_paint(pipe, config.pipe_width);
        let cap = cap_paint(pipe, config.pipe_width);
        let rects = pipe_rects(pipe, config);

        for (i, &(pos, size)) in rects.iter().enumerate() {
            let paint = if i % 2 == 0 { body.clone() } else { cap.clone() };
            commands.push(DrawCommand::FillRect { pos, size, paint });
        }
        for &(pos, size) in &rects {
            commands.push(DrawCommand::StrokeRect {
                pos,
                size,
                color: Color::hex(0x006400),
                width: BORDER_WIDTH,
            });
        }

        let texture = Color::hex(0x90EE90);
        for i in 1..=TEXTURE_LINES {
            let x = pipe.x + config.pipe_width / 3.0 * i as f32;
            commands.push(DrawCommand::Line {
                from: Vec2::new(x, 0.0),
                to: Vec2::new(x, pipe.top_height),
                color: texture,
                width: 1.0,
            });
            commands.push(DrawCommand::Line {
                from: Vec2::new(x, pipe.bottom_y),
                to: Vec2::new(x, config.canvas_height),
                color: texture,
                width: 1.0,
            });
        }
    }
}
