//! 2D canvas backend
//!
//! Replays [`DrawCommand`] lists on a `CanvasRenderingContext2d`.

use game_core::render::{ColorStop, DrawCommand, Paint};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context not supported"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Set the backing store size in pixels
    pub fn resize(&self, width: f32, height: f32) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    pub fn draw(&self, commands: &[DrawCommand]) -> Result<(), JsValue> {
        for command in commands {
            self.execute(command)?;
        }
        Ok(())
    }

    fn execute(&self, command: &DrawCommand) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear { size } => {
                ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
            }
            DrawCommand::Save => ctx.save(),
            DrawCommand::Restore => ctx.restore(),
            DrawCommand::Translate(offset) => ctx.translate(offset.x as f64, offset.y as f64)?,
            DrawCommand::Rotate(angle) => ctx.rotate(*angle as f64)?,
            DrawCommand::FillRect { pos, size, paint } => {
                self.set_fill(paint)?;
                ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
            }
            DrawCommand::StrokeRect {
                pos,
                size,
                color,
                width,
            } => {
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width as f64);
                ctx.stroke_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
            }
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => {
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
            }
            DrawCommand::FillEllipse {
                center,
                radii,
                paint,
            } => {
                self.set_fill(paint)?;
                self.ellipse_path(*center, *radii)?;
                ctx.fill();
            }
            DrawCommand::StrokeEllipse {
                center,
                radii,
                color,
                width,
            } => {
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width as f64);
                self.ellipse_path(*center, *radii)?;
                ctx.stroke();
            }
            DrawCommand::FillPolygon { points, paint } => {
                self.set_fill(paint)?;
                self.polygon_path(points);
                ctx.fill();
            }
            DrawCommand::StrokePolygon {
                points,
                color,
                width,
            } => {
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width as f64);
                self.polygon_path(points);
                ctx.stroke();
            }
            DrawCommand::FillCircles { circles, paint } => {
                self.set_fill(paint)?;
                ctx.begin_path();
                for (center, radius) in circles {
                    let (x, y, r) = (center.x as f64, center.y as f64, *radius as f64);
                    ctx.move_to(x + r, y);
                    ctx.arc(x, y, r, 0.0, TAU)?;
                }
                ctx.fill();
            }
        }
        Ok(())
    }

    fn set_fill(&self, paint: &Paint) -> Result<(), JsValue> {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Linear { start, end, stops } => {
                let gradient = self.ctx.create_linear_gradient(
                    start.x as f64,
                    start.y as f64,
                    end.x as f64,
                    end.y as f64,
                );
                add_stops(&gradient, stops)?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Paint::Radial {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => {
                let (x, y) = (center.x as f64, center.y as f64);
                let gradient = self.ctx.create_radial_gradient(
                    x,
                    y,
                    *inner_radius as f64,
                    x,
                    y,
                    *outer_radius as f64,
                )?;
                add_stops(&gradient, stops)?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }

    fn ellipse_path(&self, center: Vec2, radii: Vec2) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x as f64,
            radii.y as f64,
            0.0,
            0.0,
            TAU,
        )
    }

    fn polygon_path(&self, points: &[Vec2]) {
        self.ctx.begin_path();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                self.ctx.move_to(p.x as f64, p.y as f64);
            } else {
                self.ctx.line_to(p.x as f64, p.y as f64);
            }
        }
        self.ctx.close_path();
    }
}

fn add_stops(gradient: &CanvasGradient, stops: &[ColorStop]) -> Result<(), JsValue> {
    for (offset, color) in stops {
        gradient.add_color_stop(*offset, &color.to_css())?;
    }
    Ok(())
}
