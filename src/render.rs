// Drawing surface seam between the field simulation and the 2d canvas.
// The simulation only ever clears, fills circles, and strokes lines, so that
// is the whole trait; tests substitute a recording surface for the canvas.

use crate::color::Color;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait Surface {
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
    fn stroke_line(&mut self, from_x: f64, from_y: f64, to_x: f64, to_y: f64, alpha: f64);
}

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d, canvas: HtmlCanvasElement) -> CanvasSurface {
        CanvasSurface { context, canvas }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        // Reads the size off the canvas element so a resize between frames
        // clears the full new extent.
        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.context.begin_path();
        // arc can only fail on a negative radius, which the field never produces
        let _ = self
            .context
            .arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.context
            .set_fill_style(&Color::LATTICE.hex().as_str().into());
        self.context.fill();
    }

    fn stroke_line(&mut self, from_x: f64, from_y: f64, to_x: f64, to_y: f64, alpha: f64) {
        self.context
            .set_stroke_style(&Color::LATTICE.rgba(alpha).as_str().into());
        self.context.set_line_width(1.0);
        self.context.begin_path();
        self.context.move_to(from_x, from_y);
        self.context.line_to(to_x, to_y);
        self.context.stroke();
    }
}
