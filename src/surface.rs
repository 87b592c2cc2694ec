//! The drawing primitives the renderer needs from a 2D backend.

use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn clear(&mut self, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: &str, width: f64);
    /// Draw `text` centered on (cx, cy).
    fn fill_centered_text(&mut self, text: &str, cx: f64, cy: f64, font: &str, color: &str);
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, w: f64, h: f64) {
        self.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: &str, width: f64) {
        self.begin_path();
        self.move_to(x0, y0);
        self.line_to(x1, y1);
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.stroke();
    }

    fn fill_centered_text(&mut self, text: &str, cx: f64, cy: f64, font: &str, color: &str) {
        self.set_fill_style_str(color);
        self.set_font(font);
        self.set_text_align("center");
        self.set_text_baseline("middle");
        self.fill_text(text, cx, cy).ok();
    }
}

// --- Headless backend --------------------------------------------------------

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear { w: f64, h: f64 },
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: String,
    },
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        color: String,
    },
    Text { text: String, cx: f64, cy: f64 },
}

/// A surface that records calls instead of drawing. Used off-browser.
#[derive(Clone, Debug, Default)]
pub struct DrawLog {
    pub ops: Vec<DrawOp>,
}

impl DrawLog {
    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn fills(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::FillRect { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DrawLog {
    fn clear(&mut self, w: f64, h: f64) {
        self.ops.push(DrawOp::Clear { w, h });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: &str, _width: f64) {
        self.ops.push(DrawOp::Line {
            x0,
            y0,
            x1,
            y1,
            color: color.to_string(),
        });
    }

    fn fill_centered_text(&mut self, text: &str, cx: f64, cy: f64, _font: &str, _color: &str) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            cx,
            cy,
        });
    }
}
