//! SVG drawing surface.
//!
//! Records draw calls as SVG elements and measures text with the static font-metric
//! tables, so a card can be rendered without a browser canvas.

use crate::layout::{Canvas, FontFamily, FontSpec};
use crate::render::DrawingSurface;

const STROKE_COLOR: &str = "black";
const STROKE_WIDTH: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f32,
    height: f32,
    fill: String,
    font: FontSpec,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            width: canvas.width.max(0.0),
            height: canvas.height.max(0.0),
            fill: "black".to_string(),
            font: FontSpec::new(FontFamily::SansSerif, 10.0),
            elements: Vec::new(),
        }
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// The complete SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height),
        ));
        for element in &self.elements {
            out.push('\n');
            out.push_str(element);
        }
        out.push_str("\n</svg>\n");
        out
    }
}

impl DrawingSurface for SvgSurface {
    fn set_size(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.fill = color.to_string();
    }

    fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    fn fill_and_stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{STROKE_COLOR}" stroke-width="{}"/>"#,
            fmt_num(x),
            fmt_num(y),
            fmt_num(width),
            fmt_num(height),
            escape(&self.fill),
            fmt_num(STROKE_WIDTH),
        ));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.elements.push(format!(
            r#"<text x="{}" y="{}" fill="{}" font-family="{}" font-size="{}">{}</text>"#,
            fmt_num(x),
            fmt_num(y),
            escape(&self.fill),
            self.font.family,
            fmt_num(self.font.size_px),
            escape(text),
        ));
    }

    fn measure_text(&self, text: &str) -> f32 {
        self.font.measure(text)
    }
}

/// Up to two decimals, trailing zeros dropped.
fn fmt_num(v: f32) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
