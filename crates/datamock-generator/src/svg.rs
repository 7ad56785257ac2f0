//! Random SVG images.

use std::fmt::Write as _;

use datamock_core::{Casing, HashOptions, Sampler};

use crate::error::MockResult;

pub const XML_PROLOG: &str = r#"<?xml version="1.0"?>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgImageOptions {
    pub width: u32,
    pub height: u32,
    /// Shapes drawn over the background, 1 to 10 when absent
    pub shapes: Option<usize>,
}

impl Default for SvgImageOptions {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            shapes: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Circle,
    Rect,
    Ellipse,
    Line,
}

const SHAPES: &[Shape] = &[Shape::Circle, Shape::Rect, Shape::Ellipse, Shape::Line];

#[derive(Debug, Clone)]
pub struct Svg {
    sampler: Sampler,
}

impl Svg {
    pub fn new(sampler: Sampler) -> Self {
        Self { sampler }
    }

    pub fn seed(&mut self, seed: Option<u32>) {
        self.sampler.seed(seed);
    }

    /// Draw from `sampler` from now on.
    pub(crate) fn set_sampler(&mut self, sampler: Sampler) {
        self.sampler = sampler;
    }

    fn fill(&self) -> String {
        let digits = self.sampler.hash(HashOptions {
            length: 6,
            casing: Some(Casing::Lower),
        });
        format!("#{digits}")
    }

    fn coordinate(&self, limit: u32) -> i64 {
        self.sampler.integer(0, i64::from(limit))
    }

    fn shape(&self, shape: Shape, width: u32, height: u32) -> String {
        let fill = self.fill();
        match shape {
            Shape::Circle => {
                let cx = self.coordinate(width);
                let cy = self.coordinate(height);
                let r = self.coordinate(width.min(height) / 2);
                format!(r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}"/>"#)
            }
            Shape::Rect => {
                let x = self.coordinate(width);
                let y = self.coordinate(height);
                let w = self.coordinate(width);
                let h = self.coordinate(height);
                format!(r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{fill}"/>"#)
            }
            Shape::Ellipse => {
                let cx = self.coordinate(width);
                let cy = self.coordinate(height);
                let rx = self.coordinate(width / 2);
                let ry = self.coordinate(height / 2);
                format!(r#"<ellipse cx="{cx}" cy="{cy}" rx="{rx}" ry="{ry}" fill="{fill}"/>"#)
            }
            Shape::Line => {
                let x1 = self.coordinate(width);
                let y1 = self.coordinate(height);
                let x2 = self.coordinate(width);
                let y2 = self.coordinate(height);
                let stroke = self.sampler.integer(1, 10);
                format!(
                    r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{fill}" stroke-width="{stroke}"/>"#
                )
            }
        }
    }

    /// XML document with a full-size background followed by the shapes.
    pub fn image(&self, options: SvgImageOptions) -> MockResult<String> {
        let SvgImageOptions {
            width,
            height,
            shapes,
        } = options;
        let count = shapes.unwrap_or_else(|| self.sampler.integer(1, 10) as usize);

        let mut out = String::new();
        let _ = writeln!(out, "{XML_PROLOG}");
        let _ = writeln!(out, r#"<svg width="{width}" height="{height}">"#);
        let _ = writeln!(
            out,
            r#"  <rect width="{width}" height="{height}" fill="{}"/>"#,
            self.fill()
        );
        for _ in 0..count {
            let shape = *self.sampler.pick_one(SHAPES)?;
            let _ = writeln!(out, "  {}", self.shape(shape, width, height));
        }
        out.push_str("</svg>");
        Ok(out)
    }
}
