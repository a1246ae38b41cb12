//! Typed edge geometry and its SVG path serialization.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
}

impl PathCommand {
    pub fn point(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
        }
    }

    fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
        }
    }
}

/// An open polyline: one `MoveTo` followed by `LineTo`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgePath {
    commands: Vec<PathCommand>,
}

impl EdgePath {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(Point::new(x, y))],
        }
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().map(PathCommand::point)
    }

    pub fn start(&self) -> Option<Point> {
        self.commands.first().map(PathCommand::point)
    }

    pub fn end(&self) -> Option<Point> {
        self.commands.last().map(PathCommand::point)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// SVG `d` attribute, e.g. `M25,42L25,57L125,57`.
    ///
    /// Numbers are written the way JavaScript stringifies them (no trailing `.0`), which keeps
    /// the output identical to paths produced by the browser-side viewer.
    pub fn to_svg_d(&self) -> String {
        let mut out = String::with_capacity(self.commands.len() * 12);
        self.write_svg_d(&mut out);
        out
    }

    pub fn write_svg_d(&self, out: &mut String) {
        let mut buf = ryu_js::Buffer::new();
        for cmd in &self.commands {
            let p = cmd.point();
            out.push(cmd.letter());
            out.push_str(js_number_to_string(p.x, &mut buf));
            out.push(',');
            out.push_str(js_number_to_string(p.y, &mut buf));
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for EdgePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg_d())
    }
}

fn js_number_to_string(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if v.is_nan() {
        return "NaN";
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" };
    }
    if v == -0.0 {
        v = 0.0;
    }
    buf.format_finite(v)
}
