//! Rectangle-area tool: corner coordinates in, area and timing out.
//!
//! The input file holds four scalars `a`, `b`, `c`, `d`: `(a, b)` and
//! `(c, d)` are opposite corners of an axis-aligned rectangle. The
//! reported time covers reading, parsing, and the area computation.

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

/// Opposite-corner coordinates of an axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct RectangleCorners {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl RectangleCorners {
    /// Area spanned by the two corners.
    ///
    /// Width and height are absolute differences, so corner order does
    /// not matter.
    pub fn area(&self) -> f64 {
        let width = (self.c - self.a).abs();
        let height = (self.d - self.b).abs();
        width * height
    }
}

/// Read `path`, parse the corners, and print area and elapsed time.
pub fn run(path: &str) -> Result<()> {
    let start = Instant::now();

    let contents =
        fs::read_to_string(path).with_context(|| format!("reading coordinate file {path}"))?;
    let corners: RectangleCorners =
        serde_yaml::from_str(&contents).with_context(|| format!("parsing {path} as YAML"))?;
    let area = corners.area();

    let elapsed = start.elapsed();
    debug!("corners {corners:?} from {path}");

    println!("Rectangle area: {area:.2}");
    println!("Time: {:.6} ms", elapsed.as_secs_f64() * 1000.0);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> RectangleCorners {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn area_of_unit_offsets() {
        let corners = parse("a: 0.0\nb: 0.0\nc: 2.0\nd: 3.0\n");
        assert!((corners.area() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn corner_order_does_not_matter() {
        let forward = parse("a: 1.0\nb: 2.0\nc: 4.0\nd: 6.0\n");
        let reversed = parse("a: 4.0\nb: 6.0\nc: 1.0\nd: 2.0\n");
        assert!((forward.area() - reversed.area()).abs() < 1e-12);
        assert!((forward.area() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_corners_have_zero_area() {
        let corners = parse("a: 5.5\nb: -1.0\nc: 5.5\nd: -1.0\n");
        assert_eq!(corners.area(), 0.0);
    }

    #[test]
    fn integer_yaml_scalars_parse_as_floats() {
        let corners = parse("a: 0\nb: 0\nc: 10\nd: 4\n");
        assert!((corners.area() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(serde_yaml::from_str::<RectangleCorners>("a: [nope\n").is_err());
        assert!(serde_yaml::from_str::<RectangleCorners>("a: 1.0\nb: 2.0\n").is_err());
    }
}
