//! The pill path with a bump over the middle slot.
//!
//! The outline is a single filled vector path: a rounded bar body with an
//! upward protrusion built from two cubic curves meeting at the bump apex.
//! The path is expressed in local coordinates (origin at the bar frame's
//! top-left) and regenerated whenever the bar's bounds change.

use crate::layout::Point;

/// A single vector path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Begins a new subpath at the given point.
    MoveTo(Point),
    /// Straight segment to the given point.
    LineTo(Point),
    /// Cubic bezier segment.
    CurveTo {
        /// First control point.
        c1: Point,
        /// Second control point.
        c2: Point,
        /// Segment end point.
        to: Point,
    },
    /// Closes the current subpath.
    Close,
}

/// Builds the pill outline for a bar of the given size.
///
/// The bump apex sits at `(width/2, height/2)`, centered over the middle
/// icon slot, with the two cubics entering the rim at `(width/2 ± height, 0)`.
#[must_use]
pub fn pill_path(width: f32, height: f32) -> Vec<PathCommand> {
    let half_width = width / 2.0;
    let half_height = height / 2.0;

    vec![
        PathCommand::MoveTo(Point::ZERO),
        PathCommand::LineTo(Point::new(half_width - height, 0.0)),
        PathCommand::CurveTo {
            c1: Point::new(half_width - half_height, 0.0),
            c2: Point::new(half_width - half_height, half_height),
            to: Point::new(half_width, half_height),
        },
        PathCommand::CurveTo {
            c1: Point::new(half_width + half_height, half_height),
            c2: Point::new(half_width + half_height, 0.0),
            to: Point::new(half_width + height, 0.0),
        },
        PathCommand::LineTo(Point::new(width, 0.0)),
        PathCommand::LineTo(Point::new(width, height)),
        PathCommand::LineTo(Point::new(0.0, height)),
        PathCommand::Close,
    ]
}

/// A cubic bezier segment, for hosts that cannot fill curves natively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Control points: start, control 1, control 2, end.
    pub points: [Point; 4],
}

impl CubicBezier {
    /// Creates a cubic from its four control points.
    #[must_use]
    pub const fn new(start: Point, c1: Point, c2: Point, end: Point) -> Self {
        Self {
            points: [start, c1, c2, end],
        }
    }

    /// Evaluates the curve at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn evaluate(&self, t: f32) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        let [p0, p1, p2, p3] = self.points;
        Point::new(
            mt3 * p0.x + 3.0 * mt2 * t * p1.x + 3.0 * mt * t2 * p2.x + t3 * p3.x,
            mt3 * p0.y + 3.0 * mt2 * t * p1.y + 3.0 * mt * t2 * p2.y + t3 * p3.y,
        )
    }

    /// Flattens the curve into `segments + 1` points (endpoints included).
    #[must_use]
    pub fn flatten(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.evaluate(i as f32 / segments as f32))
            .collect()
    }
}

/// Flattens a whole path into a polygon outline.
///
/// Curves are subdivided into `curve_segments` pieces; `Close` is implicit
/// in the returned polygon (last point connects back to the first).
#[must_use]
pub fn flatten_path(commands: &[PathCommand], curve_segments: usize) -> Vec<Point> {
    let mut outline = Vec::with_capacity(commands.len() * curve_segments);
    let mut cursor = Point::ZERO;

    for command in commands {
        match *command {
            PathCommand::MoveTo(p) => {
                cursor = p;
                outline.push(p);
            }
            PathCommand::LineTo(p) => {
                cursor = p;
                outline.push(p);
            }
            PathCommand::CurveTo { c1, c2, to } => {
                let cubic = CubicBezier::new(cursor, c1, c2, to);
                // Skip the start point; the cursor already emitted it.
                outline.extend(cubic.flatten(curve_segments).into_iter().skip(1));
                cursor = to;
            }
            PathCommand::Close => {}
        }
    }

    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pill_path_shape() {
        let path = pill_path(280.0, 56.0);

        assert_eq!(path[0], PathCommand::MoveTo(Point::ZERO));
        assert_eq!(*path.last().unwrap(), PathCommand::Close);

        // Curves enter the rim at width/2 ± height.
        let PathCommand::LineTo(rim_in) = path[1] else {
            panic!("expected line into the bump");
        };
        assert!((rim_in.x - (140.0 - 56.0)).abs() < f32::EPSILON);
        assert!((rim_in.y).abs() < f32::EPSILON);

        // First cubic lands on the bump apex at (w/2, h/2).
        let PathCommand::CurveTo { to: apex, .. } = path[2] else {
            panic!("expected cubic to the apex");
        };
        assert!((apex.x - 140.0).abs() < f32::EPSILON);
        assert!((apex.y - 28.0).abs() < f32::EPSILON);

        // Second cubic returns to the rim.
        let PathCommand::CurveTo { to: rim_out, .. } = path[3] else {
            panic!("expected cubic back to the rim");
        };
        assert!((rim_out.x - (140.0 + 56.0)).abs() < f32::EPSILON);
        assert!((rim_out.y).abs() < f32::EPSILON);
    }

    #[test]
    fn test_cubic_endpoints() {
        let cubic = CubicBezier::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 10.0),
        );
        assert_eq!(cubic.evaluate(0.0), Point::new(0.0, 0.0));
        assert_eq!(cubic.evaluate(1.0), Point::new(20.0, 10.0));
    }

    #[test]
    fn test_flatten_path_outline() {
        let path = pill_path(280.0, 56.0);
        let outline = flatten_path(&path, 8);

        // MoveTo + LineTo + 2 curves of 8 segments + 3 lines.
        assert_eq!(outline.len(), 2 + 8 + 8 + 3);
        // Outline stays within the path's bounding box (bump included).
        for p in &outline {
            assert!(p.x >= 0.0 && p.x <= 280.0);
            assert!(p.y >= 0.0 && p.y <= 56.0);
        }
        // The apex is on the flattened outline.
        assert!(outline
            .iter()
            .any(|p| (p.x - 140.0).abs() < 1e-3 && (p.y - 28.0).abs() < 1e-3));
    }
}
