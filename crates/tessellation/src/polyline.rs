//! Approximating paths with polylines.
//!
//! The assembler concatenates the flattened output of a path's consecutive
//! edges into one continuous point sequence per contour. Shared endpoints
//! are emitted only once: each edge's flattening excludes its start point,
//! and the contour's initial point is emitted explicitly when the contour
//! begins. Multiple contours share a single flat buffer, partitioned by a
//! table of start offsets.

use crate::error::TessellationError;
use crate::geom::{CubicBezierSegment, QuadraticBezierSegment, Scalar};
use crate::math::Point;
use crate::path::PathEvent;
use crate::PolylineOptions;

use log::{debug, trace};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
struct Contour {
    first_point: u32,
    closed: bool,
}

/// A set of contours flattened into line segments, stored as one flat point
/// buffer partitioned by a table of contour start offsets, with a closed
/// flag per contour.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Polyline {
    points: Vec<Point>,
    contours: Vec<Contour>,
}

impl Polyline {
    pub fn new() -> Self {
        Polyline {
            points: Vec::new(),
            contours: Vec::new(),
        }
    }

    /// The whole point buffer, all contours back to back.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn num_contours(&self) -> usize {
        self.contours.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// The offset of the given contour's first point in the point buffer.
    #[inline]
    pub fn contour_offset(&self, contour: usize) -> usize {
        self.contours[contour].first_point as usize
    }

    /// The points of the given contour.
    pub fn contour_points(&self, contour: usize) -> &[Point] {
        let start = self.contours[contour].first_point as usize;
        let end = self
            .contours
            .get(contour + 1)
            .map(|c| c.first_point as usize)
            .unwrap_or(self.points.len());

        &self.points[start..end]
    }

    /// Whether the given contour was closed.
    ///
    /// The points of a closed contour end with a copy of (or are snapped
    /// onto) their first point.
    #[inline]
    pub fn contour_is_closed(&self, contour: usize) -> bool {
        self.contours[contour].closed
    }

    /// Iterates over the contours as `(points, closed)` pairs.
    pub fn contours(&self) -> impl Iterator<Item = (&[Point], bool)> {
        (0..self.num_contours()).map(move |i| (self.contour_points(i), self.contour_is_closed(i)))
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.contours.clear();
    }
}

/// Assembles flattened contours into a [Polyline](struct.Polyline.html).
///
/// The builder deduplicates consecutive points that are within floating
/// point noise of each other, so that feeding it the flattened output of
/// consecutive edges produces a watertight point sequence.
#[derive(Default)]
pub struct PolylineBuilder {
    points: Vec<Point>,
    contours: Vec<Contour>,
    contour_start: usize,
    in_contour: bool,
}

impl PolylineBuilder {
    pub fn new() -> Self {
        PolylineBuilder::default()
    }

    /// Starts a new contour at the given position.
    ///
    /// The position is emitted: it is the only point of a contour that does
    /// not come from an edge's flattening.
    pub fn begin(&mut self, at: Point) {
        debug_assert!(!self.in_contour);
        self.contour_start = self.points.len();
        self.in_contour = true;
        self.points.push(at);
    }

    /// Appends a point to the current contour, skipping it if it coincides
    /// with the previously pushed point.
    pub fn push_point(&mut self, point: Point) {
        debug_assert!(self.in_contour);
        if let Some(last) = self.points.last() {
            if coincident(*last, point) {
                return;
            }
        }

        self.points.push(point);
    }

    /// Ends the current contour.
    ///
    /// For a closed contour the final point is guaranteed to equal the first
    /// one: a last point within floating point noise of the first is snapped
    /// onto it, otherwise a closing point is appended.
    pub fn end(&mut self, close: bool) {
        debug_assert!(self.in_contour);
        self.in_contour = false;

        let first = self.points[self.contour_start];
        if close {
            let last_index = self.points.len() - 1;
            if last_index > self.contour_start && coincident(self.points[last_index], first) {
                self.points[last_index] = first;
            } else {
                self.points.push(first);
            }
        }

        trace!(
            "contour {}: {} points, closed: {}",
            self.contours.len(),
            self.points.len() - self.contour_start,
            close,
        );

        self.contours.push(Contour {
            first_point: self.contour_start as u32,
            closed: close,
        });
    }

    /// The last point pushed to the current contour.
    pub fn current_position(&self) -> Option<Point> {
        if self.in_contour {
            self.points.last().copied()
        } else {
            None
        }
    }

    pub fn build(self) -> Polyline {
        debug_assert!(!self.in_contour);

        Polyline {
            points: self.points,
            contours: self.contours,
        }
    }
}

/// Whether two points are equal within floating point noise, using an
/// epsilon scaled to the magnitude of the coordinates.
#[inline]
fn coincident(a: Point, b: Point) -> bool {
    let epsilon = f32::epsilon_for(f32::max(
        f32::max(a.x.abs(), a.y.abs()),
        f32::max(b.x.abs(), b.y.abs()),
    ));

    (a - b).square_length() <= epsilon * epsilon
}

/// Approximates a path with a [Polyline](struct.Polyline.html).
///
/// Each sub-path of the input becomes one contour of the output. The first
/// point of a contour is the sub-path's start position and, within the
/// flattening tolerance, every contour traces its sub-path's shape. An edge
/// that does not start where the previous one ended (beyond floating point
/// noise) makes the whole tessellation fail with
/// [`DisjointEdge`](enum.TessellationError.html#variant.DisjointEdge).
pub fn tessellate_polyline<Events>(
    path: Events,
    options: &PolylineOptions,
) -> Result<Polyline, TessellationError>
where
    Events: IntoIterator<Item = PathEvent>,
{
    let tolerance = options.tolerance;
    let mut builder = PolylineBuilder::new();

    for event in path {
        match event {
            PathEvent::Begin { at } => {
                builder.begin(at);
            }
            PathEvent::Line { from, to } => {
                check_continuous(&builder, from)?;
                builder.push_point(to);
            }
            PathEvent::Quadratic { from, ctrl, to } => {
                check_continuous(&builder, from)?;
                let curve = QuadraticBezierSegment { from, ctrl, to };
                curve.for_each_flattened(tolerance, &mut |point| builder.push_point(point));
            }
            PathEvent::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                check_continuous(&builder, from)?;
                let curve = CubicBezierSegment {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                };
                curve.for_each_flattened(tolerance, &mut |point| builder.push_point(point));
            }
            PathEvent::End { close, .. } => {
                builder.end(close);
            }
        }
    }

    let polyline = builder.build();

    debug!(
        "tessellated polyline: {} points in {} contours at tolerance {}",
        polyline.num_points(),
        polyline.num_contours(),
        tolerance,
    );

    Ok(polyline)
}

fn check_continuous(builder: &PolylineBuilder, from: Point) -> Result<(), TessellationError> {
    if let Some(current) = builder.current_position() {
        if !coincident(current, from) {
            return Err(TessellationError::DisjointEdge {
                expected: current,
                found: from,
            });
        }
    }

    Ok(())
}
