//! Path events.
//!
//! Path events represent the edges of a path as a flat sequence. Each event
//! carries the position it starts from in addition to its own points, so a
//! consumer never has to track the previous event to know where an edge
//! begins, and can cheaply verify that consecutive edges are contiguous.

use crate::geom::{BezierSegment, CubicBezierSegment, LineSegment, QuadraticBezierSegment};
use crate::math::Point;

/// An element of a path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathEvent {
    /// The start of a new sub-path.
    Begin { at: Point },
    /// A straight edge.
    Line { from: Point, to: Point },
    /// A quadratic bézier edge.
    Quadratic {
        from: Point,
        ctrl: Point,
        to: Point,
    },
    /// A cubic bézier edge.
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    /// The end of a sub-path. `last` is the sub-path's final endpoint and
    /// `first` the position of its `Begin` event. If `close` is true the
    /// sub-path loops back to `first` with an implicit straight edge.
    End {
        last: Point,
        first: Point,
        close: bool,
    },
}

impl PathEvent {
    /// The position this event starts from.
    pub fn from(&self) -> Point {
        match self {
            PathEvent::Begin { at } => *at,
            PathEvent::Line { from, .. }
            | PathEvent::Quadratic { from, .. }
            | PathEvent::Cubic { from, .. } => *from,
            PathEvent::End { last, .. } => *last,
        }
    }

    /// The position this event ends at.
    pub fn to(&self) -> Point {
        match self {
            PathEvent::Begin { at } => *at,
            PathEvent::Line { to, .. }
            | PathEvent::Quadratic { to, .. }
            | PathEvent::Cubic { to, .. } => *to,
            PathEvent::End { first, .. } => *first,
        }
    }

    /// Returns the curve segment corresponding to this event, if it is an edge.
    pub fn as_segment(&self) -> Option<BezierSegment<f32>> {
        match *self {
            PathEvent::Line { from, to } => {
                Some(BezierSegment::Linear(LineSegment { from, to }))
            }
            PathEvent::Quadratic { from, ctrl, to } => {
                Some(BezierSegment::Quadratic(QuadraticBezierSegment {
                    from,
                    ctrl,
                    to,
                }))
            }
            PathEvent::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => Some(BezierSegment::Cubic(CubicBezierSegment {
                from,
                ctrl1,
                ctrl2,
                to,
            })),
            PathEvent::Begin { .. } | PathEvent::End { .. } => None,
        }
    }
}

#[test]
fn event_from_to() {
    use crate::math::point;

    let event = PathEvent::Quadratic {
        from: point(1.0, 1.0),
        ctrl: point(2.0, 2.0),
        to: point(3.0, 1.0),
    };

    assert_eq!(event.from(), point(1.0, 1.0));
    assert_eq!(event.to(), point(3.0, 1.0));
    assert!(event.as_segment().is_some());

    let end = PathEvent::End {
        last: point(3.0, 1.0),
        first: point(1.0, 1.0),
        close: true,
    };

    assert_eq!(end.from(), point(3.0, 1.0));
    assert_eq!(end.to(), point(1.0, 1.0));
    assert!(end.as_segment().is_none());
}
