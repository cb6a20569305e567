//! The default path data structure.

use crate::builder::Builder;
use crate::math::Point;
use crate::PathEvent;

use std::fmt;
use std::iter::{FromIterator, IntoIterator};

/// Enumeration corresponding to the [PathEvent](enum.PathEvent.html) enum
/// without the parameters.
///
/// This is used by the [Path](struct.Path.html) data structure to store path
/// events a tad more efficiently.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub(crate) enum Verb {
    LineTo,
    QuadraticTo,
    CubicTo,
    Begin,
    Close,
    End,
}

/// A simple path data structure.
///
/// # Representation
///
/// Paths contain two buffers:
/// - a buffer of commands (Begin, Line, Quadratic, Cubic, Close or End),
/// - and a buffer of points that can be endpoints or control points.
///
/// The order of storage for points is determined by the sequence of commands:
///
/// ```ascii
///  __________________________
/// |       |      |         |
/// | Begin | Line |Quadratic| ...
/// |_______|______|_________|_
///  ________________________________
/// |         |         |    |      |
/// |start x,y| to x, y |ctrl|to x,y| ...
/// |_________|_________|____|______|_
/// ```
#[derive(Clone, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    points: Box<[Point]>,
    verbs: Box<[Verb]>,
}

impl Path {
    /// Creates an empty `Path`.
    #[inline]
    pub fn new() -> Path {
        Path {
            points: Box::new([]),
            verbs: Box::new([]),
        }
    }

    /// Creates a [Builder](struct.Builder.html) to build a path.
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub(crate) fn from_buffers(points: Box<[Point]>, verbs: Box<[Verb]>) -> Path {
        Path { points, verbs }
    }

    /// Returns a view on this `Path`.
    #[inline]
    pub fn as_slice(&self) -> PathSlice {
        PathSlice {
            points: &self.points[..],
            verbs: &self.verbs[..],
        }
    }

    /// Iterates over the entire `Path`.
    pub fn iter(&self) -> Iter {
        Iter::new(&self.points[..], &self.verbs[..])
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

impl FromIterator<PathEvent> for Path {
    fn from_iter<T: IntoIterator<Item = PathEvent>>(iter: T) -> Path {
        let mut builder = Path::builder();
        for event in iter.into_iter() {
            builder.path_event(event);
        }

        builder.build()
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = PathEvent;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        self.as_slice().fmt(formatter)
    }
}

/// An immutable view over a Path.
#[derive(Copy, Clone)]
pub struct PathSlice<'l> {
    pub(crate) points: &'l [Point],
    pub(crate) verbs: &'l [Verb],
}

impl<'l> PathSlice<'l> {
    /// Iterates over the path.
    pub fn iter(&self) -> Iter<'l> {
        Iter::new(self.points, self.verbs)
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

impl<'l> From<&'l Path> for PathSlice<'l> {
    fn from(path: &'l Path) -> Self {
        path.as_slice()
    }
}

impl<'l> IntoIterator for PathSlice<'l> {
    type Item = PathEvent;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

impl<'l> fmt::Debug for PathSlice<'l> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fn write_point(formatter: &mut fmt::Formatter, point: Point) -> fmt::Result {
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.x, formatter)?;
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.y, formatter)
        }

        write!(formatter, "\"")?;

        for event in self.iter() {
            match event {
                PathEvent::Begin { at } => {
                    write!(formatter, " M")?;
                    write_point(formatter, at)?;
                }
                PathEvent::Line { to, .. } => {
                    write!(formatter, " L")?;
                    write_point(formatter, to)?;
                }
                PathEvent::Quadratic { ctrl, to, .. } => {
                    write!(formatter, " Q")?;
                    write_point(formatter, ctrl)?;
                    write_point(formatter, to)?;
                }
                PathEvent::Cubic {
                    ctrl1, ctrl2, to, ..
                } => {
                    write!(formatter, " C")?;
                    write_point(formatter, ctrl1)?;
                    write_point(formatter, ctrl2)?;
                    write_point(formatter, to)?;
                }
                PathEvent::End { close, .. } => {
                    if close {
                        write!(formatter, " Z")?;
                    }
                }
            }
        }

        write!(formatter, "\"")
    }
}

/// An iterator over the events of a [Path](struct.Path.html).
#[derive(Clone)]
pub struct Iter<'l> {
    points: std::slice::Iter<'l, Point>,
    verbs: std::slice::Iter<'l, Verb>,
    current: Point,
    first: Point,
}

impl<'l> Iter<'l> {
    fn new(points: &'l [Point], verbs: &'l [Verb]) -> Self {
        Iter {
            points: points.iter(),
            verbs: verbs.iter(),
            current: Point::new(0.0, 0.0),
            first: Point::new(0.0, 0.0),
        }
    }

    #[inline]
    fn next_point(&mut self) -> Point {
        // The builder only pushes a verb after pushing its points, so a
        // well-formed path never runs out of points here.
        *self.points.next().unwrap_or(&Point::new(0.0, 0.0))
    }
}

impl<'l> Iterator for Iter<'l> {
    type Item = PathEvent;

    fn next(&mut self) -> Option<PathEvent> {
        match self.verbs.next() {
            Some(&Verb::Begin) => {
                self.current = self.next_point();
                self.first = self.current;

                Some(PathEvent::Begin { at: self.current })
            }
            Some(&Verb::LineTo) => {
                let from = self.current;
                self.current = self.next_point();

                Some(PathEvent::Line {
                    from,
                    to: self.current,
                })
            }
            Some(&Verb::QuadraticTo) => {
                let from = self.current;
                let ctrl = self.next_point();
                self.current = self.next_point();

                Some(PathEvent::Quadratic {
                    from,
                    ctrl,
                    to: self.current,
                })
            }
            Some(&Verb::CubicTo) => {
                let from = self.current;
                let ctrl1 = self.next_point();
                let ctrl2 = self.next_point();
                self.current = self.next_point();

                Some(PathEvent::Cubic {
                    from,
                    ctrl1,
                    ctrl2,
                    to: self.current,
                })
            }
            Some(&Verb::Close) => {
                let last = self.current;
                self.current = self.first;

                Some(PathEvent::End {
                    last,
                    first: self.first,
                    close: true,
                })
            }
            Some(&Verb::End) => {
                let last = self.current;
                self.current = self.first;

                Some(PathEvent::End {
                    last,
                    first: self.first,
                    close: false,
                })
            }
            None => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.verbs.size_hint()
    }
}
