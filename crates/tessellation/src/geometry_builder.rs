//! Tools to help with populating vertex and index buffers.
//!
//! ## Overview
//!
//! The tessellation routines are parametrized over a type implementing the
//! [GeometryBuilder](trait.GeometryBuilder.html) trait, which provides simple
//! methods to add vertices and triangles without enforcing a particular
//! representation for the resulting geometry. This matters because each
//! application usually wants to work with its own vertex type, tailored to a
//! certain rendering model.
//!
//! The structs [VertexBuffers](struct.VertexBuffers.html) and
//! [BuffersBuilder](struct.BuffersBuilder.html) are provided for convenience.
//! `VertexBuffers<T, I>` contains a `Vec<T>` for the vertices and a `Vec<I>`
//! for the indices. `BuffersBuilder` is generic over a
//! [VertexConstructor](trait.VertexConstructor.html) which creates the
//! application's vertices from the tessellators' points.
//!
//! ## Examples
//!
//! ```
//! use flatiron_tessellation::geometry_builder::*;
//! use flatiron_tessellation::math::{point, Point};
//! use flatiron_tessellation::GeometryBuilderError;
//!
//! // A typical vertex type with more than a position.
//! #[derive(Copy, Clone, Debug, PartialEq)]
//! struct Vertex2d {
//!     position: [f32; 2],
//!     color: [f32; 4],
//! }
//!
//! // The vertex constructor, which stores a constant color applied to
//! // every vertex it creates.
//! struct WithColor([f32; 4]);
//!
//! impl VertexConstructor<Vertex2d> for WithColor {
//!     fn new_vertex(&mut self, position: Point) -> Vertex2d {
//!         Vertex2d {
//!             position: position.to_array(),
//!             color: self.0,
//!         }
//!     }
//! }
//!
//! // A simple algorithm generating a quad.
//! fn make_quad<Builder: GeometryBuilder>(
//!     top_left: Point,
//!     width: f32,
//!     height: f32,
//!     builder: &mut Builder,
//! ) -> Result<(), GeometryBuilderError> {
//!     let a = builder.add_vertex(top_left)?;
//!     let b = builder.add_vertex(top_left + flatiron_tessellation::math::vector(width, 0.0))?;
//!     let c = builder.add_vertex(top_left + flatiron_tessellation::math::vector(width, height))?;
//!     let d = builder.add_vertex(top_left + flatiron_tessellation::math::vector(0.0, height))?;
//!     builder.add_triangle(a, b, c);
//!     builder.add_triangle(a, c, d);
//!     Ok(())
//! }
//!
//! let mut buffers: VertexBuffers<Vertex2d, u16> = VertexBuffers::new();
//! let red = [1.0, 0.0, 0.0, 1.0];
//! make_quad(point(0.0, 0.0), 1.0, 1.0, &mut BuffersBuilder::new(&mut buffers, WithColor(red))).unwrap();
//!
//! assert_eq!(buffers.vertices.len(), 4);
//! assert_eq!(buffers.indices.len(), 6);
//! ```

use crate::error::GeometryBuilderError;
use crate::math::Point;
use crate::VertexId;

use std::convert::TryFrom;

/// An interface separating tessellators and other geometry generation
/// algorithms from the actual vertex construction.
pub trait GeometryBuilder {
    /// Inserts a vertex, providing its position, and returns its identifier.
    fn add_vertex(&mut self, position: Point) -> Result<VertexId, GeometryBuilderError>;

    /// Insert a triangle made of vertices that were added after the last
    /// call to begin_geometry.
    fn add_triangle(&mut self, a: VertexId, b: VertexId, c: VertexId);

    /// Called by the tessellator before beginning to add geometry.
    fn begin_geometry(&mut self) {}

    /// Called by the tessellator once it is done adding geometry.
    fn end_geometry(&mut self) {}

    /// Called if the tessellator runs into an error, to discard everything
    /// added since `begin_geometry`.
    fn abort_geometry(&mut self) {}
}

/// Structure that holds the vertex and index data.
///
/// Usually written into though temporary `BuffersBuilder` objects.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct VertexBuffers<OutputVertex, OutputIndex> {
    pub vertices: Vec<OutputVertex>,
    pub indices: Vec<OutputIndex>,
}

impl<OutputVertex, OutputIndex> VertexBuffers<OutputVertex, OutputIndex> {
    /// Constructor.
    pub fn new() -> Self {
        VertexBuffers::with_capacity(512, 1024)
    }

    /// Constructor.
    pub fn with_capacity(num_vertices: usize, num_indices: usize) -> Self {
        VertexBuffers {
            vertices: Vec::with_capacity(num_vertices),
            indices: Vec::with_capacity(num_indices),
        }
    }
}

/// A trait specifying how to create vertex values.
pub trait VertexConstructor<OutputVertex> {
    fn new_vertex(&mut self, position: Point) -> OutputVertex;
}

/// A `VertexConstructor` that keeps the positions unchanged.
pub struct Positions;

impl VertexConstructor<Point> for Positions {
    fn new_vertex(&mut self, position: Point) -> Point {
        position
    }
}

impl VertexConstructor<[f32; 2]> for Positions {
    fn new_vertex(&mut self, position: Point) -> [f32; 2] {
        position.to_array()
    }
}

/// A temporary view on a `VertexBuffers` object which facilitates the
/// population of vertex and index data.
///
/// `BuffersBuilder` objects are meant to be created only temporarily during
/// the execution of a tessellation operation. Creating and destroying them is
/// essentially free.
pub struct BuffersBuilder<'l, OutputVertex, OutputIndex, Ctor> {
    buffers: &'l mut VertexBuffers<OutputVertex, OutputIndex>,
    first_vertex: usize,
    first_index: usize,
    vertex_constructor: Ctor,
}

impl<'l, OutputVertex, OutputIndex, Ctor> BuffersBuilder<'l, OutputVertex, OutputIndex, Ctor> {
    pub fn new(buffers: &'l mut VertexBuffers<OutputVertex, OutputIndex>, ctor: Ctor) -> Self {
        let first_vertex = buffers.vertices.len();
        let first_index = buffers.indices.len();

        BuffersBuilder {
            buffers,
            first_vertex,
            first_index,
            vertex_constructor: ctor,
        }
    }

    pub fn buffers<'a, 'b: 'a>(&'b self) -> &'a VertexBuffers<OutputVertex, OutputIndex> {
        self.buffers
    }
}

impl<'l, OutputVertex, OutputIndex, Ctor> GeometryBuilder
    for BuffersBuilder<'l, OutputVertex, OutputIndex, Ctor>
where
    OutputIndex: TryFrom<usize> + Copy,
    Ctor: VertexConstructor<OutputVertex>,
{
    fn add_vertex(&mut self, position: Point) -> Result<VertexId, GeometryBuilderError> {
        if position.x.is_nan() || position.y.is_nan() {
            return Err(GeometryBuilderError::InvalidVertex);
        }

        let id = self.buffers.vertices.len() - self.first_vertex;
        // Make sure that the index type can represent this vertex before
        // pushing it, so that add_triangle cannot fail later.
        if OutputIndex::try_from(id).is_err() {
            return Err(GeometryBuilderError::TooManyVertices);
        }

        self.buffers
            .vertices
            .push(self.vertex_constructor.new_vertex(position));

        Ok(VertexId::from_usize(id))
    }

    fn add_triangle(&mut self, a: VertexId, b: VertexId, c: VertexId) {
        debug_assert!(a != b);
        debug_assert!(a != c);
        debug_assert!(b != c);

        for id in &[a, b, c] {
            let index = match OutputIndex::try_from(id.to_usize()) {
                Ok(index) => index,
                // add_vertex checked the range when the id was created.
                Err(_) => unreachable!(),
            };
            self.buffers.indices.push(index);
        }
    }

    fn abort_geometry(&mut self) {
        self.buffers.vertices.truncate(self.first_vertex);
        self.buffers.indices.truncate(self.first_index);
    }
}
