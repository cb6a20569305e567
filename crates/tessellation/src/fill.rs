//! Fill tessellation of convex polylines.

use crate::error::{TessellationError, TessellationResult};
use crate::geometry_builder::GeometryBuilder;
use crate::polyline::Polyline;

use log::trace;

/// Produces a triangle fan for each closed contour of the polyline.
///
/// This is a fast path for shapes known to be convex: no sweep, no
/// self-intersection handling, just one triangle per polyline edge beyond
/// the first two. Open contours are skipped, as are contours with fewer
/// than three distinct points, which have no interior.
///
/// The output is produced through a [GeometryBuilder](geometry_builder/trait.GeometryBuilder.html);
/// on error the builder is asked to roll back everything added by this call.
pub fn fill_convex_polyline<Output: GeometryBuilder>(
    polyline: &Polyline,
    output: &mut Output,
) -> TessellationResult {
    output.begin_geometry();

    match fill_convex_impl(polyline, output) {
        Ok(()) => {
            output.end_geometry();
            Ok(())
        }
        Err(error) => {
            output.abort_geometry();
            Err(error)
        }
    }
}

fn fill_convex_impl<Output: GeometryBuilder>(
    polyline: &Polyline,
    output: &mut Output,
) -> Result<(), TessellationError> {
    for (contour, closed) in polyline.contours() {
        if !closed {
            continue;
        }

        // Closed contours duplicate their first point at the end; the fan
        // must not emit it twice.
        let points = match contour.split_last() {
            Some((last, rest)) if Some(last) == rest.first() => rest,
            _ => contour,
        };

        if points.len() < 3 {
            trace!("skipping degenerate contour with {} points", points.len());
            continue;
        }

        let center = output.add_vertex(points[0])?;
        let mut previous = output.add_vertex(points[1])?;
        for point in &points[2..] {
            let current = output.add_vertex(*point)?;
            output.add_triangle(center, previous, current);
            previous = current;
        }
    }

    Ok(())
}
