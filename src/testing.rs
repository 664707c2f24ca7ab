use crate::geometry::{Geometry, Polygon};
use crate::Coordinate;

pub(crate) fn init_test() {
    drop(env_logger::try_init());
}

pub(crate) fn make_coords(coords: Vec<(f64, f64)>) -> Vec<Coordinate> {
    coords.into_iter().map(|c| c.into()).collect()
}

pub(crate) fn square() -> Geometry {
    Geometry::Polygon(Polygon::new(
        make_coords(vec![(0., 0.), (10., 0.), (10., 10.), (0., 10.), (0., 0.)]),
        Vec::new(),
    ))
}

pub(crate) fn square_with_hole() -> Geometry {
    Geometry::Polygon(Polygon::new(
        make_coords(vec![(0., 0.), (10., 0.), (10., 10.), (0., 10.), (0., 0.)]),
        vec![make_coords(vec![(4., 4.), (6., 4.), (6., 6.), (4., 6.), (4., 4.)])],
    ))
}

/// A star-shaped ring with `num_points` tips, alternating between an outer
/// and inner radius around (0, 0).
pub(crate) fn star(num_points: usize, outer: f64, inner: f64) -> Vec<Coordinate> {
    let num_vertices = 2 * num_points;
    let mut coords: Vec<Coordinate> = (0..num_vertices)
        .map(|i| {
            let angle = 2. * std::f64::consts::PI * (i as f64) / (num_vertices as f64);
            let radius = if i % 2 == 0 { outer } else { inner };
            Coordinate::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    coords.push(coords[0]);
    coords
}
