pub mod other_impls;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use area_locator::{Coordinate, Geometry, Polygon, Rectangle};

//// Utility functions

/// A star with `num_points` tips around (0, 0), with a square hole.
pub(crate) fn star_polygon(num_points: usize) -> Geometry {
    let num_vertices = 2 * num_points;
    let mut shell: Vec<Coordinate> = (0..num_vertices)
        .map(|i| {
            let angle = 2. * std::f64::consts::PI * (i as f64) / (num_vertices as f64);
            let radius = if i % 2 == 0 { 100. } else { 80. };
            Coordinate::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    shell.push(shell[0]);
    let hole: Vec<Coordinate> = vec![
        (-20., -20.).into(),
        (-20., 20.).into(),
        (20., 20.).into(),
        (20., -20.).into(),
        (-20., -20.).into(),
    ];
    Geometry::Polygon(Polygon::new(shell, vec![hole]))
}

/// A comb with `num_teeth` teeth packed into 0 <= y <= 1, closed by two
/// tall sides.
pub(crate) fn comb_polygon(num_teeth: usize) -> Geometry {
    let width = num_teeth as f64;
    let mut shell: Vec<Coordinate> = (0..=num_teeth)
        .map(|i| Coordinate::new(i as f64, if i % 2 == 0 { 0. } else { 1. }))
        .collect();
    let last_y = shell[shell.len() - 1].y;
    if last_y != 0. {
        shell.push(Coordinate::new(width, 0.));
    }
    shell.push(Coordinate::new(width, width));
    shell.push(Coordinate::new(0., width));
    shell.push(Coordinate::new(0., 0.));
    Geometry::Polygon(Polygon::new(shell, Vec::new()))
}

pub(crate) fn get_random_points(rect: Rectangle, n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Coordinate::new(
            rng.gen_range(rect.x_min, rect.x_max),
            rng.gen_range(rect.y_min, rect.y_max),
        ));
    }

    results
}
