mod indexed;
mod simple;

pub use indexed::AreaLocator;
pub use simple::SimplePointInAreaLocator;

use crate::{Coordinate, Location};
use rayon::prelude::*;

/// A trait to locate one or several query points relative to an areal geometry.
pub trait PointLocator {
    /// Locates one query point.
    fn locate(&self, point: Coordinate) -> Location;

    /// Locates several query points.
    fn locate_many(&self, points: &[Coordinate]) -> Vec<Location> {
        points.iter().map(|&point| self.locate(point)).collect()
    }

    /// Locates several query points in parallel.
    fn par_locate_many(&self, points: &[Coordinate]) -> Vec<Location>
    where
        Self: Sync,
    {
        points.par_iter().map(|&point| self.locate(point)).collect()
    }
}
