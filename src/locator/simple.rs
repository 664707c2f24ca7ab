use super::PointLocator;
use crate::algorithms::RayCrossingCounter;
use crate::errors::LocatorError;
use crate::geometry::Geometry;
use crate::segment_store::is_degenerate_ring;
use crate::{Coordinate, Location};

/// Locates points by testing every boundary segment of the geometry.
///
/// Gives the same answers as [`AreaLocator`](super::AreaLocator) without
/// building an index, which is cheaper for a handful of queries.
#[derive(Debug, Clone)]
pub struct SimplePointInAreaLocator {
    rings: Vec<Vec<Coordinate>>,
}

impl SimplePointInAreaLocator {
    pub fn new(geometry: &Geometry) -> Result<Self, LocatorError> {
        let rings = geometry
            .rings()?
            .into_iter()
            .filter(|ring| !is_degenerate_ring(ring))
            .map(|ring| ring.to_vec())
            .collect();
        Ok(SimplePointInAreaLocator { rings })
    }
}

impl PointLocator for SimplePointInAreaLocator {
    fn locate(&self, point: Coordinate) -> Location {
        let mut counter = RayCrossingCounter::new(point);
        for ring in &self.rings {
            counter.count_ring(ring);
            if counter.is_on_segment() {
                break;
            }
        }
        counter.location()
    }
}
