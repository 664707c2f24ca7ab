use super::PointLocator;
use crate::algorithms::RayCrossingCounter;
use crate::errors::LocatorError;
use crate::geometry::Geometry;
use crate::index::DEFAULT_DEGREE;
use crate::segment_store::BoundarySegmentStore;
use crate::{Coordinate, Location};
use log::debug;

/**
 * Determines the location of points relative to an areal geometry, using
 * an interval index over the boundary segments.
 *
 * The index is built once, at construction, from copies of the boundary
 * segments, so the locator does not borrow the geometry. A query visits
 * only the segments whose y-extent contains the query point, so locating
 * many points amortizes the cost of scanning the boundary.
 *
 * Points on the boundary, including vertices, are located precisely as
 * `Location::Boundary`. Polygons, multipolygons and linear rings are
 * supported; the empty geometry locates every point in its exterior.
 *
 * The locator is immutable once built, and may be shared between threads.
 */
#[derive(Debug, Clone)]
pub struct AreaLocator {
    store: BoundarySegmentStore,
}

impl AreaLocator {
    pub fn new(geometry: &Geometry) -> Result<Self, LocatorError> {
        AreaLocator::with_degree(geometry, DEFAULT_DEGREE)
    }

    /// Build a locator whose index nodes have `degree` children (at least 2).
    pub fn with_degree(geometry: &Geometry, degree: usize) -> Result<Self, LocatorError> {
        let rings = geometry.rings()?;
        debug!(
            "building locator for {} with {} rings",
            geometry.kind(),
            rings.len()
        );
        let store = BoundarySegmentStore::with_degree(rings, degree);
        Ok(AreaLocator { store })
    }

    pub fn segment_store(&self) -> &BoundarySegmentStore {
        &self.store
    }
}

impl PointLocator for AreaLocator {
    fn locate(&self, point: Coordinate) -> Location {
        let mut counter = RayCrossingCounter::new(point);
        self.store.query(point.y, |segment| counter.observe(segment));
        counter.location()
    }
}
