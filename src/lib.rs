mod coordinate;
mod interval;
mod location;
mod rectangle;
mod utils;

pub mod algorithms;
pub mod errors;
pub mod from_wkt;
pub mod geometry;
pub mod index;
pub mod locator;
pub mod segment_store;

#[cfg(test)]
mod testing;

pub use coordinate::Coordinate;
pub use errors::{LocatorError, WktError};
pub use geometry::{Geometry, Polygon};
pub use interval::Interval;
pub use location::Location;
pub use locator::{AreaLocator, PointLocator, SimplePointInAreaLocator};
pub use rectangle::Rectangle;
pub use segment_store::{BoundarySegmentStore, Segment};
