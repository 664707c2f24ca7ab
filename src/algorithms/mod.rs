mod orientation;
mod ray_crossing;

pub use orientation::{orientation_index, Orientation};
pub use ray_crossing::{locate_point_in_ring, RayCrossingCounter};
