use super::orientation::{orientation_index, Orientation};
use crate::segment_store::Segment;
use crate::{Coordinate, Location};

/**
 * Counts the crossings of a horizontal ray from a query point toward +x
 * with the segments it is shown, and detects points on a segment.
 *
 * The crossing test is half-open in y (one endpoint strictly above the ray,
 * the other at or below it), so a ray through a vertex shared by two
 * segments is counted once. Segments that cannot reach the ray's y are
 * never crossed, so it is enough to show the counter the segments whose
 * y-extent contains the point.
 *
 * For NaN coordinates the resulting location is unspecified, but counting
 * never panics.
 */
#[derive(Debug, Clone)]
pub struct RayCrossingCounter {
    point: Coordinate,
    crossing_count: usize,
    on_segment: bool,
}

impl RayCrossingCounter {
    pub fn new(point: Coordinate) -> Self {
        RayCrossingCounter {
            point,
            crossing_count: 0,
            on_segment: false,
        }
    }

    pub fn observe(&mut self, segment: &Segment) {
        self.count_segment(segment.p0, segment.p1);
    }

    pub fn count_segment(&mut self, p1: Coordinate, p2: Coordinate) {
        if self.on_segment {
            return;
        }
        let p = self.point;

        // Entirely left of the point; it can neither contain nor cross.
        if p1.x < p.x && p2.x < p.x {
            return;
        }

        if p == p1 || p == p2 {
            self.on_segment = true;
            return;
        }

        // Horizontal segments (including zero-length ones) never cross the ray.
        if p1.y == p.y && p2.y == p.y {
            let x_min = p1.x.min(p2.x);
            let x_max = p1.x.max(p2.x);
            if x_min <= p.x && p.x <= x_max {
                self.on_segment = true;
            }
            return;
        }

        if (p1.y > p.y && p2.y <= p.y) || (p2.y > p.y && p1.y <= p.y) {
            let mut orientation = orientation_index(p1, p2, p);
            if orientation == Orientation::Collinear {
                self.on_segment = true;
                return;
            }
            // Normalize so the segment points upward.
            if p2.y < p1.y {
                orientation = orientation.reversed();
            }
            // The point is left of an upward segment iff the segment is
            // right of the point, i.e. the ray crosses it.
            if orientation == Orientation::CounterClockwise {
                self.crossing_count += 1;
            }
        }
    }

    /// Count every segment of a ring, closing it if needed.
    pub fn count_ring(&mut self, ring: &[Coordinate]) {
        for window in ring.windows(2) {
            self.count_segment(window[0], window[1]);
            if self.on_segment {
                return;
            }
        }
        if let (Some(&first), Some(&last)) = (ring.first(), ring.last()) {
            if first != last {
                self.count_segment(last, first);
            }
        }
    }

    pub fn crossing_count(&self) -> usize {
        self.crossing_count
    }

    pub fn is_on_segment(&self) -> bool {
        self.on_segment
    }

    pub fn is_point_in_polygon(&self) -> bool {
        self.location() != Location::Exterior
    }

    pub fn location(&self) -> Location {
        if self.on_segment {
            Location::Boundary
        } else if self.crossing_count % 2 == 1 {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}

/// Locate a point relative to a single ring by checking every segment.
pub fn locate_point_in_ring(point: Coordinate, ring: &[Coordinate]) -> Location {
    let mut counter = RayCrossingCounter::new(point);
    counter.count_ring(ring);
    counter.location()
}
