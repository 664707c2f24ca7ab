use area_locator::algorithms::RayCrossingCounter;
use area_locator::{Coordinate, Location};
use rstar::{RTree, RTreeObject, AABB};

pub struct Segment {
    start: Coordinate,
    end: Coordinate,
}

impl RTreeObject for Segment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.start.x, self.start.y], [self.end.x, self.end.y])
    }
}

pub(crate) fn build_rstar(rings: &[&[Coordinate]]) -> RTree<Segment> {
    RTree::bulk_load(
        rings
            .iter()
            .flat_map(|ring| ring.windows(2))
            .map(|w| Segment {
                start: w[0],
                end: w[1],
            })
            .collect(),
    )
}

pub(crate) fn locate_rstar(point: Coordinate, rtree: &RTree<Segment>) -> Location {
    let mut counter = RayCrossingCounter::new(point);

    let ray = AABB::from_corners([point.x, point.y], [f64::INFINITY, point.y]);
    for seg in rtree.locate_in_envelope_intersecting(&ray) {
        counter.count_segment(seg.start, seg.end);
    }

    counter.location()
}
