use crate::index::{IntervalRTree, DEFAULT_DEGREE};
use crate::interval::Interval;
use crate::Coordinate;
use log::{debug, trace};

/// One edge of a boundary ring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub p0: Coordinate,
    pub p1: Coordinate,
}

impl Segment {
    pub fn new(p0: Coordinate, p1: Coordinate) -> Self {
        Segment { p0, p1 }
    }

    /// The range of y values covered by the segment.
    pub fn y_interval(&self) -> Interval {
        Interval::new(self.p0.y, self.p1.y)
    }

    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.p1
    }
}

/**
 * The boundary segments of an areal geometry, indexed by their y-extent.
 *
 * Segments are copied out of the rings and owned here; the index refers to
 * them by their position in `segments`, so a stabbing query at some y
 * yields exactly the segments whose y-extent contains it.
 */
#[derive(Debug, Clone)]
pub struct BoundarySegmentStore {
    segments: Vec<Segment>,
    index: IntervalRTree,
}

impl BoundarySegmentStore {
    pub fn new<'a, I>(rings: I) -> Self
    where
        I: IntoIterator<Item = &'a [Coordinate]>,
    {
        BoundarySegmentStore::with_degree(rings, DEFAULT_DEGREE)
    }

    pub fn with_degree<'a, I>(rings: I, degree: usize) -> Self
    where
        I: IntoIterator<Item = &'a [Coordinate]>,
    {
        let mut segments = Vec::new();
        for (ring_index, ring) in rings.into_iter().enumerate() {
            if is_degenerate_ring(ring) {
                trace!(
                    "skipping degenerate ring {} with {} coordinates",
                    ring_index,
                    ring.len()
                );
                continue;
            }
            add_ring(&mut segments, ring);
        }

        let entries: Vec<(Interval, usize)> = segments
            .iter()
            .enumerate()
            .map(|(i, s)| (s.y_interval(), i))
            .collect();
        let index = IntervalRTree::new(degree, entries);
        debug!(
            "indexed {} boundary segments (degree {}, height {})",
            segments.len(),
            index.degree(),
            index.height()
        );

        BoundarySegmentStore { segments, index }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn index(&self) -> &IntervalRTree {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Visit every segment whose y-extent contains `y`.
    pub fn query<F>(&self, y: f64, mut visitor: F)
    where
        F: FnMut(&Segment),
    {
        let segments = &self.segments;
        self.index.query_point(y, |i| visitor(&segments[i]));
    }

    /// Number of segments a query at `y` visits.
    pub fn count_candidates(&self, y: f64) -> usize {
        let mut count = 0;
        self.index.query_point(y, |_| count += 1);
        count
    }
}

/// Whether a ring has fewer than two distinct coordinates, and so bounds
/// nothing.
pub(crate) fn is_degenerate_ring(ring: &[Coordinate]) -> bool {
    ring.windows(2).all(|c| Segment::new(c[0], c[1]).is_degenerate())
}

// Rings are closed implicitly if their last coordinate is not the first.
fn add_ring(segments: &mut Vec<Segment>, ring: &[Coordinate]) {
    segments.extend(ring.windows(2).map(|c| Segment::new(c[0], c[1])));
    let first = ring[0];
    let last = ring[ring.len() - 1];
    if first != last {
        segments.push(Segment::new(last, first));
    }
}
