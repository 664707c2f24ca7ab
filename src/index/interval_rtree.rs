/**
 * A static, packed R-tree over one-dimensional intervals.
 *
 * Leaves are sorted by interval midpoint and packed bottom-up, `degree`
 * children per parent, into a single flat array. This is the same layout
 * as a Flatbush, specialized to one dimension: intervals that are close
 * on the line share parents, so a stabbing query only descends into the
 * few subtrees whose extent can hold the query value.
 */
use crate::interval::Interval;
use crate::utils::calculate_level_indices;
use smallvec::SmallVec;

pub const DEFAULT_DEGREE: usize = 16;

// Inline capacity of the traversal stack. A query holds at most
// (degree - 1) * height + 1 entries, so at the default degree this covers
// trees up to height 8 (over four billion leaves) before spilling.
const QUERY_STACK_SIZE: usize = 128;

#[derive(Debug, Clone)]
pub struct IntervalRTree {
    degree: usize,
    // nodes in level i are (level_indices[i] .. level_indices[i + 1] - 1)
    level_indices: Vec<usize>,
    tree: Vec<Interval>,
    // payload of each leaf, in sorted leaf order
    node_indices: Vec<usize>,
}

impl IntervalRTree {
    pub fn new_empty() -> Self {
        IntervalRTree {
            degree: DEFAULT_DEGREE,
            level_indices: vec![0],
            tree: vec![Interval::new_empty()],
            node_indices: Vec::new(),
        }
    }

    /// Bulk-load the tree from `(interval, payload)` entries, in any order.
    pub fn new(degree: usize, mut entries: Vec<(Interval, usize)>) -> Self {
        if entries.is_empty() {
            return IntervalRTree::new_empty();
        }
        let degree = degree.max(2);
        entries.sort_unstable_by(|(a, _), (b, _)| a.center().total_cmp(&b.center()));

        let level_indices = calculate_level_indices(degree, entries.len());
        let tree_size = level_indices[level_indices.len() - 1] + 1;

        let node_indices: Vec<usize> = entries.iter().map(|(_, i)| *i).collect();
        let mut tree: Vec<Interval> = Vec::with_capacity(tree_size);
        tree.extend(entries.iter().map(|(e, _)| *e));

        for level in 1..level_indices.len() {
            let level_index = level_indices[level];
            tree.resize(level_index, Interval::new_empty());

            let level_items = &tree[level_indices[level - 1]..level_index];
            let next_items: Vec<Interval> = level_items.chunks(degree).map(Interval::of).collect();
            tree.extend(next_items);
        }
        debug_assert_eq!(tree.len(), tree_size);

        IntervalRTree {
            degree,
            level_indices,
            tree,
            node_indices,
        }
    }

    pub fn len(&self) -> usize {
        self.node_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_indices.is_empty()
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Level of the root; a tree with a single leaf has height 0.
    pub fn height(&self) -> usize {
        self.level_indices.len() - 1
    }

    /// The interval covering every entry.
    pub fn envelope(&self) -> Interval {
        self.get_interval(self.height(), 0)
    }

    fn get_interval(&self, level: usize, offset: usize) -> Interval {
        self.tree[self.level_indices[level] + offset]
    }

    /// Visit the payload of every entry whose interval intersects `[min, max]`.
    ///
    /// Entries are visited exactly once each, in no particular order.
    pub fn query<F>(&self, min: f64, max: f64, mut visitor: F)
    where
        F: FnMut(usize),
    {
        if self.is_empty() {
            return;
        }

        // Stack entries: (level, offset)
        let mut stack: SmallVec<[(usize, usize); QUERY_STACK_SIZE]> = SmallVec::new();
        stack.push((self.height(), 0));
        while let Some((level, offset)) = stack.pop() {
            if !self.get_interval(level, offset).intersects(min, max) {
                continue;
            }
            if level == 0 {
                visitor(self.node_indices[offset]);
            } else {
                let child_level = level - 1;
                let first_child_offset = self.degree * offset;
                for child_offset in first_child_offset..(first_child_offset + self.degree) {
                    stack.push((child_level, child_offset));
                }
            }
        }
    }

    /// Visit the payload of every entry whose interval contains `value`.
    pub fn query_point<F>(&self, value: f64, visitor: F)
    where
        F: FnMut(usize),
    {
        self.query(value, value, visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn query_sorted(tree: &IntervalRTree, min: f64, max: f64) -> Vec<usize> {
        let mut results = Vec::new();
        tree.query(min, max, |i| results.push(i));
        results.sort_unstable();
        results
    }

    fn find_brute(intervals: &[Interval], min: f64, max: f64) -> Vec<usize> {
        intervals
            .iter()
            .enumerate()
            .filter(|(_, i)| i.intersects(min, max))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn build(degree: usize, intervals: &[Interval]) -> IntervalRTree {
        IntervalRTree::new(
            degree,
            intervals.iter().copied().enumerate().map(|(i, e)| (e, i)).collect(),
        )
    }

    #[test]
    fn test_empty_tree() {
        let empty = IntervalRTree::new_empty();
        assert!(empty.is_empty());
        assert_eq!(empty.height(), 0);
        assert!(empty.envelope().is_empty());
        assert_eq!(query_sorted(&empty, f64::NEG_INFINITY, f64::INFINITY), Vec::new());

        let from_nothing = IntervalRTree::new(4, Vec::new());
        assert!(from_nothing.is_empty());
        assert_eq!(query_sorted(&from_nothing, 0., 0.), Vec::new());
    }

    #[test]
    fn test_single_entry() {
        let tree = IntervalRTree::new(4, vec![(Interval::new(1., 3.), 7)]);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 0);
        assert_eq!(query_sorted(&tree, 2., 2.), vec![7]);
        assert_eq!(query_sorted(&tree, 1., 1.), vec![7]);
        assert_eq!(query_sorted(&tree, 3., 3.), vec![7]);
        assert_eq!(query_sorted(&tree, 3.5, 3.5), Vec::new());
    }

    #[test]
    fn test_build_tree() {
        let intervals = vec![
            Interval::new(44., 48.),
            Interval::new(48., 55.),
            Interval::new(46., 56.),
            Interval::new(65., 79.),
            Interval::new(40., 45.),
            Interval::new(87., 91.),
            Interval::new(47., 58.),
            Interval::new(48., 56.),
        ];
        let tree = build(4, &intervals);

        assert_eq!(tree.degree(), 4);
        assert_eq!(tree.level_indices, vec![0, 8, 12]);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.envelope(), Interval::new(40., 91.));
        // Sorted by midpoint: 42.5, 46, 51, 51.5, 52, 52.5, 72, 89
        assert_eq!(tree.node_indices, vec![4, 0, 2, 1, 7, 6, 3, 5]);
        assert_eq!(tree.tree[8], Interval::new(40., 56.));
        assert_eq!(tree.tree[9], Interval::new(47., 91.));
        assert!(tree.tree[10].is_empty());
        assert!(tree.tree[11].is_empty());

        assert_eq!(query_sorted(&tree, 45., 45.), vec![0, 4]);
        assert_eq!(query_sorted(&tree, 56., 56.), vec![2, 6, 7]);
        assert_eq!(query_sorted(&tree, 80., 86.), Vec::new());
        assert_eq!(query_sorted(&tree, 0., 100.), (0..8).collect::<Vec<usize>>());
    }

    #[test]
    fn test_degree_is_clamped() {
        let intervals: Vec<Interval> = (0..5).map(|i| Interval::new(i as f64, i as f64)).collect();
        let tree = build(0, &intervals);
        assert_eq!(tree.degree(), 2);
        assert_eq!(tree.level_indices, vec![0, 6, 10, 12]);
        for i in 0..5usize {
            assert_eq!(query_sorted(&tree, i as f64, i as f64), vec![i]);
        }
    }

    #[test]
    fn test_empty_entries_never_match() {
        let intervals = vec![
            Interval::new(0., 1.),
            Interval::new_empty(),
            Interval::new(0.5, 2.),
        ];
        let tree = build(2, &intervals);
        assert_eq!(tree.len(), 3);
        assert_eq!(query_sorted(&tree, 0.75, 0.75), vec![0, 2]);
        assert_eq!(query_sorted(&tree, f64::NEG_INFINITY, f64::INFINITY), vec![0, 2]);
        assert_eq!(query_sorted(&tree, f64::NAN, f64::NAN), Vec::new());
    }

    #[test]
    fn test_query_point_matches_brute() {
        // Many short intervals and a few long ones, like the y-extents of
        // near-horizontal and near-vertical polygon edges.
        let mut intervals: Vec<Interval> = (0..500)
            .map(|i| {
                let y = (i as f64 * 0.37) % 50.;
                Interval::new(y, y + 0.01 * (i % 7) as f64)
            })
            .collect();
        intervals.push(Interval::new(-100., 100.));
        intervals.push(Interval::new(10., 40.));
        let tree = build(DEFAULT_DEGREE, &intervals);

        for step in -20..=120 {
            let y = step as f64 * 0.5;
            let mut results = Vec::new();
            tree.query_point(y, |i| results.push(i));
            results.sort_unstable();
            assert_eq!(results, find_brute(&intervals, y, y), "query at {}", y);
        }
    }

    proptest! {
        #[test]
        fn query_matches_linear_scan(
            bounds in proptest::collection::vec((-100f64..100., -100f64..100.), 0..300),
            degree in 2usize..20,
            value in -110f64..110.,
        ) {
            let intervals: Vec<Interval> = bounds.iter().map(|&(a, b)| Interval::new(a, b)).collect();
            let tree = build(degree, &intervals);
            prop_assert_eq!(query_sorted(&tree, value, value), find_brute(&intervals, value, value));
        }
    }
}
