/// Start offsets of each level of a packed tree with `num_items` leaves.
///
/// Each level is padded to a multiple of `degree`, so the children of node
/// `offset` at level `l` are always `degree * offset .. degree * (offset + 1)`
/// at level `l - 1`. The last entry is the offset of the root.
pub(crate) fn calculate_level_indices(degree: usize, num_items: usize) -> Vec<usize> {
    let mut level_indices: Vec<usize> = vec![0];

    let mut level = 0;
    let mut level_size = num_items;

    while level_size > 1 {
        let level_buffer = if level_size % degree > 0 { 1 } else { 0 };
        // least multiple of degree >= level_size
        let level_capacity = degree * (level_size / degree + level_buffer);
        level_indices.push(level_indices[level] + level_capacity);
        level += 1;
        level_size = level_capacity / degree;
    }
    level_indices
}
