//! Hole detection on the cell grid

/// True when the complement of the occupied set is a single connected
/// component, i.e. the region encloses no cavity.
///
/// The grid is padded by one empty ring so the flood always starts outside
/// the region; every empty cell, inner or frame, must then be reachable
/// from the ring. `occupied_count` is the number of cells for which
/// `occupied` returns true, which callers already track.
#[must_use]
pub fn hole_free<F>(split: usize, occupied_count: usize, occupied: F) -> bool
where
    F: Fn((usize, usize)) -> bool,
{
    let side = split + 2;
    let mut visited = vec![false; side * side];
    let mut stack = vec![(0usize, 0usize)];
    let mut reached = 0usize;

    while let Some((px, py)) = stack.pop() {
        let idx = py * side + px;
        if visited[idx] {
            continue;
        }
        // Padded coordinates: inner cell (i, j) sits at (i + 1, j + 1).
        let inner = (1..=split).contains(&px) && (1..=split).contains(&py);
        if inner && occupied((px - 1, py - 1)) {
            continue;
        }
        visited[idx] = true;
        reached += 1;

        if px > 0 { stack.push((px - 1, py)); }
        if px + 1 < side { stack.push((px + 1, py)); }
        if py > 0 { stack.push((px, py - 1)); }
        if py + 1 < side { stack.push((px, py + 1)); }
    }

    reached == side * side - occupied_count
}
