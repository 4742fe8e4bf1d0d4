//! Dijkstra shortest-path distance field over a cost field.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::costfield::CostField;

/// Wraps an `f32` cost so it can sit in a `BinaryHeap` as a min-heap key.
/// Costs in this crate are never NaN (they come from finite movement costs
/// or `+inf`), so a total order via `partial_cmp` is safe to unwrap.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MinCost(f32);

impl Eq for MinCost {}

impl Ord for MinCost {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.partial_cmp(&self.0).unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for MinCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs Dijkstra from `(start_x, start_y)` over `cost_field`, returning a
/// dense array (row-major, same shape as the grid) of best-known arrival
/// costs, initialized to `+inf` for unreached cells.
///
/// The arrival cost recorded at a cell includes that cell's own cost-field
/// entry: the pop-site adds `cost_field[cell]` to the accumulated edge cost.
pub fn distance_map(cost_field: &CostField, start_x: usize, start_y: usize) -> Vec<f32> {
    let size = cost_field.size();
    let mut result = vec![f32::INFINITY; size * size];
    let mut visited = vec![false; size * size];
    let mut heap = BinaryHeap::new();

    let start_idx = start_y * size + start_x;
    heap.push((MinCost(0.0), start_idx));

    while let Some((MinCost(accumulated), idx)) = heap.pop() {
        if visited[idx] {
            continue;
        }
        visited[idx] = true;

        let cost = accumulated + cost_field.as_slice()[idx];
        result[idx] = cost;

        let x = idx % size;
        let y = idx / size;

        let mut relax = |neighbor_idx: usize| {
            if !visited[neighbor_idx] && cost_field.as_slice()[neighbor_idx].is_finite() {
                heap.push((MinCost(cost), neighbor_idx));
            }
        };

        if y > 0 {
            relax(idx - size);
        }
        if y + 1 < size {
            relax(idx + size);
        }
        if x > 0 {
            relax(idx - 1);
        }
        if x + 1 < size {
            relax(idx + 1);
        }
    }

    result
}
