//! Tile grid → extracted room list via 4-connected flood fill.

use std::collections::VecDeque;

use crate::constants::FLOOR;
use crate::tile::TileGrid;

/// A maximal 4-connected region of same-type interior tiles, extracted from
/// an already-materialized grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedRoom {
    pub type_code: u8,
    pub size: usize,
    pub center_x: usize,
    pub center_y: usize,
    pub width: usize,
    pub height: usize,
    pub coordinates: Vec<(usize, usize)>,
}

/// BFS flood fill from `(start_x, start_y)` over cells matching the start
/// cell's tile value. Visited cells are overwritten with `FLOOR` in
/// `scratch` so the caller's outer walk never revisits them.
///
/// Neighbor push order is fixed (left, up, right, down): the evaluator's
/// `center` tie-break depends on this exact BFS-collection order.
fn flood_fill(scratch: &mut TileGrid, size: usize, start_x: usize, start_y: usize) -> Vec<(usize, usize)> {
    let target = scratch.get(start_x, start_y);
    let mut coordinates = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back((start_x, start_y));

    while let Some((x, y)) = queue.pop_front() {
        if x >= size || y >= size || scratch.get(x, y) != target {
            continue;
        }

        coordinates.push((x, y));
        scratch.set(x, y, FLOOR);

        if x > 0 {
            queue.push_back((x - 1, y));
        }
        if y > 0 {
            queue.push_back((x, y - 1));
        }
        if x + 1 < size {
            queue.push_back((x + 1, y));
        }
        if y + 1 < size {
            queue.push_back((x, y + 1));
        }
    }

    coordinates
}

/// Walks `grid` and extracts every maximal region of a room-interior tile
/// value (`tile < FLOOR`). The input grid is untouched; extraction runs
/// over a scratch copy.
pub fn extract_rooms(grid: &TileGrid) -> Vec<ExtractedRoom> {
    let size = grid.size();
    let mut scratch = grid.clone();
    let mut rooms = Vec::new();

    for x in 0..size {
        for y in 0..size {
            let tile = scratch.get(x, y);
            if tile >= FLOOR {
                continue;
            }

            let coordinates = flood_fill(&mut scratch, size, x, y);

            let mut min_x = usize::MAX;
            let mut min_y = usize::MAX;
            let mut max_x = 0;
            let mut max_y = 0;
            for &(cx, cy) in &coordinates {
                min_x = min_x.min(cx);
                min_y = min_y.min(cy);
                max_x = max_x.max(cx);
                max_y = max_y.max(cy);
            }

            let (center_x, center_y) = coordinates[coordinates.len() / 2];
            rooms.push(ExtractedRoom {
                type_code: tile,
                size: coordinates.len(),
                center_x,
                center_y,
                width: max_x + 1 - min_x,
                height: max_y + 1 - min_y,
                coordinates,
            });
        }
    }

    rooms
}
