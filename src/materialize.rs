//! Room list → tile grid materialization.

use crate::constants::{DOOR, WALL};
use crate::room::Room;
use crate::tile::TileGrid;

/// Paints `rooms` onto a fresh `map_size x map_size` grid.
///
/// Later rooms overwrite earlier ones where they overlap; nothing here
/// rejects overlapping or out-of-range rooms — out-of-range writes clamp to
/// the grid boundary (see [`TileGrid::set`]) so a pathological candidate
/// degrades the score rather than aborting the search.
pub fn materialize(map_size: usize, rooms: &[Room]) -> TileGrid {
    let mut grid = TileGrid::new(map_size);

    for room in rooms {
        for dx in 0..room.width {
            for dy in 0..room.height {
                let x = (room.x + dx) as usize;
                let y = (room.y + dy) as usize;
                let on_boundary =
                    dx == 0 || dy == 0 || dx == room.width - 1 || dy == room.height - 1;
                if on_boundary {
                    grid.set(x, y, WALL);
                } else {
                    grid.set(x, y, room.type_code);
                }
            }
        }

        for door in &room.doors {
            if door.active {
                let x = (room.x + door.dx) as usize;
                let y = (room.y + door.dy) as usize;
                grid.set(x, y, DOOR);
            }
        }
    }

    grid
}
