//! Scalar scoring of a materialized map against the room-type catalogue.

use crate::constants::{
    ABOVE_MINIMUM_CAP, ASPECT_PENALTY_PER_TILE, COUNT_MISMATCH_PENALTY, DOOR, DOOR_TILE_PENALTY,
    THIN_ROOM_PENALTY, TOO_SMALL_ROOM_PENALTY, TOO_SMALL_ROOM_SIZE, UNDERSIZED_ROOM_PENALTY,
    UNREACHABLE_ADJACENCY_PENALTY, WALL, WALL_TILE_PENALTY,
};
use crate::costfield::build_cost_field;
use crate::distance::distance_map;
use crate::extract::extract_rooms;
use crate::room::RoomConfig;
use crate::tile::TileGrid;

/// Scores `grid` against `configs`. Higher is better; every term is either
/// a bonus (positive) or a penalty (negative), summed into one scalar.
pub fn evaluate(grid: &TileGrid, configs: &[RoomConfig]) -> f32 {
    let mut score = 0.0_f32;

    let cost_field = build_cost_field(grid, configs);
    let rooms = extract_rooms(grid);

    for room in &rooms {
        if room.size < TOO_SMALL_ROOM_SIZE {
            score += TOO_SMALL_ROOM_PENALTY;
            continue;
        }

        let config = match configs.iter().find(|c| c.type_code == room.type_code) {
            Some(c) => c,
            None => continue,
        };

        // Size
        let above_minimum_cap = config.minimum_size * ABOVE_MINIMUM_CAP;
        if room.size < config.minimum_size {
            score += UNDERSIZED_ROOM_PENALTY;
        } else if room.size < above_minimum_cap {
            score += (room.size - config.minimum_size) as f32 * config.size_scaling;
        }

        // Aspect ratio
        let dim_diff = (room.width as i64 - room.height as i64).unsigned_abs() as f32;
        score += ASPECT_PENALTY_PER_TILE * dim_diff;
        if room.width < 3 || room.height < 3 {
            score += THIN_ROOM_PENALTY;
        }

        // Shape: bounding-box area minus actual cell count penalizes
        // non-rectangular / concave rooms.
        score -= (room.width * room.height) as f32 - room.size as f32;

        // Adjacency: Dijkstra from this room's center, over a cost field
        // with this room's own interior zeroed out.
        let mut aux_cost_field = cost_field.clone();
        for &(x, y) in &room.coordinates {
            aux_cost_field.set(x, y, 0.0);
        }
        let distances = distance_map(&aux_cost_field, room.center_x, room.center_y);

        for target in &rooms {
            if let Some(&weight) = config.weights.get(&target.type_code) {
                let cost = distances[target.center_y * grid.size() + target.center_x];
                if cost.is_infinite() {
                    score += UNREACHABLE_ADJACENCY_PENALTY;
                } else {
                    score -= cost * weight;
                }
            }
        }
    }

    // Global: per-type room count must match the configured count.
    for config in configs {
        let extracted_count = rooms
            .iter()
            .filter(|r| r.size >= TOO_SMALL_ROOM_SIZE && r.type_code == config.type_code)
            .count() as i64;
        let diff = (extracted_count - config.count as i64).unsigned_abs() as f32;
        score += COUNT_MISMATCH_PENALTY * diff;
    }

    // Global: flat per-tile costs.
    for &tile in grid.data() {
        if tile == WALL {
            score += WALL_TILE_PENALTY;
        } else if tile == DOOR {
            score += DOOR_TILE_PENALTY;
        }
    }

    score
}
