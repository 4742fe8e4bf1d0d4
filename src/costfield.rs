//! Tile grid → per-cell traversal cost field.

use crate::constants::{DOOR, DOOR_MOVE_COST, FLOOR, FLOOR_MOVE_COST, WALL};
use crate::room::RoomConfig;
use crate::tile::TileGrid;

/// A dense, row-major array of per-cell traversal costs, same shape as the
/// source grid. `WALL` cells carry `f32::INFINITY`.
#[derive(Debug, Clone, PartialEq)]
pub struct CostField {
    size: usize,
    costs: Vec<f32>,
}

impl CostField {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.costs[y * self.size + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        self.costs[y * self.size + x] = value;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.costs
    }
}

/// `FLOOR -> 1.0`, `DOOR -> door_move_cost`, `WALL -> +inf`, any room-interior
/// code `t -> configs[t].movement_cost`.
///
/// `configs` is indexed by `type_code`; callers are expected to have run
/// [`crate::error::validate_configs`] beforehand, but a tile with no
/// matching config falls back to `FLOOR_MOVE_COST` rather than panicking,
/// keeping this a total function for pathological inputs.
pub fn build_cost_field(grid: &TileGrid, configs: &[RoomConfig]) -> CostField {
    let size = grid.size();
    let mut costs = vec![0.0_f32; size * size];

    for ((x, y), tile) in grid.iter_cells() {
        let cost = if tile == FLOOR {
            FLOOR_MOVE_COST
        } else if tile == DOOR {
            DOOR_MOVE_COST
        } else if tile == WALL {
            f32::INFINITY
        } else {
            configs
                .iter()
                .find(|c| c.type_code == tile)
                .map(|c| c.movement_cost)
                .unwrap_or(FLOOR_MOVE_COST)
        };
        costs[y * size + x] = cost;
    }

    CostField { size, costs }
}
