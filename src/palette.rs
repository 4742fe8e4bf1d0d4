//! Tile code → RGB palette, and a pure render function over a tile grid.
//!
//! Grounded on `original_source/src/map.cpp`'s `to_bitmap` and
//! `config.cpp`'s `config_to_color_map`: writing pixels to a file remains
//! the rendering collaborator's job, so this module stops at producing an
//! in-memory pixel buffer.

use std::collections::HashMap;

use crate::constants::{DOOR, FLOOR, WALL};
use crate::room::RoomConfig;
use crate::tile::TileGrid;

/// Maps tile codes to an RGB triple. Reserved codes get fixed colors;
/// room-type codes take their color from `RoomConfig::color`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: HashMap<u8, [u8; 3]>,
}

impl Palette {
    pub fn from_configs(configs: &[RoomConfig]) -> Self {
        let mut colors = HashMap::new();
        colors.insert(FLOOR, [255, 255, 255]);
        colors.insert(DOOR, [127, 127, 127]);
        colors.insert(WALL, [0, 0, 0]);
        for config in configs {
            colors.insert(config.type_code, config.color);
        }
        Self { colors }
    }

    /// Looks up a tile's color, falling back to black for an unconfigured
    /// room-type code rather than panicking — the renderer still needs
    /// *some* pixel for a candidate whose config entry hasn't been resolved.
    pub fn color_of(&self, tile: u8) -> [u8; 3] {
        self.colors.get(&tile).copied().unwrap_or([0, 0, 0])
    }
}

/// Walks `grid` row-major and looks up each tile's color in `palette`.
pub fn render_rgb(grid: &TileGrid, palette: &Palette) -> Vec<[u8; 3]> {
    grid.data().iter().map(|&tile| palette.color_of(tile)).collect()
}
