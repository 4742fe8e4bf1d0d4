//! Room and room-type-configuration data model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single door slot on a room's rectangle boundary.
///
/// `(dx, dy)` is a position within the rectangle's local frame, i.e.
/// relative to `(room.x, room.y)`, not absolute grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub active: bool,
    pub dx: u32,
    pub dy: u32,
}

impl Door {
    pub fn new(active: bool, dx: u32, dy: u32) -> Self {
        Self { active, dx, dy }
    }
}

/// A materialization input element: a rectangle with a type and up to four doors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub type_code: u8,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub doors: [Door; 4],
    pub attributes: Vec<String>,
}

impl Room {
    pub fn new(type_code: u8, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            type_code,
            x,
            y,
            width,
            height,
            doors: [
                Door::new(false, 0, 0),
                Door::new(false, 0, 0),
                Door::new(false, 0, 0),
                Door::new(false, 0, 0),
            ],
            attributes: Vec::new(),
        }
    }
}

/// A configured room type: counts, size expectations, movement cost, and
/// adjacency preferences. The input to the whole core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    pub name: String,
    pub type_code: u8,
    pub count: u32,
    pub minimum_size: usize,
    pub size_scaling: f32,
    pub movement_cost: f32,
    pub color: [u8; 3],
    pub attributes: Vec<String>,
    /// Sparse map from another type's index to a non-negative adjacency
    /// weight: higher means a shorter desired path is worth more.
    pub weights: HashMap<u8, f32>,
}

impl RoomConfig {
    pub fn new(name: impl Into<String>, type_code: u8, count: u32) -> Self {
        Self {
            name: name.into(),
            type_code,
            count,
            minimum_size: 9,
            size_scaling: 1.0,
            movement_cost: 1.0,
            color: [128, 128, 128],
            attributes: Vec::new(),
            weights: HashMap::new(),
        }
    }
}
