//! Centralized tunables for the floor-plan optimizer core.
//!
//! Eliminates magic numbers duplicated across the materializer, evaluator,
//! and search driver. Per-component derived values (cost-field entries,
//! perturbation clamp ranges) stay inline where they're used.

// =====================================================
// Grid
// =====================================================

/// Side length of the (square) tile grid.
pub const MAP_SIZE: usize = 100;

/// Reserved tile code for traversable open space.
pub const FLOOR: u8 = 253;

/// Reserved tile code for a traversable, high-move-cost door cell.
pub const DOOR: u8 = 254;

/// Reserved tile code for an impassable cell.
pub const WALL: u8 = 255;

// =====================================================
// Random room generator (search initialization)
// =====================================================

/// Minimum width/height drawn for a freshly generated room.
pub const MIN_ROOM_SIZE: u32 = 4;

/// Maximum width/height drawn for a freshly generated room.
pub const MAX_ROOM_SIZE: u32 = 20;

// =====================================================
// Perturbation operator
// =====================================================

/// Lower clamp bound for room width/height after perturbation.
pub const MIN_ROOM_DIM: u32 = 4;

/// Upper clamp bound for room width/height after perturbation.
pub const MAX_ROOM_DIM: u32 = 15;

/// Standard deviation of the Gaussian step used by positional/dimensional nudges.
pub const PERTURB_STD_DEV: f32 = 3.0;

/// Draw threshold below which a perturbation step is a type-code swap
/// rather than a single-room adjustment.
pub const SWAP_PROBABILITY: f32 = 0.05;

// =====================================================
// Cost field
// =====================================================

/// Traversal cost of a `FLOOR` cell.
pub const FLOOR_MOVE_COST: f32 = 1.0;

/// Traversal cost of a `DOOR` cell (distinct from the evaluator's flat
/// per-door tile penalty below).
pub const DOOR_MOVE_COST: f32 = 25.0;

// =====================================================
// Evaluator
// =====================================================

/// Cell-count floor below which an extracted region is not scored as a room.
pub const TOO_SMALL_ROOM_SIZE: usize = 9;

/// Flat penalty applied to a too-small extracted region.
pub const TOO_SMALL_ROOM_PENALTY: f32 = -100.0;

/// Multiplier of `minimum_size` defining the top of the size-bonus band.
pub const ABOVE_MINIMUM_CAP: usize = 4;

/// Penalty applied when a room's size is below its configured minimum.
pub const UNDERSIZED_ROOM_PENALTY: f32 = -1000.0;

/// Penalty coefficient applied per unit of width/height mismatch.
pub const ASPECT_PENALTY_PER_TILE: f32 = -10.0;

/// Additional flat penalty when either dimension is thinner than 3 tiles.
pub const THIN_ROOM_PENALTY: f32 = -100.0;

/// Penalty applied when an adjacency-weighted target room is unreachable.
pub const UNREACHABLE_ADJACENCY_PENALTY: f32 = -500.0;

/// Penalty coefficient per room whose extracted count mismatches `RoomConfig::count`.
pub const COUNT_MISMATCH_PENALTY: f32 = -15_000.0;

/// Flat penalty per `WALL` tile in the materialized grid.
pub const WALL_TILE_PENALTY: f32 = -0.1;

/// Flat penalty per `DOOR` tile in the materialized grid (distinct from `DOOR_MOVE_COST`).
pub const DOOR_TILE_PENALTY: f32 = -1.0;

// =====================================================
// Search driver
// =====================================================

/// Number of outer cooling rounds the search driver runs.
pub const OUTER_ROUNDS: u32 = 500;

/// Number of independent worker replicas spawned per outer round.
pub const WORKERS: usize = 16;

/// Number of perturb/materialize/evaluate/accept steps run by each worker per round.
pub const INNER_STEPS: u32 = 1000;

/// Starting value of the threshold-acceptance cooling schedule.
pub const INITIAL_THRESHOLD: f32 = 10_000.0;

/// Multiplicative decay applied to the threshold once per outer round.
pub const COOLING_FACTOR: f32 = 0.9;
