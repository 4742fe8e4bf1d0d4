//! Floor-plan optimizer core.
//!
//! A stochastic floor-plan optimizer: given a catalogue of room types
//! (counts, size expectations, movement costs, pairwise adjacency
//! preferences), synthesizes a tile map arranging those rooms on a
//! fixed-size grid and iteratively improves the arrangement under a
//! scalar quality score via a parallel threshold-accepting search.
//!
//! The three tightly-coupled stages are map materialization
//! ([`materialize`]), evaluation ([`evaluate`], built on [`extract`],
//! [`costfield`], and [`distance`]), and the parallel search driver
//! ([`search`]). Configuration ingestion, bitmap file I/O, and CLI
//! dispatch are external collaborators, not part of this crate.

pub mod constants;
pub mod costfield;
pub mod distance;
pub mod error;
pub mod evaluate;
pub mod extract;
pub mod logging;
pub mod materialize;
pub mod palette;
pub mod perturb;
pub mod room;
pub mod search;
pub mod tile;

pub use error::ConfigError;
pub use evaluate::evaluate as evaluate_map;
pub use extract::{extract_rooms, ExtractedRoom};
pub use materialize::materialize;
pub use palette::{render_rgb, Palette};
pub use room::{Door, Room, RoomConfig};
pub use search::{optimize, NoopObserver, SearchConfig, SearchObserver};
pub use tile::TileGrid;
