//! Parallel threshold-accepting search driver.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

use crate::constants::{
    COOLING_FACTOR, INITIAL_THRESHOLD, INNER_STEPS, MAP_SIZE, MAX_ROOM_SIZE, MIN_ROOM_SIZE,
    OUTER_ROUNDS, WORKERS,
};
use crate::error::{validate_configs, ConfigError};
use crate::evaluate::evaluate;
use crate::materialize::materialize;
use crate::perturb::perturb;
use crate::room::{Room, RoomConfig};
use crate::tile::TileGrid;

/// Tunables for a search run, defaulting to the reference constants.
/// Bundled so callers (and tests) can shrink rounds/workers without
/// touching the algorithm itself.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub map_size: usize,
    pub rounds: u32,
    pub workers: usize,
    pub inner_steps: u32,
    pub initial_threshold: f32,
    pub cooling_factor: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            map_size: MAP_SIZE,
            rounds: OUTER_ROUNDS,
            workers: WORKERS,
            inner_steps: INNER_STEPS,
            initial_threshold: INITIAL_THRESHOLD,
            cooling_factor: COOLING_FACTOR,
        }
    }
}

/// Invoked once per outer round so an out-of-scope UI collaborator can
/// subscribe to progress without the driver depending on any particular
/// I/O mechanism.
pub trait SearchObserver: Send + Sync {
    fn on_round(&self, round: u32, threshold: f32, score: f32);
}

/// An observer that does nothing; the default when the caller doesn't care.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_round(&self, _round: u32, _threshold: f32, _score: f32) {}
}

/// Seeds for each configured type, `count` rooms placed uniformly across
/// the grid with sizes uniform on `[MIN_ROOM_SIZE, MAX_ROOM_SIZE]` and all
/// four doors active at random positions within the rectangle.
pub fn generate_random_rooms(
    configs: &[RoomConfig],
    map_size: usize,
    rng: &mut impl Rng,
) -> Vec<Room> {
    let mut rooms = Vec::new();
    for config in configs {
        for _ in 0..config.count {
            let width = rng.gen_range(MIN_ROOM_SIZE..=MAX_ROOM_SIZE);
            let height = rng.gen_range(MIN_ROOM_SIZE..=MAX_ROOM_SIZE);
            let x = rng.gen_range(0..=map_size as u32);
            let y = rng.gen_range(0..=map_size as u32);

            let mut room = Room::new(config.type_code, x, y, width, height);
            for door in &mut room.doors {
                door.active = true;
                door.dx = rng.gen_range(0..=width);
                door.dy = rng.gen_range(0..=height);
            }
            rooms.push(room);
        }
    }
    rooms
}

/// Mixes the driver's root seed with a round index and a worker index into
/// a single stream seed, so worker RNG streams are distinct per round but
/// reproducible from the same root seed.
fn worker_seed(root_seed: u64, round: u32, worker: usize) -> u64 {
    let mut hasher = DefaultHasher::new();
    root_seed.hash(&mut hasher);
    round.hash(&mut hasher);
    worker.hash(&mut hasher);
    hasher.finish()
}

fn worker_round(
    rooms: &[Room],
    configs: &[RoomConfig],
    map_size: usize,
    inner_steps: u32,
    threshold: f32,
    mut score: f32,
    seed: u64,
) -> (Vec<Room>, f32) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut rooms = rooms.to_vec();

    for _ in 0..inner_steps {
        let k = rng.gen_range(1u32..=3);
        let mut candidate = rooms.clone();
        for _ in 0..k {
            candidate = perturb(&rooms, map_size, &mut rng);
        }

        let candidate_grid = materialize(map_size, &candidate);
        let new_score = evaluate(&candidate_grid, configs);

        if score - new_score < threshold {
            score = new_score;
            rooms = candidate;
        }
    }

    (rooms, score)
}

/// Runs the full parallel threshold-accepting search and returns the final
/// room list, its materialized grid, and its score.
///
/// `configs` is validated once up front — this is the crate's only
/// fallible entry point. Everything inside the loop is total.
pub fn optimize(
    configs: &[RoomConfig],
    config: &SearchConfig,
    seed: u64,
    observer: Option<&dyn SearchObserver>,
) -> Result<(Vec<Room>, TileGrid, f32), ConfigError> {
    validate_configs(configs)?;

    let mut root_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut current_rooms = generate_random_rooms(configs, config.map_size, &mut root_rng);
    let mut current_grid = materialize(config.map_size, &current_rooms);
    let mut current_score = evaluate(&current_grid, configs);
    let mut threshold = config.initial_threshold;

    for round in 0..config.rounds {
        if let Some(observer) = observer {
            observer.on_round(round, threshold, current_score);
        }
        tracing::debug!(round, threshold, current_score, "starting search round");

        let results: Vec<(Vec<Room>, f32)> = (0..config.workers)
            .into_par_iter()
            .map(|worker| {
                worker_round(
                    &current_rooms,
                    configs,
                    config.map_size,
                    config.inner_steps,
                    threshold,
                    current_score,
                    worker_seed(seed, round, worker),
                )
            })
            .collect();

        let mut best: Option<(Vec<Room>, f32)> = None;
        for (rooms, score) in results {
            let replace = match &best {
                None => true,
                Some((_, best_score)) => score > *best_score,
            };
            if replace {
                best = Some((rooms, score));
            }
        }
        let (rooms, score) = best.expect("workers is always > 0");

        current_rooms = rooms;
        current_score = score;
        threshold *= config.cooling_factor;

        tracing::info!(round, threshold, current_score, "round complete");
    }

    current_grid = materialize(config.map_size, &current_rooms);
    Ok((current_rooms, current_grid, current_score))
}
