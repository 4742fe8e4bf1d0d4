use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use floorplan_core::constants::MAP_SIZE;
use floorplan_core::costfield::build_cost_field;
use floorplan_core::distance::distance_map;
use floorplan_core::evaluate::evaluate;
use floorplan_core::extract::extract_rooms;
use floorplan_core::search::generate_random_rooms;
use floorplan_core::{materialize, RoomConfig};

fn sample_configs() -> Vec<RoomConfig> {
    let mut kitchen = RoomConfig::new("kitchen", 0, 4);
    kitchen.minimum_size = 16;
    kitchen.weights.insert(1, 2.0);

    let mut bedroom = RoomConfig::new("bedroom", 1, 8);
    bedroom.minimum_size = 25;
    bedroom.weights.insert(0, 0.5);

    vec![kitchen, bedroom]
}

fn bench_materialize(c: &mut Criterion) {
    let configs = sample_configs();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    let rooms = generate_random_rooms(&configs, MAP_SIZE, &mut rng);

    c.bench_function("materialize_100x100", |b| {
        b.iter(|| materialize(MAP_SIZE, black_box(&rooms)))
    });
}

fn bench_extract_and_evaluate(c: &mut Criterion) {
    let configs = sample_configs();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
    let rooms = generate_random_rooms(&configs, MAP_SIZE, &mut rng);
    let grid = materialize(MAP_SIZE, &rooms);

    c.bench_function("extract_rooms_100x100", |b| {
        b.iter(|| extract_rooms(black_box(&grid)))
    });

    c.bench_function("evaluate_100x100", |b| {
        b.iter(|| evaluate(black_box(&grid), &configs))
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let configs = sample_configs();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
    let rooms = generate_random_rooms(&configs, MAP_SIZE, &mut rng);
    let grid = materialize(MAP_SIZE, &rooms);
    let cost_field = build_cost_field(&grid, &configs);

    c.bench_function("dijkstra_from_origin_100x100", |b| {
        b.iter(|| distance_map(black_box(&cost_field), 0, 0))
    });
}

criterion_group!(
    benches,
    bench_materialize,
    bench_extract_and_evaluate,
    bench_dijkstra
);
criterion_main!(benches);
