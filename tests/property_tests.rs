//! Property-based tests for the invariants spec.md calls out explicitly:
//! perturbation validity, Dijkstra's source-cost identity, and the
//! materializer's total-function guarantee on pathological inputs.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use floorplan_core::constants::MAP_SIZE;
use floorplan_core::{materialize, Door, Room};

fn arb_room() -> impl Strategy<Value = Room> {
    (0u8..20, 0u32..120, 0u32..120, 4u32..15, 4u32..15).prop_map(|(t, x, y, w, h)| {
        let mut room = Room::new(t, x, y, w, h);
        room.doors = [
            Door::new(true, 0, 0),
            Door::new(false, w, 0),
            Door::new(true, 0, h),
            Door::new(false, w, h),
        ];
        room
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn materializer_never_panics_on_arbitrary_room_lists(rooms in proptest::collection::vec(arb_room(), 0..12)) {
        let grid = materialize(MAP_SIZE, &rooms);
        prop_assert_eq!(grid.size(), MAP_SIZE);
    }

    #[test]
    fn every_cell_is_a_known_tile_code(rooms in proptest::collection::vec(arb_room(), 0..12)) {
        let grid = materialize(MAP_SIZE, &rooms);
        let known_room_types: std::collections::HashSet<u8> = rooms.iter().map(|r| r.type_code).collect();
        for &tile in grid.data() {
            let is_reserved = tile == floorplan_core::constants::FLOOR
                || tile == floorplan_core::constants::DOOR
                || tile == floorplan_core::constants::WALL;
            prop_assert!(is_reserved || known_room_types.contains(&tile));
        }
    }

    #[test]
    fn perturbation_always_yields_a_valid_room_list(
        seed in any::<u64>(),
        rooms in proptest::collection::vec(arb_room(), 1..8),
    ) {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let next = floorplan_core::perturb::perturb(&rooms, MAP_SIZE, &mut rng);

        prop_assert_eq!(next.len(), rooms.len());
        for room in &next {
            prop_assert!((4..=15).contains(&room.width));
            prop_assert!((4..=15).contains(&room.height));
            prop_assert!((room.x as usize) < MAP_SIZE);
            prop_assert!((room.y as usize) < MAP_SIZE);
            for door in &room.doors {
                prop_assert!(door.dx <= room.width);
                prop_assert!(door.dy <= room.height);
            }
        }
    }

    #[test]
    fn dijkstra_source_cost_matches_its_own_cost_field_entry(
        rooms in proptest::collection::vec(arb_room(), 0..6),
        sx in 0usize..20,
        sy in 0usize..20,
    ) {
        let grid = materialize(20, &rooms);
        let cost_field = floorplan_core::costfield::build_cost_field(&grid, &[]);
        let distances = floorplan_core::distance::distance_map(&cost_field, sx, sy);
        prop_assert_eq!(distances[sy * 20 + sx], cost_field.get(sx, sy));
    }
}
