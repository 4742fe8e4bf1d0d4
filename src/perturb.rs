//! Perturbation operator: produces a neighbor room list from a current one.
//!
//! The move-type switch is a closed, tagged choice — implemented as an
//! integer-indexed match rather than a trait object, per the reference
//! design's preference for a discriminated enum over open polymorphism here.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::constants::{MAX_ROOM_DIM, MIN_ROOM_DIM, PERTURB_STD_DEV, SWAP_PROBABILITY};
use crate::room::Room;

fn gaussian_step(rng: &mut impl Rng) -> i32 {
    let normal = Normal::new(0.0_f32, PERTURB_STD_DEV).expect("fixed, valid std-dev");
    normal.sample(rng).round() as i32
}

fn clamp_i32(value: i32, min: i32, max: i32) -> i32 {
    value.clamp(min, max)
}

/// Clones `rooms` and applies exactly one mutation, chosen by a uniform
/// draw: a 5% chance of a type-code swap between two rooms, otherwise a
/// single-room adjustment (one of six equally-likely sub-moves).
pub fn perturb(rooms: &[Room], map_size: usize, rng: &mut impl Rng) -> Vec<Room> {
    let mut rooms = rooms.to_vec();
    if rooms.is_empty() {
        return rooms;
    }

    if rng.gen::<f32>() < SWAP_PROBABILITY {
        swap_type_codes(&mut rooms, rng);
    } else {
        adjust_single_room(&mut rooms, map_size, rng);
    }

    rooms
}

fn swap_type_codes(rooms: &mut [Room], rng: &mut impl Rng) {
    let len = rooms.len();
    let i = rng.gen_range(0..len);
    let mut j = rng.gen_range(0..len);
    if j == i {
        j = if i + 1 < len { i + 1 } else { i.saturating_sub(1) };
    }
    let tmp = rooms[i].type_code;
    rooms[i].type_code = rooms[j].type_code;
    rooms[j].type_code = tmp;
}

fn adjust_single_room(rooms: &mut [Room], map_size: usize, rng: &mut impl Rng) {
    let idx = rng.gen_range(0..rooms.len());
    let room = &mut rooms[idx];
    let max_coord = map_size.saturating_sub(1) as i32;

    match rng.gen_range(0u32..6) {
        0 => {
            let delta = gaussian_step(rng);
            room.x = clamp_i32(room.x as i32 + delta, 0, max_coord) as u32;
        }
        1 => {
            let delta = gaussian_step(rng);
            room.y = clamp_i32(room.y as i32 + delta, 0, max_coord) as u32;
        }
        2 => {
            let delta = gaussian_step(rng);
            let old_width = room.width;
            for door in &mut room.doors {
                if door.dx == old_width {
                    door.dx =
                        clamp_i32(door.dx as i32 + delta - 1, MIN_ROOM_DIM as i32, MAX_ROOM_DIM as i32 - 1)
                            as u32;
                }
            }
            room.width = clamp_i32(room.width as i32 + delta, MIN_ROOM_DIM as i32, MAX_ROOM_DIM as i32) as u32;
        }
        3 => {
            let delta = gaussian_step(rng);
            let old_height = room.height;
            for door in &mut room.doors {
                if door.dy == old_height {
                    door.dy =
                        clamp_i32(door.dy as i32 + delta - 1, MIN_ROOM_DIM as i32, MAX_ROOM_DIM as i32 - 1)
                            as u32;
                }
            }
            room.height =
                clamp_i32(room.height as i32 + delta, MIN_ROOM_DIM as i32, MAX_ROOM_DIM as i32) as u32;
        }
        4 => {
            let slot = rng.gen_range(0..4);
            room.doors[slot].active = !room.doors[slot].active;
        }
        _ => {
            let slot = rng.gen_range(0..4);
            let delta = gaussian_step(rng);
            if rng.gen_bool(0.5) {
                let door = &mut room.doors[slot];
                door.dx = clamp_i32(door.dx as i32 + delta, 0, room.width as i32) as u32;
            } else {
                let door = &mut room.doors[slot];
                door.dy = clamp_i32(door.dy as i32 + delta, 0, room.height as i32) as u32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAP_SIZE;
    use crate::room::Room;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn sample_rooms() -> Vec<Room> {
        vec![Room::new(0, 10, 10, 6, 6), Room::new(1, 50, 50, 8, 8)]
    }

    #[test]
    fn perturbing_empty_list_is_a_no_op() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        assert!(perturb(&[], MAP_SIZE, &mut rng).is_empty());
    }

    #[test]
    fn perturbation_preserves_dimension_and_position_bounds() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut rooms = sample_rooms();
        for _ in 0..500 {
            rooms = perturb(&rooms, MAP_SIZE, &mut rng);
            for room in &rooms {
                assert!((4..=15).contains(&room.width));
                assert!((4..=15).contains(&room.height));
                assert!((room.x as usize) < MAP_SIZE);
                assert!((room.y as usize) < MAP_SIZE);
                for door in &room.doors {
                    assert!(door.dx <= room.width);
                    assert!(door.dy <= room.height);
                }
            }
        }
    }

    #[test]
    fn perturbation_never_changes_room_count() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let rooms = sample_rooms();
        let next = perturb(&rooms, MAP_SIZE, &mut rng);
        assert_eq!(next.len(), rooms.len());
    }
}
