#![allow(dead_code)]

use climb_gen_core::corpus::TrainingRecord;
use climb_gen_core::model::generation_config::ClimbConstraints;
use climb_gen_core::model::hold::RoleCounts;
use climb_gen_core::model::sampler::ConstrainedSampler;
use climb_gen_core::{Hold, Role, Route};
use proptest::prelude::*;

/// Five ten-hold ladders that all cross at (0, 52).
///
/// Every path through the resulting chain is a valid ten-hold route.
pub fn crossing_ladders(difficulty: &str) -> Vec<TrainingRecord> {
	(0..5)
		.map(|r: i32| {
			let climb = (0..10)
				.map(|i: i32| {
					let role = match i {
						0 => Role::Start,
						1 => Role::Foothold,
						9 => Role::Finish,
						_ => Role::Intermediate,
					};
					Hold::new((r - 2) * (i - 4) * 2, 4 + 12 * i, role)
				})
				.collect();
			TrainingRecord::new(difficulty, climb)
		})
		.collect()
}

pub fn role_strategy() -> impl Strategy<Value = Role> {
	prop_oneof![Just(Role::Start), Just(Role::Intermediate), Just(Role::Finish), Just(Role::Foothold)]
}

/// Holds on an 8-unit grid, small enough that routes share holds often.
pub fn hold_strategy() -> impl Strategy<Value = Hold> {
	(-4i32..=4, 0i32..=10, role_strategy()).prop_map(|(x, y, role)| Hold::new(x * 8, y * 8, role))
}

pub fn record_strategy() -> impl Strategy<Value = TrainingRecord> {
	(prop_oneof![Just("V0"), Just("V1")], prop::collection::vec(hold_strategy(), 1..12))
		.prop_map(|(difficulty, climb)| TrainingRecord::new(difficulty, climb))
}

pub fn corpus_strategy() -> impl Strategy<Value = Vec<TrainingRecord>> {
	prop::collection::vec(record_strategy(), 1..30)
}

/// Asserts every property a generated route must satisfy.
pub fn assert_valid_route(route: &Route, min_moves: usize, max_moves: usize) {
	let constraints = ClimbConstraints::default();
	let sampler = ConstrainedSampler::new(&constraints);
	let counts: RoleCounts = route.role_counts();

	assert!((min_moves..=max_moves).contains(&route.len()), "length {} out of bounds", route.len());
	assert!((1..=2).contains(&counts.get(Role::Start)), "start count {}", counts.get(Role::Start));
	assert!((1..=2).contains(&counts.get(Role::Finish)), "finish count {}", counts.get(Role::Finish));

	for pair in route.holds().windows(2) {
		assert!(sampler.is_valid_transition(&pair[0], &pair[1]), "unreachable move {:?} -> {:?}", pair[0], pair[1]);
	}
	for hold in route.holds() {
		if hold.role == Role::Foothold {
			assert!(hold.y <= 32, "foothold too high: {:?}", hold);
		}
	}
}
