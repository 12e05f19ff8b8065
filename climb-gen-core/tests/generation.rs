mod common;

use climb_gen_core::corpus::TrainingRecord;
use climb_gen_core::{ClimbGenError, ClimbModel, GenerationConfig, Generator, Hold, Role};
use common::{assert_valid_route, corpus_strategy, crossing_ladders};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn ladder_generator() -> Generator {
	let model = ClimbModel::from_records(&crossing_ladders("V4"));
	Generator::new(model, GenerationConfig::default()).unwrap()
}

#[test]
fn crossing_ladders_always_yield_valid_routes() {
	let generator = ladder_generator();
	let corpus = crossing_ladders("V4");
	let known: Vec<Hold> = corpus.iter().flat_map(|r| r.climb.iter().copied()).collect();

	for seed in 0..50 {
		let route = generator.generate_seeded("V4", seed).unwrap().expect("ladders cannot dead-end");
		assert_valid_route(&route, 8, 20);
		assert_eq!(route.len(), 10);
		assert!(route.holds().iter().all(|h| known.contains(h)));
		// Every route passes through the shared crossing hold.
		assert_eq!(route.holds()[4], Hold::new(0, 52, Role::Intermediate));
	}
}

#[test]
fn crossing_ladders_mix_prefixes_and_suffixes() {
	let generator = ladder_generator();
	let mut mixed = false;
	for seed in 0..200 {
		let route = generator.generate_seeded("V4", seed).unwrap().unwrap();
		let first = route.holds()[0].x;
		let last = route.holds()[9].x;
		// Ladder r starts at x = -8(r-2) and finishes at x = 10(r-2).
		if -10 * first != 8 * last {
			mixed = true;
			break;
		}
	}
	assert!(mixed);
}

#[test]
fn same_seed_is_byte_identical() {
	let generator = ladder_generator();
	for seed in [0, 7, 12345] {
		let a = serde_json::to_string(&generator.generate_seeded("V4", seed).unwrap()).unwrap();
		let b = serde_json::to_string(&generator.generate_seeded("V4", seed).unwrap()).unwrap();
		assert_eq!(a, b);
	}

	let first = generator.generate_batch("V4", 16, 99).unwrap();
	let second = generator.generate_batch("V4", 16, 99).unwrap();
	assert_eq!(first, second);
}

#[test]
fn batch_matches_individual_seeds() {
	let generator = ladder_generator();
	let batch = generator.generate_batch("V4", 8, 40).unwrap();
	for generated in batch {
		assert_eq!(generated.route, generator.generate_seeded("V4", 40 + generated.index as u64).unwrap());
	}
}

#[test]
fn scenario_three_hold_route() {
	let route = vec![Hold::new(0, 0, Role::Start), Hold::new(8, 10, Role::Intermediate), Hold::new(0, 40, Role::Finish)];
	let model = ClimbModel::from_records(&[TrainingRecord::new("V0", route.clone())]);
	let generator = Generator::new(model, GenerationConfig::with_moves(1, 3)).unwrap();

	for seed in 0..30 {
		let generated = generator.generate_seeded("V0", seed).unwrap().unwrap();
		assert_eq!(generated.holds(), route.as_slice());
	}
}

#[test]
fn start_only_corpus_always_exhausts() {
	let corpus = vec![
		TrainingRecord::new("V2", vec![Hold::new(0, 4, Role::Start)]),
		TrainingRecord::new("V2", vec![Hold::new(0, 60, Role::Finish)]),
	];
	let model = ClimbModel::from_records(&corpus);
	let mut config = GenerationConfig::with_moves(2, 20);
	config.max_attempts = 25;
	let generator = Generator::new(model, config).unwrap();

	let mut rng = StdRng::seed_from_u64(5);
	for _ in 0..10 {
		assert_eq!(generator.generate("V2", &mut rng).unwrap(), None);
	}
}

#[test]
fn unknown_difficulty_is_a_configuration_error() {
	let generator = ladder_generator();
	let mut rng = StdRng::seed_from_u64(0);
	assert!(matches!(generator.generate("V0", &mut rng), Err(ClimbGenError::UnknownDifficulty(d)) if d == "V0"));
}

#[test]
fn explicit_config_overrides_the_default() {
	let generator = ladder_generator();
	let mut rng = StdRng::seed_from_u64(3);
	// Ladders are ten holds long, so a five-hold ceiling can never be met.
	let config = GenerationConfig::with_moves(2, 5);
	assert_eq!(generator.generate_with("V4", &config, &mut rng).unwrap(), None);
	assert!(generator.generate_with("V4", &GenerationConfig::with_moves(6, 5), &mut rng).is_err());
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn generated_routes_satisfy_constraints(corpus in corpus_strategy(), seed in any::<u64>()) {
		let model = ClimbModel::from_records(&corpus);
		let mut config = GenerationConfig::with_moves(2, 8);
		config.max_attempts = 30;
		config.set_extra_start_probability(0.5).unwrap();
		let generator = Generator::new(model, config).unwrap();

		for difficulty in ["V0", "V1"] {
			if generator.model().grade(difficulty).is_err() {
				continue;
			}
			if let Some(route) = generator.generate_seeded(difficulty, seed).unwrap() {
				assert_valid_route(&route, 2, 8);
			}
		}
	}
}
