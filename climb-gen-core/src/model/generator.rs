use std::path::Path;
use std::sync::mpsc;
use std::thread;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::climb_model::ClimbModel;
use super::generation_config::GenerationConfig;
use super::hold::{Hold, Role, RoleCounts};
use super::route::Route;
use super::sampler::ConstrainedSampler;
use super::transition_model::TransitionModel;
use crate::error::Result;

/// Progress of a single generation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AttemptState {
	Empty,
	HasStart,
	Building,
	Complete,
	Abandoned,
}

/// Everything owned by one attempt. Rebuilt from scratch for every attempt,
/// so nothing leaks from an abandoned route into the next one.
#[derive(Debug)]
struct Attempt {
	state: AttemptState,
	holds: Vec<Hold>,
	counts: RoleCounts,
}

impl Attempt {
	fn new() -> Self {
		Self { state: AttemptState::Empty, holds: Vec::new(), counts: RoleCounts::new() }
	}

	fn push(&mut self, hold: Hold) {
		self.holds.push(hold);
		self.counts.record(hold.role);
	}

	fn last(&self) -> Option<Hold> {
		self.holds.last().copied()
	}

	fn has_valid_roles(&self, config: &GenerationConfig) -> bool {
		let cap = config.constraints.max_paired_holds;
		(1..=cap).contains(&self.counts.get(Role::Start)) && (1..=cap).contains(&self.counts.get(Role::Finish))
	}

	/// Whether the route may stop growing after the latest append.
	fn can_stop(&self, config: &GenerationConfig) -> bool {
		let starts = self.counts.get(Role::Start);
		self.holds.len() >= config.min_moves
			&& (1..=config.constraints.max_paired_holds).contains(&starts)
			&& self.counts.get(Role::Finish) >= 1
	}

	fn is_complete(&self, config: &GenerationConfig) -> bool {
		(config.min_moves..=config.max_moves).contains(&self.holds.len()) && self.has_valid_roles(config)
	}
}

/// A route produced by batch generation, with the seed that reproduces it.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SeededRoute {
	pub index: usize,
	pub seed: u64,
	pub route: Option<Route>,
}

/// Generates climbing routes from a trained `ClimbModel`.
///
/// # Responsibilities
/// - Run independent attempts until one yields a valid route
/// - Keep every sampled hold within the climbing constraints
/// - Generate batches of reproducible routes in parallel
#[derive(Debug)]
pub struct Generator {
	model: ClimbModel,
	config: GenerationConfig,
}

impl Generator {
	/// Creates a generator over a trained model.
	///
	/// # Errors
	/// Returns a configuration error if `config` is invalid.
	pub fn new(model: ClimbModel, config: GenerationConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self { model, config })
	}

	/// Trains a model from a corpus file and wraps it in a generator.
	pub fn from_corpus<P: AsRef<Path>>(path: P, config: GenerationConfig) -> Result<Self> {
		Self::new(ClimbModel::from_json(path)?, config)
	}

	pub fn model(&self) -> &ClimbModel {
		&self.model
	}

	pub fn config(&self) -> &GenerationConfig {
		&self.config
	}

	/// Generates a route with the generator's configuration.
	///
	/// # Returns
	/// - `Ok(Some(route))` for the first attempt that produced a valid route
	/// - `Ok(None)` if every attempt failed
	///
	/// # Errors
	/// Returns `UnknownDifficulty` if the model has no data for `difficulty`.
	pub fn generate<R: Rng + ?Sized>(&self, difficulty: &str, rng: &mut R) -> Result<Option<Route>> {
		self.generate_with(difficulty, &self.config, rng)
	}

	/// Generates a route with an explicit configuration.
	pub fn generate_with<R: Rng + ?Sized>(
		&self,
		difficulty: &str,
		config: &GenerationConfig,
		rng: &mut R,
	) -> Result<Option<Route>> {
		config.validate()?;
		let grade = self.model.grade(difficulty)?;

		for attempt_number in 1..=config.max_attempts {
			let attempt = Self::run_attempt(grade, config, rng);
			if attempt.state == AttemptState::Complete {
				debug!(
					"{}: valid route of {} holds on attempt {}",
					difficulty,
					attempt.holds.len(),
					attempt_number
				);
				return Ok(Some(Route::new(attempt.holds)));
			}
			trace!("{}: attempt {} abandoned with {} holds", difficulty, attempt_number, attempt.holds.len());
		}

		info!("{}: no valid route after {} attempts", difficulty, config.max_attempts);
		Ok(None)
	}

	/// Generates a route from a fresh `StdRng` seeded with `seed`.
	pub fn generate_seeded(&self, difficulty: &str, seed: u64) -> Result<Option<Route>> {
		let mut rng = StdRng::seed_from_u64(seed);
		self.generate(difficulty, &mut rng)
	}

	/// One attempt: start hold, optional second start, then chain sampling.
	fn run_attempt<R: Rng + ?Sized>(grade: &TransitionModel, config: &GenerationConfig, rng: &mut R) -> Attempt {
		let sampler = ConstrainedSampler::new(&config.constraints);
		let mut attempt = Attempt::new();

		let Some(start) = sampler.sample(grade.start_distribution(), &attempt.holds, &attempt.counts, rng) else {
			trace!("no start hold satisfies the constraints");
			attempt.state = AttemptState::Abandoned;
			return attempt;
		};
		attempt.push(start);
		attempt.state = AttemptState::HasStart;

		if rng.random::<f64>() < config.extra_start_probability() {
			let second = grade
				.transitions_from(&start)
				.and_then(|dist| sampler.sample(dist, &attempt.holds, &attempt.counts, rng));
			// Only another start hold is kept; anything else is dropped, not reused.
			if let Some(second) = second.filter(|h| h.role == Role::Start && sampler.is_valid_transition(&start, h)) {
				attempt.push(second);
			}
		}

		attempt.state = AttemptState::Building;
		for _ in 1..config.max_moves {
			let Some(current) = attempt.last() else {
				break;
			};
			let Some(dist) = grade.transitions_from(&current) else {
				trace!("dead end: {:?} has no observed successor", current);
				break;
			};
			let Some(next) = sampler.sample(dist, &attempt.holds, &attempt.counts, rng) else {
				trace!("dead end: no successor of {:?} satisfies the constraints", current);
				break;
			};
			if !sampler.is_valid_transition(&current, &next) {
				trace!("unreachable move {:?} -> {:?}", current, next);
				break;
			}

			attempt.push(next);
			if attempt.can_stop(config) {
				break;
			}
		}

		attempt.state =
			if attempt.is_complete(config) { AttemptState::Complete } else { AttemptState::Abandoned };
		attempt
	}

	/// Generates `count` routes in parallel.
	///
	/// Route `i` is generated from a `StdRng` seeded with `base_seed + i`, so the
	/// output only depends on the model, the configuration and `base_seed`.
	/// Results are returned in index order.
	///
	/// # Errors
	/// Returns `UnknownDifficulty` before spawning any worker.
	pub fn generate_batch(&self, difficulty: &str, count: usize, base_seed: u64) -> Result<Vec<SeededRoute>> {
		self.model.grade(difficulty)?;
		if count == 0 {
			return Ok(Vec::new());
		}

		let workers = num_cpus::get().clamp(1, count);
		let chunk_size = count.div_ceil(workers);

		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			for chunk_start in (0..count).step_by(chunk_size) {
				let tx = tx.clone();
				let chunk_end = (chunk_start + chunk_size).min(count);

				scope.spawn(move || {
					for index in chunk_start..chunk_end {
						let seed = base_seed.wrapping_add(index as u64);
						let route = self.generate_seeded(difficulty, seed);
						// The receiver outlives the scope.
						let _ = tx.send((index, seed, route));
					}
				});
			}
		});
		drop(tx);

		let mut results = Vec::new();
		for (index, seed, route) in rx.iter() {
			results.push(SeededRoute { index, seed, route: route? });
		}
		results.sort_by_key(|r| r.index);

		let found = results.iter().filter(|r| r.route.is_some()).count();
		info!("{}: generated {} of {} routes on {} workers", difficulty, found, count, workers);
		Ok(results)
	}
}
