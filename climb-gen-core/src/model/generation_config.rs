use serde::{Deserialize, Serialize};

use crate::error::{ClimbGenError, Result};

/// Physical limits applied while sampling and validating a route.
///
/// All distances are in board units.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct ClimbConstraints {
	/// Largest downward step allowed for a traverse.
	pub max_traverse_drop: i32,
	/// Highest `y` a foothold may sit at.
	pub foothold_max_y: i32,
	/// Largest spacing between the two holds of a start or finish pair.
	pub max_wingspan: f64,
	/// Shortest move between consecutive holds.
	pub min_reach: f64,
	/// Longest move between consecutive holds.
	pub max_reach: f64,
	/// Largest vertical change in one move.
	pub max_vertical_change: i32,
	/// Maximum number of start holds, and of finish holds.
	pub max_paired_holds: usize,
}

impl Default for ClimbConstraints {
	fn default() -> Self {
		Self {
			max_traverse_drop: 8,
			foothold_max_y: 32,
			max_wingspan: 50.0,
			min_reach: 8.0,
			max_reach: 50.0,
			max_vertical_change: 40,
			max_paired_holds: 2,
		}
	}
}

impl ClimbConstraints {
	/// Checks that every limit is non-negative and the reach range is ordered.
	pub fn validate(&self) -> Result<()> {
		if self.max_traverse_drop < 0 {
			return Err(ClimbGenError::config(format!(
				"max_traverse_drop must not be negative, got {}",
				self.max_traverse_drop
			)));
		}
		if self.max_vertical_change < 0 {
			return Err(ClimbGenError::config(format!(
				"max_vertical_change must not be negative, got {}",
				self.max_vertical_change
			)));
		}
		// Written as negated comparisons so NaN is rejected too.
		if !(self.max_wingspan >= 0.0) {
			return Err(ClimbGenError::config(format!("max_wingspan must not be negative, got {}", self.max_wingspan)));
		}
		if !(self.min_reach >= 0.0) {
			return Err(ClimbGenError::config(format!("min_reach must not be negative, got {}", self.min_reach)));
		}
		if !(self.min_reach <= self.max_reach) {
			return Err(ClimbGenError::config(format!(
				"min_reach ({}) exceeds max_reach ({})",
				self.min_reach, self.max_reach
			)));
		}
		if self.max_paired_holds == 0 {
			return Err(ClimbGenError::config("max_paired_holds must be at least 1"));
		}
		Ok(())
	}
}

/// Parameters of a single route generation.
///
/// # Invariants (checked by `validate`)
/// - `1 <= min_moves <= max_moves`
/// - `max_attempts >= 1`
/// - `extra_start_probability` is within `[0.0, 1.0]`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
	/// Shortest accepted route, in holds.
	pub min_moves: usize,
	/// Longest accepted route, in holds.
	pub max_moves: usize,
	/// Number of independent attempts before giving up.
	pub max_attempts: usize,
	/// Chance of trying a second start hold right after the first.
	extra_start_probability: f64,
	pub constraints: ClimbConstraints,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			min_moves: 8,
			max_moves: 20,
			max_attempts: 100,
			extra_start_probability: 0.3,
			constraints: ClimbConstraints::default(),
		}
	}
}

impl GenerationConfig {
	/// Creates a configuration with the given move bounds and default everything else.
	pub fn with_moves(min_moves: usize, max_moves: usize) -> Self {
		Self { min_moves, max_moves, ..Self::default() }
	}

	pub fn extra_start_probability(&self) -> f64 {
		self.extra_start_probability
	}

	/// Sets the second-start probability (0.0..=1.0).
	///
	/// # Errors
	/// Returns an error if the value is outside the valid range.
	pub fn set_extra_start_probability(&mut self, probability: f64) -> Result<()> {
		if !(0.0..=1.0).contains(&probability) {
			return Err(ClimbGenError::config(format!(
				"extra start probability must be between 0.0 and 1.0, got {}",
				probability
			)));
		}
		self.extra_start_probability = probability;
		Ok(())
	}

	/// Checks the configuration invariants.
	pub fn validate(&self) -> Result<()> {
		if self.min_moves == 0 {
			return Err(ClimbGenError::config("min_moves must be at least 1"));
		}
		if self.min_moves > self.max_moves {
			return Err(ClimbGenError::config(format!(
				"min_moves ({}) exceeds max_moves ({})",
				self.min_moves, self.max_moves
			)));
		}
		if self.max_attempts == 0 {
			return Err(ClimbGenError::config("max_attempts must be at least 1"));
		}
		if !(0.0..=1.0).contains(&self.extra_start_probability) {
			return Err(ClimbGenError::config(format!(
				"extra start probability must be between 0.0 and 1.0, got {}",
				self.extra_start_probability
			)));
		}
		self.constraints.validate()
	}
}
