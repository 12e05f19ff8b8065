use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, info};

use super::hold::Hold;
use super::transition_model::TransitionModel;
use crate::corpus::{TrainingRecord, load_corpus};
use crate::error::{ClimbGenError, Result};

/// The set of per-difficulty transition models learned from a corpus.
///
/// This struct manages:
/// - `grades`: one `TransitionModel` per difficulty label, in label order
///
/// Built once from the training corpus, then only read by the generator.
#[derive(Clone, Debug, Default)]
pub struct ClimbModel {
	grades: BTreeMap<String, TransitionModel>,
}

impl ClimbModel {
	pub fn new() -> Self {
		Self::default()
	}

	/// Trains a model from a list of corpus records, in order.
	pub fn from_records(records: &[TrainingRecord]) -> Self {
		let mut model = Self::new();
		model.train(records);
		model
	}

	/// Loads a corpus file and trains a model from it.
	///
	/// # Errors
	/// Returns an error if the file cannot be read or is not a list of records.
	pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
		let records = load_corpus(&path)?;
		info!("Training on {} climbs from {}", records.len(), path.as_ref().display());
		Ok(Self::from_records(&records))
	}

	/// Adds every record to the model, one route at a time.
	pub fn train(&mut self, records: &[TrainingRecord]) {
		for record in records {
			self.observe(&record.difficulty, &record.climb);
		}
		for (difficulty, grade) in &self.grades {
			debug!(
				"{}: {} routes, {} start holds, {} holds with successors",
				difficulty,
				grade.route_count(),
				grade.start_distribution().len(),
				grade.transition_count()
			);
		}
	}

	/// Adds one route under `difficulty`.
	///
	/// An empty route is ignored and does not register the difficulty.
	pub fn observe(&mut self, difficulty: &str, route: &[Hold]) {
		if route.is_empty() {
			return;
		}
		self.grades.entry(difficulty.to_owned()).or_default().observe(route);
	}

	/// Returns the model trained for `difficulty`.
	///
	/// # Errors
	/// Returns `UnknownDifficulty` if no route of that difficulty was observed.
	pub fn grade(&self, difficulty: &str) -> Result<&TransitionModel> {
		self.grades
			.get(difficulty)
			.ok_or_else(|| ClimbGenError::UnknownDifficulty(difficulty.to_owned()))
	}

	/// Trained difficulty labels, in label order.
	pub fn difficulties(&self) -> impl Iterator<Item = &str> {
		self.grades.keys().map(String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.grades.is_empty()
	}
}
