//! Training corpus records and their JSON loader.
//!
//! The corpus is a JSON list of `{ "difficulty": "V3", "climb": [{x, y, role}, ...] }`
//! objects, as produced by the extraction pipeline. Records that cannot be
//! used are skipped with a warning; only a file that is not a list at all is
//! an error.

use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ClimbGenError, Result};
use crate::io;
use crate::model::hold::Hold;

/// One labeled route of the training corpus.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrainingRecord {
	pub difficulty: String,
	pub climb: Vec<Hold>,
}

impl TrainingRecord {
	pub fn new(difficulty: impl Into<String>, climb: Vec<Hold>) -> Self {
		Self { difficulty: difficulty.into(), climb }
	}
}

/// Parses a corpus from JSON text.
///
/// # Errors
/// Returns an error if the text is not valid JSON or not a list.
pub fn parse_corpus(text: &str) -> Result<Vec<TrainingRecord>> {
	let value: serde_json::Value = serde_json::from_str(text)?;
	let serde_json::Value::Array(items) = value else {
		return Err(ClimbGenError::MalformedCorpus("expected a list of climbs".to_owned()));
	};

	let total = items.len();
	let mut records = Vec::with_capacity(total);
	for (i, item) in items.into_iter().enumerate() {
		match serde_json::from_value::<TrainingRecord>(item) {
			Ok(record) if record.climb.is_empty() => {
				warn!("Skipping corpus record {}: climb has no holds", i);
			}
			Ok(record) => records.push(record),
			Err(e) => warn!("Skipping corpus record {}: {}", i, e),
		}
	}

	if records.len() < total {
		info!("Loaded {} of {} corpus records", records.len(), total);
	}
	Ok(records)
}

/// Reads and parses a corpus file.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingRecord>> {
	let text = io::read_file(path)?;
	parse_corpus(&text)
}
