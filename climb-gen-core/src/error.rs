use thiserror::Error;

/// Errors surfaced by training, generation and the file helpers.
///
/// Exhaustion (no valid route within the attempt budget) is not an error:
/// generation reports it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum ClimbGenError {
	/// The requested difficulty has no trained distributions.
	#[error("no training data for difficulty {0}")]
	UnknownDifficulty(String),

	/// Generation parameters or constraints are out of range.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	/// The corpus file is not a list of training records.
	#[error("malformed corpus: {0}")]
	MalformedCorpus(String),

	/// A placement-code string does not follow the `p<id>r<role>` grammar.
	#[error("malformed frames string: {0:?}")]
	MalformedFrames(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

impl ClimbGenError {
	/// Creates a configuration error.
	pub fn config(message: impl Into<String>) -> Self {
		ClimbGenError::InvalidConfig(message.into())
	}
}

pub type Result<T> = std::result::Result<T, ClimbGenError>;
