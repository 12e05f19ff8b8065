//! Climbing-route generation library.
//!
//! This crate learns, per difficulty grade, which holds start a route and
//! which hold tends to follow which, then samples new routes from those
//! statistics while enforcing reach, role and height constraints.
//!
//! It also provides the glue around the generator:
//! - Corpus loading with tolerant record parsing
//! - Corpus statistics
//! - SVG rendering of routes
//! - Decoding of placement-code strings
//!
//! No model state is persisted; routes and corpora are plain JSON files.

/// Core hold, distribution, model and generation logic.
pub mod model;

/// Training corpus records and loader.
pub mod corpus;

/// Error type shared by the crate.
pub mod error;

/// Summary statistics over a training corpus.
pub mod stats;

/// SVG rendering of a route on the board.
pub mod render;

/// Placement-code (`p<id>r<role>`) decoding.
pub mod frames;

/// File helpers (JSON output, derived output paths).
pub mod io;

pub use error::{ClimbGenError, Result};
pub use model::climb_model::ClimbModel;
pub use model::generation_config::{ClimbConstraints, GenerationConfig};
pub use model::generator::{Generator, SeededRoute};
pub use model::hold::{Hold, Role};
pub use model::route::Route;
