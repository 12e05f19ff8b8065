//! Top-level module for the route generation system.
//!
//! This module provides the constrained Markov-chain route generator, including:
//! - Hold and role types (`Hold`, `Role`)
//! - Normalized frequency tables (`WeightedDistribution`)
//! - Per-difficulty transition statistics (`TransitionModel`, `ClimbModel`)
//! - Constraint-aware sampling (`ConstrainedSampler`)
//! - Generation parameters (`GenerationConfig`, `ClimbConstraints`)
//! - The route assembler (`Generator`)

/// Route assembler: attempt loop, second-start handling and batch generation.
pub mod generator;

/// Set of per-difficulty transition models trained from a corpus.
pub mod climb_model;

/// First-order transition statistics for one difficulty.
pub mod transition_model;

/// Normalized frequency table with predicate-filtered roulette sampling.
pub mod distribution;

/// Hold coordinates, roles and role tallies.
pub mod hold;

/// Filters applied to every sampled hold.
pub mod sampler;

/// Generation parameters and physical constraints.
pub mod generation_config;

/// Generated route type.
pub mod route;
