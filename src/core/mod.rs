//! Core animation model – sampling, smoothing, stage mapping and derivers.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Every function here is a pure computation over plain numbers, so the
//! whole pipeline is testable without a terminal.

pub mod cluster;
pub mod derive;
pub mod markers;
pub mod sampler;
pub mod segment;
pub mod smoother;
pub mod track;
