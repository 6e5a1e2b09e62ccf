//! Shake-driven motion simulation.
//!
//! Nothing in this module depends on any TUI or rendering crate.  Time is
//! always passed in as an [`std::time::Instant`], so every step can be driven
//! deterministically from tests.

pub mod drive;
pub mod integrator;
pub mod motion;
pub mod projector;
pub mod sampler;
pub mod timing;
