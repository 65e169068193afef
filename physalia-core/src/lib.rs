//! Shared primitives and utilities for the Physalia algorithm crates.
//!
//! `physalia-core` provides the foundation that all other Physalia crates
//! build on:
//!
//! - **Error types** — [`PhysaliaError`] and [`Result`] for structured error handling
//! - **Deterministic RNG** — [`Xorshift64`] for reproducible randomized algorithms
//! - **Keying** — the [`Ranked`] trait for order-by-key selection
//! - **Growth policy** — amortized capacity sizing for push-heavy buffers
//! - **Bit utilities** — [`bits::is_power_of_two`] and friends

pub mod bits;
pub mod error;
pub mod growth;
pub mod rank;
pub mod rng;

pub use error::{PhysaliaError, Result};
pub use rank::Ranked;
pub use rng::Xorshift64;
