//! Board state container.
//!
//! # Responsibility
//! - Own the canonical columns/tasks and all transient UI state.
//! - Route every mutation through the injected storage capability.
//!
//! # Invariants
//! - All mutations go through [`board_store::BoardStore`]; rendering reads
//!   derived views, never separate mutable copies.
//! - A failed persist never rolls back the in-memory effect.

pub mod board_store;
pub mod seed;
