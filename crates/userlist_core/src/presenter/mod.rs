//! Presentation layer: bridges repository watches to a passive UI model.
//!
//! # Responsibility
//! - Convert push-style store watches into a last-value observable.
//! - Kick off the one-shot background seed at construction.

pub mod live;
pub mod user_list;
