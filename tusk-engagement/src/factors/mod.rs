//! Per-category factor sub-scorers.
//!
//! Each factor maps a slice of the raw session facts into a capped
//! integer sub-score. Clamping to the category cap happens after all
//! additive adjustments within that category, never before.

pub mod action;
pub mod interaction;
pub mod loyalty;
pub mod time;
