//! The estimation routines.
pub mod hit_or_miss;
