//! Row structs for the project aggregate and lookup tables.
//!
//! Each row derives `FromRow` and converts into the matching
//! `agency_core::projects::model` type.

pub mod lookup;
pub mod project;
