//! Core business entities.

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
