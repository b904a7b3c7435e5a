// rucensor-core/src/engines/mod.rs
//! Concrete implementations of the `ProfanityFilter` trait.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod ru_censor;
