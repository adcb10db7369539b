//! Core types for pinrex
//!
//! Domain types of the chemistry catalog and the search-key normalization
//! shared by every crate.

mod chemical;
mod constants;
mod env_config;
mod error;
mod lab;
mod monomer;
mod name;
mod polymer;
mod reaction;
mod search_name;
mod solvent;
mod structure;
mod toxicity;

pub use chemical::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use lab::*;
pub use monomer::*;
pub use name::*;
pub use polymer::*;
pub use reaction::*;
pub use search_name::*;
pub use solvent::*;
pub use structure::{Smarts, SmartsInput};
pub use toxicity::*;
