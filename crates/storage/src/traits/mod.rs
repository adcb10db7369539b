//! Storage backend trait abstraction
//!
//! One async trait per catalog area, implemented by the SQLite and
//! PostgreSQL backends and by [`crate::StorageBackend`].

pub mod chemical;
pub mod lab;
pub mod monomer;
pub mod name;
pub mod polymer;
pub mod reaction;
pub mod solvent;
pub mod stats;
pub mod toxicity;

pub use chemical::ChemicalStore;
pub use lab::LabStore;
pub use monomer::MonomerStore;
pub use name::NameStore;
pub use polymer::PolymerStore;
pub use reaction::ReactionStore;
pub use solvent::SolventStore;
pub use stats::StatsStore;
pub use toxicity::ToxicityStore;
