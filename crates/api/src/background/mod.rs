//! Background components owned by the API server.

pub mod autosave;

pub use autosave::{PotentialAutosaver, PotentialWriter, SqlxPotentialWriter};
