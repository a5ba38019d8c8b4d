//! Service layer: durable storage for the shared configuration lists and
//! the entreprise profile, on top of a generic JSON-document store.
//! - Separates persistence from the data definitions in `models`.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod file;
pub mod options;
pub mod storage;
