//! Data model crate: pure, serde-serializable records shared by the
//! storage, server and client layers. No I/O here.

pub mod entreprise;
pub mod errors;
pub mod options;
