//! Typed HTTP clients for the cabinet REST API, isolating transport
//! details from form/UI code. No caching on the options side; the
//! entreprise client owns an explicit in-memory cache of the singleton
//! record.

pub mod entreprise;
pub mod errors;
pub mod options;

pub use entreprise::EntrepriseClient;
pub use errors::ClientError;
pub use options::OptionsClient;
