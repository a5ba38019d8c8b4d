pub mod entreprise_store;
pub mod options_store;
