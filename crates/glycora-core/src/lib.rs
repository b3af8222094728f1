//! glycora-core
//!
//! Pure domain types and the serialization vocabulary of the Glycora
//! screening service. No rule logic — this is the shared vocabulary between
//! the screening core and the model-serving layer that embeds it.

pub mod error;
pub mod models;
