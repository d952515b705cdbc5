//! Async client for a smart-home runtime's HTTP API.
//!
//! This crate is the only place in the workspace that talks to the network.
//! It exposes exactly the surface the vehicle widget consumes:
//!
//! - **Registry queries** — [`RuntimeClient::list_registry_entries`] and
//!   [`RuntimeClient::get_registry_entry`], used once per widget attachment
//!   to map semantic roles onto concrete entity identifiers.
//! - **State reads** — [`RuntimeClient::list_states`] /
//!   [`RuntimeClient::get_state`], used to seed the widget's synchronous
//!   state store.
//! - **Event emission** — [`RuntimeClient::fire_event`], fire-and-forget
//!   notifications back to the host (detail-view requests, map popups).
//!
//! No retries are performed here; callers decide how to degrade.

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::RuntimeClient;
pub use error::Error;
pub use models::{RegistryEntry, RegistryEntryDetail, StatePayload};
pub use transport::TransportConfig;
