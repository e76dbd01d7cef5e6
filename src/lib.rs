//! Manila share provisioning options
//!
//! Decodes the flat string parameter map of a storage-provisioning request
//! into the typed option groups needed to provision an OpenStack Manila
//! share. Which parameters are required depends on two values decoded from
//! the request itself — the share type (protocol profile) and the backend —
//! so the groups decode in a fixed order:
//!
//! ```text
//! defaults → CommonOptions → ProtocolOptions → BackendOptions
//!                 │                                   │
//!                 └── type/backend discriminators ────┘
//! ```
//!
//! Every key must be consumed by exactly one group; leftovers fail the whole
//! request. Assembly finishes by deriving the share name from the claim uid,
//! picking one availability zone deterministically from the declared set, and
//! resolving OpenStack credentials from the referenced secret.
//!
//! # Modules
//!
//! - [`options`] - Option groups, constraint tables, decoder and assembler
//! - [`secrets`] - Credential resolution port and the Kubernetes adapter
//! - [`zones`] - Availability zone parsing and deterministic selection
//! - [`error`] - Error types

pub mod error;
pub mod options;
pub mod secrets;
pub mod zones;

// Re-export commonly used types
pub use error::{Error, Result};
pub use options::{
    BackendOptions, ClaimIdentity, CommonOptions, OpenStackOptions, ProtocolOptions, ShareOptions,
};
pub use secrets::{KubernetesSecretResolver, SecretReference, SecretResolver};
