//! Credential secret resolution
//!
//! The assembler only knows a name/namespace pair; fetching and parsing the
//! secret behind it is a port so that tests (and alternative credential
//! stores) can swap the Kubernetes adapter out.

mod kubernetes;

pub use kubernetes::KubernetesSecretResolver;

use async_trait::async_trait;

use crate::error::Result;
use crate::options::OpenStackOptions;

/// Name/namespace pair identifying the credentials secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretReference {
    pub name: String,
    pub namespace: String,
}

impl SecretReference {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

impl std::fmt::Display for SecretReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Port for turning a secret reference into OpenStack credentials.
///
/// Implementations perform whatever I/O their store needs; the assembler
/// treats any failure as opaque and aborts the whole request. No retries.
#[async_trait]
pub trait SecretResolver: Send + Sync {
    /// Fetch and parse the referenced secret
    async fn resolve(&self, secret_ref: &SecretReference) -> Result<OpenStackOptions>;
}
