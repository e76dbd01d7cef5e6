//! Kubernetes secret resolver adapter
//!
//! Reads the credentials secret through the cluster API and decodes its data
//! with the same field tables the parameter decoder uses. Extra keys in the
//! secret are tolerated; only the declared credential fields are read.

use std::collections::BTreeMap;

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::api::Api;
use kube::Client;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::options::constraints::OptionConstraints;
use crate::options::extract::extract_params;
use crate::options::OpenStackOptions;
use crate::secrets::{SecretReference, SecretResolver};

/// Resolves credential secrets via the Kubernetes API
#[derive(Clone)]
pub struct KubernetesSecretResolver {
    client: Client,
}

impl KubernetesSecretResolver {
    /// Create a resolver backed by the given client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn secrets_api(&self, namespace: &str) -> Api<Secret> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

impl std::fmt::Debug for KubernetesSecretResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubernetesSecretResolver").finish()
    }
}

#[async_trait]
impl SecretResolver for KubernetesSecretResolver {
    #[instrument(skip(self))]
    async fn resolve(&self, secret_ref: &SecretReference) -> Result<OpenStackOptions> {
        let fail = |reason: String| Error::SecretResolution {
            name: secret_ref.name.clone(),
            namespace: secret_ref.namespace.clone(),
            reason,
        };

        if secret_ref.name.is_empty() {
            return Err(fail("no secret name specified".to_string()));
        }

        let api = self.secrets_api(&secret_ref.namespace);
        let secret = api
            .get(&secret_ref.name)
            .await
            .map_err(|e| fail(e.to_string()))?;

        let data = decode_secret_data(secret.data.unwrap_or_default()).map_err(&fail)?;

        let mut opts = OpenStackOptions::default();
        extract_params(&OptionConstraints::default(), &data, &mut opts)
            .map_err(|e| fail(e.to_string()))?;

        debug!(secret = %secret_ref, "resolved OpenStack credentials");
        Ok(opts)
    }
}

/// Decode secret byte values into UTF-8 strings
fn decode_secret_data(
    data: BTreeMap<String, ByteString>,
) -> std::result::Result<BTreeMap<String, String>, String> {
    data.into_iter()
        .map(|(key, value)| {
            String::from_utf8(value.0)
                .map(|v| (key.clone(), v))
                .map_err(|_| format!("value for key {key:?} is not valid UTF-8"))
        })
        .collect()
}
