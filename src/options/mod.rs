//! Share option assembly
//!
//! Turns the flat string parameter map of a provisioning request into fully
//! typed [`ShareOptions`]. The three decodable groups run in a fixed order —
//! common first, because the share type and backend it yields decide which
//! protocol/backend fields are required — and the summed consumed-key counts
//! are diffed against the map size afterwards, which is the only place
//! unrecognized parameters are detected.

pub mod backend;
pub mod common;
pub mod constraints;
pub mod extract;
pub mod openstack;
pub mod protocol;

pub use backend::BackendOptions;
pub use common::CommonOptions;
pub use constraints::{OptionConstraints, OptionGroup, Requirement};
pub use openstack::OpenStackOptions;
pub use protocol::{CephfsMounter, ProtocolOptions};

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::secrets::{SecretReference, SecretResolver};
use crate::zones::{choose_zone_for_share, zones_to_set};

/// Prefix of derived share names
pub const SHARE_NAME_PREFIX: &str = "pvc-";

/// Parameters injected into the map when absent, before any group decodes.
/// A defaulted key is indistinguishable from a user-supplied one afterwards.
const DEFAULT_PARAMETERS: &[(&str, &str)] = &[("type", "default"), ("zones", "nova")];

/// Identity of the claim a share is provisioned for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimIdentity {
    /// Unique identifier; derives the share name
    pub uid: String,
    /// Human-readable name; seeds the zone choice
    pub name: String,
}

impl ClaimIdentity {
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
        }
    }
}

/// Fully assembled options for provisioning one share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareOptions {
    /// Derived share name, `pvc-` + claim uid
    pub share_name: String,

    /// Common options; `zones` holds the single chosen zone
    pub common: CommonOptions,

    /// Protocol-specific options
    pub protocol: ProtocolOptions,

    /// Backend-specific options
    pub backend: BackendOptions,

    /// Credentials resolved from the referenced secret
    pub openstack: OpenStackOptions,
}

impl ShareOptions {
    /// Assemble share options from raw request parameters.
    ///
    /// All-or-nothing: the first failing step aborts the whole assembly and
    /// no partial result is returned.
    #[instrument(skip_all, fields(claim = %claim.name))]
    pub async fn assemble(
        parameters: &BTreeMap<String, String>,
        claim: &ClaimIdentity,
        secrets: &dyn SecretResolver,
    ) -> Result<ShareOptions> {
        let mut params = parameters.clone();
        apply_defaults(&mut params);
        let total = params.len();

        let mut common = CommonOptions::default();
        let mut consumed = extract::extract_params(&OptionConstraints::default(), &params, &mut common)?;

        let constraints = OptionConstraints::new(common.share_type.clone(), common.backend.clone());

        let mut protocol = ProtocolOptions::default();
        consumed += extract::extract_params(&constraints, &params, &mut protocol)?;

        let mut backend = BackendOptions::default();
        consumed += extract::extract_params(&constraints, &params, &mut backend)?;

        if consumed != total {
            return Err(Error::UnrecognizedParameters {
                count: total - consumed,
            });
        }

        let zone_set = zones_to_set(&common.zones)?;
        common.zones = choose_zone_for_share(&zone_set, &claim.name)?;
        debug!(zone = %common.zones, "chose availability zone");

        let secret_ref = SecretReference::new(
            common.os_secret_name.clone(),
            common.os_secret_namespace.clone(),
        );
        let openstack = secrets.resolve(&secret_ref).await?;

        Ok(ShareOptions {
            share_name: format!("{SHARE_NAME_PREFIX}{}", claim.uid),
            common,
            protocol,
            backend,
            openstack,
        })
    }
}

/// Insert each defaulted parameter when its key is absent
fn apply_defaults(params: &mut BTreeMap<String, String>) {
    for (key, value) in DEFAULT_PARAMETERS {
        params
            .entry((*key).to_owned())
            .or_insert_with(|| (*value).to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_absent_keys() {
        let mut params = BTreeMap::new();
        apply_defaults(&mut params);

        assert_eq!(params.len(), 2);
        assert_eq!(params["type"], "default");
        assert_eq!(params["zones"], "nova");
    }

    #[test]
    fn test_defaults_never_override_supplied_values() {
        let mut params: BTreeMap<String, String> = [
            ("type".to_string(), "cephfs".to_string()),
            ("zones".to_string(), "us-east".to_string()),
        ]
        .into();
        apply_defaults(&mut params);

        assert_eq!(params.len(), 2);
        assert_eq!(params["type"], "cephfs");
        assert_eq!(params["zones"], "us-east");
    }

    #[test]
    fn test_defaults_are_idempotent() {
        let mut params = BTreeMap::new();
        apply_defaults(&mut params);
        let once = params.clone();
        apply_defaults(&mut params);
        assert_eq!(params, once);
    }

    #[test]
    fn test_share_name_prefix() {
        let claim = ClaimIdentity::new("7f9c", "data-volume");
        assert_eq!(
            format!("{SHARE_NAME_PREFIX}{}", claim.uid),
            "pvc-7f9c"
        );
    }
}
