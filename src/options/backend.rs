//! Backend-specific share options

use crate::options::constraints::{FieldSpec, OptionGroup, Requirement};
use crate::options::extract::{parse_value, set_string};

/// Backend value for shares served through the CephFS CSI driver
pub const BACKEND_CSI_CEPHFS: &str = "csi-cephfs";
/// Backend value for the generic (share-network based) Manila driver
pub const BACKEND_GENERIC: &str = "generic";

/// Options tied to the storage backend serving the share
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendOptions {
    /// Name of the CSI driver handling the share on csi-cephfs backends
    pub csi_driver: String,

    /// Manila share network the generic backend exports through
    pub os_share_network_id: String,

    /// Grant access to the share immediately after creation
    pub grant_default_access: bool,
}

impl OptionGroup for BackendOptions {
    fn fields() -> &'static [FieldSpec<Self>] {
        const FIELDS: &[FieldSpec<BackendOptions>] = &[
            FieldSpec {
                key: "csiDriver",
                requirement: Requirement::ForBackend(BACKEND_CSI_CEPHFS),
                set: |o, v| set_string(&mut o.csi_driver, v),
            },
            FieldSpec {
                key: "osShareNetworkID",
                requirement: Requirement::ForBackend(BACKEND_GENERIC),
                set: |o, v| set_string(&mut o.os_share_network_id, v),
            },
            FieldSpec {
                key: "grantDefaultAccess",
                requirement: Requirement::Optional,
                set: |o, v| {
                    o.grant_default_access = parse_value(v, "\"true\" or \"false\"")?;
                    Ok(())
                },
            },
        ];
        FIELDS
    }
}
