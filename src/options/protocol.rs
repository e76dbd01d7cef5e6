//! Protocol-specific share options
//!
//! Requiredness here depends on the protocol profile selected by the share
//! type: an NFS share must say which clients may mount it, a CephFS share
//! must pick a mounter.

use std::fmt;
use std::str::FromStr;

use crate::options::constraints::{FieldSpec, OptionGroup, Requirement};
use crate::options::extract::{parse_value, set_string};

/// Share type value that activates the NFS profile
pub const PROTOCOL_NFS: &str = "nfs";
/// Share type value that activates the CephFS profile
pub const PROTOCOL_CEPHFS: &str = "cephfs";

/// How a CephFS share gets mounted on the node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CephfsMounter {
    /// ceph-fuse userspace client
    #[default]
    Fuse,
    /// In-kernel CephFS client
    Kernel,
}

impl FromStr for CephfsMounter {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s {
            "fuse" => Ok(CephfsMounter::Fuse),
            "kernel" => Ok(CephfsMounter::Kernel),
            _ => Err(()),
        }
    }
}

impl fmt::Display for CephfsMounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CephfsMounter::Fuse => write!(f, "fuse"),
            CephfsMounter::Kernel => write!(f, "kernel"),
        }
    }
}

/// Options tied to the share's protocol profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolOptions {
    /// Address or CIDR granted access to an NFS share
    pub nfs_share_client: String,

    /// Mounter used for CephFS shares
    pub cephfs_mounter: CephfsMounter,

    /// Extra mount options passed to the CephFS kernel client
    pub cephfs_kernel_mount_options: String,
}

impl OptionGroup for ProtocolOptions {
    fn fields() -> &'static [FieldSpec<Self>] {
        const FIELDS: &[FieldSpec<ProtocolOptions>] = &[
            FieldSpec {
                key: "nfsShareClient",
                requirement: Requirement::ForProtocol(PROTOCOL_NFS),
                set: |o, v| set_string(&mut o.nfs_share_client, v),
            },
            FieldSpec {
                key: "cephfsMounter",
                requirement: Requirement::ForProtocol(PROTOCOL_CEPHFS),
                set: |o, v| {
                    o.cephfs_mounter = parse_value(v, "one of \"fuse\", \"kernel\"")?;
                    Ok(())
                },
            },
            FieldSpec {
                key: "cephfsKernelMountOptions",
                requirement: Requirement::Optional,
                set: |o, v| set_string(&mut o.cephfs_kernel_mount_options, v),
            },
        ];
        FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::options::constraints::OptionConstraints;
    use crate::options::extract::extract_params;
    use assert_matches::assert_matches;
    use std::collections::BTreeMap;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_nfs_profile_requires_share_client() {
        let mut opts = ProtocolOptions::default();
        let err = extract_params(
            &OptionConstraints::new(PROTOCOL_NFS, ""),
            &params(&[]),
            &mut opts,
        )
        .unwrap_err();
        assert_matches!(err, Error::MissingParameter { param: "nfsShareClient" });

        let mut opts = ProtocolOptions::default();
        let consumed = extract_params(
            &OptionConstraints::new(PROTOCOL_NFS, ""),
            &params(&[("nfsShareClient", "10.0.0.0/8")]),
            &mut opts,
        )
        .unwrap();
        assert_eq!(consumed, 1);
        assert_eq!(opts.nfs_share_client, "10.0.0.0/8");
    }

    #[test]
    fn test_cephfs_profile_requires_mounter() {
        let mut opts = ProtocolOptions::default();
        let err = extract_params(
            &OptionConstraints::new(PROTOCOL_CEPHFS, ""),
            &params(&[]),
            &mut opts,
        )
        .unwrap_err();
        assert_matches!(err, Error::MissingParameter { param: "cephfsMounter" });
    }

    #[test]
    fn test_mounter_parses_both_variants() {
        for (raw, want) in [("fuse", CephfsMounter::Fuse), ("kernel", CephfsMounter::Kernel)] {
            let mut opts = ProtocolOptions::default();
            extract_params(
                &OptionConstraints::new(PROTOCOL_CEPHFS, ""),
                &params(&[("cephfsMounter", raw)]),
                &mut opts,
            )
            .unwrap();
            assert_eq!(opts.cephfs_mounter, want);
        }
    }

    #[test]
    fn test_mounter_rejects_unknown_value() {
        let mut opts = ProtocolOptions::default();
        let err = extract_params(
            &OptionConstraints::new(PROTOCOL_CEPHFS, ""),
            &params(&[("cephfsMounter", "nfs-ganesha")]),
            &mut opts,
        )
        .unwrap_err();
        assert_matches!(
            err,
            Error::InvalidParameter { param: "cephfsMounter", ref value, .. }
                if value == "nfs-ganesha"
        );
    }

    #[test]
    fn test_default_profile_requires_nothing() {
        let mut opts = ProtocolOptions::default();
        let consumed = extract_params(
            &OptionConstraints::new("default", ""),
            &params(&[]),
            &mut opts,
        )
        .unwrap();
        assert_eq!(consumed, 0);
        assert_eq!(opts, ProtocolOptions::default());
    }

    #[test]
    fn test_mounter_display_round_trips() {
        assert_eq!(CephfsMounter::Fuse.to_string(), "fuse");
        assert_eq!(CephfsMounter::Kernel.to_string(), "kernel");
    }
}
