//! Common share options
//!
//! Decoded first, under the empty constraint set: the share type and backend
//! read here become the discriminators every later group decodes under.

use crate::options::constraints::{FieldSpec, OptionGroup, Requirement};
use crate::options::extract::set_string;

/// Options every share carries regardless of protocol or backend.
///
/// `type` and `zones` are injected by the defaults table when absent, so
/// their `Required` rows never fail on user input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonOptions {
    /// Manila share type; selects the protocol profile for the share
    pub share_type: String,

    /// Comma-separated candidate availability zones on input; the single
    /// chosen zone after assembly
    pub zones: String,

    /// Storage backend serving the share; empty when the deployment default
    /// backend applies
    pub backend: String,

    /// Name of the secret holding OpenStack credentials
    pub os_secret_name: String,

    /// Namespace of the credentials secret
    pub os_secret_namespace: String,
}

impl OptionGroup for CommonOptions {
    fn fields() -> &'static [FieldSpec<Self>] {
        const FIELDS: &[FieldSpec<CommonOptions>] = &[
            FieldSpec {
                key: "type",
                requirement: Requirement::Required,
                set: |o, v| set_string(&mut o.share_type, v),
            },
            FieldSpec {
                key: "zones",
                requirement: Requirement::Required,
                set: |o, v| set_string(&mut o.zones, v),
            },
            FieldSpec {
                key: "backend",
                requirement: Requirement::Optional,
                set: |o, v| set_string(&mut o.backend, v),
            },
            FieldSpec {
                key: "osSecretName",
                requirement: Requirement::Optional,
                set: |o, v| set_string(&mut o.os_secret_name, v),
            },
            FieldSpec {
                key: "osSecretNamespace",
                requirement: Requirement::Optional,
                set: |o, v| set_string(&mut o.os_secret_namespace, v),
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
    fn test_full_common_decode() {
        let input = params(&[
            ("type", "default"),
            ("zones", "nova,us-east"),
            ("backend", "csi-cephfs"),
            ("osSecretName", "os-creds"),
            ("osSecretNamespace", "kube-system"),
        ]);
        let mut opts = CommonOptions::default();

        let consumed = extract_params(&OptionConstraints::default(), &input, &mut opts).unwrap();

        assert_eq!(consumed, 5);
        assert_eq!(opts.share_type, "default");
        assert_eq!(opts.zones, "nova,us-east");
        assert_eq!(opts.backend, "csi-cephfs");
        assert_eq!(opts.os_secret_name, "os-creds");
        assert_eq!(opts.os_secret_namespace, "kube-system");
    }

    #[test]
    fn test_type_and_zones_are_required() {
        // The assembler always defaults these; decoding a raw map without
        // them is the one way to observe the requirement.
        let mut opts = CommonOptions::default();
        let err = extract_params(
            &OptionConstraints::default(),
            &params(&[("zones", "nova")]),
            &mut opts,
        )
        .unwrap_err();
        assert_matches!(err, Error::MissingParameter { param: "type" });

        let mut opts = CommonOptions::default();
        let err = extract_params(
            &OptionConstraints::default(),
            &params(&[("type", "default")]),
            &mut opts,
        )
        .unwrap_err();
        assert_matches!(err, Error::MissingParameter { param: "zones" });
    }

    #[test]
    fn test_secret_reference_is_optional() {
        let input = params(&[("type", "default"), ("zones", "nova")]);
        let mut opts = CommonOptions::default();

        let consumed = extract_params(&OptionConstraints::default(), &input, &mut opts).unwrap();

        assert_eq!(consumed, 2);
        assert!(opts.backend.is_empty());
        assert!(opts.os_secret_name.is_empty());
        assert!(opts.os_secret_namespace.is_empty());
    }
}
