//! OpenStack credential options
//!
//! Unlike the other groups this one is never decoded from the provisioning
//! parameters: a [`SecretResolver`](crate::secrets::SecretResolver) populates
//! it from the referenced secret's data, reusing the same field-table decode.

use crate::options::constraints::{FieldSpec, OptionGroup, Requirement};
use crate::options::extract::set_string;

/// Keystone credentials read from the referenced secret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenStackOptions {
    /// Keystone authentication endpoint
    pub os_auth_url: String,

    /// OpenStack region; empty selects the deployment default
    pub os_region: String,

    /// User to authenticate as
    pub os_user_name: String,

    /// Password for the user
    pub os_password: String,

    /// Project the shares are provisioned in
    pub os_project_name: String,

    /// Domain of the project; empty selects the default domain
    pub os_project_domain_name: String,

    /// Domain of the user; empty selects the default domain
    pub os_user_domain_name: String,

    /// Trust to assume instead of direct project scoping
    pub os_trust_id: String,
}

impl OptionGroup for OpenStackOptions {
    fn fields() -> &'static [FieldSpec<Self>] {
        const FIELDS: &[FieldSpec<OpenStackOptions>] = &[
            FieldSpec {
                key: "os-authURL",
                requirement: Requirement::Required,
                set: |o, v| set_string(&mut o.os_auth_url, v),
            },
            FieldSpec {
                key: "os-region",
                requirement: Requirement::Optional,
                set: |o, v| set_string(&mut o.os_region, v),
            },
            FieldSpec {
                key: "os-userName",
                requirement: Requirement::Required,
                set: |o, v| set_string(&mut o.os_user_name, v),
            },
            FieldSpec {
                key: "os-password",
                requirement: Requirement::Required,
                set: |o, v| set_string(&mut o.os_password, v),
            },
            FieldSpec {
                key: "os-projectName",
                requirement: Requirement::Required,
                set: |o, v| set_string(&mut o.os_project_name, v),
            },
            FieldSpec {
                key: "os-projectDomainName",
                requirement: Requirement::Optional,
                set: |o, v| set_string(&mut o.os_project_domain_name, v),
            },
            FieldSpec {
                key: "os-userDomainName",
                requirement: Requirement::Optional,
                set: |o, v| set_string(&mut o.os_user_domain_name, v),
            },
            FieldSpec {
                key: "os-trustID",
                requirement: Requirement::Optional,
                set: |o, v| set_string(&mut o.os_trust_id, v),
            },
        ];
        FIELDS
    }
}
