//! Field constraint model
//!
//! Each option group declares its parameters as a flat, `const` table of
//! [`FieldSpec`]s: the parameter key, a [`Requirement`] saying under which
//! protocol/backend the key must be present, and a setter that converts the
//! raw string value into the destination field. The tables replace the
//! struct-tag reflection of earlier provisioners with plain data built at
//! compile time and shared read-only across decode calls.

// =============================================================================
// Constraints
// =============================================================================

/// The discriminator values active while a group decodes.
///
/// The common group decodes under the empty constraint set because its own
/// fields establish the discriminators; the protocol and backend groups
/// decode under the values just read from it. The share type parameter
/// selects the protocol profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionConstraints {
    /// Active protocol profile (the decoded `type` parameter)
    pub protocol: String,
    /// Active backend (the decoded `backend` parameter)
    pub backend: String,
}

impl OptionConstraints {
    /// Constraints for a given protocol/backend pair
    pub fn new(protocol: impl Into<String>, backend: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            backend: backend.into(),
        }
    }
}

// =============================================================================
// Requirement
// =============================================================================

/// When a field must be present in the parameter map.
///
/// A field whose condition does not hold under the active constraints is
/// simply not required; if its key is present anyway it is still decoded
/// and counted as consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Always required (the defaults table guarantees some of these)
    Required,
    /// Never required; absent keys leave the field at its default
    Optional,
    /// Required only while the given protocol profile is active
    ForProtocol(&'static str),
    /// Required only while the given backend is active
    ForBackend(&'static str),
}

impl Requirement {
    /// Whether a field with this requirement must be present under `constraints`
    pub fn is_required(&self, constraints: &OptionConstraints) -> bool {
        match self {
            Requirement::Required => true,
            Requirement::Optional => false,
            Requirement::ForProtocol(protocol) => constraints.protocol == *protocol,
            Requirement::ForBackend(backend) => constraints.backend == *backend,
        }
    }
}

// =============================================================================
// Field descriptors
// =============================================================================

/// Reported by a field setter when the raw value cannot be converted.
/// The decoder attaches the key and the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionError {
    /// Human-readable description of the expected value shape
    pub expected: &'static str,
}

/// Descriptor for one parameter of an option group
pub struct FieldSpec<T> {
    /// Parameter key, case-sensitive
    pub key: &'static str,
    /// Under which discriminators the key must be present
    pub requirement: Requirement,
    /// Converts the raw value and stores it into the destination group
    pub set: fn(&mut T, &str) -> std::result::Result<(), ConversionError>,
}

/// An option group that can be decoded from a string parameter map.
///
/// `fields` must return the group's descriptors in a fixed declaration
/// order; the decoder walks them in that order so the error surfaced when
/// several fields are bad is reproducible.
pub trait OptionGroup: Default {
    /// The group's field table
    fn fields() -> &'static [FieldSpec<Self>]
    where
        Self: Sized;
}
