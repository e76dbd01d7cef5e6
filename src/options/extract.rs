//! Generic constraint-aware parameter decoder
//!
//! [`extract_params`] decodes one option group out of a flat string map and
//! reports how many keys it consumed. Keys the group does not declare are
//! left untouched: a later group may claim them, and the assembler diffs the
//! summed consumed counts against the map size once every group has decoded.

use std::collections::BTreeMap;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::options::constraints::{ConversionError, OptionConstraints, OptionGroup};

/// Decode the parameters declared by `T` out of `params` into `dest`.
///
/// Fields are evaluated in declaration order. A present key is converted and
/// counted as consumed whether or not it is required under `constraints`; an
/// absent key is an error only when its requirement holds. Returns the number
/// of keys consumed.
pub fn extract_params<T: OptionGroup + 'static>(
    constraints: &OptionConstraints,
    params: &BTreeMap<String, String>,
    dest: &mut T,
) -> Result<usize> {
    let mut consumed = 0;

    for field in T::fields() {
        match params.get(field.key) {
            Some(value) => {
                (field.set)(dest, value).map_err(|e| Error::InvalidParameter {
                    param: field.key,
                    value: value.clone(),
                    expected: e.expected,
                })?;
                consumed += 1;
            }
            None if field.requirement.is_required(constraints) => {
                return Err(Error::MissingParameter { param: field.key });
            }
            None => {}
        }
    }

    debug!(consumed, total = params.len(), "decoded option group");
    Ok(consumed)
}

// =============================================================================
// Conversion helpers for field setters
// =============================================================================

/// Parse a value through `FromStr`, reporting `expected` on failure
pub fn parse_value<V: FromStr>(
    value: &str,
    expected: &'static str,
) -> std::result::Result<V, ConversionError> {
    value.parse().map_err(|_| ConversionError { expected })
}

/// Store a string value verbatim; cannot fail
pub fn set_string(dest: &mut String, value: &str) -> std::result::Result<(), ConversionError> {
    *dest = value.to_owned();
    Ok(())
}
