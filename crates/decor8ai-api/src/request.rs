//! Shared pieces of the request types: field validation, the "omit if unset" serialization
//! rules and conversion of a request into multipart text fields.

use serde::Serialize;

use crate::{Error, ImageSource, Result};

/// A request whose required fields can be checked before it is sent.
pub trait Validate {
    /// Checks that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the first empty required field.
    fn validate(&self) -> Result<()>;
}

/// A request sent as `multipart/form-data` with an `input_image` upload.
///
/// Every serialized field other than the image becomes a text part.
pub trait UploadRequest: Serialize + Validate {
    /// Consumes the request, returning the image to upload.
    fn into_image(self) -> ImageSource;
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(())
}

/// Values the service treats the same as not sending the field at all.
pub(crate) trait Unset {
    fn is_unset(&self) -> bool;
}

impl Unset for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl Unset for u32 {
    fn is_unset(&self) -> bool {
        *self == 0
    }
}

impl Unset for f64 {
    fn is_unset(&self) -> bool {
        *self == 0.0 || self.is_nan()
    }
}

/// `skip_serializing_if` predicate: omit `None`, empty strings and zeroes.
pub(crate) fn omit<T: Unset>(value: &Option<T>) -> bool {
    value.as_ref().map_or(true, Unset::is_unset)
}

/// `skip_serializing_if` predicate for image counts on endpoints that default to one image.
pub(crate) fn omit_single(value: &Option<u32>) -> bool {
    !matches!(value, Some(n) if *n > 1)
}

/// Serializes a request into `(name, value)` pairs for multipart text parts.
///
/// Strings are sent as-is, everything else in its JSON representation. Fields that
/// serialize to `null` are dropped.
pub(crate) fn form_fields<T: Serialize>(request: &T) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(request)?;
    let serde_json::Value::Object(map) = value else {
        return Ok(Vec::new());
    };
    Ok(map
        .into_iter()
        .filter_map(|(name, value)| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some((name, s)),
            other => Some((name, other.to_string())),
        })
        .collect())
}
