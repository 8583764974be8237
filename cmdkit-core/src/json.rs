// cmdkit-core/src/json.rs

//! JSON post-processing for text-producing operations.
//!
//! [`json_from_text`] wraps an operation and decodes whatever text it returns.
//! Results that are absent pass through as `None`; results that are neither
//! absent nor text are rejected with [`CmdkitError::TypeMismatch`].

use crate::errors::{CmdkitError, Result};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// What an operation handed to the JSON adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSource {
    Absent,
    Text(String),
    /// Any other value, described by its short type name.
    Other(&'static str),
}

/// Conversion of an operation's result into a [`JsonSource`].
pub trait IntoJsonSource {
    fn into_json_source(self) -> JsonSource;
}

impl IntoJsonSource for String {
    fn into_json_source(self) -> JsonSource {
        JsonSource::Text(self)
    }
}

impl IntoJsonSource for &str {
    fn into_json_source(self) -> JsonSource {
        JsonSource::Text(self.to_string())
    }
}

impl IntoJsonSource for () {
    fn into_json_source(self) -> JsonSource {
        JsonSource::Absent
    }
}

impl<T: IntoJsonSource> IntoJsonSource for Option<T> {
    fn into_json_source(self) -> JsonSource {
        match self {
            Some(inner) => inner.into_json_source(),
            None => JsonSource::Absent,
        }
    }
}

macro_rules! other_source {
    ($name:literal => $($ty:ty),+) => {
        $(
            impl IntoJsonSource for $ty {
                fn into_json_source(self) -> JsonSource {
                    JsonSource::Other($name)
                }
            }
        )+
    };
}

other_source!("int" => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
other_source!("float" => f32, f64);
other_source!("bool" => bool);

impl<T> IntoJsonSource for Vec<T> {
    fn into_json_source(self) -> JsonSource {
        JsonSource::Other("list")
    }
}

impl<K, V, S> IntoJsonSource for HashMap<K, V, S> {
    fn into_json_source(self) -> JsonSource {
        JsonSource::Other("dict")
    }
}

/// Parses `text` as JSON.
pub fn decode(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(CmdkitError::Decode)
}

/// Applies the adapter rules to a single produced value.
pub fn decode_source(producer: &str, produced: impl IntoJsonSource) -> Result<Option<Value>> {
    match produced.into_json_source() {
        JsonSource::Absent => Ok(None),
        JsonSource::Text(text) => decode(&text).map(Some),
        JsonSource::Other(found) => {
            debug!(producer, found, "Rejecting non-text result in JSON adapter");
            Err(CmdkitError::TypeMismatch {
                producer: producer.to_string(),
                found: found.to_string(),
            })
        }
    }
}

/// Wraps `op` so that its text result is decoded as JSON.
///
/// `producer` names the wrapped operation in [`CmdkitError::TypeMismatch`].
pub fn json_from_text<A, R, F>(producer: &str, op: F) -> impl Fn(A) -> Result<Option<Value>>
where
    F: Fn(A) -> R,
    R: IntoJsonSource,
{
    let producer = producer.to_string();
    move |arg| decode_source(&producer, op(arg))
}

/// Like [`json_from_text`], for operations that can fail on their own.
///
/// Errors from `op` are returned as they are.
pub fn try_json_from_text<A, R, F>(
    producer: &str,
    op: F,
) -> impl Fn(A) -> Result<Option<Value>>
where
    F: Fn(A) -> Result<R>,
    R: IntoJsonSource,
{
    let producer = producer.to_string();
    move |arg| decode_source(&producer, op(arg)?)
}
