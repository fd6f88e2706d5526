//! Assigning scanned values into typed record fields.
//!
//! | source            | destination            | result                         |
//! |-------------------|------------------------|--------------------------------|
//! | text              | string                 | assigned                       |
//! | int32 / int64     | boolean                | `true` iff the value is `1`    |
//! | int32 / int64     | integer                | widened and assigned           |
//! | float             | float                  | assigned                       |
//! | bool              | boolean                | assigned                       |
//! | timestamp         | timestamp              | assigned                       |
//! | timestamp         | boxed timestamp        | allocated and assigned         |
//! | bytes             | string                 | decoded as text                |
//! | bytes             | bytes                  | assigned                       |
//! | bytes             | integer / float        | decoded and parsed             |
//! | bytes             | anything else          | [`SqlBindError::InvalidFieldType`] |
//! | anything else     | anything               | left unchanged                 |
//!
//! Under [`CoercionPolicy::Lenient`] a bytes value that does not parse as a
//! number leaves the destination unchanged; [`CoercionPolicy::Strict`] reports
//! it as [`SqlBindError::ConversionError`].

use std::str::FromStr;

use crate::error::SqlBindError;
use crate::options::CoercionPolicy;
use crate::record::Destination;
use crate::types::RowValues;

/// Coerce `source` into `destination` with the lenient policy.
///
/// # Errors
///
/// Returns [`SqlBindError::InvalidFieldType`] when a bytes value targets a
/// destination that cannot hold it.
pub fn coerce(destination: Destination<'_>, source: &RowValues) -> Result<(), SqlBindError> {
    coerce_with(destination, source, CoercionPolicy::Lenient)
}

/// Coerce `source` into `destination` under an explicit policy.
///
/// # Errors
///
/// Returns [`SqlBindError::InvalidFieldType`] when a bytes value targets a
/// destination that cannot hold it, and, under [`CoercionPolicy::Strict`],
/// [`SqlBindError::ConversionError`] when bytes do not parse as a number.
pub fn coerce_with(
    destination: Destination<'_>,
    source: &RowValues,
    policy: CoercionPolicy,
) -> Result<(), SqlBindError> {
    match (source, destination) {
        (RowValues::Text(value), Destination::String(slot)) => value.clone_into(slot),

        (RowValues::Int32(value), Destination::Bool(slot)) => *slot = *value == 1,
        (RowValues::Int(value), Destination::Bool(slot)) => *slot = *value == 1,
        (RowValues::Int32(value), Destination::Int(slot)) => *slot = i64::from(*value),
        (RowValues::Int(value), Destination::Int(slot)) => *slot = *value,

        (RowValues::Float(value), Destination::Float(slot)) => *slot = *value,
        (RowValues::Bool(value), Destination::Bool(slot)) => *slot = *value,

        (RowValues::Timestamp(ts), Destination::Timestamp(slot)) => *slot = *ts,
        (RowValues::Timestamp(ts), Destination::TimestampRef(slot)) => {
            *slot = Some(Box::new(*ts));
        }

        (RowValues::Blob(bytes), Destination::String(slot)) => {
            *slot = String::from_utf8_lossy(bytes).into_owned();
        }
        (RowValues::Blob(bytes), Destination::Bytes(slot)) => bytes.clone_into(slot),
        (RowValues::Blob(bytes), Destination::Int(slot)) => {
            if let Some(parsed) = parse_bytes::<i64>(bytes, policy)? {
                *slot = parsed;
            }
        }
        (RowValues::Blob(bytes), Destination::Float(slot)) => {
            if let Some(parsed) = parse_bytes::<f64>(bytes, policy)? {
                *slot = parsed;
            }
        }
        (
            RowValues::Blob(_),
            other @ (Destination::Bool(_)
            | Destination::Timestamp(_)
            | Destination::TimestampRef(_)),
        ) => {
            return Err(SqlBindError::InvalidFieldType {
                source_kind: source.kind_name(),
                destination: other.kind(),
            });
        }

        (
            RowValues::Text(_)
            | RowValues::Int32(_)
            | RowValues::Int(_)
            | RowValues::Float(_)
            | RowValues::Bool(_)
            | RowValues::Timestamp(_)
            | RowValues::Null
            | RowValues::JSON(_),
            other,
        ) => {
            tracing::trace!(
                source = source.kind_name(),
                destination = %other.kind(),
                "no coercion rule, destination left unchanged"
            );
        }
    }
    Ok(())
}

fn parse_bytes<T>(bytes: &[u8], policy: CoercionPolicy) -> Result<Option<T>, SqlBindError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let text = String::from_utf8_lossy(bytes);
    match text.parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(err) => match policy {
            CoercionPolicy::Lenient => {
                tracing::trace!(value = %text, error = %err, "ignoring unparsable numeric bytes");
                Ok(None)
            }
            CoercionPolicy::Strict => Err(SqlBindError::ConversionError(format!(
                "cannot parse {text:?} as {}: {err}",
                std::any::type_name::<T>()
            ))),
        },
    }
}
