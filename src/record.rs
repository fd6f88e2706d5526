//! Static field access for record types.
//!
//! A record exposes its fields by identifier: `field_value` reads one for the
//! write path, `field_slot` hands out a typed mutable [`Destination`] for the
//! read path. Implementations are normally generated with [`bind_record!`].
//!
//! [`bind_record!`]: crate::bind_record

use std::fmt;

use chrono::NaiveDateTime;

use crate::types::RowValues;

/// A typed, mutable handle to one field of a record instance.
#[derive(Debug)]
pub enum Destination<'a> {
    String(&'a mut String),
    Int(&'a mut i64),
    Float(&'a mut f64),
    Bool(&'a mut bool),
    Timestamp(&'a mut NaiveDateTime),
    /// Timestamp held behind an owned pointer; assignment allocates.
    TimestampRef(&'a mut Option<Box<NaiveDateTime>>),
    Bytes(&'a mut Vec<u8>),
}

impl Destination<'_> {
    #[must_use]
    pub fn kind(&self) -> DestinationKind {
        match self {
            Destination::String(_) => DestinationKind::String,
            Destination::Int(_) => DestinationKind::Int,
            Destination::Float(_) => DestinationKind::Float,
            Destination::Bool(_) => DestinationKind::Bool,
            Destination::Timestamp(_) => DestinationKind::Timestamp,
            Destination::TimestampRef(_) => DestinationKind::TimestampRef,
            Destination::Bytes(_) => DestinationKind::Bytes,
        }
    }
}

/// The static kind of a [`Destination`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestinationKind {
    String,
    Int,
    Float,
    Bool,
    Timestamp,
    TimestampRef,
    Bytes,
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DestinationKind::String => "string",
            DestinationKind::Int => "integer",
            DestinationKind::Float => "float",
            DestinationKind::Bool => "boolean",
            DestinationKind::Timestamp => "timestamp",
            DestinationKind::TimestampRef => "boxed timestamp",
            DestinationKind::Bytes => "bytes",
        };
        f.write_str(name)
    }
}

/// Field types that can take part in binding.
pub trait BindField {
    /// Mutable slot used when scanning a column into this field.
    fn destination(&mut self) -> Destination<'_>;

    /// Value sent as a positional parameter when this field is named in a query.
    fn to_value(&self) -> RowValues;
}

impl BindField for String {
    fn destination(&mut self) -> Destination<'_> {
        Destination::String(self)
    }

    fn to_value(&self) -> RowValues {
        RowValues::Text(self.clone())
    }
}

impl BindField for i64 {
    fn destination(&mut self) -> Destination<'_> {
        Destination::Int(self)
    }

    fn to_value(&self) -> RowValues {
        RowValues::Int(*self)
    }
}

impl BindField for f64 {
    fn destination(&mut self) -> Destination<'_> {
        Destination::Float(self)
    }

    fn to_value(&self) -> RowValues {
        RowValues::Float(*self)
    }
}

impl BindField for bool {
    fn destination(&mut self) -> Destination<'_> {
        Destination::Bool(self)
    }

    fn to_value(&self) -> RowValues {
        RowValues::Bool(*self)
    }
}

impl BindField for NaiveDateTime {
    fn destination(&mut self) -> Destination<'_> {
        Destination::Timestamp(self)
    }

    fn to_value(&self) -> RowValues {
        RowValues::Timestamp(*self)
    }
}

impl BindField for Option<Box<NaiveDateTime>> {
    fn destination(&mut self) -> Destination<'_> {
        Destination::TimestampRef(self)
    }

    fn to_value(&self) -> RowValues {
        match self {
            Some(ts) => RowValues::Timestamp(**ts),
            None => RowValues::Null,
        }
    }
}

impl BindField for Vec<u8> {
    fn destination(&mut self) -> Destination<'_> {
        Destination::Bytes(self)
    }

    fn to_value(&self) -> RowValues {
        RowValues::Blob(self.clone())
    }
}

/// Declaration of one record field: its identifier and optional binding tag.
///
/// The tag follows the `"name,option,..."` convention; only the first
/// comma-delimited segment is used as the external name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub ident: &'static str,
    pub tag: Option<&'static str>,
}

impl FieldDef {
    #[must_use]
    pub const fn new(ident: &'static str, tag: Option<&'static str>) -> Self {
        Self { ident, tag }
    }

    /// External (column/parameter) name for this field.
    ///
    /// Falls back to the identifier when the tag is absent or its first
    /// segment is blank.
    #[must_use]
    pub fn external_name(&self) -> &'static str {
        self.tag
            .and_then(|tag| tag.split(',').next())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(self.ident)
    }
}

/// A record type whose fields can be bound by name.
pub trait Record: 'static {
    /// All bindable fields, in declaration order.
    fn fields() -> &'static [FieldDef];

    /// Current value of the field with the given identifier.
    fn field_value(&self, ident: &str) -> Option<RowValues>;

    /// Mutable slot for the field with the given identifier.
    fn field_slot(&mut self, ident: &str) -> Option<Destination<'_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_name_uses_first_tag_segment() {
        let field = FieldDef::new("Name", Some(" name ,omitempty"));
        assert_eq!(field.external_name(), "name");
    }

    #[test]
    fn external_name_falls_back_to_ident() {
        assert_eq!(FieldDef::new("Age", None).external_name(), "Age");
        assert_eq!(FieldDef::new("Age", Some("")).external_name(), "Age");
        assert_eq!(FieldDef::new("Age", Some(" ,omitempty")).external_name(), "Age");
    }

    #[test]
    fn boxed_timestamp_binds_null_when_empty() {
        let empty: Option<Box<NaiveDateTime>> = None;
        assert_eq!(empty.to_value(), RowValues::Null);
    }
}
