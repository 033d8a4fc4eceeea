//! Size-attribute classification rules for SQL Server data types.
//!
//! Which of length, precision, and scale mean anything for a column is a
//! property of its data type alone. The table below drives both metadata
//! adapters, so adding a type is a one-line data change rather than new
//! control flow.

use super::column::ColumnDef;

/// Which size-family attributes apply to a data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// Storage is fixed by the type; no size qualifier is ever rendered.
    Fixed,
    /// Fractional-seconds date/time types; precision and scale digits apply,
    /// length does not.
    FractionalSeconds,
    /// Length-qualified double-byte character types; the catalog reports
    /// their length in storage bytes, two per character.
    WideLength,
    /// Length-qualified single-byte character, binary, and XML types.
    Length,
    /// Exact numerics; precision and scale apply.
    PrecisionScale,
    /// Approximate numerics; only precision applies.
    Precision,
}

/// Type name to size class. Types absent from the table (user-defined or
/// simply unknown) get no corrections at all.
const SIZE_RULES: &[(&str, SizeClass)] = &[
    ("bit", SizeClass::Fixed),
    ("tinyint", SizeClass::Fixed),
    ("smallint", SizeClass::Fixed),
    ("int", SizeClass::Fixed),
    ("bigint", SizeClass::Fixed),
    ("smalldatetime", SizeClass::Fixed),
    ("datetime", SizeClass::Fixed),
    ("date", SizeClass::Fixed),
    ("sysname", SizeClass::Fixed),
    ("smallmoney", SizeClass::Fixed),
    ("money", SizeClass::Fixed),
    ("uniqueidentifier", SizeClass::Fixed),
    ("timestamp", SizeClass::Fixed),
    ("rowversion", SizeClass::Fixed),
    ("hierarchyid", SizeClass::Fixed),
    ("geometry", SizeClass::Fixed),
    ("geography", SizeClass::Fixed),
    ("datetime2", SizeClass::FractionalSeconds),
    ("datetimeoffset", SizeClass::FractionalSeconds),
    ("time", SizeClass::FractionalSeconds),
    ("nvarchar", SizeClass::WideLength),
    ("nchar", SizeClass::WideLength),
    ("ntext", SizeClass::WideLength),
    ("xml", SizeClass::Length),
    ("varchar", SizeClass::Length),
    ("char", SizeClass::Length),
    ("binary", SizeClass::Length),
    ("varbinary", SizeClass::Length),
    ("image", SizeClass::Length),
    ("text", SizeClass::Length),
    ("decimal", SizeClass::PrecisionScale),
    ("numeric", SizeClass::PrecisionScale),
    ("float", SizeClass::Precision),
    ("real", SizeClass::Precision),
];

/// Look up the size class for a data type name. Case-insensitive.
pub fn size_class(data_type: &str) -> Option<SizeClass> {
    let lower = data_type.to_lowercase();
    SIZE_RULES
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, class)| *class)
}

/// Suppress the size attributes that carry no meaning for the descriptor's
/// data type. Both adapters call this after their source-specific
/// corrections. Unrecognized types pass through untouched.
pub fn apply_size_rules(col: &mut ColumnDef) {
    match size_class(&col.data_type) {
        Some(SizeClass::Fixed) => {
            col.is_max_length = false;
            col.max_length = None;
            col.precision = None;
            col.scale = None;
        }
        Some(SizeClass::FractionalSeconds) | Some(SizeClass::PrecisionScale) => {
            col.is_max_length = false;
            col.max_length = None;
        }
        Some(SizeClass::WideLength) | Some(SizeClass::Length) => {
            col.precision = None;
            col.scale = None;
        }
        Some(SizeClass::Precision) => {
            col.is_max_length = false;
            col.max_length = None;
            col.scale = None;
        }
        None => {
            tracing::debug!(
                "No size rule for type '{}', passing size attributes through",
                col.data_type
            );
        }
    }

    // An unbounded type never renders a numeric length.
    if col.is_max_length {
        col.max_length = None;
    }
}
