//! Model-source metadata records and their adapter.
//!
//! Property records are shaped after an ORM model's declared store facets.
//! A facet value flagged as a type constant is not a real per-column
//! override and never reaches the descriptor; each facet carries its own
//! flag and is suppressed independently.

use serde::{Deserialize, Serialize};

use super::column::ColumnDef;
use super::rules::apply_size_rules;

/// The suffix the model appends to unbounded-length type names.
const MAX_SUFFIX: &str = "(max)";

/// One size facet as declared by the model: a value plus whether that value
/// is a constant of the type rather than a per-column override.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Facet<T> {
    /// Declared value, if any.
    pub value: Option<T>,
    /// True when the value is fixed by the type and carries no
    /// column-level information.
    pub is_constant: bool,
}

impl<T> Facet<T> {
    /// A real per-column override.
    pub fn new(value: T) -> Self {
        Facet {
            value: Some(value),
            is_constant: false,
        }
    }

    /// A value the model reports but marks as a constant of the type.
    pub fn constant(value: T) -> Self {
        Facet {
            value: Some(value),
            is_constant: true,
        }
    }

    /// No declared value.
    pub fn none() -> Self {
        Facet {
            value: None,
            is_constant: false,
        }
    }

    /// The value to honor: `None` for constants and absent facets alike.
    pub fn effective(&self) -> Option<T>
    where
        T: Copy,
    {
        if self.is_constant {
            None
        } else {
            self.value
        }
    }
}

/// One property as declared by the ORM model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelProperty {
    /// Property (column) name.
    pub name: String,

    /// Declared store type name, possibly carrying the "(max)" suffix.
    pub type_name: String,

    /// Whether the column allows NULL.
    pub is_nullable: bool,

    /// Whether the store generates the value on insert.
    pub is_generated_on_insert: bool,

    /// Declared maximum length facet.
    pub max_length: Facet<i32>,

    /// Declared precision facet.
    pub precision: Facet<u8>,

    /// Declared scale facet.
    pub scale: Facet<u8>,
}

impl ColumnDef {
    /// Build the canonical descriptor from one model property.
    ///
    /// Model-specific corrections, in order: strip the "(max)" suffix into
    /// the unbounded marker; reinterpret generated-on-insert on
    /// uniqueidentifier columns as a NEWID() default rather than identity;
    /// move the time type's fractional precision into scale; then the
    /// shared size rules. Constant facets are dropped when read, so the
    /// guid and time corrections only ever see real overrides.
    pub fn from_model(property: &ModelProperty, table_name: &str) -> ColumnDef {
        let (type_name, is_max) = match property.type_name.strip_suffix(MAX_SUFFIX) {
            Some(stripped) => (stripped, true),
            None => (property.type_name.as_str(), false),
        };
        let is_guid = type_name.eq_ignore_ascii_case("uniqueidentifier");

        let mut col = ColumnDef::new(&property.name, type_name);
        col.is_nullable = property.is_nullable;
        col.is_max_length = is_max;
        col.is_identity = property.is_generated_on_insert && !is_guid;
        col.max_length = property.max_length.effective();
        col.precision = property.precision.effective();
        col.scale = property.scale.effective();

        if property.is_generated_on_insert && is_guid {
            // Generated-on-insert for a guid means "defaults to a fresh id",
            // not auto-increment.
            col.default_constraint = Some(format!(
                "CONSTRAINT DF_{}_{} DEFAULT NEWID()",
                table_name, col.name
            ));
        }
        if type_name.eq_ignore_ascii_case("time") {
            // The model declares fractional digits as precision; rendering
            // needs them as scale.
            col.scale = col.precision.take();
        }
        apply_size_rules(&mut col);

        col
    }
}
