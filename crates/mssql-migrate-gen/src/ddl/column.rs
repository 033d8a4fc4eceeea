//! Canonical column descriptor and its DDL clause renderer.
//!
//! Both metadata sources (live catalog, ORM model) funnel into [`ColumnDef`];
//! the renderer is the single place that turns a descriptor back into T-SQL
//! text.

use serde::{Deserialize, Serialize};

/// Canonical, source-agnostic description of one table column.
///
/// At most one size family carries values: `max_length` (or the
/// `is_max_length` marker), or `precision`/`scale`. Which one is decided by
/// the data type via [`super::rules::apply_size_rules`], never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name.
    pub name: String,

    /// Data type name (e.g. "int", "nvarchar", "datetime2").
    pub data_type: String,

    /// Whether the column allows NULL.
    pub is_nullable: bool,

    /// Whether the column value is engine-generated on insert.
    pub is_identity: bool,

    /// Whether the column is the table's ROWGUIDCOL.
    pub is_rowguid: bool,

    /// Full default-constraint clause text, when the column has one.
    pub default_constraint: Option<String>,

    /// Character count (or byte count for binary types); `None` when length
    /// does not apply to the type.
    pub max_length: Option<i32>,

    /// Type is declared with an unbounded "(max)" length. When set,
    /// `max_length` is ignored.
    pub is_max_length: bool,

    /// Numeric or fractional-seconds precision.
    pub precision: Option<u8>,

    /// Numeric or fractional-seconds scale.
    pub scale: Option<u8>,
}

impl ColumnDef {
    /// Create a descriptor with only name and type set.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        ColumnDef {
            name: name.into(),
            data_type: data_type.into(),
            is_nullable: false,
            is_identity: false,
            is_rowguid: false,
            default_constraint: None,
            max_length: None,
            is_max_length: false,
            precision: None,
            scale: None,
        }
    }

    /// Render the column-definition clause.
    ///
    /// Token order is a wire contract downstream DDL consumers depend on:
    /// name and type, size qualifier, nullability, ROWGUIDCOL, default
    /// constraint, IDENTITY. The clause starts with a space and every
    /// segment after the size qualifier carries its own leading space.
    /// CREATE TABLE callers that add constraints in a separate statement
    /// pass `include_default_constraint = false`.
    pub fn to_ddl(&self, include_default_constraint: bool) -> String {
        let mut out = format!(
            " {} {}{}",
            quote_ident(&self.name),
            quote_ident(&self.data_type),
            self.size_qualifier()
        );
        out.push_str(&self.default_value());
        out.push_str(if self.is_nullable { " NULL" } else { " NOT NULL" });
        if self.is_rowguid {
            out.push_str(" ROWGUIDCOL");
        }
        if include_default_constraint {
            if let Some(default) = &self.default_constraint {
                out.push(' ');
                out.push_str(default);
            }
        }
        if self.is_identity {
            out.push_str(" IDENTITY");
        }
        out
    }

    /// Size qualifier abutting the type token: `(max)`, `(length)`,
    /// `(precision,scale)`, `(precision)`, `(scale)`, or nothing.
    fn size_qualifier(&self) -> String {
        if self.is_max_length {
            return "(max)".to_string();
        }
        if let Some(len) = self.max_length {
            return format!("({})", len);
        }
        match (self.precision, self.scale) {
            (Some(p), Some(s)) => format!("({},{})", p, s),
            (Some(p), None) => format!("({})", p),
            (None, Some(s)) => format!("({})", s),
            (None, None) => String::new(),
        }
    }

    /// Literal default values (as opposed to named default constraints) are
    /// not rendered yet. The segment stays a separate hook so the token
    /// layout will not shift when they land.
    fn default_value(&self) -> String {
        String::new()
    }
}

/// Quote an identifier with square brackets, doubling any closing bracket.
pub fn quote_ident(name: &str) -> String {
    format!("[{}]", name.replace(']', "]]"))
}
