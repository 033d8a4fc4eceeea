//! Catalog-source metadata records and their adapter.
//!
//! Records are shaped after the system catalog's column view, which has its
//! own quirks: lengths arrive in storage bytes, fractional-seconds types
//! report internal storage precision rather than fractional digits, and an
//! unbounded length is signalled as -1. The adapter folds those quirks into
//! the canonical descriptor.

use serde::{Deserialize, Serialize};

use super::column::ColumnDef;
use super::rules::{apply_size_rules, size_class, SizeClass};

/// One column row as read from the live catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogColumn {
    /// Column name.
    pub name: String,

    /// Data type name as reported by the catalog.
    pub data_type: String,

    /// Storage length in bytes; -1 for "(max)" types.
    pub max_length: i32,

    /// Reported precision. For fractional-seconds types this is the
    /// internal storage precision, not the declared digit count.
    pub precision: u8,

    /// Reported scale.
    pub scale: u8,

    /// Whether the column allows NULL.
    pub is_nullable: bool,

    /// Whether the column is an identity column.
    pub is_identity: bool,

    /// Whether the column is the table's ROWGUIDCOL.
    pub is_rowguidcol: bool,

    /// Whether the type is user-defined rather than a system type.
    pub is_user_defined: bool,

    /// Default object bound to the column, if any.
    pub default: Option<DefaultConstraint>,
}

/// A default object attached to a catalog column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultConstraint {
    /// Constraint name.
    pub name: String,

    /// Default definition text, e.g. "((0))" or "(getdate())".
    pub definition: String,

    /// Whether the engine generated the constraint name.
    pub is_system_named: bool,
}

impl ColumnDef {
    /// Build the canonical descriptor from one catalog record.
    ///
    /// Catalog-specific corrections, applied around the shared size rules:
    /// a length of -1 becomes the unbounded marker; double-byte character
    /// lengths are halved from storage bytes to characters; fractional-
    /// seconds types drop the catalog's storage precision (only scale holds
    /// the fractional digit count); user-defined types drop every size
    /// attribute.
    pub fn from_catalog(record: &CatalogColumn) -> ColumnDef {
        let mut col = ColumnDef::new(&record.name, &record.data_type);
        col.is_nullable = record.is_nullable;
        col.is_identity = record.is_identity;
        col.is_rowguid = record.is_rowguidcol;
        col.is_max_length = record.max_length == -1;
        col.max_length = (record.max_length != -1).then_some(record.max_length);
        col.precision = Some(record.precision);
        col.scale = Some(record.scale);

        match size_class(&record.data_type) {
            Some(SizeClass::WideLength) => {
                col.max_length = col.max_length.map(|bytes| bytes / 2);
            }
            Some(SizeClass::FractionalSeconds) => {
                col.precision = None;
            }
            _ => {}
        }
        apply_size_rules(&mut col);

        if record.is_user_defined {
            col.max_length = None;
            col.precision = None;
            col.scale = None;
        }

        if let Some(default) = &record.default {
            col.default_constraint = Some(if default.is_system_named {
                format!("DEFAULT {}", default.definition)
            } else {
                format!("CONSTRAINT {} DEFAULT {}", default.name, default.definition)
            });
        }

        col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_record(data_type: &str) -> CatalogColumn {
        CatalogColumn {
            name: "Col".to_string(),
            data_type: data_type.to_string(),
            max_length: 0,
            precision: 0,
            scale: 0,
            is_nullable: false,
            is_identity: false,
            is_rowguidcol: false,
            is_user_defined: false,
            default: None,
        }
    }

    // =========================================================================
    // Size normalization tests
    // =========================================================================

    #[test]
    fn test_fixed_scalar_drops_all_size_attributes() {
        let mut record = make_test_record("int");
        record.max_length = 4;
        record.precision = 10;
        let col = ColumnDef::from_catalog(&record);
        assert_eq!(col.max_length, None);
        assert_eq!(col.precision, None);
        assert_eq!(col.scale, None);
        assert!(!col.is_max_length);
        assert_eq!(col.to_ddl(true), " [Col] [int] NOT NULL");
    }

    #[test]
    fn test_wide_char_length_halved() {
        let mut record = make_test_record("nvarchar");
        record.max_length = 100;
        let col = ColumnDef::from_catalog(&record);
        assert_eq!(col.max_length, Some(50));
        assert_eq!(col.to_ddl(true), " [Col] [nvarchar](50) NOT NULL");
    }

    #[test]
    fn test_narrow_char_length_kept_as_is() {
        let mut record = make_test_record("varchar");
        record.max_length = 100;
        let col = ColumnDef::from_catalog(&record);
        assert_eq!(col.max_length, Some(100));
    }

    #[test]
    fn test_unbounded_length() {
        let mut record = make_test_record("nvarchar");
        record.max_length = -1;
        let col = ColumnDef::from_catalog(&record);
        assert!(col.is_max_length);
        assert_eq!(col.max_length, None);
        assert_eq!(col.to_ddl(true), " [Col] [nvarchar](max) NOT NULL");
    }

    #[test]
    fn test_fractional_seconds_keeps_scale_only() {
        let mut record = make_test_record("datetime2");
        record.max_length = 8;
        record.precision = 27; // storage precision, not the declared digits
        record.scale = 7;
        let col = ColumnDef::from_catalog(&record);
        assert_eq!(col.precision, None);
        assert_eq!(col.scale, Some(7));
        assert_eq!(col.to_ddl(true), " [Col] [datetime2](7) NOT NULL");
    }

    #[test]
    fn test_decimal_keeps_precision_and_scale() {
        let mut record = make_test_record("decimal");
        record.max_length = 9;
        record.precision = 18;
        record.scale = 2;
        let col = ColumnDef::from_catalog(&record);
        assert_eq!(col.max_length, None);
        assert_eq!(col.precision, Some(18));
        assert_eq!(col.scale, Some(2));
        assert_eq!(col.to_ddl(true), " [Col] [decimal](18,2) NOT NULL");
    }

    #[test]
    fn test_float_drops_scale() {
        let mut record = make_test_record("float");
        record.max_length = 8;
        record.precision = 53;
        let col = ColumnDef::from_catalog(&record);
        assert_eq!(col.max_length, None);
        assert_eq!(col.precision, Some(53));
        assert_eq!(col.scale, None);
        assert_eq!(col.to_ddl(true), " [Col] [float](53) NOT NULL");
    }

    #[test]
    fn test_user_defined_type_drops_all_size_attributes() {
        let mut record = make_test_record("GeoPoint");
        record.is_user_defined = true;
        record.max_length = 16;
        record.precision = 5;
        record.scale = 2;
        let col = ColumnDef::from_catalog(&record);
        assert_eq!(col.max_length, None);
        assert_eq!(col.precision, None);
        assert_eq!(col.scale, None);
        // Casing of a user-defined type name is preserved for quoting.
        assert_eq!(col.to_ddl(true), " [Col] [GeoPoint] NOT NULL");
    }

    #[test]
    fn test_unknown_type_passes_through() {
        let mut record = make_test_record("mystery");
        record.max_length = 16;
        record.precision = 5;
        record.scale = 2;
        let col = ColumnDef::from_catalog(&record);
        assert_eq!(col.max_length, Some(16));
        assert_eq!(col.precision, Some(5));
        assert_eq!(col.scale, Some(2));
    }

    // =========================================================================
    // Flag and default-constraint tests
    // =========================================================================

    #[test]
    fn test_flags_carried_over() {
        let mut record = make_test_record("uniqueidentifier");
        record.is_nullable = true;
        record.is_rowguidcol = true;
        let col = ColumnDef::from_catalog(&record);
        assert!(col.is_nullable);
        assert!(col.is_rowguid);
        assert!(!col.is_identity);
        assert_eq!(col.to_ddl(true), " [Col] [uniqueidentifier] NULL ROWGUIDCOL");
    }

    #[test]
    fn test_identity_carried_over() {
        let mut record = make_test_record("bigint");
        record.is_identity = true;
        let col = ColumnDef::from_catalog(&record);
        assert!(col.is_identity);
        assert_eq!(col.to_ddl(true), " [Col] [bigint] NOT NULL IDENTITY");
    }

    #[test]
    fn test_named_default_constraint() {
        let mut record = make_test_record("int");
        record.default = Some(DefaultConstraint {
            name: "DF_Users_Age".to_string(),
            definition: "((0))".to_string(),
            is_system_named: false,
        });
        let col = ColumnDef::from_catalog(&record);
        assert_eq!(
            col.default_constraint.as_deref(),
            Some("CONSTRAINT DF_Users_Age DEFAULT ((0))")
        );
        assert_eq!(
            col.to_ddl(true),
            " [Col] [int] NOT NULL CONSTRAINT DF_Users_Age DEFAULT ((0))"
        );
    }

    #[test]
    fn test_system_named_default_omits_name() {
        let mut record = make_test_record("int");
        record.default = Some(DefaultConstraint {
            name: "DF__Users__Age__1A2B3C".to_string(),
            definition: "((0))".to_string(),
            is_system_named: true,
        });
        let col = ColumnDef::from_catalog(&record);
        assert_eq!(col.default_constraint.as_deref(), Some("DEFAULT ((0))"));
    }

    #[test]
    fn test_no_default_object() {
        let record = make_test_record("int");
        let col = ColumnDef::from_catalog(&record);
        assert_eq!(col.default_constraint, None);
    }
}
