//! # mssql-migrate-gen
//!
//! Column-metadata normalization and migration-script cataloging for SQL
//! Server schema migration tooling.
//!
//! Two loosely-coupled concerns live here:
//!
//! - **Column DDL**: metadata from a live catalog or an ORM model is
//!   normalized into one canonical [`ColumnDef`] and rendered as a
//!   column-definition clause with a fixed token order.
//! - **Script catalog**: a directory tree of `.sql` scripts is discovered,
//!   ordered deterministically by execution phase and path, and validated
//!   for global filename uniqueness.
//!
//! ## Example
//!
//! ```rust
//! use mssql_migrate_gen::{CatalogColumn, ColumnDef};
//!
//! let record = CatalogColumn {
//!     name: "Age".to_string(),
//!     data_type: "int".to_string(),
//!     max_length: 4,
//!     precision: 10,
//!     scale: 0,
//!     is_nullable: false,
//!     is_identity: false,
//!     is_rowguidcol: false,
//!     is_user_defined: false,
//!     default: None,
//! };
//! let column = ColumnDef::from_catalog(&record);
//! assert_eq!(column.to_ddl(true), " [Age] [int] NOT NULL");
//! ```

pub mod ddl;
pub mod error;
pub mod scripts;

// Re-exports for convenient access
pub use ddl::{CatalogColumn, ColumnDef, DefaultConstraint, Facet, ModelProperty, SizeClass};
pub use error::{MigrateGenError, Result};
pub use scripts::{ConventionClassifier, ScriptClassifier, ScriptFile, ScriptKind, ScriptLoader};
