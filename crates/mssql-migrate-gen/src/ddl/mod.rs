//! Column metadata normalization and DDL clause rendering.
//!
//! Two adapters converge on the canonical [`ColumnDef`]:
//! [`ColumnDef::from_catalog`] for live-catalog records and
//! [`ColumnDef::from_model`] for ORM model properties. [`ColumnDef::to_ddl`]
//! renders the clause text. The size rules both adapters share live in
//! [`rules`].

pub mod catalog;
pub mod column;
pub mod model;
pub mod rules;

pub use catalog::{CatalogColumn, DefaultConstraint};
pub use column::{quote_ident, ColumnDef};
pub use model::{Facet, ModelProperty};
pub use rules::{apply_size_rules, size_class, SizeClass};
