//! # Dynaform Kernel
//!
//! Schema-driven form field ordering: given a JSON-Schema document and a
//! parallel UI overlay, compute the sequence in which a form renderer
//! should lay out each level of fields.
//!
//! This crate is **renderer-agnostic**: it does not prescribe widgets,
//! layout, or styling. It only prescribes order, derived from which fields
//! are required, which carry UI hints, and which control the visibility of
//! others.
//!
//! ## Architecture
//!
//! ```text
//! SchemaNode             ← typed view of a draft-07-like schema fragment
//!     │
//! UiSchemaNode           ← overlay: sort hints, widget bindings, dependencies
//!     │
//! introspect             ← per-property facts (renderability, control fields)
//!     │
//! LevelWeights           ← banded sort weights for one object level
//!     │
//! OrderTree              ← the ordering overlay a renderer consumes
//! ```
//!
//! Every computation is a pure, total function over caller-supplied
//! documents: malformed fragments degrade to `Unknown` and produce no
//! ordering contribution instead of failing.

pub mod diagnostic;
pub mod error;
pub mod introspect;
pub mod label;
pub mod order;
pub mod path;
pub mod prune;
pub mod schema;
pub mod uischema;
pub mod weight;

pub use diagnostic::{SchemaDiagnostic, validate_schema};
pub use error::PathError;
pub use introspect::{control_fields_at, has_no_fields, min_sort_order};
pub use label::{schema_description, schema_label, start_case};
pub use order::{OrderTree, build_order, schema_order};
pub use path::string_path_to_ui_path;
pub use prune::prune;
pub use schema::{Primitive, SchemaNode, SchemaShape};
pub use uischema::{FieldDependency, UiOptions, UiSchemaNode};
