//! Graph objects for the hosted plotting service
//!
//! This module defines the fixed set of graph object variants (figures,
//! layouts, axes, traces, ...), the field table each variant accepts, and the
//! registry used to resolve variants by name.
//!
//! # Architecture
//!
//! - `types` - `ObjType` and the field/item kind descriptors
//! - `schema` - static field tables per variant
//! - `object` - `GraphObject` instances and the `GraphObjTrait` capabilities
//! - `registry` - immutable name-to-variant lookup

mod object;
mod registry;
mod schema;
mod types;

pub(crate) use object::json_kind;
pub use object::{GraphObjTrait, GraphObject, PlotlyDict, PlotlyList};
pub use registry::Registry;
pub use schema::axis_slot;
pub use types::{FieldKind, ItemKind, ObjShape, ObjType};
