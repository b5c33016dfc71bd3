//! User-facing tools built on the graph objects
//!
//! - `subplots` - figures with axes laid out on a subplot grid
//! - `coerce` - turning arbitrary values into cleaned graph objects
//! - `embed` - iframe HTML for hosted plots

pub mod coerce;
pub mod embed;
pub mod subplots;

pub use coerce::{get_valid_graph_obj, Coercer, Coercible};
pub use embed::{get_embed, Length};
pub use subplots::{get_subplots, grid_preview, subplot_domains, SubplotDomain, SubplotSpec};
