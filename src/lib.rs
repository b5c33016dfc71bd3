/*!
# plotkit - client-side tools for a hosted plotting service

plotkit covers the local half of working with a hosted plotting service:

- building multi-plot figures whose axes are laid out on a subplot grid
- coercing loosely structured JSON into typed, schema-checked graph objects
- producing embeddable iframe HTML for a hosted plot
- managing the credentials and plot-option files kept under `~/.plotly`

## Example

```rust,ignore
use plotkit::tools::{get_subplots, SubplotSpec};

let fig = get_subplots(&SubplotSpec::new(2, 2))?;
println!("{}", serde_json::to_string_pretty(&fig)?);
```

## Core Components

- [`graph_objs`] - graph object variants, schemas and the variant registry
- [`tools`] - subplot grids, object coercion and embeds
- [`config`] - local credential and plot-option files
*/

pub mod config;
pub mod graph_objs;
pub mod tools;

pub use graph_objs::{GraphObject, ObjType, Registry};

/// Version of the plotkit crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum PlotkitError {
    #[error("Schema validation error: {0}")]
    SchemaValidation(String),

    #[error(
        "Type resolution error: neither '{object_type}' nor {} is a recognizable graph object",
        format_hint(.hint)
    )]
    TypeResolution {
        /// Lower-cased type name of the object itself
        object_type: String,
        /// Lower-cased type hint supplied by the caller, if any
        hint: Option<String>,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlotkitError>;

fn format_hint(hint: &Option<String>) -> String {
    match hint {
        Some(h) => format!("'{}'", h),
        None => "the missing hint".to_string(),
    }
}
