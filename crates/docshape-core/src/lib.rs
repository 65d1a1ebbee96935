//! Docshape Core Library
//!
//! Shapes search result documents into response bodies.
//!
//! # Features
//! - Dotted path addressing mixing object keys and array indices
//! - Flattening of nested documents into path/value rows
//! - Projection of documents onto a set of paths
//! - JSON, XML and CSV rendering with configurable delimiters and labels
//! - Per-request output selection from query parameters

pub mod config;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod flatten;
pub mod params;
pub mod path;
pub mod project;
pub mod render;
pub mod transform;

pub use config::{Config, RenderConfig};
pub use dispatch::{Output, OutputDispatcher};
pub use error::{DocShapeError, Error, Result};
pub use extract::row_docs;
pub use flatten::{flatten, flatten_all, FlatDocument};
pub use params::RenderParams;
pub use project::{project, project_all};
pub use render::{FormatOptions, OutputFormat, Rendered};
pub use transform::{DocumentTransform, TransformRegistry};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "docshape";
