//! Build configuration model for latch.
//!
//! The crate owns the declarative build configuration consumed by an
//! external bundler runner: the entry module, the output descriptor and
//! the ordered plugin pipeline, together with file discovery, layered
//! loading, profile overlays, validation and structural equivalence.
//! It deliberately contains no bundling logic.

pub mod bundle;
pub mod config;
pub mod discovery;
pub mod equivalence;
pub mod error;
pub mod settings;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use config::*;
pub use error::*;
pub use settings::*;

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, discover, discover_with_profile, load_layered};
pub use validation::{
    ConfigValidator, FsValidator, SchemaValidator, Warning, collect_warnings, validate_fs,
    validate_schema,
};
