//! Document composition
//!
//! Turns a profile's template, styles, scripts and logo into one HTML string
//! with the runtime config injected.

// Sub-modules
pub mod document;
pub mod errors;
pub mod injector;
pub mod profile;

// Re-exports for public API
pub use document::{ComposedDocument, DocumentComposer, RenderFrame, RenderOutcome};
pub use errors::{ComposeError, ComposeResult};
pub use injector::{config_script, external_script_tag, script_safe_json};
pub use profile::{AdminPage, LogoSubstitution, ParseProfileError, Profile, ProfileKind, ProfileSpec};
