pub mod advisory;
pub mod composer;
pub mod config;
pub mod data_source;
pub mod inline_assets;
pub mod session;
pub mod utils;

use std::sync::Arc;

pub use advisory::{Advisory, Severity};
pub use composer::{
    AdminPage, ComposeError, ComposedDocument, DocumentComposer, Profile, ProfileKind,
    RenderFrame, RenderOutcome,
};
pub use config::{ConfigError, RuntimeConfig, ShellConfig};
pub use data_source::{
    DataRecord, DataSourceResolver, RecordSource, RemoteQueryError, RemoteStore, Resolved,
    SupabaseStore,
};
pub use inline_assets::{ResourceLoader, inline_image};
pub use session::SelectionSession;

/// Compose one profile with a throwaway composer
///
/// Any failure comes back as an advisory with no document.
#[must_use]
pub fn render(config: &ShellConfig, runtime: Arc<RuntimeConfig>, profile: Profile) -> RenderOutcome {
    DocumentComposer::new(config, runtime).render(profile)
}
