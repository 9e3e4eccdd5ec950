//! Document composition
//!
//! Merges a profile's template with its styles, scripts, inlined logo and the
//! runtime config block into one self-contained HTML string. Every call re-reads
//! every file; nothing is cached between compositions.

use serde::Serialize;
use std::sync::Arc;

use super::errors::{ComposeError, ComposeResult};
use super::injector::{config_script, external_script_tag};
use super::profile::{Profile, ProfileSpec};
use crate::advisory::Advisory;
use crate::config::{RuntimeConfig, ShellConfig};
use crate::inline_assets::{ResourceLoader, SkippedResource, inline_image};
use crate::utils::{BODY_CLOSE_MARKER, HEAD_CLOSE_MARKER, RENDER_FRAME_HEIGHT, insert_before_anchors};

/// How the host should display a composed document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderFrame {
    pub height: u32,
    pub scrolling: bool,
}

impl Default for RenderFrame {
    fn default() -> Self {
        Self {
            height: RENDER_FRAME_HEIGHT,
            scrolling: true,
        }
    }
}

/// The merged document, owned by the caller that requested it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedDocument {
    pub profile: Profile,
    pub html: String,
    pub frame: RenderFrame,
    /// Listed styles and scripts that were absent and left out
    pub skipped: Vec<SkippedResource>,
}

impl ComposedDocument {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.html
    }

    #[must_use]
    pub fn into_html(self) -> String {
        self.html
    }
}

/// Result of a render request at the caller boundary
///
/// `document` is `None` whenever composition failed; the reason is in
/// `advisories`. A partial document is never returned.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub document: Option<ComposedDocument>,
    pub advisories: Vec<Advisory>,
}

/// Composes documents for the shell's profiles
#[derive(Debug, Clone)]
pub struct DocumentComposer {
    loader: ResourceLoader,
    runtime: Arc<RuntimeConfig>,
    max_inline_image_size_bytes: Option<usize>,
}

impl DocumentComposer {
    #[must_use]
    pub fn new(config: &ShellConfig, runtime: Arc<RuntimeConfig>) -> Self {
        Self {
            loader: ResourceLoader::new(config.content_root()),
            runtime,
            max_inline_image_size_bytes: config.max_inline_image_size_bytes(),
        }
    }

    #[must_use]
    pub fn runtime(&self) -> &RuntimeConfig {
        &self.runtime
    }

    /// Compose one document for `profile`
    pub fn compose(&self, profile: Profile) -> ComposeResult<ComposedDocument> {
        let spec = profile.spec();
        let loaded = self.loader.load(spec.template, spec.styles, spec.scripts)?;
        if loaded.has_skipped() {
            log::info!(
                "Composing {profile} without {} missing resource(s)",
                loaded.skipped.len()
            );
        }

        let template = self.substitute_logo(&spec, loaded.template);

        let mut head = String::new();
        for url in spec.third_party_scripts {
            head.push_str(&external_script_tag(url));
        }
        head.push_str(&config_script(&self.runtime)?);
        head.push_str("<style>");
        head.push_str(&loaded.styles);
        head.push_str("</style>");

        let body = format!("<script>{}</script>", loaded.scripts);

        // Anchors are located in the template itself, never in merged content
        let html = insert_before_anchors(
            &template,
            &[(HEAD_CLOSE_MARKER, head.as_str()), (BODY_CLOSE_MARKER, body.as_str())],
        )
        .map_err(|marker| ComposeError::MissingAnchor {
            template: self.loader.root().join(spec.template),
            marker,
        })?;

        log::debug!("Composed {profile}: {} bytes", html.len());

        Ok(ComposedDocument {
            profile,
            html,
            frame: RenderFrame::default(),
            skipped: loaded.skipped,
        })
    }

    /// Compose and convert any failure into an advisory
    #[must_use]
    pub fn render(&self, profile: Profile) -> RenderOutcome {
        match self.compose(profile) {
            Ok(document) => RenderOutcome {
                document: Some(document),
                advisories: Vec::new(),
            },
            Err(e) => {
                log::error!("Failed to compose {profile}: {e}");
                RenderOutcome {
                    document: None,
                    advisories: vec![Advisory::error(format!(
                        "Could not render {profile}: {e}"
                    ))],
                }
            }
        }
    }

    fn substitute_logo(&self, spec: &ProfileSpec, template: String) -> String {
        let Some(logo) = spec.logo else {
            return template;
        };

        let image_path = self.loader.root().join(logo.image);
        match inline_image(&image_path, self.max_inline_image_size_bytes) {
            Some(data_uri) => template.replace(logo.literal, &format!(r#"src="{data_uri}""#)),
            None => template,
        }
    }
}
