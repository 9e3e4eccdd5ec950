//! Shared configuration constants for docshell
//!
//! This module contains default values, content-root layout paths and wire names
//! used throughout the codebase to ensure consistency and avoid magic strings.

/// Default freshness window for remote records: 1 hour
///
/// A cached record set is served without touching the remote store until this
/// many seconds have elapsed since it was fetched.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 60;

/// Default timeout for a single remote store request: 30 seconds
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 30;

/// Height of the embedded frame the composed document is displayed in
pub const RENDER_FRAME_HEIGHT: u32 = 850;

/// Closing head marker; styles, config and third-party tags go right before it
pub const HEAD_CLOSE_MARKER: &str = "</head>";

/// Closing body marker; the merged script blob goes right before it
pub const BODY_CLOSE_MARKER: &str = "</body>";

/// Global object carrying cache enablement and remote connection settings
pub const REMOTE_CONFIG_GLOBAL: &str = "SUPABASE_CONFIG";

/// Global object carrying the assistant API key
pub const API_CONFIG_GLOBAL: &str = "GEMINI_CONFIG";

/// Charting library injected into every administration page
pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@3.9.1/dist/chart.min.js";

/// Remote table / query key holding the landmark records
pub const DEFAULT_RECORDS_KEY: &str = "landmarks";

/// Bundled fallback dataset, relative to the content root
pub const DEFAULT_FALLBACK_PATH: &str = "src/data/landmarks.json";

/// Environment variables read once at startup
pub const ENV_REMOTE_URL: &str = "SUPABASE_URL";
pub const ENV_REMOTE_KEY: &str = "SUPABASE_KEY";
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_CACHE_ENABLED: &str = "REMOTE_CACHE_ENABLED";

// Primary profile layout
pub const PRIMARY_TEMPLATE: &str = "src/index.html";
pub const PRIMARY_STYLES: &[&str] = &["src/styles/style.css"];
pub const PRIMARY_SCRIPTS: &[&str] = &["src/js/chatbot.js", "src/js/ai.js"];
pub const PRIMARY_LOGO: &str = "public/logo.png";
pub const PRIMARY_LOGO_LITERAL: &str = r#"src="../public/logo.png""#;

// Administration profile layout
pub const ADMIN_DASHBOARD_TEMPLATE: &str = "admin/dashboard.html";
pub const ADMIN_CMS_TEMPLATE: &str = "admin/cms.html";
pub const ADMIN_STYLES: &[&str] = &["admin/src/styles/style.css"];
pub const ADMIN_SCRIPTS: &[&str] = &["admin/src/js/admin.js"];
pub const ADMIN_LOGO: &str = "admin/public/admin-logo.png";
pub const ADMIN_LOGO_LITERAL: &str = r#"src="public/admin-logo.png""#;
