//! Test utilities and helper functions for the docshell test suite

use kodegen_tools_docshell::{RuntimeConfig, ShellConfig};
use std::path::Path;
use tempfile::TempDir;

/// Bytes of a tiny PNG signature used as the logo fixture
#[allow(dead_code)]
pub const LOGO_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Creates a test HTML document with the markers composition needs
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ar" dir="rtl">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// Write `content` to `rel` under `root`, creating parent directories
#[allow(dead_code)]
pub fn write_file(root: &Path, rel: &str, content: impl AsRef<[u8]>) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// A content root laid out like the shipped shell
#[allow(dead_code)]
pub fn create_content_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write_file(
        root,
        "src/index.html",
        create_test_html("Rawi", r#"<img class="logo" src="../public/logo.png" alt="logo">"#),
    );
    write_file(root, "src/styles/style.css", "body { color: #2C4A3B; }");
    write_file(root, "src/js/chatbot.js", "const CHATBOT = 1;");
    write_file(root, "src/js/ai.js", "const AI = 2;");
    write_file(root, "public/logo.png", LOGO_BYTES);

    write_file(
        root,
        "admin/dashboard.html",
        create_test_html("Dashboard", r#"<img src="public/admin-logo.png"><canvas id="c"></canvas>"#),
    );
    write_file(
        root,
        "admin/cms.html",
        create_test_html("CMS", r#"<img src="public/admin-logo.png"><table id="t"></table>"#),
    );
    write_file(root, "admin/src/styles/style.css", ".admin { margin: 0; }");
    write_file(root, "admin/src/js/admin.js", "const ADMIN = 3;");
    write_file(root, "admin/public/admin-logo.png", LOGO_BYTES);

    write_file(
        root,
        "src/data/landmarks.json",
        r#"{"landmarks":[{"id":1,"name":"A"}]}"#,
    );

    dir
}

#[allow(dead_code)]
pub fn shell_config(root: &Path) -> ShellConfig {
    ShellConfig::builder().content_root(root).build().unwrap()
}

#[allow(dead_code)]
pub fn runtime(endpoint: &str, remote_key: &str, api_key: &str) -> RuntimeConfig {
    RuntimeConfig {
        cache_enabled: true,
        remote_endpoint: endpoint.to_string(),
        remote_key: remote_key.to_string(),
        api_key: api_key.to_string(),
    }
}
