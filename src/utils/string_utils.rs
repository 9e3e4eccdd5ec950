//! Literal string helpers used by document composition and config loading
//!
//! Composition is literal substitution only. These helpers keep the anchor
//! handling in one place so every insertion point behaves the same way.

/// Insert each `(marker, insertion)` pair before the first occurrence of its
/// marker in the original `text`.
///
/// Every position is located before anything is inserted, so inserted text can
/// never become an anchor for a later pair. Pairs whose markers sit at the same
/// offset are inserted in the order given. Returns `Err(marker)` for the first
/// marker that does not occur in `text`.
///
/// # Examples
/// ```
/// # use kodegen_tools_docshell::utils::string_utils::insert_before_anchors;
/// let html = "<head></head><body></body>";
/// let out = insert_before_anchors(html, &[("</head>", "<style>/* </body> */</style>"), ("</body>", "<script></script>")]).unwrap();
/// assert_eq!(out, "<head><style>/* </body> */</style></head><body><script></script></body>");
///
/// assert_eq!(insert_before_anchors("<body></body>", &[("</head>", "x")]), Err("</head>"));
/// ```
pub fn insert_before_anchors<'m>(
    text: &str,
    anchors: &[(&'m str, &str)],
) -> Result<String, &'m str> {
    let mut positions = Vec::with_capacity(anchors.len());
    for &(marker, insertion) in anchors {
        let idx = text.find(marker).ok_or(marker)?;
        positions.push((idx, insertion));
    }
    // Stable: equal offsets keep their listed order
    positions.sort_by_key(|&(idx, _)| idx);

    let extra: usize = positions.iter().map(|(_, insertion)| insertion.len()).sum();
    let mut out = String::with_capacity(text.len() + extra);
    let mut cursor = 0;
    for (idx, insertion) in positions {
        out.push_str(&text[cursor..idx]);
        out.push_str(insertion);
        cursor = idx;
    }
    out.push_str(&text[cursor..]);
    Ok(out)
}

/// Parse a boolean environment flag.
///
/// Accepts `1/0`, `true/false`, `yes/no` and `on/off` in any case, ignoring
/// surrounding whitespace. Anything else yields `None`.
///
/// # Examples
/// ```
/// # use kodegen_tools_docshell::utils::string_utils::parse_flag;
/// assert_eq!(parse_flag(" Yes "), Some(true));
/// assert_eq!(parse_flag("off"), Some(false));
/// assert_eq!(parse_flag("maybe"), None);
/// ```
#[must_use]
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
