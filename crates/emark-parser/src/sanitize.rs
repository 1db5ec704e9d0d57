//! Input sanitization.
//!
//! [`sanitize`] prepares raw text for block segmentation. Embedded script and
//! style regions are dropped, line endings are normalized, blank-line runs are
//! collapsed and markup metacharacters are escaped, except for the two
//! reserved tag openers `<Entity:` and `<Morphism:` which the tree builder
//! needs to see literally.
//!
//! Every `&gt;` is reverted to `>` at the end, not only the ones closing a
//! reserved tag, so `<div>` comes out as `&lt;div>`.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_REGION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script>").expect("valid regex"));

static STYLE_REGION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b.*?</style>").expect("valid regex"));

static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Escapes applied in order. `&` goes first so later entities are not escaped twice.
const ESCAPES: [(&str, &str); 5] = [
    ("&", "&amp;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("\"", "&quot;"),
    ("'", "&apos;"),
];

/// Escaped openers turned back into their literal form.
const RESERVED_OPENERS: [(&str, &str); 2] = [
    ("&lt;Entity:", "<Entity:"),
    ("&lt;Morphism:", "<Morphism:"),
];

/// Clean raw Entity Markup text.
///
/// Total for every input, including the empty string.
///
/// # Examples
///
/// ```
/// use emark_parser::sanitize::sanitize;
///
/// let cleaned = sanitize("<div><Entity: Foo></div>");
/// assert_eq!(cleaned, "&lt;div><Entity: Foo>&lt;/div>");
/// ```
pub fn sanitize(raw: &str) -> String {
    let text = strip_regions(raw);
    let text = text.replace("\r\n", "\n");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    let text = escape(&text);
    restore_reserved(&text)
}

fn strip_regions(raw: &str) -> String {
    let without_scripts = SCRIPT_REGION.replace_all(raw, "");
    STYLE_REGION.replace_all(&without_scripts, "").into_owned()
}

fn escape(text: &str) -> String {
    ESCAPES
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

fn restore_reserved(text: &str) -> String {
    let restored = RESERVED_OPENERS
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to));

    // Independent of the pass above: every closer comes back.
    restored.replace("&gt;", ">")
}
