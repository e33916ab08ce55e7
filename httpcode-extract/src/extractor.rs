use crate::error::{ExtractError, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, error, info};

/// Code → description pairs as found in the document.
pub type StatusMap = BTreeMap<String, String>;

/// Descriptions longer than this are cut and suffixed with `...`.
pub const MAX_DESCRIPTION_WORDS: usize = 100;

// A term qualifies when it opens with exactly three digits and a reason phrase.
static CODE_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{3})\s").expect("static regex is valid"));

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ExtractError::Parse(format!("bad selector '{}': {}", css, e)))
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>()
}

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep at most `max_words` words, marking a cut with `...`.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }
    format!("{}...", words[..max_words].join(" "))
}

/// Extract every `<dt>`/`<dd>` pair whose term starts with a status code.
///
/// Terms and descriptions are paired by position inside each `<dl>`. A term
/// without a matching description is skipped.
pub fn extract_status_codes(html: &str) -> Result<StatusMap> {
    let document = Html::parse_document(html);

    let dl_selector = selector("dl")?;
    let dt_selector = selector("dt")?;
    let dd_selector = selector("dd")?;

    let mut codes = StatusMap::new();

    for dl in document.select(&dl_selector) {
        let terms: Vec<ElementRef> = dl.select(&dt_selector).collect();
        let descriptions: Vec<ElementRef> = dl.select(&dd_selector).collect();

        for (i, term) in terms.iter().enumerate() {
            let term_text = element_text(term);
            let Some(captures) = CODE_TERM.captures(term_text.trim()) else {
                debug!("Skipping term without status code: {:?}", term_text.trim());
                continue;
            };
            let Some(dd) = descriptions.get(i) else {
                debug!("Term {} has no description, skipping", &captures[1]);
                continue;
            };

            let description = normalize_whitespace(&element_text(dd));
            let description = truncate_words(&description, MAX_DESCRIPTION_WORDS);
            codes.insert(captures[1].to_string(), description);
        }
    }

    info!("Extracted {} status codes", codes.len());
    Ok(codes)
}

/// Read `path` as UTF-8 and extract its status codes.
pub fn extract_from_file(path: &Path) -> Result<StatusMap> {
    let html = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    extract_status_codes(&html)
}

/// Like [`extract_status_codes`], but logs failures and returns an empty map.
pub fn extract_lossy(html: &str) -> StatusMap {
    extract_status_codes(html).unwrap_or_else(|e| {
        error!("Error parsing HTML document: {}", e);
        StatusMap::new()
    })
}

/// Like [`extract_from_file`], but logs failures and returns an empty map.
pub fn extract_file_lossy(path: &Path) -> StatusMap {
    extract_from_file(path).unwrap_or_else(|e| {
        error!("Error parsing HTML file: {}", e);
        StatusMap::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_term_requires_three_digits() {
        assert!(CODE_TERM.is_match("404 Not Found"));
        assert!(CODE_TERM.is_match("404\tNot Found"));
        assert!(!CODE_TERM.is_match("200"));
        assert!(!CODE_TERM.is_match("4040 Not Found"));
        assert!(!CODE_TERM.is_match("40 Not Found"));
        assert!(!CODE_TERM.is_match("Not Found 404"));
    }

    #[test]
    fn test_element_text_flattens_children() {
        let document = Html::parse_fragment("<dd>Hello <code>world</code>!</dd>");
        let dd = selector("dd").unwrap();
        let element = document.select(&dd).next().unwrap();
        assert_eq!(element_text(&element), "Hello world!");
    }
}
