use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::model::{PropertySet, WarningRecord};

static LINK_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"C[0-9]{4,5}$").unwrap());
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"C[0-9]{4,5}").unwrap());
static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Extract the diagnostic code from an anchor's text.
///
/// Anchors containing "warnings" are section headers in the navigation menu
/// ("Compiler warnings C4000 - C4199"), not individual warning pages.
pub fn warning_id(text: &str) -> Option<&str> {
    if text.contains("warnings") {
        return None;
    }
    CODE_RE.find(text).map(|m| m.as_str())
}

/// Scan an index page's anchors for warning links and insert any codes not
/// seen before. Newly inserted records receive the page's default properties,
/// non-overriding; records discovered by an earlier page keep that page's
/// defaults.
///
/// Returns the number of records added.
pub fn harvest_links(
    html: &str,
    defaults: &PropertySet,
    records: &mut HashMap<String, WarningRecord>,
) -> usize {
    let doc = Html::parse_document(html);
    let mut added = 0;

    for anchor in doc.select(&ANCHOR_SEL) {
        let text: String = anchor.text().collect();
        let text = text.trim();
        if !LINK_TEXT_RE.is_match(text) {
            continue;
        }
        let Some(id) = warning_id(text) else { continue };
        let Some(href) = anchor.value().attr("href") else { continue };
        if href.is_empty() || records.contains_key(id) {
            continue;
        }
        debug!("harvested {} -> {}", id, href);
        let mut record = WarningRecord::new(id, href);
        record.apply(defaults, false);
        records.insert(id.to_string(), record);
        added += 1;
    }

    added
}
