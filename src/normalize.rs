use std::sync::LazyLock;

use anyhow::{anyhow, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::model::WarningRecord;

static MAIN_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("main").unwrap());
static HEADING_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("main h1").unwrap());
static QUOTE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("main blockquote > p").unwrap());
static PARA_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("main > p").unwrap());
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(C[0-9]+)[ :-](.*)").unwrap());

/// Paragraphs shorter than this (serialized) are header material on
/// "Compiler Warning" pages, not the description.
const DESCRIPTION_MIN_LEN: usize = 200;

/// Present in the page header of compiler warning pages, where the first
/// paragraphs restate the warning message instead of describing it.
const COMPILER_MARKER: &str = "Compiler Warning ";

/// Fill in `name` and `description` from the record's detail page.
///
/// A page without a `<main>` region is malformed and aborts the run; a
/// missing heading, callout or description paragraph degrades to fallbacks.
pub fn enrich(record: &mut WarningRecord, html: &str) -> Result<()> {
    let doc = Html::parse_document(html);
    if doc.select(&MAIN_SEL).next().is_none() {
        return Err(anyhow!("no <main> content region on page for {}", record.key));
    }

    // Heading is sometimes just the message ID; a blockquote callout, when
    // present, carries the better wording.
    record.name = derive_name(doc.select(&HEADING_SEL).next(), &record.key, &record.key);
    record.name = derive_name(doc.select(&QUOTE_SEL).next(), &record.key, &record.name);

    let mut description = String::new();
    for paragraph in doc.select(&PARA_SEL) {
        let serialized = paragraph.html();
        if record.name.contains(COMPILER_MARKER) {
            if serialized.len() < DESCRIPTION_MIN_LEN {
                // Short leading paragraph restates the header
                record.name = derive_name(Some(paragraph), &record.key, &record.name);
            } else {
                description = serialized;
                break;
            }
        } else {
            // Only the first paragraph; the document gets too large otherwise
            description = serialized;
            break;
        }
    }

    if description.is_empty() {
        // Repeat the name so the rule has some description at all
        description = format!("<p>{}</p>", escape_html(&record.name));
    }
    record.description = description;

    Ok(())
}

/// Derive a `CODE: text` display name from an element's text fragments.
///
/// Fragments are concatenated up to the first bare-newline fragment. A
/// leading "Warning " / "warning " prefix is dropped, surrounding periods are
/// stripped, and the remainder is reformatted around the diagnostic code.
/// Empty extractions yield the fallback unchanged.
fn derive_name(elem: Option<ElementRef>, code: &str, fallback: &str) -> String {
    let Some(elem) = elem else {
        return fallback.to_string();
    };

    let mut text = String::new();
    for fragment in elem.text() {
        if fragment == "\n" {
            break;
        }
        text.push_str(fragment);
    }

    let text = text.strip_prefix("Warning ").unwrap_or(&text);
    let text = text.strip_prefix("warning ").unwrap_or(text);
    let text = text.trim_matches('.');
    if text.is_empty() {
        return fallback.to_string();
    }

    match NAME_RE.captures(text) {
        Some(caps) => format!("{}: {}", &caps[1], caps[2].trim()),
        None => format!("{}: {}", code, text.trim()),
    }
}

/// Minimal HTML entity escaping for synthesized description text.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
