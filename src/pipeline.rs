use std::collections::HashMap;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::fetcher::PageFetcher;
use crate::model::{PropertySet, WarningRecord};
use crate::{emit, harvest, normalize};

/// Run the whole pipeline: harvest every index page, sort, read each warning
/// page, apply overrides, serialize. Strictly sequential; the first failed
/// fetch or malformed page aborts the run.
pub async fn run<F: PageFetcher>(
    fetcher: &F,
    index_pages: &[(&str, PropertySet)],
    overrides: &[(&str, PropertySet)],
    limit: Option<usize>,
) -> Result<String> {
    let mut by_code: HashMap<String, WarningRecord> = HashMap::new();

    for (url, defaults) in index_pages {
        let html = fetcher.fetch(url).await?;
        let added = harvest::harvest_links(&html, defaults, &mut by_code);
        info!("{}: {} new warnings ({} total)", url, added, by_code.len());
    }

    // Ascending by message number; detail pages are read in this order too
    let mut records: Vec<WarningRecord> = by_code.into_values().collect();
    records.sort_by_key(WarningRecord::sort_key);
    if let Some(n) = limit {
        records.truncate(n);
    }

    info!("Reading {} warning pages...", records.len());
    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    for record in &mut records {
        let html = fetcher.fetch(&record.href).await?;
        normalize::enrich(record, &html)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    for (key, props) in overrides {
        if let Some(record) = records.iter_mut().find(|r| r.key == *key) {
            record.apply(props, true);
        }
    }

    emit::build_document(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct StubFetcher {
        pages: HashMap<String, String>,
    }

    impl StubFetcher {
        fn new(pages: &[(&str, &str)]) -> StubFetcher {
            StubFetcher {
                pages: pages
                    .iter()
                    .map(|(url, html)| (url.to_string(), html.to_string()))
                    .collect(),
            }
        }
    }

    impl PageFetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| anyhow!("no fixture for {}", url))
        }
    }

    #[tokio::test]
    async fn single_warning_end_to_end() {
        let fetcher = StubFetcher::new(&[
            (
                "https://idx",
                r#"<html><body><a href="/x">C1234</a></body></html>"#,
            ),
            (
                "/x",
                "<html><body><main><h1>C1234: Example issue.</h1></main></body></html>",
            ),
        ]);

        let xml = run(&fetcher, &[("https://idx", PropertySet::EMPTY)], &[], None)
            .await
            .unwrap();

        let template_pos = xml.find("CustomRuleTemplate").unwrap();
        let rule_pos = xml.find("<key>C1234</key>").unwrap();
        assert!(template_pos < rule_pos);
        assert!(xml.contains("<name>C1234: Example issue</name>"));
        assert!(xml.contains("<severity>INFO</severity>"));
        assert!(xml.contains("<type>CODE_SMELL</type>"));
        // No type was ever assigned, so no remediation pair
        assert!(!xml.contains("<remediationFunction>"));
    }

    #[tokio::test]
    async fn records_sorted_by_numeric_suffix() {
        let detail = "<html><body><main><h1>whatever</h1><p>d</p></main></body></html>";
        let fetcher = StubFetcher::new(&[
            (
                "https://idx",
                r#"<a href="/a">C4001</a><a href="/b">C40001</a><a href="/c">C4400</a>"#,
            ),
            ("/a", detail),
            ("/b", detail),
            ("/c", detail),
        ]);

        let xml = run(&fetcher, &[("https://idx", PropertySet::EMPTY)], &[], None)
            .await
            .unwrap();

        let p1 = xml.find("<key>C4001</key>").unwrap();
        let p2 = xml.find("<key>C4400</key>").unwrap();
        let p3 = xml.find("<key>C40001</key>").unwrap();
        assert!(p1 < p2 && p2 < p3);
    }

    #[tokio::test]
    async fn overrides_beat_page_defaults() {
        let fetcher = StubFetcher::new(&[
            ("https://idx", r#"<a href="/x">C4020</a>"#),
            (
                "/x",
                "<html><body><main><h1>C4020: bad cast</h1><p>d</p></main></body></html>",
            ),
        ]);

        let defaults = PropertySet::rule(
            crate::model::Severity::Info,
            crate::model::RuleType::CodeSmell,
        );
        let overrides = [(
            "C4020",
            PropertySet::rule(crate::model::Severity::Major, crate::model::RuleType::Bug),
        )];

        let xml = run(&fetcher, &[("https://idx", defaults)], &overrides, None)
            .await
            .unwrap();

        assert!(xml.contains("<severity>MAJOR</severity>"));
        assert!(xml.contains("<type>BUG</type>"));
        assert!(xml.contains("<remediationFunction>LINEAR</remediationFunction>"));
    }

    #[tokio::test]
    async fn failed_detail_fetch_aborts() {
        let fetcher = StubFetcher::new(&[("https://idx", r#"<a href="/gone">C4001</a>"#)]);
        let result = run(&fetcher, &[("https://idx", PropertySet::EMPTY)], &[], None).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn limit_caps_emitted_rules() {
        let detail = "<html><body><main><h1>x</h1></main></body></html>";
        let fetcher = StubFetcher::new(&[
            ("https://idx", r#"<a href="/a">C4001</a><a href="/b">C4002</a>"#),
            ("/a", detail),
            ("/b", detail),
        ]);

        let xml = run(&fetcher, &[("https://idx", PropertySet::EMPTY)], &[], Some(1))
            .await
            .unwrap();

        assert!(xml.contains("<key>C4001</key>"));
        assert!(!xml.contains("<key>C4002</key>"));
    }
}
