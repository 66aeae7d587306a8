use anyhow::{anyhow, Result};
use spider_client::shapes::request::{ReturnFormat, ReturnFormatHandling};
use spider_client::{RequestParams, Spider};

/// Rendering fetch capability: URL in, fully-rendered HTML out.
///
/// The docs pages assemble their navigation menus with client-side JS, so the
/// production implementation goes through a rendering service. Tests inject a
/// stub serving canned HTML.
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches pages through the spider.cloud rendering API.
pub struct SpiderFetcher {
    spider: Spider,
}

impl SpiderFetcher {
    /// Create the client once for the whole run from `SPIDER_API_KEY`.
    pub fn new() -> Result<SpiderFetcher> {
        let api_key = std::env::var("SPIDER_API_KEY")
            .map_err(|_| anyhow!("SPIDER_API_KEY environment variable must be set"))?;
        let spider = Spider::new(Some(api_key))
            .map_err(|e| anyhow!("Failed to create Spider client: {}", e))?;
        Ok(SpiderFetcher { spider })
    }
}

impl PageFetcher for SpiderFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let params = RequestParams {
            return_format: Some(ReturnFormatHandling::Single(ReturnFormat::Raw)),
            ..Default::default()
        };

        let response = self
            .spider
            .scrape_url(url, Some(params), "application/json")
            .await
            .map_err(|e| anyhow!("Scrape failed for {}: {}", url, e))?;

        let parsed: serde_json::Value = match response.as_str() {
            Some(s) => serde_json::from_str(s).unwrap_or(response.clone()),
            None => response,
        };

        parsed
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|obj| obj.get("content"))
            .and_then(|content| content.as_str())
            .map(str::to_string)
            .ok_or_else(|| anyhow!("No content in response for {}", url))
    }
}
