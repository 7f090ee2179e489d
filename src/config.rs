/// Structural signatures used to locate story items and their parts.
///
/// The listing page identifies elements by tag plus class attribute. A class
/// rename on the site silently yields zero records rather than an error, so
/// the strings live here where they can be swapped without touching the
/// extraction or persistence code.
#[derive(Clone, Debug)]
pub struct Selectors {
    pub story_item: String,
    pub headline: String,
    pub anchor: String,
    pub publishing: String,
    pub summary: String,
    pub image: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            story_item: "li.stream-item.story-item.yf-1usaaz9".to_string(),
            headline: "h3".to_string(),
            anchor: "a".to_string(),
            publishing: "div.publishing.yf-1weyqlp".to_string(),
            summary: "p".to_string(),
            image: "img".to_string(),
        }
    }
}

/// Scrape target and output locations with their documented defaults.
#[derive(Clone, Debug)]
pub struct ScrapeConfig {
    /// Listing page fetched once per run.
    pub listing_url: String,
    /// Origin prefixed onto relative article hrefs.
    pub base_url: String,
    /// JSON document written each run, overwriting the previous one.
    pub json_path: String,
    /// SQLite database appended to each run.
    pub db_path: String,
    pub selectors: Selectors,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            listing_url: "https://finance.yahoo.com/topic/stock-market-news/".to_string(),
            base_url: "https://finance.yahoo.com".to_string(),
            json_path: "records.json".to_string(),
            db_path: "records.db".to_string(),
            selectors: Selectors::default(),
        }
    }
}
