use crate::config::{ScrapeConfig, Selectors};
use crate::errors::ScraperError;
use chrono::Local;
use log::{info, warn};
use rusqlite::{params, Connection};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One extracted story. Every field is optional; a node contributes a record
/// only if at least one field was populated.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl Article {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.link.is_none()
            && self.source.is_none()
            && self.time.is_none()
            && self.summary.is_none()
            && self.src.is_none()
    }
}

/// Shape of the JSON document: capture time plus the records exactly as
/// extracted, absent fields omitted.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScrapeDocument {
    pub timestamp: String,
    pub articles: Vec<Article>,
}

pub struct ArticleProcessor {
    raw_html: String,
    base_url: String,
    selectors: Selectors,
    articles: Vec<Article>,
}

impl ArticleProcessor {
    pub fn new(html: String, config: &ScrapeConfig) -> Self {
        Self {
            raw_html: html,
            base_url: config.base_url.clone(),
            selectors: config.selectors.clone(),
            articles: vec![],
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub async fn run(&mut self) -> Result<(), ScraperError> {
        let document: Html = Html::parse_document(&self.raw_html);

        let story_selector = Selector::parse(&self.selectors.story_item)
            .map_err(|err| ScraperError::SelectorError(err.to_string()))?;
        let headline_selector = Selector::parse(&self.selectors.headline)
            .map_err(|err| ScraperError::SelectorError(err.to_string()))?;
        let anchor_selector = Selector::parse(&self.selectors.anchor)
            .map_err(|err| ScraperError::SelectorError(err.to_string()))?;
        let publishing_selector = Selector::parse(&self.selectors.publishing)
            .map_err(|err| ScraperError::SelectorError(err.to_string()))?;
        let summary_selector = Selector::parse(&self.selectors.summary)
            .map_err(|err| ScraperError::SelectorError(err.to_string()))?;
        let image_selector = Selector::parse(&self.selectors.image)
            .map_err(|err| ScraperError::SelectorError(err.to_string()))?;

        let mut item_iter = document.select(&story_selector);

        // Iterate over the story items in document order
        while let Some(item) = item_iter.next() {
            let mut article = Article::default();

            if let Some(heading) = item.select(&headline_selector).next() {
                let title = heading.text().collect::<Vec<_>>().join("");
                article.title = Some(title.trim().to_string());
            }

            if let Some(anchor) = item.select(&anchor_selector).next() {
                // Hrefs on the listing page are path fragments; prefix the
                // origin verbatim, no URL normalization
                let href = anchor.value().attr("href").unwrap_or("");
                article.link = Some(format!("{}{}", self.base_url, href.trim()));
            }

            if let Some(publishing) = item.select(&publishing_selector).next() {
                let source_time = publishing.text().collect::<Vec<_>>().join("");
                let parts: Vec<&str> = source_time.trim().split('•').collect();
                if parts.len() >= 2 {
                    article.source = Some(parts[0].trim().to_string());
                    article.time = Some(parts[1].trim().to_string());
                }
            }

            if let Some(summary) = item.select(&summary_selector).next() {
                let summary_text = summary.text().collect::<Vec<_>>().join("");
                article.summary = Some(summary_text.trim().to_string());
            }

            if let Some(image) = item.select(&image_selector).next() {
                article.src = Some(image.value().attr("src").unwrap_or("").to_string());
            }

            if !article.is_empty() {
                self.articles.push(article);
            }
        }

        Ok(())
    }

    /// Print the first `limit` articles field by field as a sanity sample
    pub fn print_sample(&self, limit: usize) {
        if self.articles.is_empty() {
            warn!("No articles available in local data.");
            return;
        }
        println!("\nSample of first {} articles:", limit);
        for (i, article) in self.articles.iter().take(limit).enumerate() {
            println!("\nArticle {}:", i + 1);
            if let Some(title) = &article.title {
                println!("title: {}", title);
            }
            if let Some(link) = &article.link {
                println!("link: {}", link);
            }
            if let Some(source) = &article.source {
                println!("source: {}", source);
            }
            if let Some(time) = &article.time {
                println!("time: {}", time);
            }
            if let Some(summary) = &article.summary {
                println!("summary: {}", summary);
            }
            if let Some(src) = &article.src {
                println!("src: {}", src);
            }
        }
    }

    /// Write the capture document, overwriting any previous one at `path`.
    /// serde_json leaves non-ASCII characters unescaped
    pub async fn save_to_json(&self, path: impl AsRef<Path>) -> Result<(), ScraperError> {
        let document = ScrapeDocument {
            timestamp: Local::now().to_rfc3339(),
            articles: self.articles.clone(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        tokio::fs::write(path.as_ref(), json).await?;
        Ok(())
    }

    /// Append every article as one row, creating the table if absent.
    /// Absent fields are stored as empty strings, never NULL; all inserts
    /// for the run commit together
    pub async fn save_to_db(&self, conn: &mut Connection) -> Result<(), ScraperError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS articles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT,
                link TEXT,
                source TEXT,
                time TEXT,
                summary TEXT,
                src TEXT,
                timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        let tx = conn.transaction()?;
        for article in &self.articles {
            tx.execute(
                "INSERT INTO articles (title, link, source, time, summary, src)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    article.title.as_deref().unwrap_or(""),
                    article.link.as_deref().unwrap_or(""),
                    article.source.as_deref().unwrap_or(""),
                    article.time.as_deref().unwrap_or(""),
                    article.summary.as_deref().unwrap_or(""),
                    article.src.as_deref().unwrap_or(""),
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Read the stored rows back. Every column comes back populated since
    /// the relational sink normalized absence to empty strings
    pub async fn fetch_from_db(&self, conn: &Connection) -> Result<Vec<Article>, ScraperError> {
        let mut stmt =
            conn.prepare("SELECT title, link, source, time, summary, src FROM articles")?;
        let article_iter = stmt.query_map([], |row| {
            Ok(Article {
                title: Some(row.get(0)?),
                link: Some(row.get(1)?),
                source: Some(row.get(2)?),
                time: Some(row.get(3)?),
                summary: Some(row.get(4)?),
                src: Some(row.get(5)?),
            })
        })?;

        let mut stored = Vec::new();
        info!("--- Articles from Database ---");
        for article in article_iter {
            let article = article?;
            info!(
                "Title: {:?}, Source: {:?}, Time: {:?}",
                article.title, article.source, article.time
            );
            stored.push(article);
        }
        info!("--- End of Database Data ---\n");

        Ok(stored)
    }
}
