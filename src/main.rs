use finance_news_scraper::article_processor::ArticleProcessor;
use finance_news_scraper::config::ScrapeConfig;
use finance_news_scraper::scraper_client::ScraperClient;
use log::error;
use rusqlite::Connection;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = ScrapeConfig::default();
    let mut scraper_client = ScraperClient::new_http();

    // A failed fetch means an empty record set, not an aborted process
    let raw_html = match scraper_client.fetch_url(config.listing_url.as_str()).await {
        Ok(body) => body,
        Err(e) => {
            error!("Error fetching data: {}", e);
            println!("No articles found");
            return;
        }
    };
    scraper_client.print_stats();

    let mut processor = ArticleProcessor::new(raw_html, &config);
    if let Err(e) = processor.run().await {
        error!("Error extracting articles: {}", e);
    }

    if processor.articles().is_empty() {
        println!("No articles found");
        return;
    }
    println!("Found {} articles", processor.articles().len());

    match processor.save_to_json(&config.json_path).await {
        Ok(()) => println!("Data saved to {}", config.json_path),
        Err(e) => error!("Error saving to JSON: {}", e),
    }

    // The relational sink is still attempted after a document-sink failure
    match Connection::open(&config.db_path) {
        Ok(mut conn) => match processor.save_to_db(&mut conn).await {
            Ok(()) => println!("Data saved to SQLite database: {}", config.db_path),
            Err(e) => error!("Error saving to SQLite: {}", e),
        },
        Err(e) => error!("Error saving to SQLite: {}", e),
    }

    processor.print_sample(2);
}
