mod aggregator;
mod chart;
mod cleaner;
mod config;
mod extractor;
mod fetch_error;
mod fonts;
mod pipeline;
mod record;
mod requests;
mod scraping_context;
mod selectors;
mod summary;
mod text_manipulators;

pub use aggregator::{AuthorTotal, TOP_N, top_authors_by_rating, top_themes_by_sales};
pub use chart::{Bar, BarChart, authors_chart, render_bar_chart, themes_chart};
pub use cleaner::{Cleaner, FieldRule, NumberKind, OnParseError};
pub use config::ScrapingConfig;
pub use extractor::extract_records;
pub use fetch_error::FetchError;
pub use pipeline::{RunSummary, clean, extract, fetch_page, render_charts, run};
pub use record::{CleanedRecord, MISSING_NAME, ThemeRecord};
pub use requests::RequestClient;
pub use scraping_context::ScrapingContext;
pub use selectors::CardSelectors;
pub use summary::format_summary;
