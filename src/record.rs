/// Shown wherever a card had no name element.
pub const MISSING_NAME: &str = "n/a";

/// One marketplace listing as scraped, every field still raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRecord {
    pub name: Option<String>,
    pub author: String,
    pub price: String,
    pub rating_count: String,
    pub sales_count: String,
}

/// A listing after its numeric fields have been coerced to integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedRecord {
    pub name: Option<String>,
    pub author: String,
    pub price: i64,
    pub rating_count: i64,
    pub sales_count: i64,
}

impl CleanedRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(MISSING_NAME)
    }
}
