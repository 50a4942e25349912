//! CSS selectors for the marketplace's listing cards.
//!
//! These class names belong to the marketplace's markup and change whenever
//! the site is redesigned. When extraction starts failing, this is the first
//! place to look.

use anyhow::anyhow;
use scraper::Selector;

pub const CARD: &str = "div.shared-item_cards-grid-image_card_component__content";
pub const NAME: &str = "h3.shared-item_cards-item_name_component__root";
pub const AUTHOR: &str = "a.shared-item_cards-author_category_component__link";
pub const PRICE: &str = "div.shared-item_cards-price_component__root";
pub const RATING_COUNT: &str = "span.shared-stars_rating_component__starRatingCount";
pub const SALES_COUNT: &str = "div.shared-item_cards-sales_component__root";

pub struct CardSelectors {
    pub card: Selector,
    pub name: Selector,
    pub author: Selector,
    pub price: Selector,
    pub rating_count: Selector,
    pub sales_count: Selector,
}

impl CardSelectors {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            card: parse(CARD)?,
            name: parse(NAME)?,
            author: parse(AUTHOR)?,
            price: parse(PRICE)?,
            rating_count: parse(RATING_COUNT)?,
            sales_count: parse(SALES_COUNT)?,
        })
    }
}

fn parse(css: &str) -> anyhow::Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector `{css}`: {e}"))
}
