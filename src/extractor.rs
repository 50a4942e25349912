use anyhow::anyhow;
use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::{record::ThemeRecord, selectors::CardSelectors, text_manipulators::extract_text};

/// Pulls one [`ThemeRecord`] out of every listing card, in document order.
///
/// A card without a name element gets `name: None`. Every other field must be
/// present; a missing one fails the whole extraction.
pub fn extract_records(
    document: &Html,
    selectors: &CardSelectors,
) -> anyhow::Result<Vec<ThemeRecord>> {
    let mut records = vec![];
    for (index, card) in document.select(&selectors.card).enumerate() {
        let name = card.select(&selectors.name).next().map(extract_text);
        if name.is_none() {
            debug!("card {index} has no name element");
        }
        records.push(ThemeRecord {
            name,
            author: required_field(card, &selectors.author, index, "author")?,
            price: required_field(card, &selectors.price, index, "price")?,
            rating_count: required_field(card, &selectors.rating_count, index, "rating count")?,
            sales_count: required_field(card, &selectors.sales_count, index, "sales count")?,
        });
    }
    Ok(records)
}

fn required_field(
    card: ElementRef,
    selector: &Selector,
    index: usize,
    field: &str,
) -> anyhow::Result<String> {
    card.select(selector)
        .next()
        .map(extract_text)
        .ok_or_else(|| anyhow!("card {index} is missing its {field} element"))
}
