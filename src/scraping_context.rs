use crate::{
    cleaner::Cleaner, config::ScrapingConfig, requests::RequestClient,
    selectors::CardSelectors,
};

pub struct ScrapingContext {
    pub scraping_config: ScrapingConfig,
    pub request_client: RequestClient,
    pub card_selectors: CardSelectors,
    pub cleaner: Cleaner,
}

impl ScrapingContext {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_config = ScrapingConfig::new()?;
        Self::with_config(scraping_config)
    }

    pub fn with_config(scraping_config: ScrapingConfig) -> anyhow::Result<Self> {
        let request_client = RequestClient::new(&scraping_config.user_agent)?;
        let card_selectors = CardSelectors::new()?;
        let cleaner = Cleaner::new()?;
        Ok(ScrapingContext {
            scraping_config,
            request_client,
            card_selectors,
            cleaner,
        })
    }
}
