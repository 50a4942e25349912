use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

pub const DEFAULT_MARKETPLACE_URL: &str = "https://themeforest.net/top-sellers";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36";
pub const DEFAULT_AUTHORS_CHART_FILE: &str = "Highly-Rated-Authors.png";
pub const DEFAULT_THEMES_CHART_FILE: &str = "Top-Selling-Themes.png";

/// The env vars read for a scraping run. All of them are optional.
#[derive(Debug, Deserialize)]
pub struct ScrapingEnv {
    #[serde(default = "default_marketplace_url")]
    marketplace_url: String,
    #[serde(default = "default_user_agent")]
    marketplace_user_agent: String,
    #[serde(default = "default_output_dir")]
    chart_output_dir: PathBuf,
    #[serde(default = "default_authors_chart_file")]
    authors_chart_file: String,
    #[serde(default = "default_themes_chart_file")]
    themes_chart_file: String,
    chart_font_path: Option<PathBuf>,
}

fn default_marketplace_url() -> String {
    DEFAULT_MARKETPLACE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_authors_chart_file() -> String {
    DEFAULT_AUTHORS_CHART_FILE.to_string()
}

fn default_themes_chart_file() -> String {
    DEFAULT_THEMES_CHART_FILE.to_string()
}

#[derive(Debug, Clone)]
pub struct ScrapingConfig {
    pub marketplace_url: String,
    pub user_agent: String,
    pub output_dir: PathBuf,
    pub authors_chart_file: String,
    pub themes_chart_file: String,
    pub font_path: Option<PathBuf>,
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_env = ScrapingEnv::load_from_env()?;
        Ok(Self::from(scraping_env))
    }

    /// Same defaults as [`ScrapingConfig::new`], but pointed at another page
    /// and output directory. Used to run against local fixtures.
    pub fn for_url(marketplace_url: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            marketplace_url: marketplace_url.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn authors_chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.authors_chart_file)
    }

    pub fn themes_chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.themes_chart_file)
    }
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            marketplace_url: default_marketplace_url(),
            user_agent: default_user_agent(),
            output_dir: default_output_dir(),
            authors_chart_file: default_authors_chart_file(),
            themes_chart_file: default_themes_chart_file(),
            font_path: None,
        }
    }
}

impl From<ScrapingEnv> for ScrapingConfig {
    fn from(env: ScrapingEnv) -> Self {
        Self {
            marketplace_url: env.marketplace_url,
            user_agent: env.marketplace_user_agent,
            output_dir: env.chart_output_dir,
            authors_chart_file: env.authors_chart_file,
            themes_chart_file: env.themes_chart_file,
            font_path: env.chart_font_path,
        }
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
