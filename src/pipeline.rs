use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info};
use scraper::Html;

use crate::{
    aggregator::{TOP_N, top_authors_by_rating, top_themes_by_sales},
    chart::{authors_chart, render_bar_chart, themes_chart},
    config::ScrapingConfig,
    extractor::extract_records,
    fetch_error::FetchError,
    fonts::ensure_chart_font,
    record::{CleanedRecord, ThemeRecord},
    scraping_context::ScrapingContext,
};

#[derive(Debug)]
pub struct RunSummary {
    pub records: Vec<CleanedRecord>,
    pub authors_chart: PathBuf,
    pub themes_chart: PathBuf,
}

pub async fn fetch_page(ctx: &ScrapingContext) -> Result<String, FetchError> {
    let url = &ctx.scraping_config.marketplace_url;
    info!("Fetching {url}");
    let body = ctx.request_client.fetch_url_body(url).await?;
    info!("Fetched {} bytes", body.len());
    Ok(body)
}

pub fn extract(ctx: &ScrapingContext, body: &str) -> anyhow::Result<Vec<ThemeRecord>> {
    let document = Html::parse_document(body);
    let records = extract_records(&document, &ctx.card_selectors)
        .context("marketplace markup did not have the expected shape")?;
    info!("Extracted {} theme cards", records.len());
    Ok(records)
}

pub fn clean(
    ctx: &ScrapingContext,
    records: Vec<ThemeRecord>,
) -> anyhow::Result<Vec<CleanedRecord>> {
    ctx.cleaner.clean_records(records)
}

/// Writes both charts and returns their paths (authors first).
///
/// Both are rendered next to their final paths first and only moved into
/// place once both renders succeeded, so a failure leaves neither behind.
pub fn render_charts(
    config: &ScrapingConfig,
    records: &[CleanedRecord],
) -> anyhow::Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("failed to create output dir {}", config.output_dir.display())
    })?;
    let with_text = ensure_chart_font(config.font_path.as_deref());

    let authors_path = config.authors_chart_path();
    let themes_path = config.themes_chart_path();
    let authors_staged = staging_path(&authors_path);
    let themes_staged = staging_path(&themes_path);

    let top_authors = top_authors_by_rating(records, TOP_N);
    let top_themes = top_themes_by_sales(records, TOP_N);
    let rendered = render_bar_chart(&authors_staged, &authors_chart(&top_authors), with_text)
        .with_context(|| format!("failed to render {}", authors_path.display()))
        .and_then(|()| {
            render_bar_chart(&themes_staged, &themes_chart(&top_themes), with_text)
                .with_context(|| format!("failed to render {}", themes_path.display()))
        })
        .and_then(|()| {
            std::fs::rename(&authors_staged, &authors_path)
                .with_context(|| format!("failed to write {}", authors_path.display()))?;
            std::fs::rename(&themes_staged, &themes_path)
                .with_context(|| format!("failed to write {}", themes_path.display()))
        });
    if let Err(e) = rendered {
        for path in [&authors_staged, &themes_staged] {
            if let Err(remove_err) = std::fs::remove_file(path) {
                debug!("could not remove {}: {remove_err}", path.display());
            }
        }
        return Err(e);
    }
    info!("Wrote {}", authors_path.display());
    info!("Wrote {}", themes_path.display());

    Ok((authors_path, themes_path))
}

/// `dir/.partial-name.png` for `dir/name.png`. The extension is kept since
/// the bitmap encoder picks the image format from it.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".partial-{name}"))
}

/// fetch -> extract -> clean -> render. A [`FetchError`] in the returned
/// error means nothing was written.
pub async fn run(ctx: &ScrapingContext) -> anyhow::Result<RunSummary> {
    let body = fetch_page(ctx).await?;
    let records = extract(ctx, &body)?;
    let records = clean(ctx, records)?;
    let (authors_chart, themes_chart) = render_charts(&ctx.scraping_config, &records)?;
    Ok(RunSummary {
        records,
        authors_chart,
        themes_chart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<CleanedRecord> {
        vec![CleanedRecord {
            name: Some("Avada".to_string()),
            author: "ThemeFusion".to_string(),
            price: 69,
            rating_count: 26700,
            sales_count: 950,
        }]
    }

    fn files_in(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn staging_path_keeps_directory_and_extension() {
        assert_eq!(
            staging_path(Path::new("out/Top-Selling-Themes.png")),
            PathBuf::from("out/.partial-Top-Selling-Themes.png")
        );
    }

    #[test]
    fn renders_both_charts_into_place() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScrapingConfig::for_url("http://unused", dir.path());
        let (authors, themes) = render_charts(&config, &records()).unwrap();
        assert_eq!(authors, dir.path().join("Highly-Rated-Authors.png"));
        assert_eq!(themes, dir.path().join("Top-Selling-Themes.png"));
        assert_eq!(
            files_in(dir.path()),
            ["Highly-Rated-Authors.png", "Top-Selling-Themes.png"]
        );
    }

    #[test]
    fn failed_second_chart_leaves_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ScrapingConfig::for_url("http://unused", dir.path());
        config.themes_chart_file = "missing-subdir/themes.png".to_string();

        let err = render_charts(&config, &records()).unwrap_err();
        assert!(err.to_string().contains("missing-subdir/themes.png"));
        assert!(files_in(dir.path()).is_empty());
    }

    #[test]
    fn huge_rating_totals_still_render() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScrapingConfig::for_url("http://unused", dir.path());
        let mut records = records();
        records[0].rating_count = i64::MAX;
        records.push(CleanedRecord {
            name: None,
            ..records[0].clone()
        });
        render_charts(&config, &records).unwrap();
        assert_eq!(files_in(dir.path()).len(), 2);
    }
}
