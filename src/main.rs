use log::{LevelFilter, error, info};
use theme_stats::{FetchError, ScrapingContext, format_summary, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let ctx = ScrapingContext::new()?;
    match run(&ctx).await {
        Ok(summary) => {
            info!(
                "Charts written to {} and {}",
                summary.authors_chart.display(),
                summary.themes_chart.display()
            );
            println!("{}", format_summary(&summary.records));
            Ok(())
        }
        Err(e) => match e.downcast::<FetchError>() {
            Ok(fetch_error) => {
                error!("{fetch_error}");
                print!("{}", fetch_error.report());
                Ok(())
            }
            Err(e) => Err(e),
        },
    }
}
