use chrono::Local;
use tracing_subscriber::EnvFilter;

use http_get_bench::{client, measure, report, Target};

/// The one site probed per run. Edit and rebuild to aim elsewhere.
const SITE_NAME: &str = "Google";
const SITE_URL: &str = "http://www.google.com/";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    report::banner();

    let target = Target::new(SITE_NAME, SITE_URL);
    report::target(&target);

    let client = client::build()?;

    // A failed GET has already been reported by `measure`.
    if let Ok(summary) = measure(&client, &target).await {
        tracing::debug!(summary = %serde_json::to_string(&summary)?, "measurement complete");
    }

    report::finished(Local::now());
    Ok(())
}
