use anyhow::{Context, Result};
use dotenv::dotenv;
use leptos::config::{get_configuration, LeptosOptions};

/// Overrides `RUST_LOG` for this server only.
pub const LOG_ENV: &str = "PREVIEW_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

fn pick_filter(preview_log: Option<String>, rust_log: Option<String>) -> String {
    let set = |filter: &String| !filter.trim().is_empty();
    preview_log
        .filter(set)
        .or_else(|| rust_log.filter(set))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

pub fn log_filter() -> String {
    pick_filter(std::env::var(LOG_ENV).ok(), std::env::var("RUST_LOG").ok())
}

/// Loads `.env`, starts the logger and reads the `LEPTOS_*` site options.
pub fn load() -> Result<LeptosOptions> {
    dotenv().ok();
    env_logger::Builder::new().parse_filters(&log_filter()).init();

    let conf = get_configuration(None).context("failed to read leptos configuration")?;
    log::info!("site root {}, output {}", conf.leptos_options.site_root, conf.leptos_options.output_name);
    Ok(conf.leptos_options)
}
