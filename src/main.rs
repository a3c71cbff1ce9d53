//! DeepGuard - deepfake-detection app shell
//!
//! Main entry point for the DeepGuard application.

use anyhow::Context;
use deepguard::config::Config;
use deepguard::testconfig::TestConfig;
use deepguard::ui::GuardApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deepguard=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DeepGuard");

    let test_config = match test_config_arg()? {
        Some(path) => Some(TestConfig::load(&path).context("loading test scenario")?),
        None => None,
    };

    let config = Config::load().context("loading configuration")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 560.0])
            .with_title("DeepGuard"),
        ..Default::default()
    };

    eframe::run_native(
        "DeepGuard",
        options,
        Box::new(move |cc| Ok(Box::new(GuardApp::new(cc, config, test_config)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}

/// Value of the optional `--test-config <file>` argument
fn test_config_arg() -> anyhow::Result<Option<String>> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--test-config" => {
                let path = args
                    .next()
                    .context("--test-config requires a file path")?;
                return Ok(Some(path));
            }
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }
    Ok(None)
}
