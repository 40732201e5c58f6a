use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use sidebar_sections::cli::Cli;
use sidebar_sections::config::{get_config, init_config};
use sidebar_sections::interfaces::cli::run_cli_command;
use sidebar_sections::system::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 加载配置
    init_config(cli.config.as_deref());
    let config = get_config();

    // guard 必须活到进程结束
    let _guard = init_logging(&config.logging).context("Failed to initialize logging")?;
    debug!("Configuration loaded, site {}", config.site.base_url);

    if let Err(e) = run_cli_command(cli.command, &config).await {
        eprintln!("{}", e.format_colored());
        eprintln!("{}", "Run with --help for usage".dimmed());
        std::process::exit(1);
    }

    Ok(())
}
