use clap::Parser;
use decorator_demo::utils::logger;
use decorator_demo::{run_demo, CliConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting decorator-demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    if let Err(e) = run_demo(&mut handle) {
        tracing::error!("❌ Demo failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        return Err(e.into());
    }

    tracing::info!("✅ Demo completed");
    Ok(())
}
