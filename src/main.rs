use clap::Parser;
use laban_json::utils::logger;
use laban_json::{CliConfig, ConversionEngine, LocalStorage, ScorePipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.to_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };
    tracing::info!(
        "Converting {} -> {}",
        settings.input_path,
        settings.output_path
    );

    let pipeline = ScorePipeline::new(LocalStorage::default(), settings);
    let engine = ConversionEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "Wrote {} frames ({} lines skipped) to {}",
                report.frames,
                report.skipped_lines,
                report.output_path
            );
        }
        Err(e) => {
            tracing::error!(
                "Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
