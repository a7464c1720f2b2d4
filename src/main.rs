use clap::Parser;
use csv2geo::utils::error::{ErrorSeverity, GeoError};
use csv2geo::utils::{logger, validation::Validate};
use csv2geo::{CliConfig, ConvertEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting csv2geo");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.load().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    let engine = ConvertEngine::new(config);

    match engine.run() {
        Ok(summary) => {
            tracing::info!("Conversion completed successfully");
            println!(
                "Wrote {} electrodes to {}",
                summary.rows_written,
                summary.output_path.display()
            );
        }
        Err(e) => fail(e),
    }

    Ok(())
}

fn fail(e: GeoError) -> ! {
    tracing::error!(
        "Conversion failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
