use clap::Parser;
use word_filter::utils::{logger, validation::Validate};
use word_filter::{run_with_settings, CliConfig, FilterError, FilterSettings, LogFormat};

fn fail(e: &FilterError) -> ! {
    tracing::error!(
        "❌ Word filter failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn resolve(config: &CliConfig) -> Result<FilterSettings, FilterError> {
    config.validate()?;
    let settings = config.resolve()?;
    settings.validate()?;
    Ok(settings)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();
    let settings = resolve(&config);

    let level = settings.as_ref().ok().and_then(|s| s.log_level.as_deref());
    let directive = logger::filter_directive(config.verbose, level);
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(&directive),
        LogFormat::Json => logger::init_json_logger(&directive),
    }

    tracing::debug!("CLI config: {:?}", config);

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };
    tracing::debug!("Effective settings: {:?}", settings);

    let report = match run_with_settings(settings).await {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    if config.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&FilterError::from(e)),
        }
    } else if report.written {
        println!(
            "✅ Kept {} of {} words in {}",
            report.kept, report.candidates, report.destination
        );
    } else {
        println!(
            "✅ Dry run: {} of {} words would be kept in {}",
            report.kept, report.candidates, report.destination
        );
    }
}
