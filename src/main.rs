use clap::Parser;
use iss_passes::app::report::render_report;
use iss_passes::utils::logger::{self, LogFormat};
use iss_passes::{CliConfig, IssPipeline, PassEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let services = match cli.service_config() {
        Ok(services) => services,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("It didn't work! {}", e);
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let engine = PassEngine::new(IssPipeline::new(services));

    match engine.next_passes_for_current_location().await {
        Ok(passes) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&passes)?);
            } else {
                for line in render_report(&chrono::Local::now(), &passes) {
                    println!("{}", line);
                }
            }
        }
        Err(e) => {
            tracing::error!("Lookup failed: {} (Category: {:?})", e, e.category());
            eprintln!("It didn't work! {}", e);
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
