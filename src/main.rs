use clap::Parser;
use ground_convert::utils::{logger, validation::Validate};
use ground_convert::{CliConfig, Document, LoiConverter};
use std::collections::HashMap;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ground-convert");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let raw = std::fs::read_to_string(&config.input)?;
    let documents: HashMap<String, Document> = serde_json::from_str(&raw)?;
    tracing::info!("Loaded {} documents from {}", documents.len(), config.input);

    let mut converted = HashMap::new();
    let mut failures = 0usize;
    for (id, document) in &documents {
        let result = LoiConverter::to_location_of_interest(id, document)
            .and_then(|loi| LoiConverter::from_location_of_interest(&loi));
        match result {
            Ok(document) => {
                converted.insert(id.clone(), document);
            }
            Err(e) => {
                failures += 1;
                tracing::error!("{}", e);
            }
        }
    }
    tracing::info!(
        "Converted {} of {} documents",
        converted.len(),
        documents.len()
    );

    if let Some(output) = &config.output {
        if let Some(parent) = Path::new(output).parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output, serde_json::to_string_pretty(&converted)?)?;
        tracing::info!("Output saved to: {}", output);
    }

    if failures > 0 {
        eprintln!("{} document(s) could not be converted", failures);
        std::process::exit(1);
    }

    Ok(())
}
