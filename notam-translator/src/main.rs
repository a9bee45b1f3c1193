use anyhow::{Context, Result};
use clap::Parser;
use extractors::{translation, NotamExtractor};
use shared_types::{Extractor, FieldMapping};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

mod config;
mod input;

use crate::config::{OutputFormat, TranslatorConfig};
use crate::input::NotamSource;

#[derive(Parser, Debug)]
#[command(author, version, about = "Translate a NOTAM into a readable summary", long_about = None)]
struct Args {
    /// Raw NOTAM text (reads stdin when neither this nor --file is given)
    #[arg(value_name = "NOTAM", conflicts_with = "file")]
    notam: Option<String>,

    /// Read the NOTAM from a file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long)]
    log_file_path: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file_path.as_deref());

    let (config, config_path) = TranslatorConfig::load(args.config.as_deref())
        .context("Failed to load notam-translator config")?;
    match &config_path {
        Some(path) => tracing::debug!("Loaded config from {:?}", path),
        None => tracing::debug!("No config file found, using defaults"),
    }

    let extractor = NotamExtractor::new(
        config
            .extractor_config()
            .context("Invalid timestamp settings in config")?,
    );

    let source = match (&args.notam, &args.file) {
        (Some(text), _) => NotamSource::Inline(text),
        (None, Some(path)) => NotamSource::File(path),
        (None, None) => NotamSource::Stdin,
    };
    let text = input::read_notam(source)?;

    let fields = extractor.extract(&text);
    if fields.extracted_count() == 0 {
        tracing::warn!("No NOTAM fields recognized in input; printing defaults");
    }

    let format = args.format.unwrap_or(config.output.format);
    print!("{}", render(&fields, format)?);

    Ok(())
}

fn render(fields: &FieldMapping, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(translation::format(fields)),
        OutputFormat::Json => {
            let json = translation::format_json(fields).context("Failed to encode JSON output")?;
            Ok(format!("{}\n", json))
        }
    }
}

fn init_tracing(log_file_path: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("notam-translator.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
