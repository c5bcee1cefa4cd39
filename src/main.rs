// CLI caller for the conversion pipeline: sources the API token, picks a
// model, reads the raw text, and renders the ConversionResult. All decision
// logic lives in the library.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use notesmith::config;
use notesmith::pipeline::{ConversionRequest, NoteConverter};

/// Convert freeform text into a structured markdown note.
#[derive(Parser)]
#[command(name = config::APP_NAME, version = config::APP_VERSION, about)]
struct Cli {
    /// Input text file; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Model identifier on the inference endpoint.
    #[arg(long, default_value = config::DEFAULT_MODEL)]
    model: String,

    /// API token for the inference endpoint.
    #[arg(long, env = config::API_TOKEN_ENV, hide_env_values = true)]
    token: String,

    /// Emit the full conversion result as JSON instead of plain markdown.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw_text = match read_input(cli.input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: cannot read input: {e}");
            return ExitCode::FAILURE;
        }
    };

    let converter = NoteConverter::hugging_face(&cli.token);
    let request = ConversionRequest {
        raw_text,
        model: cli.model,
    };

    let result = match converter.convert(&request) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: cannot serialize result: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        if let Some(warning) = &result.warning {
            eprintln!("warning: {warning}");
        }
        println!("{}", result.text);
    }

    ExitCode::SUCCESS
}

fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
