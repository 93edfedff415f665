mod cli;
mod display;
mod export;
mod upload;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use idlens_ai::{ExtractError, Extraction};
use tracing::Level;

use cli::{Cli, Commands, ModelArgs, OutputArgs};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
    tracing::debug!("idlens v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Extract {
            file,
            model,
            output,
        } => cmd_extract(&file, &model, &output).await,
        Commands::Normalize { input, output } => cmd_normalize(&input, &output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &anyhow::Error) {
    eprintln!("{}", report_text(err));
}

/// Rate limits are transient and reported as a warning; everything else is an error.
fn report_text(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ExtractError>() {
        Some(ExtractError::RateLimit {
            message: Some(detail),
        }) => format!("warning: {err}\n  upstream: {detail}"),
        Some(e) if e.is_transient() => format!("warning: {e}"),
        _ => format!("error: {err:#}"),
    }
}

async fn cmd_extract(path: &Path, model: &ModelArgs, output: &OutputArgs) -> anyhow::Result<()> {
    let config = model.to_config();
    let Some(file) = upload::accept(path, &config).await? else {
        return Ok(());
    };

    let extraction = idlens_ai::extract(&config, &file).await?;
    present(&extraction, &file.file_name, output)
}

fn cmd_normalize(input: &Path, output: &OutputArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let extraction = Extraction::from_model_text(&text);

    let source_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    present(&extraction, &source_name, output)
}

fn present(extraction: &Extraction, source_name: &str, output: &OutputArgs) -> anyhow::Result<()> {
    if output.json {
        println!("{}", export::to_pretty_json(extraction)?);
    } else {
        display::print_card(extraction, source_name)?;
    }

    if let Some(dir) = &output.out_dir {
        let path = export::write_export(extraction, source_name, dir)?;
        eprintln!("Saved {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_is_a_warning_with_upstream_detail() {
        let err = anyhow::Error::from(ExtractError::RateLimit {
            message: Some("Quota exceeded for requests per minute".into()),
        });
        assert_eq!(
            report_text(&err),
            "warning: API rate limit exceeded. Please try again later.\n  upstream: Quota exceeded for requests per minute"
        );

        let bare = anyhow::Error::from(ExtractError::RateLimit { message: None });
        assert_eq!(
            report_text(&bare),
            "warning: API rate limit exceeded. Please try again later."
        );
    }

    #[test]
    fn io_failure_names_cause_once() {
        let err = anyhow::Error::from(ExtractError::Io {
            path: "/nowhere/card.png".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        });
        assert_eq!(report_text(&err), "error: failed to read /nowhere/card.png: not found");
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = anyhow::Error::from(ExtractError::Configuration);
        assert_eq!(
            report_text(&err),
            "error: API key is missing. Please check your environment variables."
        );
    }

    #[tokio::test]
    async fn extract_without_key_fails_before_reading_upload() {
        let model = ModelArgs {
            api_key: None,
            model: idlens_ai::DEFAULT_MODEL.into(),
            endpoint: "http://127.0.0.1:9".into(),
        };
        let output = OutputArgs {
            json: true,
            out_dir: None,
        };
        let err = cmd_extract(Path::new("/nowhere/card.png"), &model, &output)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::Configuration)
        ));
    }
}
