//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use idlens_ai::{DEFAULT_BASE_URL, DEFAULT_MODEL, ExtractorConfig};

/// Extract identity-document fields with a generative model.
#[derive(Parser, Debug)]
#[command(name = "idlens")]
#[command(version)]
#[command(about = "Extract and normalise identity-document fields with a generative model")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a document image or PDF to the model and show the extracted record.
    ///
    /// Files that are neither images nor PDFs are skipped without error.
    Extract {
        /// Document to extract (png, jpg, webp, gif, bmp, tiff, heic or pdf).
        file: PathBuf,

        #[command(flatten)]
        model: ModelArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Normalise a saved model answer (raw JSON, fenced or not) offline.
    Normalize {
        /// File holding the model's text answer.
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Gemini API key.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model name.
    #[arg(long, env = "IDLENS_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// API root URL.
    #[arg(long, env = "IDLENS_ENDPOINT", default_value = DEFAULT_BASE_URL)]
    pub endpoint: String,
}

impl ModelArgs {
    pub fn to_config(&self) -> ExtractorConfig {
        ExtractorConfig::new(self.api_key.clone())
            .with_model(&self.model)
            .with_base_url(&self.endpoint)
    }
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Print the record as pretty JSON instead of a card.
    #[arg(long)]
    pub json: bool,

    /// Also write `<file-stem>-extracted.json` into this directory.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn extract_flags() {
        let cli = Cli::try_parse_from([
            "idlens",
            "extract",
            "card.png",
            "--api-key",
            "k",
            "--model",
            "gemini-x",
            "--endpoint",
            "http://localhost:1/v1beta/",
            "--json",
            "--out-dir",
            "out",
        ])
        .unwrap();

        match cli.command {
            Commands::Extract { file, model, output } => {
                assert_eq!(file, PathBuf::from("card.png"));
                assert!(output.json);
                assert_eq!(output.out_dir, Some(PathBuf::from("out")));

                let cfg = model.to_config();
                assert_eq!(cfg.api_key().unwrap(), "k");
                assert_eq!(cfg.model, "gemini-x");
                assert_eq!(cfg.base_url, "http://localhost:1/v1beta");
            }
            other => panic!("expected Extract, got {other:?}"),
        }
    }

    #[test]
    fn normalize_defaults() {
        let cli = Cli::try_parse_from(["idlens", "-v", "normalize", "answer.txt"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Normalize { input, output } => {
                assert_eq!(input, PathBuf::from("answer.txt"));
                assert!(!output.json);
                assert!(output.out_dir.is_none());
            }
            other => panic!("expected Normalize, got {other:?}"),
        }
    }
}
