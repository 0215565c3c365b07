use std::io;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use llm_param_notebooks::observability::{self, LogTarget, ObservabilityConfig};
use llm_param_notebooks::display_example;
use llm_param_notebooks::query::{OllamaClient, QueryConfig};
use llm_param_notebooks::topics::{self, DEFAULT_OUTPUT_DIR, Topic};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about = "Tutorial notebooks for LLM inference parameters")]
struct Args {
    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value_t = Level::INFO)]
    log_level: Level,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write tutorial notebooks to disk
    Build {
        /// Output directory, created if missing
        #[arg(long, short, default_value = DEFAULT_OUTPUT_DIR)]
        out_dir: PathBuf,

        /// Topic to build (repeatable); all topics when omitted
        #[arg(long, short)]
        topic: Vec<Topic>,
    },
    /// List the available topics and their file names
    List,
    /// Query the local model and print the example as Markdown
    Ask {
        #[arg(long)]
        title: String,

        #[arg(long)]
        prompt: String,

        /// Optional system instruction
        #[arg(long)]
        system: Option<String>,

        /// Model name (defaults to OLLAMA_MODEL or llama2)
        #[arg(long)]
        model: Option<String>,

        /// Server URL (defaults to OLLAMA_HOST or http://localhost:11434)
        #[arg(long)]
        endpoint: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let target = match args.log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Console,
    };
    observability::init(ObservabilityConfig {
        level: args.log_level,
        target,
    })
    .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    match args.command {
        Command::Build { out_dir, topic } => {
            let selected = if topic.is_empty() { Topic::all() } else { topic };
            for topic in selected {
                let path = topics::build_topic(topic, &out_dir)
                    .with_context(|| format!("failed to build the {} notebook", topic))?;
                println!("{}", path.display());
            }
        }
        Command::List => {
            for topic in Topic::all() {
                println!("{:<18} {}", topic, topic.file_name());
            }
        }
        Command::Ask {
            title,
            prompt,
            system,
            model,
            endpoint,
        } => {
            let mut config = QueryConfig::from_env();
            if let Some(model) = model {
                config = config.with_model(model);
            }
            if let Some(endpoint) = endpoint {
                config = config.with_endpoint(endpoint);
            }

            let client = OllamaClient::with_config(config)?;
            let mut stdout = io::stdout().lock();
            display_example(&client, &mut stdout, &title, &prompt, system.as_deref())?;
        }
    }

    Ok(())
}
