use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use rig_vedha_portal::{DEFAULT_BACKEND_URL, Feature, Mode, Portal, PortalConfig};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about = "Rig Vedha knowledge portal", long_about = None)]
struct Args {
    /// Call Gemini directly, or delegate to the backend service
    #[arg(long, value_enum, env = "RIG_VEDHA_MODE", default_value = "direct")]
    mode: Mode,

    /// Backend base URL, also where the PDF is served from
    #[arg(long, env = "RIG_VEDHA_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Open this document instead of the backend's PDF route
    #[arg(long, env = "RIG_VEDHA_PDF_URL")]
    pdf_url: Option<String>,

    /// Gemini API key, used in direct mode
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Gemini model name
    #[arg(long, default_value = rig_vedha_portal::completion::DEFAULT_GEMINI_MODEL)]
    model: String,

    /// Write logs to this file; the terminal UI owns stdout
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    window: Option<WindowCommand>,
}

/// Open a feature window directly instead of the menu.
#[derive(Subcommand, Debug, Clone, Copy)]
enum WindowCommand {
    /// Rig Vedha PDF reader
    Pdf,
    /// AI-generated quiz
    Quiz,
    /// AI chat assistant
    Chat,
}

impl From<WindowCommand> for Feature {
    fn from(command: WindowCommand) -> Self {
        match command {
            WindowCommand::Pdf => Feature::Pdf,
            WindowCommand::Quiz => Feature::Quiz,
            WindowCommand::Chat => Feature::Chat,
        }
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> std::io::Result<()> {
    let writer = match log_file {
        Some(path) => BoxMakeWriter::new(Mutex::new(File::create(path)?)),
        None => BoxMakeWriter::new(std::io::sink),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "rig_vedha_portal=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_file.as_ref()) {
        eprintln!("Error opening log file: {}", e);
        std::process::exit(1);
    }

    let config = PortalConfig {
        mode: args.mode,
        api_key: args.api_key,
        model: args.model,
        backend_url: args.backend_url,
        pdf_url: args.pdf_url,
        ..PortalConfig::default()
    };
    tracing::info!(mode = ?config.mode, backend = %config.backend_url, "starting portal");

    if let Err(e) = Portal::new(&config).run(args.window.map(Feature::from)).await {
        eprintln!("Error running portal: {}", e);
        std::process::exit(1);
    }
}
