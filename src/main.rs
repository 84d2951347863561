mod cmd;

use clap::Parser;
use md2nb::envconfig;
use std::path::PathBuf;
use std::process;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "md2nb")]
#[command(version = "0.1.0")]
#[command(about = "Convert Markdown files under a directory into notebooks", long_about = None)]
struct Cli {
    /// Directory to scan for .md files
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Converter program to invoke (overrides MD2NB_TOOL)
    #[arg(long)]
    tool: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let level = cli.log_level.parse::<Level>().unwrap_or(Level::WARN);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .without_time()
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let tool = cli.tool.unwrap_or_else(envconfig::tool);

    if let Err(e) = cmd::convert(&cli.root, &tool) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
