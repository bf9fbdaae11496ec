use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use docfrag::config::Config;
use docfrag::observability::init_tracing;
use docfrag::render::SectionIds;

#[derive(Parser)]
#[command(
    name = "docfrag",
    about = "Convert .docx documents into embeddable HTML fragments",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the upload/convert HTTP service
    Serve {
        /// Address to listen on (overrides the config file and DOCFRAG_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Convert a .docx file and print the fragments to stdout
    Convert {
        /// Path to the .docx file
        file: PathBuf,
        /// Print the full JSON response payload instead of one fragment per line
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind } => serve(bind).await,
        Command::Convert { file, json } => convert(&file, json),
    }
}

async fn serve(bind: Option<String>) -> Result<()> {
    init_tracing("docfrag");

    let config = Config::load()?;
    let bind = bind
        .or_else(|| std::env::var("DOCFRAG_BIND").ok())
        .unwrap_or_else(|| config.bind.clone());

    let app = docfrag::build_router(&config);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(bind = %bind, "docfrag service started");

    axum::serve(listener, app).await?;
    Ok(())
}

fn convert(file: &Path, json: bool) -> Result<()> {
    let document = docfrag::load_document(file)?;
    let fragments = docfrag::convert_document(&document, &mut SectionIds::default());

    if json {
        let filename = file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("document.docx");
        let payload = serde_json::json!({
            "success": true,
            "html_content": fragments,
            "filename": docfrag::sanitize_filename(filename),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        for fragment in &fragments {
            println!("{fragment}");
        }
    }

    Ok(())
}
