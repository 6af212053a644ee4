use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};

use specgen_client::controller::{MSG_GENERATION_FAILED, SOFT_CHAR_LIMIT};
use specgen_client::{FormController, HttpClient, StdoutClipboard, Submission};
use specgen_core::{DetailLevel, Language};

#[derive(Debug, Parser)]
#[command(name = "specgen", about = "Generate a technical specification from a product idea")]
struct Cli {
    /// Server URL
    #[arg(long, env = "SPECGEN_SERVER_URL", default_value = "http://127.0.0.1:3000")]
    server_url: String,

    /// brief, standard or detailed
    #[arg(long, default_value = "standard")]
    detail: DetailLevel,

    /// ru or en
    #[arg(long, default_value = "ru")]
    language: Language,

    /// Directory to save technical-specification.md into
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the rendered HTML instead of the raw Markdown
    #[arg(long)]
    html: bool,

    /// Product idea. Read from stdin when omitted.
    idea: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let idea = if cli.idea.is_empty() {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        cli.idea.join(" ")
    };

    let mut form = FormController::new(HttpClient::new(&cli.server_url));
    form.set_idea(idea);
    if form.over_soft_limit() {
        warn!(
            "idea is {} characters (soft limit {SOFT_CHAR_LIMIT})",
            form.char_count()
        );
    }

    info!(
        "generating ({}, {}) via {}",
        cli.detail, cli.language, cli.server_url
    );
    match form.submit(cli.detail, cli.language).await {
        Submission::Skipped => bail!("product idea is empty"),
        Submission::Failed => {
            return Err(anyhow!(form.toast().unwrap_or(MSG_GENERATION_FAILED).to_string()))
        }
        Submission::Generated => {}
    }

    if cli.html {
        println!("{}", form.view().result_html);
    } else {
        form.copy(&mut StdoutClipboard)?;
    }

    if let Some(dir) = cli.out {
        let path = form.download().save_in(&dir).await?;
        info!("saved {}", path.display());
    }

    Ok(())
}
