use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use site_server::config::{load_config, SiteConfig};
use site_server::pages;

#[derive(Parser)]
#[command(name = "site-cli")]
#[command(about = "Management CLI for the site server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the config and check that every page template exists
    Check {
        /// Config file to check; built-in defaults when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the page table
    Routes {
        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
    /// Probe a running server and report its status
    Status {
        #[arg(short, long, default_value = "http://127.0.0.1:8080")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { config } => check(config.as_deref()),
        Commands::Routes { json } => routes(json),
        Commands::Status { url } => status(&url).await,
    }
}

fn check(config_path: Option<&Path>) -> ExitCode {
    let config = match config_path {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            }
        },
        None => SiteConfig::default(),
    };

    let template_root = Path::new(&config.content.template_dir);
    let mut missing = 0;

    for page in pages::pages() {
        let path = template_root.join(page.template);
        if path.is_file() {
            println!("ok       {}", page.template);
        } else {
            println!("MISSING  {}", page.template);
            missing += 1;
        }
    }

    if missing > 0 {
        eprintln!(
            "{} template(s) missing under {}",
            missing,
            template_root.display()
        );
        return ExitCode::FAILURE;
    }

    println!("All {} page templates present", pages::pages().len());
    ExitCode::SUCCESS
}

fn routes(as_json: bool) -> ExitCode {
    if as_json {
        let entries: Vec<_> = pages::pages()
            .iter()
            .map(|page| {
                json!({
                    "path": page.path,
                    "template": page.template,
                    "id": page.id,
                    "title": page.title,
                })
            })
            .collect();
        match serde_json::to_string_pretty(&entries) {
            Ok(out) => println!("{}", out),
            Err(err) => {
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        for page in pages::pages() {
            println!(
                "GET {:<28} {:<32} id={:<12} title={}",
                page.path,
                page.template,
                page.id,
                page.title.unwrap_or("-")
            );
        }
    }
    ExitCode::SUCCESS
}

async fn status(url: &str) -> ExitCode {
    match reqwest::get(url).await {
        Ok(response) => {
            let status = response.status();
            println!("{} {}", status.as_u16(), url);
            if status.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("Error: {} unreachable: {}", url, err);
            ExitCode::FAILURE
        }
    }
}
