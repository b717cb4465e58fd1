//! `notes` - command-line front end for the notes API.
//!
//! Every command loads the list first, performs one page action and prints
//! the resulting page.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notes_client::api::NotesApi;
use notes_client::config::{ClientConfig, DEFAULT_API_URL};
use notes_client::page::{NotesPage, PageError, Submitted};
use notes_client::render::render_page;

#[derive(Parser)]
#[command(name = "notes")]
#[command(about = "Manage notes through the notes API")]
#[command(version)]
struct Cli {
    /// Base URL of the notes API
    #[arg(long, env = "NOTES_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all notes (default)
    List,
    /// Create a note
    #[command(alias = "new")]
    Add {
        /// Note title
        title: String,
        /// Optional note body
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Edit the title and/or content of a note
    Edit {
        /// Note ID
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New content (an empty string clears it)
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Flip the completed flag of a note
    Toggle {
        /// Note ID
        id: String,
    },
    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notes_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::new(&cli.api_url).context("Invalid --api-url")?;

    let mut page = NotesPage::new(NotesApi::new(&config));
    let result = run(&mut page, cli.command.unwrap_or(Commands::List)).await;

    print!("{}", render_page(&page));

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            // Request and validation failures are already on the banner.
            if page.error().is_none() {
                eprintln!("{err}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(page: &mut NotesPage<NotesApi>, command: Commands) -> Result<(), PageError> {
    page.load().await?;

    match command {
        Commands::List => {}
        Commands::Add { title, content } => {
            page.set_title(title);
            page.set_content(content.unwrap_or_default());
            if let Submitted::Created(note) = page.submit().await? {
                println!("Created note {}", note.id);
            }
        }
        Commands::Edit { id, title, content } => {
            page.start_edit(&id)?;
            if let Some(title) = title {
                page.set_title(title);
            }
            if let Some(content) = content {
                page.set_content(content);
            }
            page.submit().await?;
            println!("Updated note {id}");
        }
        Commands::Toggle { id } => {
            let note = page.toggle_completed(&id).await?;
            let state = if note.completed { "completed" } else { "open" };
            println!("Note {id} is now {state}");
        }
        Commands::Delete { id, yes } => {
            let title = page.find(&id).map(|n| n.title.clone());
            let deleted = page
                .delete(&id, |id| yes || confirm(id, title.as_deref()))
                .await?;
            if deleted {
                println!("Deleted note {id}");
            } else {
                println!("Cancelled");
            }
        }
    }

    Ok(())
}

/// Ask on stdin; anything but `y`/`yes` declines.
fn confirm(id: &str, title: Option<&str>) -> bool {
    match title {
        Some(title) => print!("Delete note '{title}' ({id})? [y/N] "),
        None => print!("Delete note {id}? [y/N] "),
    }
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
