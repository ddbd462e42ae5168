//! `playbook`: terminal front end for a trade playbook.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use playbook_core::Clock;
use services::{PlaybookContent, PlaybookServices};

mod commands;

#[derive(Parser)]
#[command(name = "playbook", version, about = "Read a trade playbook and take its knowledge check")]
struct Cli {
    /// Playbook content file (TOML). Defaults to the bundled "Why Trade?" playbook.
    #[arg(long, global = true, env = "PLAYBOOK_CONTENT")]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the table of contents
    Outline,

    /// Replay scroll offsets and report the active section after each
    Track {
        /// Scroll offsets, in order
        #[arg(required = true, allow_negative_numbers = true)]
        offsets: Vec<f64>,

        /// Layout file with `[[boundaries]]` entries (id, top, height)
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Height of the hero area above the first section (uniform layout)
        #[arg(long, default_value = "600")]
        hero: f64,

        /// Height of every section (uniform layout)
        #[arg(long, default_value = "800")]
        section_height: f64,
    },

    /// Take the knowledge check
    Quiz {
        /// Comma-separated 1-based option numbers, one per question (e.g. "2,3,2,1").
        /// Without this the quiz runs interactively on stdin.
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<usize>>,

        /// Print the final report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up glossary terms
    Glossary {
        /// Term or search text; lists the whole glossary when omitted
        query: Option<String>,

        /// Only list terms starting with this letter
        #[arg(long, conflicts_with = "query")]
        letter: Option<char>,
    },

    /// List downloadable resources
    Downloads,

    /// Validate a content file
    Validate {
        /// Content file to check
        path: PathBuf,
    },
}

fn load_services(content: Option<&Path>) -> anyhow::Result<PlaybookServices> {
    let content = match content {
        Some(path) => PlaybookContent::load(path)?,
        None => PlaybookContent::builtin()?,
    };
    Ok(PlaybookServices::from_content(content, Clock::system())?)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let content = cli.content;
    match cli.command {
        Commands::Validate { path } => commands::validate::execute(&path),
        Commands::Outline => commands::outline::execute(&load_services(content.as_deref())?),
        Commands::Track {
            offsets,
            layout,
            hero,
            section_height,
        } => {
            let layout = match layout {
                Some(path) => commands::track::Layout::File(path),
                None => commands::track::Layout::Uniform {
                    hero,
                    section_height,
                },
            };
            let mut services = load_services(content.as_deref())?;
            commands::track::execute(&mut services, &offsets, &layout)
        }
        Commands::Quiz { answers, json } => {
            let mut services = load_services(content.as_deref())?;
            match answers {
                Some(answers) => commands::quiz::execute_scripted(&mut services, &answers, json),
                None => commands::quiz::execute_interactive(&mut services, json),
            }
        }
        Commands::Glossary { query, letter } => commands::glossary::execute(
            &load_services(content.as_deref())?,
            query.as_deref(),
            letter,
        ),
        Commands::Downloads => commands::downloads::execute(&load_services(content.as_deref())?),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err:#}");
        process::exit(2);
    }
}
