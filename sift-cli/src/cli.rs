use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use sift_core::FinderConfig;

use crate::{
    candidates::{self, Separator},
    logging,
};

#[derive(Parser)]
#[command(
    name = "sift",
    version,
    about = "Interactive fuzzy finder",
    long_about = "Interactive fuzzy finder

Type to narrow the list, arrows to move, enter to pick, esc to quit.
The picked entry is printed on stdout.

Examples:
  ls | sift                     (pick a file name)
  sift apple banana grape       (pick one of the arguments)
  sift -q ap -f fruits.txt      (start with a query)
  find . -print0 | sift -0      (NUL separated input)
"
)]
struct Cli {
    /// candidates to choose from (default: read from stdin)
    items: Vec<String>,

    /// read candidates from a file instead of stdin
    #[arg(short, long, conflicts_with = "items")]
    file: Option<PathBuf>,

    /// input entries are separated by NUL instead of newline
    #[arg(short = '0', long)]
    read0: bool,

    /// initial query
    #[arg(short, long)]
    query: Option<String>,

    /// title of the search box
    #[arg(short, long)]
    prompt: Option<String>,

    /// maximum number of visible rows
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    max_rows: Option<u16>,

    /// yaml file with finder settings, flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// verbose logging (written to $SIFT_LOG_DIR)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn finder_config(&self) -> anyhow::Result<FinderConfig> {
        let mut config = match &self.config {
            Some(path) => FinderConfig::from_file(path)?,
            None => FinderConfig::default(),
        };

        if let Some(query) = &self.query {
            config.query = query.clone();
        }
        if let Some(prompt) = &self.prompt {
            config.prompt = prompt.clone();
        }
        if let Some(max_rows) = self.max_rows {
            config.max_rows = Some(max_rows.into());
        }

        Ok(config)
    }

    fn candidates(&self) -> anyhow::Result<Vec<String>> {
        let sep = Separator::from_read0(self.read0);
        match &self.file {
            Some(path) => candidates::from_file(path, sep),
            None if !self.items.is_empty() => Ok(self.items.clone()),
            None => candidates::from_stdin(sep),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.finder_config()?;
    let candidates = cli.candidates()?;
    tracing::info!(count = candidates.len(), "candidates loaded");

    match sift_tui::fuzzy_finder(&candidates, &config)? {
        Some(selection) => {
            println!("{}", selection);
            Ok(())
        }
        None => Err(anyhow!("no selection")),
    }
}
