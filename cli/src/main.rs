use anyhow::{bail, Result};
use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod console;
mod loader;
mod view;

use console::StdConsole;
use view::SearchView;

#[derive(Parser)]
#[command(name = "fieldsearch")]
#[command(about = "Interactively search JSON record collections by field", long_about = None)]
struct Cli {
    /// Collection files, each a JSON array of flat objects. The file stem
    /// becomes the collection name.
    #[arg(required = true)]
    collections: Vec<PathBuf>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let mut collections = BTreeMap::new();
    for path in &cli.collections {
        let (name, collection) = loader::load_collection(path)?;
        if collections.insert(name.clone(), collection).is_some() {
            bail!("duplicate collection name `{name}`");
        }
    }

    let mut view = SearchView::new(StdConsole::new());
    view.run(&collections);
    Ok(())
}
