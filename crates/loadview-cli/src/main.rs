//! Terminal browser over the facility view engine: render one page from
//! flags, export the filtered set to CSV, or drive the view interactively.

mod render;
mod repl;

use clap::Parser;
use loadview::prelude::*;
use std::{
    error::Error,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process,
};

#[derive(Debug, Parser)]
#[command(name = "loadview", version, about = "Browse ERCOT large-load facility records")]
struct Cli {
    /// Path to the facility records JSON array.
    #[arg(long, value_name = "FILE")]
    data: PathBuf,

    /// Sector filter: "All" or an exact sector label.
    #[arg(long, default_value = "All")]
    sector: String,

    /// Hub filter: "All" or an exact hub label.
    #[arg(long, default_value = "All")]
    hub: String,

    /// Case-insensitive search over name, city, county, and notes.
    #[arg(long, default_value = "")]
    search: String,

    /// Sort key: name, type, hub, city, county, or mw.
    #[arg(long, default_value = "mw")]
    sort: String,

    /// Sort direction: asc or desc.
    #[arg(long, default_value = "desc")]
    direction: String,

    /// 1-based page index.
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Rows per page.
    #[arg(long, default_value_t = loadview::DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Write the filtered (pre-pagination) set to a CSV file and exit.
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Drive the view interactively instead of rendering one page.
    #[arg(long)]
    repl: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let store = RecordStore::from_json_path(&cli.data)?;
    let mut session = ViewSession::with_state(store, ViewState::with_page_size(cli.page_size));

    session.set_sector(FieldFilter::parse(&cli.sector));
    session.set_hub(FieldFilter::parse(&cli.hub));
    if !cli.search.is_empty() {
        session.set_search(cli.search.as_str());
    }

    let key: SortKey = cli.sort.parse()?;
    let direction: Direction = cli.direction.parse()?;
    apply_sort(&mut session, key, direction);

    session.goto_page(cli.page);

    if let Some(path) = &cli.export {
        let mut writer = BufWriter::new(File::create(path)?);
        session.export_csv(&mut writer)?;
        writer.flush()?;
        println!("wrote {} rows to {}", session.filtered().len(), path.display());

        return Ok(());
    }

    if cli.repl {
        return repl::run(&mut session);
    }

    render::page(&session);
    render::summary(&session);

    Ok(())
}

// The engine's sort transition is a toggle; drive it until the state matches
// the requested key and direction.
fn apply_sort(session: &mut ViewSession, key: SortKey, direction: Direction) {
    if session.state().sort_key() != key {
        session.set_sort(key);
    }
    if session.state().direction() != direction {
        session.set_sort(key);
    }
}
