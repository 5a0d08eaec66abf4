//! Interactive readline loop over one view session. Every command maps to a
//! single engine transition or derivation; the loop holds no view logic of
//! its own.

use crate::render;
use loadview::prelude::*;
use rustyline::{DefaultEditor, error::ReadlineError};
use std::{
    error::Error,
    fs::File,
    io::{BufWriter, Write},
};

const HELP: &str = "\
commands:
  sector <label|All>   set the sector filter (resets to page 1)
  hub <label|All>      set the hub filter (resets to page 1)
  search <text>        set the search term (empty clears; resets to page 1)
  sort <key>           sort by name|type|hub|city|county|mw (repeat to toggle)
  page <n>             jump to a page (clamped)
  next / prev          step one page
  summary              aggregate statistics and per-hub rollup
  sectors / hubs       list selectable filter options
  export <file>        write the filtered set as CSV
  reset                restore the default view
  show                 reprint the current page
  quit                 leave";

pub fn run(session: &mut ViewSession) -> Result<(), Box<dyn Error>> {
    let mut editor = DefaultEditor::new()?;
    render::page(session);

    loop {
        match editor.readline("loadview> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                if !dispatch(session, line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

// Returns false when the loop should end. Command failures print and keep
// the session alive.
fn dispatch(session: &mut ViewSession, line: &str) -> bool {
    let mut parts = line.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or("").trim();

    match command {
        "sector" => {
            session.set_sector(FieldFilter::parse(rest));
            render::page(session);
        }
        "hub" => {
            session.set_hub(FieldFilter::parse(rest));
            render::page(session);
        }
        "search" => {
            session.set_search(rest);
            render::page(session);
        }
        "sort" => match rest.parse::<SortKey>() {
            Ok(key) => {
                session.set_sort(key);
                render::page(session);
            }
            Err(err) => println!("{err}"),
        },
        "page" => match rest.parse::<usize>() {
            Ok(page) => {
                session.goto_page(page);
                render::page(session);
            }
            Err(_) => println!("usage: page <n>"),
        },
        "next" => {
            session.next_page();
            render::page(session);
        }
        "prev" => {
            session.prev_page();
            render::page(session);
        }
        "summary" => render::summary(session),
        "sectors" => {
            for sector in session.sector_options() {
                println!("{sector}");
            }
        }
        "hubs" => {
            for hub in session.hub_options() {
                println!("{hub}");
            }
        }
        "export" => {
            if rest.is_empty() {
                println!("usage: export <file>");
            } else {
                match export(session, rest) {
                    Ok(rows) => println!("wrote {rows} rows to {rest}"),
                    Err(err) => println!("export failed: {err}"),
                }
            }
        }
        "reset" => {
            session.reset();
            render::page(session);
        }
        "show" => render::page(session),
        "help" => println!("{HELP}"),
        "quit" | "exit" => return false,
        other => println!("unknown command: {other} (try help)"),
    }

    true
}

fn export(session: &ViewSession, path: &str) -> Result<usize, Box<dyn Error>> {
    let mut writer = BufWriter::new(File::create(path)?);
    session.export_csv(&mut writer)?;
    writer.flush()?;

    Ok(session.filtered().len())
}
