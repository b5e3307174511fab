// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gastos::{cli, commands, db, persistence, render::TerminalView, store::Store};

/// Logs go to stderr so they never mix with exported or JSON output.
/// `RUST_LOG` overrides the default `gastos=warn`.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "gastos=warn".into()))
        .init();
}

fn open_store(conn: Connection) -> Result<Store<Connection, TerminalView>> {
    let theme = persistence::load_theme(&conn)?;
    Store::initialize(conn, TerminalView::new(theme)).context("Failed to load stored transactions")
}

fn main() -> Result<()> {
    init_logging();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = db::db_path(matches.get_one::<String>("db").map(String::as_str))?;
    debug!(path = %path.display(), "opening storage");
    let mut conn = db::open_or_init(&path)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            let store = open_store(conn)?;
            println!(
                "Storage ready at {} ({} transactions)",
                path.display(),
                store.transactions().len()
            );
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut open_store(conn)?, sub)?,
        Some(("report", sub)) => commands::reports::handle(&open_store(conn)?, sub)?,
        Some(("export", sub)) => {
            commands::exporter::handle(&open_store(conn)?, sub)?;
        }
        Some(("import", sub)) => {
            commands::importer::handle(&mut open_store(conn)?, sub)?;
        }
        Some(("theme", sub)) => {
            commands::theme::handle(&mut conn, sub)?;
        }
        Some(("doctor", _)) => commands::doctor::handle(&conn)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
