//! Tally - A minimal spreadsheet driven from the command line

mod cli;
mod error;

use anyhow::Context;
use cli::{Action, ConfigSource, Options};
use std::env;
use tally_core::{Sheet, SheetConfig};
use tally_engine::engine::{is_error_display, is_referenceable};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match cli::parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            cli::print_usage();
            std::process::exit(1);
        }
    };

    if options.help {
        cli::print_usage();
        return;
    }

    match run(&options) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(source: &ConfigSource) -> anyhow::Result<SheetConfig> {
    match source {
        ConfigSource::Default => Ok(SheetConfig::load_default()),
        ConfigSource::File(path) => SheetConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        ConfigSource::Disabled => Ok(SheetConfig::default()),
    }
}

/// Apply the actions in order, printing each requested value.
/// Returns false if any printed value was an error token.
fn run(options: &Options) -> anyhow::Result<bool> {
    let mut sheet = Sheet::with_config(load_config(&options.config)?);
    let mut all_ok = true;

    for action in &options.actions {
        match action {
            Action::Set { id, value } => {
                if !is_referenceable(id) {
                    log::warn!("cell id '{}' cannot be referenced from formulas", id);
                }
                sheet.put(id, value);
            }
            Action::Get(id) => all_ok &= emit(&sheet.get(id)),
            Action::Literal(id) => println!("{}", sheet.get_literal(id)),
            Action::Command(formula) => {
                let body = formula.strip_prefix('=').unwrap_or(formula);
                all_ok &= emit(&sheet.calculate(body));
            }
        }
    }

    Ok(all_ok)
}

fn emit(display: &str) -> bool {
    println!("{}", display);
    !is_error_display(display)
}
