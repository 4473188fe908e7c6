//! Command line parsing.

use std::path::PathBuf;

use crate::error::{CliError, Result};

pub fn print_usage() {
    eprintln!("Usage: tally [OPTIONS]");
    eprintln!();
    eprintln!("Options are applied in order:");
    eprintln!("  -s, --set <ID=VALUE>      Store VALUE in cell ID (can be repeated)");
    eprintln!("  -g, --get <ID>            Print the evaluated value of cell ID");
    eprintln!("  -l, --literal <ID>        Print the raw stored value of cell ID");
    eprintln!("  -c, --command <FORMULA>   Evaluate FORMULA against the cells set so far");
    eprintln!("  --config <FILE>           Load settings from FILE instead of the default");
    eprintln!("  --no-config               Ignore the user config file");
    eprintln!("  -h, --help                Print help");
}

/// One step of a command line session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Set { id: String, value: String },
    Get(String),
    Literal(String),
    Command(String),
}

/// Where settings come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConfigSource {
    #[default]
    Default,
    File(PathBuf),
    Disabled,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub actions: Vec<Action>,
    pub config: ConfigSource,
    pub help: bool,
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .ok_or_else(|| CliError::MissingValue(flag.to_string()))
        };
        match arg.as_str() {
            "-h" | "--help" => {
                options.help = true;
                return Ok(options);
            }
            "-s" | "--set" => {
                let assignment = value_for("--set")?;
                let (id, value) = assignment
                    .split_once('=')
                    .ok_or_else(|| CliError::InvalidAssignment(assignment.clone()))?;
                if id.is_empty() {
                    return Err(CliError::InvalidAssignment(assignment.clone()));
                }
                options.actions.push(Action::Set {
                    id: id.to_string(),
                    value: value.to_string(),
                });
            }
            "-g" | "--get" => options.actions.push(Action::Get(value_for("--get")?)),
            "-l" | "--literal" => options.actions.push(Action::Literal(value_for("--literal")?)),
            "-c" | "--command" => options.actions.push(Action::Command(value_for("--command")?)),
            "--config" => options.config = ConfigSource::File(PathBuf::from(value_for("--config")?)),
            "--no-config" => options.config = ConfigSource::Disabled,
            other if other.starts_with('-') => {
                return Err(CliError::UnknownOption(other.to_string()));
            }
            other => return Err(CliError::UnexpectedArgument(other.to_string())),
        }
    }

    Ok(options)
}
