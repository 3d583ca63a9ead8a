//! Command-line argument handling for the `rimpvar` binary

use thiserror::Error;

/// Errors from parsing the command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("no variable name provided")]
    MissingName,

    #[error("invalid target value '{0}': expected a 32-bit integer")]
    InvalidTarget(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

/// Parsed arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Print each step instead of launching the TUI
    pub print: bool,
    pub name: String,
    /// Values to assign, in order
    pub targets: Vec<i32>,
}

impl CliArgs {
    /// Parse arguments, excluding the program name
    pub fn parse<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut print = false;
        let mut name = None;
        let mut targets = Vec::new();

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--print" | "-p" => print = true,
                _ if name.is_none() => {
                    if arg.starts_with("--") {
                        return Err(CliError::UnknownOption(arg.to_string()));
                    }
                    name = Some(arg.to_string());
                }
                _ => {
                    let value = arg
                        .parse::<i32>()
                        .map_err(|_| CliError::InvalidTarget(arg.to_string()))?;
                    targets.push(value);
                }
            }
        }

        Ok(CliArgs {
            print,
            name: name.ok_or(CliError::MissingName)?,
            targets,
        })
    }
}

/// Usage text shown on argument errors
pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {program} [--print] <name> <value>...\n\n\
         Examples:\n  \
         {program} x 5 2 -3          # Step through the assignments in the TUI\n  \
         {program} --print x 5 2     # Assign then unwind, printing each step\n\n\
         Set RIMP_DEBUG=1 to trace every operation.",
        program = program_name
    )
}
