//! CLI output formatting: one formatter per output mode.
//!
//! The formatter is chosen once at startup from the parsed arguments and
//! handed down as a trait object, so the run logic never branches on the
//! output mode itself.

mod formatter;
mod human;
mod json;

pub use formatter::OutputFormatter;

use crate::cli::Cli;
use human::HumanFormatter;
use json::JsonFormatter;

/// Selects the formatter for this invocation.
///
/// `--json` wins outright; `--verbose` and `--quiet` only shape human
/// output (clap already rejects the two together).
pub fn formatter_for(args: &Cli) -> Box<dyn OutputFormatter> {
    if args.json {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter::new(args.verbose, args.quiet))
    }
}
