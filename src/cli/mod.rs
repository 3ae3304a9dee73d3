// CLI module
// Command-line argument parsing for the register binary

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Reads the process arguments into a `CliArgs` struct (currently just the
/// transaction store path). On invalid arguments or `--help`, clap prints
/// the appropriate message and exits the process itself.
///
/// # Returns
///
/// Returns a `CliArgs` struct with the parsed command-line arguments.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
