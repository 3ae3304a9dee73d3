use clap::Parser;
use std::path::PathBuf;

/// Run an interactive point-of-sale register in the terminal
#[derive(Parser, Debug)]
#[command(name = "pos-register")]
#[command(about = "Interactive terminal point-of-sale register", long_about = None)]
pub struct CliArgs {
    /// Path of the transaction store file
    #[arg(
        long = "store",
        value_name = "FILE",
        default_value = "transactions.json",
        help = "Path to the JSON Lines transaction store (created if missing)"
    )]
    pub store: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_store(&["program"], "transactions.json")]
    #[case::custom_store(&["program", "--store", "sales.jsonl"], "sales.jsonl")]
    #[case::custom_path(&["program", "--store", "/tmp/pos/store.json"], "/tmp/pos/store.json")]
    fn test_store_path_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.store, PathBuf::from(expected));
    }

    // Error handling tests
    #[rstest]
    #[case::unknown_flag(&["program", "--unknown"])]
    #[case::store_without_value(&["program", "--store"])]
    #[case::stray_positional(&["program", "extra"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
