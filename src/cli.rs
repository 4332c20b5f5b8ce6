//! Defines the command-line interface for the application.

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_FILE: &str = "src/App.jsx";
pub const DEFAULT_START_MARKER: &str =
    "/** DELETE O QUE ESTIVER ABAIXO DISSO ATÉ O FINAL DA FUNÇÃO MEGABLOCK **/";
pub const DEFAULT_END_MARKER: &str = "const excluirPedido = async (id) => {";

#[derive(Parser, Debug)]
#[command(
    name = "marker-splice",
    version,
    about = "Remove the text between two literal markers from a file, in place."
)]
pub struct Cli {
    /// The file to modify.
    #[arg(short, long, value_name = "FILE_PATH", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Text marking the start of the block. Removed along with the block.
    #[arg(
        long,
        value_name = "TEXT",
        default_value = DEFAULT_START_MARKER,
        value_parser = NonEmptyStringValueParser::new(),
        allow_hyphen_values = true
    )]
    pub start_marker: String,

    /// Text marking the end of the block. Kept in the output.
    #[arg(
        long,
        value_name = "TEXT",
        default_value = DEFAULT_END_MARKER,
        value_parser = NonEmptyStringValueParser::new(),
        allow_hyphen_values = true
    )]
    pub end_marker: String,
}

#[cfg(test)]
mod tests {
    use super::{Cli, DEFAULT_END_MARKER, DEFAULT_FILE, DEFAULT_START_MARKER};
    use clap::{CommandFactory, Parser};
    use std::path::Path;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_hardcoded_target() {
        let cli = Cli::try_parse_from(["marker-splice"]).unwrap();
        assert_eq!(cli.file, Path::new(DEFAULT_FILE));
        assert_eq!(cli.start_marker, DEFAULT_START_MARKER);
        assert_eq!(cli.end_marker, DEFAULT_END_MARKER);
    }

    #[test]
    fn empty_marker_is_rejected() {
        let result = Cli::try_parse_from(["marker-splice", "--start-marker", ""]);
        assert!(result.is_err());
    }

    #[test]
    fn marker_may_start_with_hyphen() {
        let cli =
            Cli::try_parse_from(["marker-splice", "--end-marker", "-- end of block --"]).unwrap();
        assert_eq!(cli.end_marker, "-- end of block --");
    }
}
