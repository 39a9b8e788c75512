use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Recursively checksums every file under the paths listed in INPUT and
/// writes `<digest> <path>` lines to OUTPUT.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// File listing one root path per line
    pub input: PathBuf,
    /// Report file, created or truncated
    pub output: PathBuf,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Log size and hashing time of every file
    #[clap(long)]
    pub timings: bool,

    /// Number of hashing workers, 0 picks one per available core
    #[clap(long, short, default_value_t = 1)]
    pub jobs: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_positionals_with_defaults() {
        let cli = Cli::try_parse_from(["fnvwalk", "in.txt", "out.txt"]).unwrap();

        assert_eq!(cli.input, PathBuf::from("in.txt"));
        assert_eq!(cli.output, PathBuf::from("out.txt"));
        assert!(matches!(cli.log_level, LogLevel::Warn));
        assert!(!cli.timings);
        assert_eq!(cli.jobs, 1);
    }

    #[test]
    fn rejects_missing_output() {
        assert!(Cli::try_parse_from(["fnvwalk", "in.txt"]).is_err());
    }

    #[test]
    fn rejects_extra_positional() {
        assert!(Cli::try_parse_from(["fnvwalk", "in.txt", "out.txt", "extra"]).is_err());
    }

    #[test]
    fn parses_options() {
        let cli = Cli::try_parse_from([
            "fnvwalk", "--timings", "-j", "4", "-l", "silent", "in.txt", "out.txt",
        ])
        .unwrap();

        assert!(cli.timings);
        assert_eq!(cli.jobs, 4);
        assert!(matches!(cli.log_level, LogLevel::Silent));
    }
}
