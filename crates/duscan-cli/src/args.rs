/// Command-line arguments.
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Concurrent disk-usage scanner with live per-directory progress"
)]
pub struct Args {
    /// Root directory to scan (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Disable ANSI colors in the output
    #[arg(long)]
    pub plain: bool,

    /// Progress redraw interval in milliseconds
    #[arg(long, default_value_t = 500)]
    pub interval_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["duscan"]);
        assert!(args.path.is_none());
        assert!(!args.plain);
        assert_eq!(args.interval_ms, 500);
    }

    #[test]
    fn positional_path_and_flags() {
        let args = Args::parse_from(["duscan", "/tmp", "--plain", "--interval-ms", "100"]);
        assert_eq!(args.path.unwrap(), PathBuf::from("/tmp"));
        assert!(args.plain);
        assert_eq!(args.interval_ms, 100);
    }
}
