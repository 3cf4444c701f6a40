use std::path::PathBuf;

use clap::Parser;

/// Palaver — chat with a language model from your terminal.
#[derive(Parser, Debug)]
#[command(name = "palaver", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `palaver=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model identifier override.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Maximum retained turns, system prompt included.
    #[arg(long)]
    pub max_turns: Option<u32>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::parse_from([
            "palaver",
            "--config",
            "/tmp/p.toml",
            "-m",
            "gpt-4o-mini",
            "--max-turns",
            "8",
            "--log-level",
            "palaver=debug",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/p.toml")));
        assert_eq!(args.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(args.max_turns, Some(8));
        assert_eq!(args.log_level.as_deref(), Some("palaver=debug"));
    }

    #[test]
    fn no_flags_is_valid() {
        let args = Args::parse_from(["palaver"]);
        assert!(args.config.is_none());
        assert!(args.model.is_none());
    }
}
