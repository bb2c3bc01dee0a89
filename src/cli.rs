use clap::Parser;
use std::path::PathBuf;

/// CLI for the seat demo
#[derive(Parser, Debug, Clone)]
#[command(name = "seat-demo", version, about = "Render the seats of a poker table")]
pub struct DemoCli {
    /// Path to config file
    #[arg(long, default_value = "seat-demo.toml")]
    pub config: PathBuf,

    /// Table name (overrides config)
    #[arg(long)]
    pub table: Option<String>,

    /// Host used for join links (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// JSON file with a table snapshot (overrides config)
    #[arg(long)]
    pub seats: Option<PathBuf>,

    /// Open a window instead of printing seat plans
    #[arg(long, default_value_t = false)]
    pub gui: bool,

    /// Persist CLI overrides back to the config file
    #[arg(long, default_value_t = false)]
    pub persist: bool,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = DemoCli::parse_from([
            "seat-demo",
            "--table",
            "river-7",
            "--host",
            "poker.example",
            "--gui",
        ]);
        assert_eq!(cli.table.as_deref(), Some("river-7"));
        assert_eq!(cli.host.as_deref(), Some("poker.example"));
        assert!(cli.gui);
        assert!(!cli.persist);
        assert_eq!(cli.config, PathBuf::from("seat-demo.toml"));
    }
}
