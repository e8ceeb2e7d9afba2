use clap::Parser;

use crate::interval::{IntervalConfig, IntervalMode};
use crate::server::ServerConfig;

/// Remote-controlled auto clicker with a browser control panel.
#[derive(Parser, Debug, Clone)]
#[command(name = "clickforge", version)]
pub struct Cli {
    /// Interface to bind; the default exposes the panel to the local network
    #[arg(long, env = "CLICKFORGE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(short, long, env = "CLICKFORGE_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "CLICKFORGE_LOG", default_value = "info")]
    pub log_level: String,

    /// Interval mode reported before the first start
    #[arg(long, value_enum, default_value_t = IntervalMode::Fixed)]
    pub mode: IntervalMode,

    #[arg(long, default_value_t = 1.0)]
    pub min_interval: f64,

    #[arg(long, default_value_t = 1.0)]
    pub max_interval: f64,
}

impl Cli {
    pub fn server(&self) -> ServerConfig {
        ServerConfig::new(self.host.clone(), self.port)
    }

    pub fn interval(&self) -> IntervalConfig {
        IntervalConfig::new(self.mode, self.min_interval, self.max_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["clickforge"]).unwrap();
        assert_eq!(cli.server().addr(), "0.0.0.0:8000");
        assert_eq!(cli.interval(), IntervalConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "clickforge", "--host", "127.0.0.1", "-p", "9000",
            "--mode", "random", "--min-interval", "0.5", "--max-interval", "2",
        ])
        .unwrap();
        assert_eq!(cli.server().addr(), "127.0.0.1:9000");
        assert_eq!(cli.interval(), IntervalConfig::new(IntervalMode::Random, 0.5, 2.0));
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["clickforge", "--mode", "burst"]).is_err());
    }
}
