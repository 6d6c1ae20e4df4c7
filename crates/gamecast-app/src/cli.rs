use clap::Parser;

/// gamecast: live play-by-play and color commentary for a game on screen.
#[derive(Parser, Debug)]
#[command(name = "gamecast", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Log level override (e.g. debug, gamecast=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the monitors that can be captured and exit.
    #[arg(long)]
    pub list_monitors: bool,

    /// Print the audio output devices and exit.
    #[arg(long)]
    pub list_audio_devices: bool,

    /// Write a commented config template (to --config or the default path) and exit.
    #[arg(long)]
    pub init_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_runs_the_loop() {
        let args = Args::try_parse_from(["gamecast"]).unwrap();
        assert!(args.config.is_none());
        assert!(!args.list_monitors);
        assert!(!args.list_audio_devices);
        assert!(!args.init_config);
    }

    #[test]
    fn parses_config_and_log_level() {
        let args = Args::try_parse_from([
            "gamecast",
            "--config",
            "/tmp/gamecast.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(
            args.config.as_deref(),
            Some(std::path::Path::new("/tmp/gamecast.toml"))
        );
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn parses_listing_flags() {
        let args = Args::try_parse_from(["gamecast", "--list-monitors", "--list-audio-devices"])
            .unwrap();
        assert!(args.list_monitors);
        assert!(args.list_audio_devices);
    }
}
