mod caster;
mod cli;
mod commentary;
mod prompts;

use std::path::Path;
use std::process::ExitCode;

use gamecast_ai::{OpenAiClient, OpenAiConfig, SpeechClient, SpeechConfig};
use gamecast_common::GamecastError;
use gamecast_config::GamecastConfig;
use gamecast_platform::{AudioPlayer, ScreenCapturer};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use caster::{Caster, CasterSettings, ScreenFrames, SpeakerOutput};

const DEFAULT_LOG: &str = "gamecast=info";

/// Pick the directive layered on top of `RUST_LOG`. An unparseable
/// `--log-level` falls back to the default directive.
fn log_directive(requested: Option<&str>) -> Option<Directive> {
    requested
        .and_then(|d| d.parse().ok())
        .or_else(|| DEFAULT_LOG.parse().ok())
}

fn init_logging(requested: Option<&str>) {
    let mut filter = EnvFilter::from_default_env();
    if let Some(directive) = log_directive(requested) {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(raw) = requested.filter(|d| d.parse::<Directive>().is_err()) {
        tracing::warn!("ignoring invalid --log-level {raw:?}, using {DEFAULT_LOG}");
    }
}

fn list_monitors() -> Result<(), GamecastError> {
    for monitor in ScreenCapturer::monitors()? {
        println!(
            "{}: {}x{} at ({}, {}){}",
            monitor.index,
            monitor.width,
            monitor.height,
            monitor.x,
            monitor.y,
            if monitor.is_primary { " [primary]" } else { "" }
        );
    }
    Ok(())
}

fn list_audio_devices() -> Result<(), GamecastError> {
    for name in gamecast_platform::output_devices()? {
        println!("{name}");
    }
    Ok(())
}

fn init_config(path: Option<&Path>) -> Result<(), GamecastError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => gamecast_config::default_config_path()?,
    };
    gamecast_config::create_default_config(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Open every device and client the loop needs. Any failure here is fatal.
fn build_caster(config: &GamecastConfig) -> Result<Caster, GamecastError> {
    let capturer = ScreenCapturer::new(config.capture.monitor_index)?;
    let player = AudioPlayer::open(&config.audio.device)?;

    let openai = &config.openai;
    let chat = OpenAiClient::new(
        OpenAiConfig::new(&openai.api_key)
            .with_base_url(&openai.base_url)
            .with_max_tokens(openai.max_tokens),
    )?;
    let tts = SpeechClient::new(
        SpeechConfig::new(&openai.api_key, &openai.tts_model).with_base_url(&openai.base_url),
    )?;

    Ok(Caster::new(
        CasterSettings::from_config(config),
        Box::new(chat),
        Box::new(tts),
        Box::new(ScreenFrames::new(capturer, config.capture.frame_width)),
        Box::new(SpeakerOutput::new(player)),
    ))
}

async fn run(args: cli::Args) -> Result<(), GamecastError> {
    if args.list_monitors {
        return list_monitors();
    }
    if args.list_audio_devices {
        return list_audio_devices();
    }
    if args.init_config {
        return init_config(args.config.as_deref());
    }

    let config = gamecast_config::load_config(args.config.as_deref())?;
    tracing::info!(
        monitor = config.capture.monitor_index,
        frame_width = config.capture.frame_width,
        map = %config.matchup.map,
        "config loaded"
    );

    let mut caster = build_caster(&config)?;
    caster.run().await
}

fn main() -> ExitCode {
    // Environment mutation happens here, before any runtime thread exists.
    let loaded = gamecast_config::load_dotenv(Path::new(".env"));

    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::info!("gamecast v{} starting", env!("CARGO_PKG_VERSION"));
    if loaded > 0 {
        tracing::debug!("loaded {loaded} variables from .env");
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_log_level_is_used() {
        let directive = log_directive(Some("gamecast=debug")).unwrap();
        assert_eq!(directive.to_string(), "gamecast=debug");
    }

    #[test]
    fn missing_log_level_uses_default() {
        let directive = log_directive(None).unwrap();
        assert_eq!(directive.to_string(), DEFAULT_LOG);
    }

    #[test]
    fn invalid_log_level_falls_back_to_default() {
        let directive = log_directive(Some("gamecast=[[nope")).unwrap();
        assert_eq!(directive.to_string(), DEFAULT_LOG);
    }
}
