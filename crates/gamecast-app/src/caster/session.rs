use std::time::Instant;

use gamecast_ai::{AiClient, ConversationHistory, TextToSpeech, TokenTracker};
use gamecast_common::{GamecastError, ImageDetail};
use gamecast_config::GamecastConfig;
use tracing::{info, warn};

use super::{AudioSink, FrameSource};
use crate::commentary::Commentary;
use crate::prompts::screenshot_prompt;

/// Everything the loop reads from configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct CasterSettings {
    pub screenshot_model: String,
    pub announcer_model: String,
    pub image_detail: ImageDetail,
    pub announcer_voice: String,
    pub color_voice: String,
    pub screenshot_prompt: String,
    pub history_retention: usize,
    /// 0 keeps retrying malformed responses forever.
    pub max_consecutive_failures: u32,
}

impl CasterSettings {
    pub fn from_config(config: &GamecastConfig) -> Self {
        Self {
            screenshot_model: config.openai.screenshot_model.clone(),
            announcer_model: config.openai.announcer_model.clone(),
            image_detail: config.openai.image_detail,
            announcer_voice: config.audio.announcer_voice.clone(),
            color_voice: config.audio.color_voice.clone(),
            screenshot_prompt: screenshot_prompt(
                &config.matchup.map,
                &config.matchup.blue_team,
                &config.matchup.red_team,
            ),
            history_retention: config.commentary.history_retention,
            max_consecutive_failures: config.commentary.max_consecutive_failures,
        }
    }
}

/// What one pass through the loop produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationOutcome {
    /// Both lines were committed to history and played.
    Spoken(Commentary),
    /// The commentary reply was malformed; nothing changed.
    Discarded,
}

/// One commentary session.
pub struct Caster {
    pub(super) settings: CasterSettings,
    pub(super) chat: Box<dyn AiClient>,
    pub(super) tts: Box<dyn TextToSpeech>,
    pub(super) frames: Box<dyn FrameSource>,
    pub(super) speaker: Box<dyn AudioSink>,
    pub(super) history: ConversationHistory,
    pub(super) tracker: TokenTracker,
    pub(super) started: Instant,
}

impl Caster {
    pub fn new(
        settings: CasterSettings,
        chat: Box<dyn AiClient>,
        tts: Box<dyn TextToSpeech>,
        frames: Box<dyn FrameSource>,
        speaker: Box<dyn AudioSink>,
    ) -> Self {
        let history = ConversationHistory::new(settings.history_retention);
        Self {
            settings,
            chat,
            tts,
            frames,
            speaker,
            history,
            tracker: TokenTracker::new(),
            started: Instant::now(),
        }
    }

    /// Run iterations until one fails fatally.
    ///
    /// Only returns when an error ends the session, including reaching the
    /// configured cap of consecutive malformed replies.
    pub async fn run(&mut self) -> Result<(), GamecastError> {
        let cap = self.settings.max_consecutive_failures;
        let mut failures: u32 = 0;

        info!(
            screenshot_model = %self.settings.screenshot_model,
            announcer_model = %self.settings.announcer_model,
            retention = self.history.retention(),
            "commentary loop started"
        );

        loop {
            match self.run_iteration().await? {
                IterationOutcome::Spoken(_) => failures = 0,
                IterationOutcome::Discarded => {
                    failures = failures.saturating_add(1);
                    if cap > 0 && failures >= cap {
                        return Err(GamecastError::MalformedCommentaryLimit(failures));
                    }
                    if cap > 0 {
                        warn!(failures, cap, "consecutive malformed commentary replies");
                    }
                }
            }
        }
    }

    /// Capture, describe, narrate and, if the reply parses, speak once.
    pub async fn run_iteration(&mut self) -> Result<IterationOutcome, GamecastError> {
        let frame = self.frames.capture_frame()?;
        self.show_time("Captured screenshot");

        let scene = self.describe(frame).await?;
        self.show_time("Described scene");
        info!("Scene: {scene}");

        let reply = self.generate(&scene).await?;
        self.show_time("Generated commentary");

        let Some(commentary) = self.parse(&reply) else {
            self.log_usage();
            return Ok(IterationOutcome::Discarded);
        };

        self.history
            .commit_commentary(&commentary.announcer, &commentary.color);
        info!("Announcer: {}", commentary.announcer);
        info!("Color: {}", commentary.color);

        let announcer_voice = self.settings.announcer_voice.clone();
        self.speak(&announcer_voice, &commentary.announcer).await?;
        self.show_time("Spoke announcer");

        let color_voice = self.settings.color_voice.clone();
        self.speak(&color_voice, &commentary.color).await?;
        self.show_time("Spoke color");

        self.log_usage();
        Ok(IterationOutcome::Spoken(commentary))
    }

    fn show_time(&self, stage: &str) {
        info!("{stage}: {:.3}s", self.started.elapsed().as_secs_f64());
    }
}
