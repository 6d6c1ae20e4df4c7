//! The individual steps of one iteration.

use gamecast_ai::Message;
use gamecast_common::GamecastError;
use tracing::{debug, warn};

use super::session::Caster;
use crate::commentary::{parse_commentary, Commentary};
use crate::prompts::ANNOUNCER_PROMPT;

/// Usage label for the vision call.
pub(super) const DESCRIBE_STAGE: &str = "describe";
/// Usage label for the commentary call.
pub(super) const COMMENTARY_STAGE: &str = "commentary";

impl Caster {
    /// Ask the vision model what is happening in `frame`. Never sees history.
    pub(super) async fn describe(&mut self, frame: String) -> Result<String, GamecastError> {
        let request = [Message::user(self.settings.screenshot_prompt.clone())
            .with_image(frame, self.settings.image_detail)];

        let response = self
            .chat
            .complete(&self.settings.screenshot_model, &request)
            .await?;
        self.tracker.record(DESCRIBE_STAGE, &response.usage);
        Ok(response.content)
    }

    /// Ask the commentary model for an announcer/color pair.
    ///
    /// The screenshot prompt and scene are replayed as a synthetic exchange
    /// after the stored history; none of the three turns are kept.
    pub(super) async fn generate(&mut self, scene: &str) -> Result<String, GamecastError> {
        let request = self.commentary_request(scene);

        let response = self
            .chat
            .complete(&self.settings.announcer_model, &request)
            .await?;
        self.tracker.record(COMMENTARY_STAGE, &response.usage);
        Ok(response.content)
    }

    pub(super) fn commentary_request(&self, scene: &str) -> Vec<Message> {
        let mut request = Vec::with_capacity(self.history.len() + 3);
        request.extend_from_slice(self.history.messages());
        request.push(Message::user(self.settings.screenshot_prompt.clone()));
        request.push(Message::assistant(scene));
        request.push(Message::user(ANNOUNCER_PROMPT));
        request
    }

    pub(super) fn parse(&self, reply: &str) -> Option<Commentary> {
        match parse_commentary(reply) {
            Ok(commentary) => Some(commentary),
            Err(e) => {
                warn!(error = %e, reply, "discarding malformed commentary");
                None
            }
        }
    }

    pub(super) async fn speak(&mut self, voice: &str, text: &str) -> Result<(), GamecastError> {
        let audio = self.tts.synthesize(voice, text).await?;
        debug!(voice, bytes = audio.len(), "synthesized speech");
        self.speaker.play(&audio)?;
        Ok(())
    }

    /// Close the iteration in the tracker and log what it cost.
    pub(super) fn log_usage(&mut self) {
        let spent = self.tracker.close_iteration();
        let total = self.tracker.total();
        debug!(
            iteration = self.tracker.iterations(),
            tokens = spent.total_tokens(),
            total_input = total.input_tokens,
            total_output = total.output_tokens,
            "token usage"
        );
        for entry in self.tracker.stages() {
            debug!(
                stage = entry.stage,
                calls = entry.calls,
                input = entry.usage.input_tokens,
                output = entry.usage.output_tokens,
                "stage usage"
            );
        }
    }
}
