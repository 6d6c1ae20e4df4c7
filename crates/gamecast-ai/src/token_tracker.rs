//! Token usage per commentary stage.
//!
//! Every completion call is recorded against the stage that issued it
//! (scene description, commentary). Usage also accumulates for the
//! iteration in progress until [`TokenTracker::close_iteration`] hands it
//! back.

use crate::TokenUsage;

/// Cumulative usage of one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageUsage {
    pub stage: &'static str,
    pub usage: TokenUsage,
    pub calls: u64,
}

#[derive(Debug, Default)]
pub struct TokenTracker {
    /// In first-recorded order.
    stages: Vec<StageUsage>,
    current: TokenUsage,
    iterations: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stage: &'static str, usage: &TokenUsage) {
        add(&mut self.current, usage);

        match self.stages.iter_mut().find(|s| s.stage == stage) {
            Some(entry) => {
                add(&mut entry.usage, usage);
                entry.calls += 1;
            }
            None => self.stages.push(StageUsage {
                stage,
                usage: *usage,
                calls: 1,
            }),
        }
    }

    /// End the current iteration and return what it spent.
    pub fn close_iteration(&mut self) -> TokenUsage {
        self.iterations += 1;
        std::mem::take(&mut self.current)
    }

    pub fn stages(&self) -> &[StageUsage] {
        &self.stages
    }

    /// Usage summed over every stage.
    pub fn total(&self) -> TokenUsage {
        let mut total = TokenUsage::default();
        for entry in &self.stages {
            add(&mut total, &entry.usage);
        }
        total
    }

    /// Number of closed iterations, spoken or discarded.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

fn add(into: &mut TokenUsage, usage: &TokenUsage) {
    into.input_tokens = into.input_tokens.saturating_add(usage.input_tokens);
    into.output_tokens = into.output_tokens.saturating_add(usage.output_tokens);
}
