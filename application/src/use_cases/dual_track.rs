//! Dual-track session
//!
//! Sends every user turn to the same model twice, once per system prompt,
//! and keeps both tracks and the unified transcript consistent.
//!
//! A turn is a fixed fan-out of two spawned requests joined at a single
//! barrier. Each outcome is normalized on its own, so one track failing never
//! changes the other's result. State is only mutated after the join, always
//! baseline first.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use companion_domain::{
    ApiReply, ConversationTrack, Message, Model, PromptPair, TrackLabel, TrackResult,
    Transcript, resolve_outcome,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

/// Both results of one turn
#[derive(Debug, Clone)]
pub struct TurnReport {
    pub baseline: TrackResult,
    pub custom: TrackResult,
    /// Time from just before dispatch to just after the join
    pub elapsed: Duration,
}

impl TurnReport {
    /// Results in presentation order (baseline, then custom)
    pub fn results(&self) -> [&TrackResult; 2] {
        [&self.baseline, &self.custom]
    }

    pub fn duration_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

type Settled = Result<Result<ApiReply, GatewayError>, JoinError>;

/// Owns the baseline and custom tracks plus the unified transcript
pub struct DualTrackSession<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    prompts: PromptPair,
    baseline: ConversationTrack,
    custom: ConversationTrack,
    transcript: Transcript,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> DualTrackSession<G> {
    pub fn new(gateway: Arc<G>, model: Model, prompts: PromptPair) -> Self {
        Self {
            gateway,
            model,
            baseline: ConversationTrack::new(prompts.baseline()),
            custom: ConversationTrack::new(prompts.custom()),
            prompts,
            transcript: Transcript::new(),
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn prompts(&self) -> &PromptPair {
        &self.prompts
    }

    pub fn track(&self, label: TrackLabel) -> &ConversationTrack {
        match label {
            TrackLabel::Baseline => &self.baseline,
            TrackLabel::Custom => &self.custom,
        }
    }

    fn track_mut(&mut self, label: TrackLabel) -> &mut ConversationTrack {
        match label {
            TrackLabel::Baseline => &mut self.baseline,
            TrackLabel::Custom => &mut self.custom,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Run one turn on both tracks. Never fails: a track whose request
    /// fails gets an error turn instead.
    pub async fn run_turn(&mut self, user_text: &str) -> TurnReport {
        self.transcript.record_user(user_text);
        self.logger.log(ConversationEvent::new(
            "user_message",
            serde_json::json!({ "content": user_text }),
        ));

        let baseline_payload = self.baseline.turn_payload(user_text);
        let custom_payload = self.custom.turn_payload(user_text);

        let started = Instant::now();
        let baseline_task = self.dispatch(TrackLabel::Baseline, baseline_payload);
        let custom_task = self.dispatch(TrackLabel::Custom, custom_payload);
        let (baseline_settled, custom_settled) = tokio::join!(baseline_task, custom_task);
        let elapsed = started.elapsed();

        let baseline = self.absorb(TrackLabel::Baseline, user_text, baseline_settled, elapsed);
        let custom = self.absorb(TrackLabel::Custom, user_text, custom_settled, elapsed);

        info!(
            model = %self.model,
            elapsed_ms = elapsed.as_millis() as u64,
            baseline_ok = !baseline.is_error(),
            custom_ok = !custom.is_error(),
            "Turn completed"
        );

        TurnReport {
            baseline,
            custom,
            elapsed,
        }
    }

    fn dispatch(
        &self,
        label: TrackLabel,
        payload: Vec<Message>,
    ) -> JoinHandle<Result<ApiReply, GatewayError>> {
        let gateway = Arc::clone(&self.gateway);
        let model = self.model.clone();
        debug!(track = %label, messages = payload.len(), "Dispatching request");

        tokio::spawn(async move { gateway.invoke(&model, &payload).await })
    }

    fn absorb(
        &mut self,
        label: TrackLabel,
        user_text: &str,
        settled: Settled,
        elapsed: Duration,
    ) -> TrackResult {
        let outcome = settled.unwrap_or_else(|e| Err(GatewayError::TaskFailed(e.to_string())));
        let message = resolve_outcome(outcome);
        if message.is_error() {
            warn!(track = %label, "Recording error turn: {}", message.content());
        }

        self.track_mut(label).record_result(user_text, message.clone());
        self.transcript.record_result(message.clone());
        self.logger.log(ConversationEvent::new(
            "track_result",
            serde_json::json!({
                "track": label.as_str(),
                "content": message.content(),
                "is_error": message.is_error(),
                "elapsed_secs": elapsed.as_secs_f64(),
            }),
        ));

        TrackResult::new(label, message)
    }

    /// Reseed both tracks from the startup prompts and clear the transcript.
    pub fn reset(&mut self) {
        self.baseline.seed(self.prompts.baseline());
        self.custom.seed(self.prompts.custom());
        self.transcript.clear();
        self.logger
            .log(ConversationEvent::new("session_reset", serde_json::json!({})));
        debug!("Session reset");
    }
}
