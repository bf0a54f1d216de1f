//! Run Session use case
//!
//! Startup interaction plus the read loop that interprets each input line as
//! a directive or a chat turn.

use crate::config::SessionConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::input::{InputError, LineReader};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::presenter::SessionPresenter;
use crate::ports::transcript_store::TranscriptStore;
use crate::use_cases::dual_track::DualTrackSession;
use companion_domain::{Directive, PromptPair};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Prompt shown when asking for the custom system prompt
pub const STARTUP_PROMPT: &str = "Enter a system prompt (optional): ";
/// Prompt shown for every chat line
pub const CHAT_PROMPT: &str = "You: ";

const FAREWELL: &str = "Goodbye!";

/// Errors that end the session abnormally
#[derive(Error, Debug)]
pub enum RunSessionError {
    #[error(transparent)]
    Input(#[from] InputError),
}

/// How the read loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    /// The user issued `/quit`
    Quit,
    /// Input was closed (e.g. Ctrl-D)
    EndOfInput,
}

/// Use case driving an interactive prompt comparison session
pub struct RunSessionUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    config: SessionConfig,
    store: Arc<dyn TranscriptStore>,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> RunSessionUseCase<G> {
    pub fn new(gateway: Arc<G>, config: SessionConfig, store: Arc<dyn TranscriptStore>) -> Self {
        Self {
            gateway,
            config,
            store,
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Show the welcome screen, read the optional custom prompt, then run
    /// the read loop until `/quit` or end of input.
    pub async fn execute(
        &self,
        input: &mut dyn LineReader,
        presenter: &dyn SessionPresenter,
    ) -> Result<SessionExit, RunSessionError> {
        presenter.show_welcome(&self.config.model, &self.config.default_prompt);

        let Some(custom) = input.read_line(STARTUP_PROMPT)? else {
            presenter.show_status(FAREWELL);
            return Ok(SessionExit::EndOfInput);
        };

        let prompts = PromptPair::new(self.config.default_prompt.clone(), Some(custom));
        if prompts.has_custom() {
            presenter.show_prompt("User-Entered System Prompt", prompts.custom());
        } else {
            presenter.show_prompt("Default System Prompt", prompts.baseline());
        }

        info!(
            model = %self.config.model,
            custom_prompt = prompts.has_custom(),
            "Starting session"
        );

        let mut session = DualTrackSession::new(
            Arc::clone(&self.gateway),
            self.config.model.clone(),
            prompts,
        )
        .with_logger(Arc::clone(&self.logger));

        self.run_loop(&mut session, input, presenter).await
    }

    /// Read and dispatch lines against an existing session.
    ///
    /// The next line is only read after the current turn has been rendered.
    pub async fn run_loop(
        &self,
        session: &mut DualTrackSession<G>,
        input: &mut dyn LineReader,
        presenter: &dyn SessionPresenter,
    ) -> Result<SessionExit, RunSessionError> {
        loop {
            let Some(line) = input.read_line(CHAT_PROMPT)? else {
                debug!("Input closed");
                presenter.show_status(FAREWELL);
                return Ok(SessionExit::EndOfInput);
            };

            match Directive::parse(&line) {
                Directive::Quit => {
                    presenter.show_status(FAREWELL);
                    return Ok(SessionExit::Quit);
                }
                Directive::Help => presenter.show_help(&Directive::HELP),
                Directive::Reset => {
                    session.reset();
                    presenter.show_status("Conversation history reset!");
                }
                Directive::Save => self.save(session, presenter),
                Directive::Chat(text) => {
                    presenter.on_turn_start();
                    let report = session.run_turn(&text).await;
                    presenter.on_turn_complete();

                    for result in report.results() {
                        presenter.show_turn_result(
                            result.label,
                            &result.message,
                            report.duration_secs(),
                        );
                    }
                }
            }
        }
    }

    fn save(&self, session: &DualTrackSession<G>, presenter: &dyn SessionPresenter) {
        match self.store.save(session.transcript()) {
            Ok(path) => {
                self.logger.log(ConversationEvent::new(
                    "transcript_saved",
                    serde_json::json!({
                        "path": path.display().to_string(),
                        "messages": session.transcript().len(),
                    }),
                ));
                presenter.show_status(&format!(
                    "Conversation history saved to {}!",
                    path.display()
                ));
            }
            Err(e) => {
                warn!("Failed to save transcript: {}", e);
                presenter.show_error(&format!("Failed to save conversation history: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use crate::ports::transcript_store::StoreError;
    use async_trait::async_trait;
    use companion_domain::{
        ApiReply, DEFAULT_SYSTEM_PROMPT, DirectiveHelp, Message, Model, TrackLabel, Transcript,
    };
    use std::collections::VecDeque;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Echoes the system prompt and user text, failing on "fail me"
    #[derive(Default)]
    struct EchoGateway {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LlmGateway for EchoGateway {
        async fn invoke(
            &self,
            _model: &Model,
            messages: &[Message],
        ) -> Result<ApiReply, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if messages[1].content() == "fail me" && messages[0].content() != DEFAULT_SYSTEM_PROMPT
            {
                return Err(GatewayError::ConnectionError("boom".to_string()));
            }
            Ok(ApiReply::from_text(format!(
                "[{}] {}",
                messages[0].content(),
                messages[1].content()
            )))
        }
    }

    struct ScriptedInput {
        lines: VecDeque<String>,
        prompts: Vec<String>,
    }

    impl ScriptedInput {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|l| l.to_string()).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl LineReader for ScriptedInput {
        fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
            self.prompts.push(prompt.to_string());
            Ok(self.lines.pop_front())
        }
    }

    struct BrokenInput;

    impl LineReader for BrokenInput {
        fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, InputError> {
            Err(InputError::Read("terminal gone".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingPresenter {
        events: Mutex<Vec<String>>,
        durations: Mutex<Vec<f64>>,
    }

    impl RecordingPresenter {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        fn push(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl SessionPresenter for RecordingPresenter {
        fn show_welcome(&self, model: &Model, default_prompt: &str) {
            self.push(format!("welcome {} | {}", model, default_prompt));
        }

        fn show_prompt(&self, label: &str, prompt: &str) {
            self.push(format!("prompt {}: {}", label, prompt));
        }

        fn show_turn_result(&self, label: TrackLabel, message: &Message, duration_secs: f64) {
            self.durations.lock().unwrap().push(duration_secs);
            self.push(format!("result {}: {}", label, message.content()));
        }

        fn show_status(&self, text: &str) {
            self.push(format!("status {}", text));
        }

        fn show_error(&self, text: &str) {
            self.push(format!("error {}", text));
        }

        fn show_help(&self, entries: &[DirectiveHelp]) {
            let names: Vec<&str> = entries.iter().map(|e| e.name).collect();
            self.push(format!("help {}", names.join(" ")));
        }
    }

    #[derive(Default)]
    struct MemoryTranscriptStore {
        saved: Mutex<Vec<Transcript>>,
        fail: bool,
    }

    impl TranscriptStore for MemoryTranscriptStore {
        fn save(&self, transcript: &Transcript) -> Result<PathBuf, StoreError> {
            if self.fail {
                return Err(StoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only",
                )));
            }
            self.saved.lock().unwrap().push(transcript.clone());
            Ok(PathBuf::from("conversation_history.json"))
        }
    }

    fn use_case(
        gateway: Arc<EchoGateway>,
        store: Arc<MemoryTranscriptStore>,
    ) -> RunSessionUseCase<EchoGateway> {
        RunSessionUseCase::new(gateway, SessionConfig::default(), store)
    }

    #[tokio::test]
    async fn test_quit_without_turns() {
        let gateway = Arc::new(EchoGateway::default());
        let store = Arc::new(MemoryTranscriptStore::default());
        let presenter = RecordingPresenter::default();
        let mut input = ScriptedInput::new(&["", "/quit"]);

        let exit = use_case(Arc::clone(&gateway), store)
            .execute(&mut input, &presenter)
            .await
            .unwrap();

        assert_eq!(exit, SessionExit::Quit);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
        assert_eq!(input.prompts, vec![STARTUP_PROMPT, CHAT_PROMPT]);
        assert_eq!(
            presenter.events(),
            vec![
                format!("welcome {} | {}", Model::DEFAULT_ID, DEFAULT_SYSTEM_PROMPT),
                format!("prompt Default System Prompt: {}", DEFAULT_SYSTEM_PROMPT),
                "status Goodbye!".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_custom_prompt_turn_rendered_baseline_first() {
        let gateway = Arc::new(EchoGateway::default());
        let store = Arc::new(MemoryTranscriptStore::default());
        let presenter = RecordingPresenter::default();
        let mut input = ScriptedInput::new(&["Reply only in French.", "Hi", "/quit"]);

        use_case(gateway, store)
            .execute(&mut input, &presenter)
            .await
            .unwrap();

        let events = presenter.events();
        assert_eq!(
            events[1],
            "prompt User-Entered System Prompt: Reply only in French."
        );
        assert_eq!(
            events[2],
            format!("result baseline: [{}] Hi", DEFAULT_SYSTEM_PROMPT)
        );
        assert_eq!(events[3], "result custom: [Reply only in French.] Hi");

        let durations = presenter.durations.lock().unwrap();
        assert_eq!(durations.len(), 2);
        assert_eq!(durations[0], durations[1]);
    }

    #[tokio::test]
    async fn test_save_after_two_turns() {
        let gateway = Arc::new(EchoGateway::default());
        let store = Arc::new(MemoryTranscriptStore::default());
        let presenter = RecordingPresenter::default();
        let mut input = ScriptedInput::new(&["Be terse.", "one", "fail me", "/save", "/quit"]);

        use_case(gateway, Arc::clone(&store))
            .execute(&mut input, &presenter)
            .await
            .unwrap();

        let saved = store.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        let messages = saved[0].messages();
        assert_eq!(messages.len(), 6);
        assert_eq!(messages[0], Message::user("one"));
        assert_eq!(
            messages[1],
            Message::assistant(format!("[{}] one", DEFAULT_SYSTEM_PROMPT))
        );
        assert_eq!(messages[2], Message::assistant("[Be terse.] one"));
        assert_eq!(messages[3], Message::user("fail me"));
        assert!(!messages[4].is_error());
        assert_eq!(messages[5], Message::error("Other error: boom"));

        assert!(
            presenter
                .events()
                .contains(&"status Conversation history saved to conversation_history.json!".to_string())
        );
    }

    #[tokio::test]
    async fn test_directives_do_not_call_gateway() {
        let gateway = Arc::new(EchoGateway::default());
        let store = Arc::new(MemoryTranscriptStore::default());
        let presenter = RecordingPresenter::default();
        let mut input = ScriptedInput::new(&["", "/help", "/reset", "/save", "/quit"]);

        use_case(Arc::clone(&gateway), Arc::clone(&store))
            .execute(&mut input, &presenter)
            .await
            .unwrap();

        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
        let events = presenter.events();
        assert!(events.contains(&"help /help /reset /save /quit".to_string()));
        assert!(events.contains(&"status Conversation history reset!".to_string()));
        // Saving an empty transcript is allowed
        assert!(store.saved.lock().unwrap()[0].is_empty());
    }

    #[tokio::test]
    async fn test_near_miss_directives_are_chat() {
        let gateway = Arc::new(EchoGateway::default());
        let store = Arc::new(MemoryTranscriptStore::default());
        let presenter = RecordingPresenter::default();
        let mut input = ScriptedInput::new(&["", "/Quit", " /quit", "", "/quit"]);

        use_case(Arc::clone(&gateway), store)
            .execute(&mut input, &presenter)
            .await
            .unwrap();

        // Three chat turns, two requests each
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn test_reset_clears_session() {
        let gateway = Arc::new(EchoGateway::default());
        let store = Arc::new(MemoryTranscriptStore::default());
        let use_case = use_case(Arc::clone(&gateway), store);
        let presenter = RecordingPresenter::default();
        let mut session = DualTrackSession::new(
            gateway,
            Model::default(),
            PromptPair::new(DEFAULT_SYSTEM_PROMPT, Some("Be terse.".to_string())),
        );
        let mut input = ScriptedInput::new(&["a", "b", "/reset", "/reset", "/quit"]);

        use_case
            .run_loop(&mut session, &mut input, &presenter)
            .await
            .unwrap();

        assert!(session.transcript().is_empty());
        for label in TrackLabel::ALL {
            assert_eq!(session.track(label).messages().len(), 1);
        }
        assert_eq!(session.track(TrackLabel::Custom).system_prompt(), "Be terse.");
    }

    #[tokio::test]
    async fn test_save_failure_keeps_loop_running() {
        let gateway = Arc::new(EchoGateway::default());
        let store = Arc::new(MemoryTranscriptStore {
            fail: true,
            ..Default::default()
        });
        let presenter = RecordingPresenter::default();
        let mut input = ScriptedInput::new(&["", "/save", "hello", "/quit"]);

        let exit = use_case(Arc::clone(&gateway), store)
            .execute(&mut input, &presenter)
            .await
            .unwrap();

        assert_eq!(exit, SessionExit::Quit);
        assert!(
            presenter
                .events()
                .iter()
                .any(|e| e.starts_with("error Failed to save conversation history"))
        );
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_end_of_input() {
        let gateway = Arc::new(EchoGateway::default());
        let store = Arc::new(MemoryTranscriptStore::default());
        let presenter = RecordingPresenter::default();

        let mut input = ScriptedInput::new(&[]);
        let exit = use_case(Arc::clone(&gateway), Arc::clone(&store))
            .execute(&mut input, &presenter)
            .await
            .unwrap();
        assert_eq!(exit, SessionExit::EndOfInput);

        let mut input = ScriptedInput::new(&["", "hello"]);
        let exit = use_case(gateway, store)
            .execute(&mut input, &presenter)
            .await
            .unwrap();
        assert_eq!(exit, SessionExit::EndOfInput);
    }

    #[tokio::test]
    async fn test_input_error_propagates() {
        let presenter = RecordingPresenter::default();
        let result = use_case(
            Arc::new(EchoGateway::default()),
            Arc::new(MemoryTranscriptStore::default()),
        )
        .execute(&mut BrokenInput, &presenter)
        .await;

        assert!(matches!(result, Err(RunSessionError::Input(_))));
    }
}
