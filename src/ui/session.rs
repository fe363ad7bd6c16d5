//! Session context for the chat page
//!
//! Wraps the [`ChatSession`] state container in a signal and runs generation
//! cycles against the injected [`IdeaGenerator`]:
//! - `submit` starts a cycle and spawns its completion after the configured
//!   delay
//! - a newer submission aborts the previous cycle's task; if its result slips
//!   through anyway, the session rejects it as stale
//!
//! Components read state through the derived signals and never mutate the
//! session directly.

use std::future::Future;
use std::sync::Arc;

use futures::future::{AbortHandle, Abortable, Aborted};
use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::core::{
    ChatMessage, ChatSession, GeneratedIdea, GenerationId, GenerationSettings, IdeaGenerator,
    TemplateIdeaGenerator,
};

/// How a generation cycle ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The result landed in the session
    Completed(GenerationId),
    /// The session had moved on to another cycle
    Stale(GenerationId),
    /// Aborted before the delay elapsed, or the session is gone
    Cancelled(GenerationId),
}

/// Session context shared by the chat page components
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<ChatSession>,
    generator: StoredValue<Arc<dyn IdeaGenerator>>,
    settings: StoredValue<GenerationSettings>,
    /// Abort handle of the cycle currently waiting on its timer
    in_flight: StoredValue<Option<AbortHandle>>,
}

impl SessionContext {
    pub fn new(generator: Arc<dyn IdeaGenerator>, settings: GenerationSettings) -> Self {
        Self {
            session: RwSignal::new(ChatSession::new()),
            generator: StoredValue::new(generator),
            settings: StoredValue::new(settings),
            in_flight: StoredValue::new(None),
        }
    }

    pub fn messages(&self) -> Signal<Vec<ChatMessage>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.messages().to_vec()))
    }

    pub fn message_count(&self) -> Signal<usize> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.messages().len()))
    }

    pub fn input(&self) -> Signal<String> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.input().to_string()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(ChatSession::is_loading))
    }

    pub fn is_panel_open(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(ChatSession::is_panel_open))
    }

    pub fn is_chat_mode(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(ChatSession::is_chat_mode))
    }

    pub fn generated_idea(&self) -> Signal<Option<GeneratedIdea>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.generated_idea().cloned()))
    }

    pub fn set_input(&self, text: String) {
        self.session.update(|s| s.set_input(text));
    }

    pub fn toggle_side_panel(&self) {
        self.session.update(|s| {
            s.toggle_side_panel();
        });
    }

    pub fn close_side_panel(&self) {
        self.session.update(ChatSession::close_side_panel);
    }

    /// Submit the current input and spawn its completion
    pub fn submit(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(task) = self.start_generation(gloo_timers::future::TimeoutFuture::new) {
                leptos::task::spawn_local(async move {
                    let _ = task.await;
                });
            }
        }

        #[cfg(feature = "ssr")]
        {
            // Submissions only happen in the browser
            let _ = self;
        }
    }

    /// Start a cycle for the current input.
    ///
    /// Aborts the cycle still waiting on its timer, if any. The returned
    /// future waits on `sleep(delay_ms)`, runs the generator and lands the
    /// result. Returns `None` when the input is rejected.
    pub fn start_generation<F, S>(
        self,
        sleep: F,
    ) -> Option<impl Future<Output = GenerationOutcome> + 'static>
    where
        F: FnOnce(u32) -> S,
        S: Future<Output = ()> + 'static,
    {
        let pending = match self.session.try_update(ChatSession::submit_input)? {
            Ok(pending) => pending,
            Err(e) => {
                log!("Submission ignored: {}", e);
                return None;
            }
        };

        if let Some(previous) = self.in_flight.try_update_value(Option::take).flatten() {
            log!("Previous generation superseded by {}", pending.id);
            previous.abort();
        }

        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight.set_value(Some(handle));

        let generator = self.generator.get_value();
        let delay = sleep(self.settings.get_value().delay_ms);
        let id = pending.id;
        let task = Abortable::new(
            async move {
                delay.await;
                generator.generate(&pending.prompt)
            },
            registration,
        );

        Some(async move {
            let result = task.await;
            self.land(id, result)
        })
    }

    fn land(&self, id: GenerationId, result: Result<GeneratedIdea, Aborted>) -> GenerationOutcome {
        let idea = match result {
            Ok(idea) => idea,
            Err(Aborted) => {
                log!("Generation {} cancelled", id);
                return GenerationOutcome::Cancelled(id);
            }
        };

        match self.session.try_update(|s| s.complete(id, idea)) {
            Some(Ok(_)) => {
                self.in_flight.set_value(None);
                log!("Generation {} completed", id);
                GenerationOutcome::Completed(id)
            }
            Some(Err(e)) => {
                warn!("Dropping generation result: {}", e);
                GenerationOutcome::Stale(id)
            }
            None => GenerationOutcome::Cancelled(id),
        }
    }
}

/// Provide a fresh session for the current page
pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new(
        Arc::new(TemplateIdeaGenerator::new()),
        GenerationSettings::default(),
    );
    provide_context(context);
    context
}

/// Get the session context
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
