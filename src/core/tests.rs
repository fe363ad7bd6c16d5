#[cfg(test)]
mod tests {
    use crate::core::generator::{FALLBACK_CONCEPT, PROFITABILITY_MONTHS, REVENUE_STREAMS};
    use crate::core::session::{AI_SUMMARY_MESSAGE, SessionPhase};
    use crate::core::{
        ChatSession, GeneratedIdea, IdeaDocument, IdeaGenerator, MessageKind, SessionError,
        ShareService, TemplateIdeaGenerator, UnavailableExport,
    };

    const SHORT_PROMPT: &str = "App for dog walkers";
    const LONG_PROMPT: &str = "A marketplace connecting freelance photographers with small businesses needing event coverage";

    /// Generator that always quotes the same figures
    struct FixedGenerator;

    impl IdeaGenerator for FixedGenerator {
        fn generate(&self, prompt: &str) -> GeneratedIdea {
            GeneratedIdea::from_template(prompt, 3, 12)
        }
    }

    /// Run one full cycle the way the UI runner does
    fn run_cycle(session: &mut ChatSession, generator: &dyn IdeaGenerator, text: &str) {
        let pending = session.submit(text).unwrap();
        let idea = generator.generate(&pending.prompt);
        session.complete(pending.id, idea).unwrap();
    }

    #[test]
    fn test_each_cycle_adds_one_user_and_one_ai_message() {
        let mut session = ChatSession::new();
        let generator = TemplateIdeaGenerator::seeded(1);

        for (i, prompt) in [SHORT_PROMPT, LONG_PROMPT, "third idea"].iter().enumerate() {
            run_cycle(&mut session, &generator, prompt);

            let messages = session.messages();
            assert_eq!(messages.len(), (i + 1) * 2);
            assert_eq!(messages[i * 2].kind, MessageKind::User);
            assert_eq!(messages[i * 2].content, *prompt);
            assert_eq!(messages[i * 2 + 1].kind, MessageKind::Ai);
            assert_eq!(messages[i * 2 + 1].content, AI_SUMMARY_MESSAGE);
        }
    }

    #[test]
    fn test_short_prompt_scenario_uses_fallback() {
        let mut session = ChatSession::new();
        run_cycle(&mut session, &FixedGenerator, SHORT_PROMPT);

        let content = session.generated_content().unwrap();
        assert!(content.contains(FALLBACK_CONCEPT));
        assert!(content.starts_with("Here's an idea based on \"App for dog walkers\":"));
    }

    #[test]
    fn test_long_prompt_scenario_is_echoed() {
        let mut session = ChatSession::new();
        run_cycle(&mut session, &FixedGenerator, LONG_PROMPT);

        let content = session.generated_content().unwrap();
        assert!(content.contains(&format!("\n{LONG_PROMPT}\n")));
        assert!(!content.contains(FALLBACK_CONCEPT));
    }

    #[test]
    fn test_figures_in_session_content_stay_in_range() {
        let mut session = ChatSession::new();
        let generator = TemplateIdeaGenerator::seeded(99);

        for _ in 0..50 {
            run_cycle(&mut session, &generator, LONG_PROMPT);
            let idea = session.generated_idea().unwrap();
            assert!(REVENUE_STREAMS.contains(&idea.revenue_streams));
            assert!(PROFITABILITY_MONTHS.contains(&idea.months_to_profitability));
        }
    }

    #[test]
    fn test_panel_opens_once_per_cycle_and_stays_open() {
        let mut session = ChatSession::new();

        let pending = session.submit(SHORT_PROMPT).unwrap();
        assert!(!session.is_panel_open());
        session
            .complete(pending.id, FixedGenerator.generate(&pending.prompt))
            .unwrap();
        assert!(session.is_panel_open());

        // A new submission does not close it
        let pending = session.submit(LONG_PROMPT).unwrap();
        assert!(session.is_panel_open());

        // Closed by the user mid-cycle, reopened by the completion
        session.toggle_side_panel();
        assert!(!session.is_panel_open());
        session
            .complete(pending.id, FixedGenerator.generate(&pending.prompt))
            .unwrap();
        assert!(session.is_panel_open());
    }

    #[test]
    fn test_overlapping_submissions_land_only_latest() {
        let mut session = ChatSession::new();
        let first = session.submit(SHORT_PROMPT).unwrap();
        let second = session.submit(LONG_PROMPT).unwrap();

        // The slower first task arrives after being superseded
        let stale = session.complete(first.id, FixedGenerator.generate(&first.prompt));
        assert!(matches!(stale, Err(SessionError::StaleGeneration { .. })));

        session
            .complete(second.id, FixedGenerator.generate(&second.prompt))
            .unwrap();

        let ai_messages = session
            .messages()
            .iter()
            .filter(|m| m.kind == MessageKind::Ai)
            .count();
        assert_eq!(ai_messages, 1);
        assert!(session.generated_content().unwrap().contains(LONG_PROMPT));
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_chat_mode_is_one_way() {
        let mut session = ChatSession::new();
        assert!(!session.is_chat_mode());

        run_cycle(&mut session, &FixedGenerator, SHORT_PROMPT);
        assert!(session.is_chat_mode());

        let _ = session.submit("   ");
        session.toggle_side_panel();
        session.close_side_panel();
        assert!(session.is_chat_mode());
    }

    #[test]
    fn test_generated_idea_feeds_share_document() {
        let mut session = ChatSession::new();
        run_cycle(&mut session, &FixedGenerator, LONG_PROMPT);

        let idea = session.generated_idea().unwrap();
        let document = IdeaDocument::from_idea(idea, chrono::Utc::now());
        assert_eq!(document.prompt, LONG_PROMPT);
        assert!(UnavailableExport.share(Some(&document)).is_err());
    }
}
