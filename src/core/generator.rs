//! Idea generation capability
//!
//! [`IdeaGenerator`] is the seam where a real content backend would plug in.
//! The only implementation today is [`TemplateIdeaGenerator`], which fills a
//! fixed template with the prompt and two random figures. Timing is not the
//! generator's concern: the deferred delay is applied by whoever drives it.

use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Prompts longer than this (in characters) are echoed into the idea body
pub const ECHO_THRESHOLD_CHARS: usize = 20;

/// Possible number of revenue streams quoted in a generated idea
pub const REVENUE_STREAMS: RangeInclusive<u8> = 1..=5;

/// Possible months-to-profitability quoted in a generated idea
pub const PROFITABILITY_MONTHS: RangeInclusive<u8> = 6..=29;

/// Delay before a simulated generation completes
pub const DEFAULT_GENERATION_DELAY_MS: u32 = 1500;

/// Body used when the prompt is too short to stand on its own
pub const FALLBACK_CONCEPT: &str = "A platform that helps entrepreneurs validate their business ideas through rapid prototyping and user feedback loops. The system would provide tools for creating mockups, gathering market research, and connecting with potential early adopters.";

/// Result of one generation cycle
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedIdea {
    /// The literal prompt the idea was generated from
    pub prompt: String,
    /// Full rendered text shown in the side panel
    pub content: String,
    pub revenue_streams: u8,
    pub months_to_profitability: u8,
}

impl GeneratedIdea {
    /// Render the idea template for `prompt` with the given figures
    pub fn from_template(prompt: &str, revenue_streams: u8, months_to_profitability: u8) -> Self {
        let content = format!(
            "Here's an idea based on \"{prompt}\":\n\n{}\n\nThis concept has potential for {revenue_streams} revenue streams and could reach profitability within {months_to_profitability} months with proper execution.",
            concept_for(prompt)
        );

        Self {
            prompt: prompt.to_string(),
            content,
            revenue_streams,
            months_to_profitability,
        }
    }
}

/// Whether a prompt is long enough to be echoed verbatim
pub fn prompt_is_descriptive(prompt: &str) -> bool {
    prompt.chars().count() > ECHO_THRESHOLD_CHARS
}

/// Idea body for a prompt: the prompt itself or the fallback concept
pub fn concept_for(prompt: &str) -> &str {
    if prompt_is_descriptive(prompt) {
        prompt
    } else {
        FALLBACK_CONCEPT
    }
}

/// Capability that turns a prompt into an idea
pub trait IdeaGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> GeneratedIdea;
}

/// Template-based generator with random figures
pub struct TemplateIdeaGenerator {
    rng: Mutex<StdRng>,
}

impl TemplateIdeaGenerator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic generator for reproducible output
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for TemplateIdeaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdeaGenerator for TemplateIdeaGenerator {
    fn generate(&self, prompt: &str) -> GeneratedIdea {
        let (revenue_streams, months) = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            (
                rng.gen_range(REVENUE_STREAMS),
                rng.gen_range(PROFITABILITY_MONTHS),
            )
        };

        GeneratedIdea::from_template(prompt, revenue_streams, months)
    }
}

/// Timing of the simulated generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationSettings {
    pub delay_ms: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_GENERATION_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT_PROMPT: &str = "App for dog walkers";
    const LONG_PROMPT: &str = "A marketplace connecting freelance photographers with small businesses needing event coverage";

    #[test]
    fn test_short_prompt_uses_fallback() {
        let idea = GeneratedIdea::from_template(SHORT_PROMPT, 2, 10);
        assert!(idea.content.contains(FALLBACK_CONCEPT));
        assert!(!prompt_is_descriptive(&idea.prompt));
    }

    #[test]
    fn test_long_prompt_is_echoed() {
        let idea = GeneratedIdea::from_template(LONG_PROMPT, 3, 12);
        assert!(!idea.content.contains(FALLBACK_CONCEPT));
        assert!(prompt_is_descriptive(&idea.prompt));
        // Once in the header quote and once as the body
        assert_eq!(idea.content.matches(LONG_PROMPT).count(), 2);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let twenty = "a".repeat(ECHO_THRESHOLD_CHARS);
        let twenty_one = "a".repeat(ECHO_THRESHOLD_CHARS + 1);
        assert_eq!(concept_for(&twenty), FALLBACK_CONCEPT);
        assert_eq!(concept_for(&twenty_one), twenty_one);
    }

    #[test]
    fn test_threshold_counts_characters_not_bytes() {
        // 11 characters, 22 bytes
        let cyrillic = "приложение!";
        assert!(cyrillic.len() > ECHO_THRESHOLD_CHARS);
        assert!(!prompt_is_descriptive(cyrillic));
    }

    #[test]
    fn test_template_text() {
        let idea = GeneratedIdea::from_template(SHORT_PROMPT, 4, 18);
        let expected = format!(
            "Here's an idea based on \"App for dog walkers\":\n\n{FALLBACK_CONCEPT}\n\nThis concept has potential for 4 revenue streams and could reach profitability within 18 months with proper execution."
        );
        assert_eq!(idea.content, expected);
        assert_eq!(idea.prompt, SHORT_PROMPT);
    }

    #[test]
    fn test_random_figures_stay_in_range() {
        let generator = TemplateIdeaGenerator::seeded(7);
        for _ in 0..500 {
            let idea = generator.generate(LONG_PROMPT);
            assert!(REVENUE_STREAMS.contains(&idea.revenue_streams));
            assert!(PROFITABILITY_MONTHS.contains(&idea.months_to_profitability));
            assert!(
                idea.content
                    .contains(&format!("potential for {} revenue streams", idea.revenue_streams))
            );
            assert!(idea.content.contains(&format!(
                "within {} months",
                idea.months_to_profitability
            )));
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let a = TemplateIdeaGenerator::seeded(42);
        let b = TemplateIdeaGenerator::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.generate(SHORT_PROMPT), b.generate(SHORT_PROMPT));
        }
    }

    #[test]
    fn test_default_settings() {
        assert_eq!(GenerationSettings::default().delay_ms, 1500);
    }
}
