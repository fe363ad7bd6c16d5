//! Input gating rules for the prompt box and follow-up composer

/// Minimum prompt length before the landing "Generate" button enables
pub const MIN_PROMPT_CHARS: usize = 3;

/// Minimum prompt length before "Enhance prompt" enables
pub const MIN_ENHANCE_CHARS: usize = 10;

/// Resting height of the follow-up textarea
pub const COMPOSER_MIN_HEIGHT_PX: f64 = 42.0;

/// Height the follow-up textarea stops growing at
pub const COMPOSER_MAX_GROW_PX: f64 = 120.0;

/// Whether the landing "Generate" button is enabled
pub fn can_generate(text: &str, is_loading: bool) -> bool {
    !is_loading && text.chars().count() >= MIN_PROMPT_CHARS
}

/// Whether the landing "Enhance prompt" button is enabled
pub fn can_enhance(text: &str) -> bool {
    text.chars().count() >= MIN_ENHANCE_CHARS
}

/// Whether the follow-up send button is enabled
pub fn can_send_follow_up(text: &str, is_loading: bool) -> bool {
    !is_loading && !text.trim().is_empty()
}

/// Label of the landing submit button
pub fn generate_label(is_loading: bool) -> &'static str {
    if is_loading { "Generating..." } else { "Generate" }
}

/// Height for the auto-growing composer given its content height
pub fn composer_height(scroll_height: f64) -> f64 {
    scroll_height.clamp(COMPOSER_MIN_HEIGHT_PX, COMPOSER_MAX_GROW_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_generate_requires_three_chars() {
        assert!(!can_generate("", false));
        assert!(!can_generate("ab", false));
        assert!(can_generate("abc", false));
        // Whitespace counts, matching the literal input length
        assert!(can_generate("   ", false));
    }

    #[test]
    fn test_can_generate_blocked_while_loading() {
        assert!(!can_generate("a long enough prompt", true));
    }

    #[test]
    fn test_can_enhance() {
        assert!(!can_enhance("123456789"));
        assert!(can_enhance("1234567890"));
    }

    #[test]
    fn test_can_send_follow_up() {
        assert!(!can_send_follow_up("", false));
        assert!(!can_send_follow_up(" \n ", false));
        assert!(can_send_follow_up("ok", false));
        assert!(!can_send_follow_up("ok", true));
    }

    #[test]
    fn test_generate_label() {
        assert_eq!(generate_label(true), "Generating...");
        assert_eq!(generate_label(false), "Generate");
    }

    #[test]
    fn test_composer_height_bounds() {
        assert_eq!(composer_height(10.0), COMPOSER_MIN_HEIGHT_PX);
        assert_eq!(composer_height(80.0), 80.0);
        assert_eq!(composer_height(400.0), COMPOSER_MAX_GROW_PX);
    }
}
