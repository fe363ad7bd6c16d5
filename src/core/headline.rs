//! Typewriter animation for the landing headline
//!
//! Types each phrase one character at a time, holds it with the cursor
//! hidden, then backspaces only as far as the prefix it shares with the next
//! phrase before typing that one. Loops forever.

/// Phrases cycled through in the headline
pub const HEADLINE_PHRASES: [&str; 3] = ["$1,000", "$100K", "$1M+"];

pub const TYPE_STEP_MS: u32 = 80;
pub const DELETE_STEP_MS: u32 = 40;
/// Pause on a fully typed phrase
pub const HOLD_MS: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// What to render until the next tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterFrame {
    pub text: String,
    pub cursor_visible: bool,
    /// Milliseconds to wait before calling `advance` again
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn headline() -> Self {
        Self {
            phrases: HEADLINE_PHRASES.iter().map(|p| p.to_string()).collect(),
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// Returns `None` when there is nothing to type
    #[cfg(test)]
    fn new<I, S>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases
            .into_iter()
            .map(Into::into)
            .filter(|p: &String| !p.is_empty())
            .collect();

        if phrases.is_empty() {
            return None;
        }

        Some(Self {
            phrases,
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
        })
    }

    fn current(&self) -> &str {
        &self.phrases[self.phrase]
    }

    fn next_index(&self) -> usize {
        (self.phrase + 1) % self.phrases.len()
    }

    /// Characters left standing when backspacing towards the next phrase
    fn kept_chars(&self) -> usize {
        let next = self.next_index();
        if next == self.phrase {
            return 0;
        }
        self.current()
            .chars()
            .zip(self.phrases[next].chars())
            .take_while(|(a, b)| a == b)
            .count()
    }

    fn visible_text(&self) -> String {
        self.current().chars().take(self.shown).collect()
    }

    fn type_step(&mut self) -> u32 {
        let len = self.current().chars().count();
        self.shown = (self.shown + 1).min(len);
        if self.shown == len {
            self.phase = Phase::Holding;
            HOLD_MS
        } else {
            TYPE_STEP_MS
        }
    }

    fn delete_step(&mut self) -> u32 {
        if self.shown > self.kept_chars() {
            self.shown -= 1;
            DELETE_STEP_MS
        } else {
            self.phrase = self.next_index();
            self.phase = Phase::Typing;
            self.type_step()
        }
    }

    /// Step the animation and return the frame to display
    pub fn advance(&mut self) -> TypewriterFrame {
        let delay_ms = match self.phase {
            Phase::Typing => self.type_step(),
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.delete_step()
            }
            Phase::Deleting => self.delete_step(),
        };

        TypewriterFrame {
            text: self.visible_text(),
            cursor_visible: self.phase != Phase::Holding,
            delay_ms,
        }
    }
}
