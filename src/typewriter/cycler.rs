use std::ops::Index;
use std::rc::Rc;
use std::time::Duration;

use serde::Deserialize;

use crate::config;
use crate::error::InvalidConfiguration;

/// Ordered, immutable phrases the typewriter rotates through.
///
/// Only obtainable through validation, so every list holds at least one
/// non-empty phrase and cyclic indexing is always defined. Clones share the
/// same storage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct PhraseList(Rc<[String]>);

impl PhraseList {
    pub fn new<I, S>(phrases: I) -> Result<Self, InvalidConfiguration>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(InvalidConfiguration::EmptyPhraseList);
        }
        if let Some(index) = phrases.iter().position(|p| p.is_empty()) {
            return Err(InvalidConfiguration::EmptyPhrase { index });
        }
        Ok(Self(phrases.into()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for PhraseList {
    type Error = InvalidConfiguration;

    fn try_from(phrases: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(phrases)
    }
}

impl Index<usize> for PhraseList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTiming {
    typing_ms: Option<u32>,
    deleting_ms: Option<u32>,
    pause_ms: Option<u32>,
}

/// Per-phase tick delays in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTiming")]
pub struct Timing {
    typing_ms: u32,
    deleting_ms: u32,
    pause_ms: u32,
}

impl Timing {
    pub fn new(typing_ms: u32, deleting_ms: u32, pause_ms: u32) -> Result<Self, InvalidConfiguration> {
        if typing_ms == 0 {
            return Err(InvalidConfiguration::ZeroDelay { phase: "typing" });
        }
        if deleting_ms == 0 {
            return Err(InvalidConfiguration::ZeroDelay { phase: "deleting" });
        }
        Ok(Self {
            typing_ms,
            deleting_ms,
            pause_ms,
        })
    }

    /// Delay before the tick that follows `step`.
    pub fn delay_after(&self, step: Step) -> Duration {
        let millis = match step {
            Step::Typed | Step::Advanced => self.typing_ms,
            Step::Paused => self.pause_ms,
            Step::Deleted => self.deleting_ms,
        };
        Duration::from_millis(u64::from(millis))
    }

    pub fn first_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.typing_ms))
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            typing_ms: config::TYPING_MS,
            deleting_ms: config::DELETING_MS,
            pause_ms: config::PAUSE_MS,
        }
    }
}

impl TryFrom<RawTiming> for Timing {
    type Error = InvalidConfiguration;

    fn try_from(raw: RawTiming) -> Result<Self, Self::Error> {
        Self::new(
            raw.typing_ms.unwrap_or(config::TYPING_MS),
            raw.deleting_ms.unwrap_or(config::DELETING_MS),
            raw.pause_ms.unwrap_or(config::PAUSE_MS),
        )
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One more character of the current phrase is shown.
    Typed,
    /// The phrase is complete; deletion starts after the pause delay.
    Paused,
    /// The last shown character was removed.
    Deleted,
    /// The phrase was fully erased and the next one is now current.
    Advanced,
}

impl Step {
    pub fn changes_text(self) -> bool {
        matches!(self, Step::Typed | Step::Deleted)
    }
}

/// Typing/deleting state machine over a [`PhraseList`].
///
/// The shown text is kept as a byte length that always lands on a char
/// boundary of the current phrase, so it is a prefix of that phrase by
/// construction. Once a phrase is complete the cycler reports `deleting`
/// straight away; the pause is the delay scheduled after [`Step::Paused`].
#[derive(Debug, Clone)]
pub struct Cycler {
    phrases: PhraseList,
    index: usize,
    shown: usize,
    deleting: bool,
}

impl Cycler {
    pub fn new(phrases: PhraseList) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            deleting: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    pub fn displayed(&self) -> &str {
        &self.current_phrase()[..self.shown]
    }

    pub fn tick(&mut self) -> Step {
        let phrase = &self.phrases[self.index];

        if !self.deleting {
            return match phrase[self.shown..].chars().next() {
                Some(next) => {
                    self.shown += next.len_utf8();
                    Step::Typed
                }
                None => {
                    self.deleting = true;
                    Step::Paused
                }
            };
        }

        match phrase[..self.shown].chars().next_back() {
            Some(last) => {
                self.shown -= last.len_utf8();
                Step::Deleted
            }
            None => {
                self.deleting = false;
                self.index = (self.index + 1) % self.phrases.len();
                Step::Advanced
            }
        }
    }
}
