// The text-output sink every scene writes its narrative through.
// Scenes take a `&dyn Narrator` instead of printing directly, so tests can
// swap in a recording double.

use colored::Colorize;
use std::sync::Mutex;

pub trait Narrator {
    fn say(&self, line: &str);

    /// Section title. Plain narrators treat it as an ordinary line.
    fn heading(&self, title: &str) {
        self.say(title);
    }
}

// ============================================================================
// Console: the real sink
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ConsoleNarrator {
    color: bool,
}

impl ConsoleNarrator {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Default for ConsoleNarrator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Narrator for ConsoleNarrator {
    fn say(&self, line: &str) {
        println!("{}", line);
    }

    fn heading(&self, title: &str) {
        if self.color {
            println!("{}", title.bold().underline());
        } else {
            println!("{}", title);
        }
    }
}

// ============================================================================
// Recording: in-memory double for tests
// ============================================================================

#[derive(Debug, Default)]
pub struct RecordingNarrator {
    lines: Mutex<Vec<String>>,
}

impl RecordingNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything said so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn count_containing(&self, needle: &str) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl Narrator for RecordingNarrator {
    fn say(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_keeps_order() {
        let out = RecordingNarrator::new();
        out.say("first");
        out.heading("second");
        out.say("third");

        assert_eq!(out.lines(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_count_and_clear() {
        let out = RecordingNarrator::new();
        out.say("Myrin casts lightning");
        out.say("Myrin casts a shield");
        out.say("Dursal guards");

        assert_eq!(out.count_containing("Myrin"), 2);
        out.clear();
        assert!(out.lines().is_empty());
    }

    #[test]
    fn test_console_narrator_does_not_panic() {
        let out = ConsoleNarrator::new(false);
        out.heading("Title");
        out.say("line");
    }
}
