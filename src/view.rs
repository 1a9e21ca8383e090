use std::fmt::Write;

use crate::language::Language;
use crate::session::Session;

pub const TITLE: &str = "Quick Translate";
pub const TRANSLATE_LABEL: &str = "Translate Text";
pub const LOADING_LABEL: &str = "Translating...";
pub const SWAP_LABEL: &str = "⇄";
pub const RESULT_HEADING: &str = "Translation:";
pub const FOOTER: &str = "Powered by MyMemory API";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub enabled: bool,
}

impl Button {
    fn render(&self) -> String {
        if self.enabled {
            format!("[ {} ]", self.label)
        } else {
            format!("( {} )", self.label)
        }
    }
}

/// What the widget shows for a given session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    pub source: &'static str,
    pub target: &'static str,
    pub input: &'a str,
    pub translate_button: Button,
    pub swap_button: Button,
    /// Result panel, hidden while there is no translated text
    pub result: Option<&'a str>,
}

impl<'a> View<'a> {
    pub fn of(session: &'a Session) -> Self {
        let pair = session.pair();
        let translated = session.translated_text();

        Self {
            source: pair.source.name(),
            target: pair.target.name(),
            input: session.input_text(),
            translate_button: Button {
                label: if session.is_loading() { LOADING_LABEL } else { TRANSLATE_LABEL },
                enabled: session.can_translate(),
            },
            swap_button: Button {
                label: SWAP_LABEL,
                enabled: session.can_swap(),
            },
            result: (!translated.is_empty()).then_some(translated),
        }
    }

    /// Plain-text rendering; disabled buttons are drawn in parentheses
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "── {} ──", TITLE);
        let _ = writeln!(out, "[{}] {} [{}]", self.source, self.swap_button.render(), self.target);

        if self.input.is_empty() {
            let _ = writeln!(out, "> Enter text to translate...");
        } else {
            for line in self.input.lines() {
                let _ = writeln!(out, "> {}", line);
            }
        }

        let _ = writeln!(out, "{}", self.translate_button.render());

        if let Some(result) = self.result {
            let _ = writeln!(out, "{}", RESULT_HEADING);
            for line in result.lines() {
                let _ = writeln!(out, "  {}", line);
            }
        }

        let _ = writeln!(out, "{}", FOOTER);
        out
    }
}

/// One `code  name` line per supported language, in selector order
pub fn render_languages() -> String {
    Language::ALL
        .iter()
        .map(|lang| format!("{}  {}\n", lang.code(), lang.name()))
        .collect()
}
