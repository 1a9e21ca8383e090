//! Form state of the widget and the transitions that drive it.
//!
//! A `Session` never performs I/O. Transitions that start a translation hand
//! back a [`TranslationRequest`] carrying the exact text and language pair to
//! send; whoever runs the request reports the outcome through
//! [`Session::complete`].

use tracing::{info, warn};

use crate::error::Result;
use crate::language::{Language, LanguagePair};
use crate::translate::Translator;

/// Shown in the result panel whenever a translation request fails
pub const ERROR_MESSAGE: &str = "Error: Failed to fetch translation.";

/// Text and language pair of one dispatched translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub pair: LanguagePair,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    input_text: String,
    translated_text: String,
    pair: LanguagePair,
    loading: bool,
}

impl Session {
    pub fn new(pair: LanguagePair) -> Self {
        Self {
            pair,
            ..Self::default()
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn pair(&self) -> LanguagePair {
        self.pair
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn select_source(&mut self, language: Language) {
        self.pair.source = language;
    }

    pub fn select_target(&mut self, language: Language) {
        self.pair.target = language;
    }

    /// Translate button enablement
    pub fn can_translate(&self) -> bool {
        !self.loading && !self.input_text.is_empty()
    }

    /// Swap button enablement
    pub fn can_swap(&self) -> bool {
        !self.loading && !self.translated_text.is_empty()
    }

    /// Start translating `text` with `pair`.
    ///
    /// Whitespace-only text is a no-op: nothing is dispatched and the state
    /// stays as it was. Otherwise the session enters the loading state and
    /// the returned request must be run and reported via [`Session::complete`].
    pub fn begin_translation(&mut self, text: &str, pair: LanguagePair) -> Option<TranslationRequest> {
        if text.trim().is_empty() {
            return None;
        }

        self.loading = true;
        info!("Translating {} characters ({})", text.chars().count(), pair.langpair());

        Some(TranslationRequest {
            text: text.to_string(),
            pair,
        })
    }

    /// Translate the current input with the current language pair
    pub fn request_translation(&mut self) -> Option<TranslationRequest> {
        let text = self.input_text.clone();
        self.begin_translation(&text, self.pair)
    }

    /// Swap the language pair, move the last result into the input and
    /// translate it again.
    ///
    /// The request is built from the swapped values directly. Returns `None`
    /// without touching the state while the swap button is disabled.
    pub fn swap_and_retranslate(&mut self) -> Option<TranslationRequest> {
        if !self.can_swap() {
            return None;
        }

        let pair = self.pair.swapped();
        let text = self.translated_text.clone();

        self.pair = pair;
        self.input_text = text.clone();

        self.begin_translation(&text, pair)
    }

    /// Apply the outcome of a dispatched request and leave the loading state.
    ///
    /// There is no request id: when requests overlap, the last one to
    /// complete owns the result panel.
    pub fn complete(&mut self, outcome: Result<String>) {
        match outcome {
            Ok(translation) => {
                info!("Translation received ({} characters)", translation.chars().count());
                self.translated_text = translation;
            }
            Err(e) => {
                warn!("Translation request failed: {}", e);
                self.translated_text = ERROR_MESSAGE.to_string();
            }
        }
        self.loading = false;
    }

    /// Run `request` to completion with `translator`, holding the session for the duration
    pub async fn perform(&mut self, translator: &dyn Translator, request: TranslationRequest) {
        let outcome = translator.translate(&request.text, request.pair).await;
        self.complete(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuickTranslateError;
    use crate::translate::MockTranslator;
    use mockall::predicate::eq;

    fn en_es() -> LanguagePair {
        LanguagePair::new(Language::English, Language::Spanish)
    }

    fn translated(text: &str) -> Session {
        let mut session = Session::new(en_es());
        session.set_input_text("Hello");
        session.request_translation().unwrap();
        session.complete(Ok(text.to_string()));
        session
    }

    #[test]
    fn test_initial_state() {
        let session = Session::new(en_es());
        assert_eq!(session.input_text(), "");
        assert_eq!(session.translated_text(), "");
        assert_eq!(session.pair(), en_es());
        assert!(!session.is_loading());
        assert!(!session.can_translate());
        assert!(!session.can_swap());
    }

    #[test]
    fn test_whitespace_input_is_noop() {
        let mut session = translated("Hola");
        session.set_input_text("   \n\t ");
        let before = session.clone();

        assert!(session.request_translation().is_none());
        assert_eq!(session, before);
        assert_eq!(session.translated_text(), "Hola");
    }

    #[test]
    fn test_request_uses_current_form_values() {
        let mut session = Session::new(en_es());
        session.set_input_text("Good morning");
        session.select_source(Language::French);
        session.select_target(Language::German);

        let request = session.request_translation().unwrap();
        assert_eq!(request.text, "Good morning");
        assert_eq!(request.pair, LanguagePair::new(Language::French, Language::German));
        assert!(session.is_loading());
        assert!(!session.can_translate());
    }

    #[test]
    fn test_failure_sets_error_message_and_clears_loading() {
        let mut session = Session::new(en_es());
        session.set_input_text("Hello");
        session.request_translation().unwrap();

        session.complete(Err(QuickTranslateError::Translation("connection refused".to_string())));
        assert_eq!(session.translated_text(), ERROR_MESSAGE);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_swap_moves_result_and_swaps_pair() {
        let mut session = translated("Hola");

        let request = session.swap_and_retranslate().unwrap();
        assert_eq!(
            request,
            TranslationRequest {
                text: "Hola".to_string(),
                pair: LanguagePair::new(Language::Spanish, Language::English),
            }
        );
        assert_eq!(session.pair(), LanguagePair::new(Language::Spanish, Language::English));
        assert_eq!(session.input_text(), "Hola");
        assert!(session.is_loading());
    }

    #[test]
    fn test_swap_disabled_without_result() {
        let mut session = Session::new(en_es());
        session.set_input_text("Hello");
        let before = session.clone();

        assert!(session.swap_and_retranslate().is_none());
        assert_eq!(session, before);
    }

    #[test]
    fn test_swap_disabled_while_loading() {
        let mut session = translated("Hola");
        session.request_translation().unwrap();
        let before = session.clone();

        assert!(!session.can_swap());
        assert!(session.swap_and_retranslate().is_none());
        assert_eq!(session, before);
    }

    #[test]
    fn test_overlapping_requests_last_completion_wins() {
        let mut session = Session::new(en_es());
        session.set_input_text("one");
        session.request_translation().unwrap();
        session.set_input_text("two");
        session.begin_translation("two", en_es()).unwrap();

        session.complete(Ok("dos".to_string()));
        session.complete(Ok("uno".to_string()));
        assert_eq!(session.translated_text(), "uno");
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_perform_success_scenario() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .with(eq("Hello"), eq(en_es()))
            .times(1)
            .returning(|_, _| Ok("Hola".to_string()));

        let mut session = Session::new(en_es());
        session.set_input_text("Hello");
        let request = session.request_translation().unwrap();
        session.perform(&translator, request).await;

        assert_eq!(session.translated_text(), "Hola");
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_perform_swap_sends_swapped_values() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .with(eq("Hola"), eq(LanguagePair::new(Language::Spanish, Language::English)))
            .times(1)
            .returning(|_, _| Ok("Hello".to_string()));

        let mut session = translated("Hola");
        let request = session.swap_and_retranslate().unwrap();
        session.perform(&translator, request).await;

        assert_eq!(session.input_text(), "Hola");
        assert_eq!(session.translated_text(), "Hello");
    }
}
