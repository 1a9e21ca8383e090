// Translation requester
//
// The session never talks HTTP itself; it hands a text and a language pair to a
// `Translator` and applies whatever comes back:
// - MyMemory: the public MyMemory `get` endpoint

pub mod mymemory;

use std::sync::Arc;

use async_trait::async_trait;

pub use mymemory::*;
use crate::config::TranslateConfig;
use crate::error::Result;
use crate::language::LanguagePair;

/// One outbound translation per call, no retries
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `pair.source` to `pair.target`
    async fn translate(&self, text: &str, pair: LanguagePair) -> Result<String>;
}

/// Factory for creating translator instances
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create the default translator implementation (MyMemory-based)
    pub fn create_translator(config: TranslateConfig) -> Result<Arc<dyn Translator>> {
        Ok(Arc::new(MyMemoryTranslator::new(config)?))
    }
}
