//! Recording `Translator` double.

use std::sync::Mutex;

use tempo_core::locale::LocaleTag;
use tempo_core::translate::{TableTranslator, Translator};

/// A translator that records every call and delegates to the bundled table
/// translator.
#[derive(Debug, Default)]
pub struct RecordingTranslator {
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingTranslator {
    /// A fresh recorder with no calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The `(input, locale)` pairs seen so far.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("translator lock poisoned").clone()
    }
}

impl Translator for RecordingTranslator {
    fn translate(&self, input: &str, locale: &LocaleTag) -> String {
        self.calls
            .lock()
            .expect("translator lock poisoned")
            .push((input.to_owned(), locale.as_str().to_owned()));
        TableTranslator.translate(input, locale)
    }
}
