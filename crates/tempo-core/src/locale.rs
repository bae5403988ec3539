//! Locale tags and their mapping onto chrono's bundled locale data.

use std::fmt;
use std::str::FromStr;

use chrono::Locale;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ClockError;

/// Default locale applied to every value a clock produces.
pub const DEFAULT_LOCALE: &str = "ru";

/// A validated locale tag of the `ll` or `ll_RR` shape.
///
/// The tag itself only needs to be well formed; tags without bundled
/// formatting data fall back along a language chain at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTag {
    tag: String,
}

impl LocaleTag {
    /// Parses and normalizes a tag: `ru`, `fr-BE` and `fr_be` all accepted,
    /// stored as `ru` / `fr_BE`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidLocale`] when the input is not of the
    /// `ll` / `ll_RR` shape.
    pub fn parse(input: &str) -> Result<Self, ClockError> {
        let normalized = input.trim().replace('-', "_");
        let mut parts = normalized.splitn(2, '_');
        let language = parts.next().unwrap_or_default();
        let region = parts.next();

        let language_ok = (2..=3).contains(&language.len())
            && language.bytes().all(|b| b.is_ascii_alphabetic());
        let region_ok = region.is_none_or(|r| {
            r.len() == 2 && r.bytes().all(|b| b.is_ascii_alphabetic())
        });
        if !language_ok || !region_ok {
            return Err(ClockError::InvalidLocale {
                tag: input.to_owned(),
            });
        }

        let tag = match region {
            Some(region) => format!(
                "{}_{}",
                language.to_ascii_lowercase(),
                region.to_ascii_uppercase()
            ),
            None => language.to_ascii_lowercase(),
        };
        Ok(Self { tag })
    }

    /// Returns an English tag, the conventional parsing locale.
    #[must_use]
    pub fn english() -> Self {
        Self { tag: "en".to_owned() }
    }

    /// The full normalized tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// The language part of the tag.
    #[must_use]
    pub fn language(&self) -> &str {
        self.tag.split('_').next().unwrap_or(&self.tag)
    }

    /// Maps the tag onto chrono's bundled locale data.
    ///
    /// Resolution order: exact tag, the language's customary region
    /// (`ru` becomes `ru_RU`, `en` becomes `en_US`), POSIX as the last
    /// resort.
    #[must_use]
    pub fn chrono_locale(&self) -> Locale {
        if let Ok(locale) = Locale::try_from(self.tag.as_str()) {
            return locale;
        }
        let language = self.language();
        let candidate = match language {
            "en" => "en_US".to_owned(),
            "zh" => "zh_CN".to_owned(),
            "ja" => "ja_JP".to_owned(),
            "ko" => "ko_KR".to_owned(),
            "uk" => "uk_UA".to_owned(),
            "be" => "be_BY".to_owned(),
            "cs" => "cs_CZ".to_owned(),
            "da" => "da_DK".to_owned(),
            "el" => "el_GR".to_owned(),
            "et" => "et_EE".to_owned(),
            "sl" => "sl_SI".to_owned(),
            "sv" => "sv_SE".to_owned(),
            _ => format!("{language}_{}", language.to_ascii_uppercase()),
        };
        Locale::try_from(candidate.as_str()).unwrap_or(Locale::POSIX)
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self {
            tag: DEFAULT_LOCALE.to_owned(),
        }
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl FromStr for LocaleTag {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocaleTag::parse(s)
    }
}

impl Serialize for LocaleTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.tag)
    }
}

impl<'de> Deserialize<'de> for LocaleTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        LocaleTag::parse(&tag).map_err(D::Error::custom)
    }
}
