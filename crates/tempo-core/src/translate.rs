//! Locale-aware input rewriting for pattern parsing.
//!
//! The strict strftime parser only understands English month names. A
//! [`Translator`] rewrites a locale-rendered input string into a form the
//! parser accepts; the bundled [`TableTranslator`] covers month names for a
//! handful of locales, and callers with richer needs supply their own.

use crate::locale::LocaleTag;

/// Rewrites locale-rendered date text into strict-parseable form.
pub trait Translator {
    /// Translates `input` rendered under `locale` into text the pattern
    /// parser accepts.
    fn translate(&self, input: &str, locale: &LocaleTag) -> String;
}

/// Passes input through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, input: &str, _locale: &LocaleTag) -> String {
        input.to_owned()
    }
}

/// Month names in genitive and nominative forms; longer forms first so the
/// shorter ones never clip them.
const RU_MONTHS: &[(&str, &str)] = &[
    ("января", "january"),
    ("февраля", "february"),
    ("марта", "march"),
    ("апреля", "april"),
    ("мая", "may"),
    ("июня", "june"),
    ("июля", "july"),
    ("августа", "august"),
    ("сентября", "september"),
    ("октября", "october"),
    ("ноября", "november"),
    ("декабря", "december"),
    ("январь", "january"),
    ("февраль", "february"),
    ("март", "march"),
    ("апрель", "april"),
    ("май", "may"),
    ("июнь", "june"),
    ("июль", "july"),
    ("август", "august"),
    ("сентябрь", "september"),
    ("октябрь", "october"),
    ("ноябрь", "november"),
    ("декабрь", "december"),
];

const FR_MONTHS: &[(&str, &str)] = &[
    ("janvier", "january"),
    ("février", "february"),
    ("mars", "march"),
    ("avril", "april"),
    ("mai", "may"),
    ("juin", "june"),
    ("juillet", "july"),
    ("août", "august"),
    ("septembre", "september"),
    ("octobre", "october"),
    ("novembre", "november"),
    ("décembre", "december"),
];

const DE_MONTHS: &[(&str, &str)] = &[
    ("januar", "january"),
    ("februar", "february"),
    ("märz", "march"),
    ("april", "april"),
    ("mai", "may"),
    ("juni", "june"),
    ("juli", "july"),
    ("august", "august"),
    ("september", "september"),
    ("oktober", "october"),
    ("november", "november"),
    ("dezember", "december"),
];

/// Table-driven translator covering month names for the bundled locales.
///
/// Matching is case-insensitive; the translated text comes out lowercased,
/// which the pattern parser accepts. Locales without a table pass through
/// unchanged. Weekday names are not translated.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableTranslator;

impl TableTranslator {
    fn table(language: &str) -> &'static [(&'static str, &'static str)] {
        match language {
            "ru" => RU_MONTHS,
            "fr" => FR_MONTHS,
            "de" => DE_MONTHS,
            _ => &[],
        }
    }
}

impl Translator for TableTranslator {
    fn translate(&self, input: &str, locale: &LocaleTag) -> String {
        let table = Self::table(locale.language());
        if table.is_empty() {
            return input.to_owned();
        }
        let mut out = input.to_lowercase();
        for (localized, english) in table {
            if out.contains(localized) {
                out = out.replace(localized, english);
            }
        }
        out
    }
}
