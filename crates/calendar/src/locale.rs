//! Locale resolution and the localized name-formatting capability.

use chrono::{Datelike, Locale, NaiveDate, NaiveTime};
use tracing::warn;

/// Default region for bare language tags whose `xx_XX` form is not a locale.
#[rustfmt::skip]
const DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("ar", "ar_EG"), ("be", "be_BY"), ("ca", "ca_ES"), ("cs", "cs_CZ"),
    ("da", "da_DK"), ("el", "el_GR"), ("en", "en_US"), ("et", "et_EE"),
    ("eu", "eu_ES"), ("fa", "fa_IR"), ("ga", "ga_IE"), ("he", "he_IL"),
    ("hi", "hi_IN"), ("ja", "ja_JP"), ("ko", "ko_KR"), ("nb", "nb_NO"),
    ("nn", "nn_NO"), ("sl", "sl_SI"), ("sq", "sq_AL"), ("sr", "sr_RS"),
    ("sv", "sv_SE"), ("uk", "uk_UA"), ("vi", "vi_VN"), ("zh", "zh_CN"),
];

/// Maps a calendar date to localized weekday and month names.
///
/// This is the host-supplied formatting capability: implementations must
/// return the same string for the same date every time. Names are returned
/// as the locale spells them; capitalization for display is applied by the
/// callers in this crate.
pub trait NameFormatter {
    /// Full (not abbreviated) weekday name of `date`.
    fn weekday_name(&self, date: NaiveDate) -> String;

    /// Full month name of the month containing `date`.
    fn month_name(&self, date: NaiveDate) -> String;
}

impl<F: NameFormatter + ?Sized> NameFormatter for &F {
    fn weekday_name(&self, date: NaiveDate) -> String {
        (**self).weekday_name(date)
    }

    fn month_name(&self, date: NaiveDate) -> String {
        (**self).month_name(date)
    }
}

/// [`NameFormatter`] backed by chrono's localized `strftime` tables.
#[derive(Debug, Clone, Copy)]
pub struct ChronoNames {
    locale: Locale,
}

impl ChronoNames {
    /// Creates a formatter for an already-resolved chrono locale.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Creates a formatter for a BCP-47 language tag such as `de-DE` or `fr`.
    ///
    /// Tags that cannot be resolved fall back to POSIX (English) names.
    pub fn for_tag(tag: &str) -> Self {
        match resolve_locale(tag) {
            Some(locale) => Self::new(locale),
            None => {
                warn!(tag, "unknown locale, falling back to POSIX names");
                Self::new(Locale::POSIX)
            }
        }
    }

    /// Returns the resolved locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn format(&self, date: NaiveDate, pattern: &str) -> String {
        date.and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized(pattern, self.locale)
            .to_string()
    }
}

impl NameFormatter for ChronoNames {
    fn weekday_name(&self, date: NaiveDate) -> String {
        self.format(date, "%A")
    }

    /// Prefers the standalone (nominative) form; `%B` is the in-date form,
    /// which is genitive in e.g. Russian and Polish.
    fn month_name(&self, date: NaiveDate) -> String {
        let standalone: Option<&[&str]> =
            pure_rust_locales::locale_match!(self.locale => LC_TIME::ALT_MON);
        match standalone.and_then(|names| names.get(date.month0() as usize)) {
            Some(name) => (*name).to_string(),
            None => self.format(date, "%B"),
        }
    }
}

/// Resolves a BCP-47 language tag to a chrono locale.
///
/// Resolution order:
/// 1. the tag itself with `-` replaced by `_` (`pt-BR` -> `pt_BR`)
/// 2. `language_REGION` with normalized case (`EN-gb` -> `en_GB`)
/// 3. `xx_XX` for a language `xx` (`de` -> `de_DE`)
/// 4. a fixed default region table (`en` -> `en_US`, `ja` -> `ja_JP`)
///
/// Encoding and modifier suffixes (`.UTF-8`, `@euro`) are ignored.
pub fn resolve_locale(tag: &str) -> Option<Locale> {
    let tag = tag
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('-', "_");
    if tag.is_empty() {
        return None;
    }
    if let Some(locale) = try_locale(&tag) {
        return Some(locale);
    }

    let mut parts = tag.split('_');
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let region = parts
        .filter(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_alphabetic()))
        .last()
        .map(str::to_ascii_uppercase);

    if let Some(region) = region {
        if let Some(locale) = try_locale(&format!("{language}_{region}")) {
            return Some(locale);
        }
    }
    if let Some(locale) = try_locale(&format!("{language}_{}", language.to_ascii_uppercase())) {
        return Some(locale);
    }
    DEFAULT_REGIONS
        .iter()
        .find(|(lang, _)| *lang == language)
        .and_then(|(_, name)| try_locale(name))
}

fn try_locale(name: &str) -> Option<Locale> {
    Locale::try_from(name).ok()
}
