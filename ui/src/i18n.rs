//! Localized strings for the WebPerf UI.
//!
//! Messages live in `i18n/<lang>/webperf-ui.ftl` and are embedded at compile
//! time. `en-US` is the fallback; every other locale must define the same
//! message ids and placeables.
//!
//! ```ignore
//! ui::i18n::init();
//! let label = ui::t!("status-measuring", url = "https://example.com");
//! ```
//!
//! The metric catalog labels in the results table are not localized.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a message through the shared [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the file stem of every locale's `.ftl`.
const DOMAIN: &str = "webperf-ui";
const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // URLs and error text are interpolated without bidi isolation marks.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Select the best embedded locale for the user. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "locale selection failed; using {FALLBACK}");
        }
    });
}

/// Switch locale at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the locale the loader currently resolves messages from.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded locale tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs: Vec<String> = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_are_embedded() {
        assert_eq!(available_languages(), vec!["en-US", "zh-CN"]);
    }

    #[test]
    fn english_lookup() {
        init();
        set_language("en-US").unwrap();
        assert_eq!(crate::t!("form-measure"), "Measure");
        assert_eq!(current_language(), "en-US");
    }

    #[test]
    fn placeables_are_not_isolated() {
        init();
        set_language("en-US").unwrap();
        let text = crate::t!("status-completed", url = "https://a.test");
        assert!(text.contains("https://a.test"));
        assert!(!text.contains('\u{2068}'));
    }

    #[test]
    fn unparseable_tag_keeps_current_locale() {
        init();
        set_language("en-US").unwrap();
        assert!(set_language("not a tag!").is_ok());
        assert_eq!(current_language(), "en-US");
    }
}
