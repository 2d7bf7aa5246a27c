//! Localization for the console UI.
//!
//! Messages live in `i18n/<lang>/gateway-console-ui.ftl` and are embedded at
//! compile time, so the wasm bundle and the desktop binary carry every
//! locale. `en-US` is the fallback and the reference for key checks;
//! `zh-CN` is the second shipped locale.
//!
//! Call [`init`] once before the first lookup (it is idempotent), then use
//! the [`t!`](crate::t) macro:
//!
//! ```ignore
//! use crate::t;
//! crate::i18n::init();
//! let label = t!("home-get-key");
//! let failed = t!("home-copy-failed", reason = "permission denied");
//! ```
//!
//! The initial language comes from `navigator.languages` on the web and
//! from the OS locale list on desktop. The navbar switches it at runtime
//! through [`set_language`].
use std::collections::BTreeSet;
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// Looks a message up through the shared [`LOADER`].
///
/// ```ignore
/// t!("nav-home")
/// t!("duration-day", count = 30)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

// Must match the FTL file stem and the `domain` in `i18n.toml`, which is
// what `fl!` checks keys against at compile time.
const DOMAIN: &str = "gateway-console-ui";

const FALLBACK: LanguageIdentifier = langid!("en-US");

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, FALLBACK));

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        debug!(?requested, "Selecting UI language");
        if let Err(err) = select(&requested) {
            warn!("Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    match tag.parse::<LanguageIdentifier>() {
        Ok(lang) => select(&[lang]),
        Err(_) => {
            debug!(tag, "Ignoring unparseable language tag");
            Ok(())
        }
    }
}

/// Language tags with an embedded bundle, sorted.
pub fn available_languages() -> Vec<String> {
    Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Tag of the bundle currently serving lookups; embedded frames receive it.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .cloned()
        .unwrap_or(FALLBACK)
        .to_string()
}

fn select(requested: &[LanguageIdentifier]) -> Result<(), I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Localizations, requested)?;
    // Interpolated counts and reasons render without bidi isolation marks.
    LOADER.set_use_isolating(false);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
