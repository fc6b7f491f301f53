//! Lightweight JSON-backed translations with per-locale bundles.

use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// Portuguese.
    Pt,
    /// English.
    En,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in display order.
    pub const fn all() -> [Self; 2] {
        [Self::Pt, Self::En]
    }

    /// Two-letter code for the locale.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }

    /// Map an arbitrary language tag (`pt-BR`, `en_US`) to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale; the Adocato templates are written in Portuguese.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::Pt;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Missing keys resolve through the default locale before the caller's default.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with default-locale fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }
}

static FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(DEFAULT_LOCALE));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::Pt => include_str!("../../i18n/pt.json"),
        LocaleCode::En => include_str!("../../i18n/en.json"),
    }
}

/// Resolved strings the behaviors write into the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiLabels {
    /// Filename placeholder when the picker is cleared.
    pub no_file: String,
    /// Caption above the thumbnail.
    pub preview_caption: String,
    /// Alternative text of the thumbnail.
    pub preview_alt: String,
    /// Toggle label while dark mode is on (offers the light theme).
    pub to_light: String,
    /// Toggle label while dark mode is off (offers the dark theme).
    pub to_dark: String,
}

impl UiLabels {
    /// Resolve every label from `bundle`.
    #[must_use]
    pub fn from_bundle(bundle: &TranslationBundle) -> Self {
        Self {
            no_file: bundle.text("upload.no_file", "Nenhum arquivo selecionado"),
            preview_caption: bundle.text("upload.preview_caption", "Preview:"),
            preview_alt: bundle.text("upload.preview_alt", "Preview"),
            to_light: bundle.text("theme.to_light", "Modo Claro"),
            to_dark: bundle.text("theme.to_dark", "Modo Escuro"),
        }
    }
}

impl Default for UiLabels {
    fn default() -> Self {
        Self::from_bundle(&TranslationBundle::new(DEFAULT_LOCALE))
    }
}
