//! Page configuration and locale discovery.

use crate::core::contract::{CONFIG_ELEMENT_ID, PageContract};
use crate::core::error::ConfigError;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::utils::window;
use web_sys::Document;

/// Contract from the inline config element, or defaults when absent or invalid.
pub(crate) fn load_contract(document: &Document) -> PageContract {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return PageContract::default();
    };
    if raw.trim().is_empty() {
        return PageContract::default();
    }
    match PageContract::from_json(&raw) {
        Ok(contract) => contract,
        Err(err) => {
            console::warn!(
                "page config rejected; using defaults",
                CONFIG_ELEMENT_ID,
                err.to_string(),
                config_error_detail(&err)
            );
            PageContract::default()
        }
    }
}

fn config_error_detail(err: &ConfigError) -> String {
    match err {
        ConfigError::Json { source } => source.to_string(),
        ConfigError::InvalidField { field, reason } => format!("{field}: {reason}"),
    }
}

/// `<html lang>` first, then the browser language, then the default.
pub(crate) fn load_locale(document: &Document) -> LocaleCode {
    if let Some(lang) = document
        .document_element()
        .and_then(|root| root.get_attribute("lang"))
        && let Some(locale) = LocaleCode::from_lang_tag(&lang)
    {
        return locale;
    }
    if let Some(nav) = window().navigator().language()
        && let Some(locale) = LocaleCode::from_lang_tag(&nav)
    {
        return locale;
    }
    DEFAULT_LOCALE
}
