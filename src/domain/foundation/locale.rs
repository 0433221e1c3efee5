//! Display locale and the catalog of user-facing messages.
//!
//! The locale is negotiated once from configuration and then passed
//! explicitly to whatever renders a message.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Locales with a complete message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "es-ES")]
    EsEs,
}

/// Keys of user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    PleaseEnterText,
    FailedToAnalyze,
    FailedToParse,
    FailedToGenerateEmail,
    FailedToGeneratePrompt,
    FailedToTranslate,
    NetworkError,
    MissingRequiredFields,
}

impl Locale {
    /// Returns all supported locales in preference order.
    pub fn all() -> &'static [Locale] {
        &[Locale::EnUs, Locale::EsEs]
    }

    /// Returns the BCP 47 tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EsEs => "es-ES",
        }
    }

    /// Picks the best supported locale for a requested tag.
    ///
    /// Exact tag first, then the first locale sharing the language subtag,
    /// then `en-US`.
    pub fn negotiate(requested: &str) -> Locale {
        let requested = requested.trim();
        if let Some(exact) = Self::all()
            .iter()
            .find(|l| l.tag().eq_ignore_ascii_case(requested))
        {
            return *exact;
        }

        let language = requested.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .find(|l| {
                l.tag()
                    .split('-')
                    .next()
                    .is_some_and(|lang| !language.is_empty() && lang.eq_ignore_ascii_case(language))
            })
            .copied()
            .unwrap_or_default()
    }

    /// Returns the localized text for a message key.
    pub fn message(&self, key: MessageKey) -> &'static str {
        use MessageKey::*;
        match self {
            Locale::EnUs => match key {
                PleaseEnterText => "Please enter some text to analyze",
                FailedToAnalyze => "Failed to analyze text. Please try again.",
                FailedToParse => "Failed to parse suggestions. Please try again.",
                FailedToGenerateEmail => {
                    "Sorry, there was an error generating your email. Please try again."
                }
                FailedToGeneratePrompt => {
                    "Sorry, there was an error generating your prompt. Please try again."
                }
                FailedToTranslate => "Failed to translate code. Please try again.",
                NetworkError => "Network error. Please check your connection and try again.",
                MissingRequiredFields => "Missing required fields",
            },
            Locale::EsEs => match key {
                PleaseEnterText => "Por favor ingresa algún texto para analizar",
                FailedToAnalyze => "Error al analizar el texto. Por favor intenta de nuevo.",
                FailedToParse => "Error al procesar las sugerencias. Por favor intenta de nuevo.",
                FailedToGenerateEmail => {
                    "Lo sentimos, hubo un error al generar tu correo. Por favor intenta de nuevo."
                }
                FailedToGeneratePrompt => {
                    "Lo sentimos, hubo un error al generar tu prompt. Por favor intenta de nuevo."
                }
                FailedToTranslate => "Error al traducir el código. Por favor intenta de nuevo.",
                NetworkError => "Error de red. Por favor verifica tu conexión e intenta de nuevo.",
                MissingRequiredFields => "Faltan campos obligatorios",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    /// Strict parse: only exact supported tags are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|l| l.tag().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ValidationError::invalid_format("locale", format!("unsupported locale '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negotiate_prefers_exact_match() {
        assert_eq!(Locale::negotiate("es-ES"), Locale::EsEs);
        assert_eq!(Locale::negotiate("en-us"), Locale::EnUs);
    }

    #[test]
    fn negotiate_falls_back_to_language() {
        assert_eq!(Locale::negotiate("es-MX"), Locale::EsEs);
        assert_eq!(Locale::negotiate("en_GB"), Locale::EnUs);
    }

    #[test]
    fn negotiate_defaults_to_english() {
        assert_eq!(Locale::negotiate("fr-FR"), Locale::EnUs);
        assert_eq!(Locale::negotiate(""), Locale::EnUs);
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!("es-ES".parse::<Locale>().unwrap(), Locale::EsEs);
        assert!("es-MX".parse::<Locale>().is_err());
    }

    #[test]
    fn messages_are_localized() {
        assert_eq!(
            Locale::EnUs.message(MessageKey::FailedToParse),
            "Failed to parse suggestions. Please try again."
        );
        assert_eq!(
            Locale::EsEs.message(MessageKey::FailedToAnalyze),
            "Error al analizar el texto. Por favor intenta de nuevo."
        );
    }

    #[test]
    fn serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Locale::EsEs).unwrap(), "\"es-ES\"");
    }
}
