use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// The site's bilingual content-selection key. Two languages, nothing
/// resembling a full internationalization engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportedLanguage {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
}

impl SupportedLanguage {
    pub fn all() -> &'static [SupportedLanguage] {
        &[SupportedLanguage::English, SupportedLanguage::German]
    }

    pub fn code(&self) -> &'static str {
        match self {
            SupportedLanguage::English => "en",
            SupportedLanguage::German => "de",
        }
    }

    pub fn lang_id(&self) -> LanguageIdentifier {
        match self {
            SupportedLanguage::English => "en-US".parse().unwrap(),
            SupportedLanguage::German => "de-DE".parse().unwrap(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SupportedLanguage::English => "English",
            SupportedLanguage::German => "Deutsch",
        }
    }

    /// Parse from an Accept-Language header; anything unrecognized falls
    /// back to English.
    pub fn from_accept_language(accept_language: &str) -> Self {
        for lang_part in accept_language.split(',') {
            let lang = lang_part.trim().split(';').next().unwrap_or("");
            let lang = lang.to_lowercase();

            if lang.starts_with("de") {
                return SupportedLanguage::German;
            } else if lang.starts_with("en") {
                return SupportedLanguage::English;
            }
        }

        Self::default()
    }
}

impl Default for SupportedLanguage {
    fn default() -> Self {
        SupportedLanguage::English
    }
}

impl Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for SupportedLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(SupportedLanguage::English),
            "de" | "de-de" | "german" | "deutsch" => Ok(SupportedLanguage::German),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_language_picks_the_first_supported() {
        assert_eq!(
            SupportedLanguage::from_accept_language("de-DE,de;q=0.9,en;q=0.8"),
            SupportedLanguage::German
        );
        assert_eq!(
            SupportedLanguage::from_accept_language("en-GB,en;q=0.9"),
            SupportedLanguage::English
        );
    }

    #[test]
    fn unknown_languages_fall_back_to_english() {
        assert_eq!(
            SupportedLanguage::from_accept_language("fr-FR,fr;q=0.9"),
            SupportedLanguage::English
        );
        assert!("tr".parse::<SupportedLanguage>().is_err());
    }
}
