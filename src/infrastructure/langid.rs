use crate::domain::error::{AppError, Result};
use whatlang::{detect, Lang};

/// Black-box language identification. Implementations may fail on
/// short or ambiguous text; callers decide the fallback.
pub trait LanguageModel {
    fn detect(&self, text: &str) -> Result<String>;
}

/// In-process trigram-based language identifier.
pub struct WhatlangModel;

impl WhatlangModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WhatlangModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageModel for WhatlangModel {
    fn detect(&self, text: &str) -> Result<String> {
        let info = detect(text).ok_or_else(|| {
            AppError::DetectionError("No language candidate for text".to_string())
        })?;

        if !info.is_reliable() {
            return Err(AppError::DetectionError(format!(
                "Low-confidence guess: {}",
                info.lang().code()
            )));
        }

        Ok(iso_639_1(info.lang()).to_string())
    }
}

/// Two-letter code for the common languages; the identifier's native
/// three-letter code for the tail.
pub fn iso_639_1(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Nld => "nl",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Tur => "tr",
        Lang::Ara => "ar",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Ben => "bn",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        Lang::Vie => "vi",
        Lang::Tha => "th",
        Lang::Ind => "id",
        Lang::Ell => "el",
        Lang::Ces => "cs",
        Lang::Ron => "ro",
        Lang::Hun => "hu",
        other => other.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english() {
        let model = WhatlangModel::new();
        let code = model
            .detect("This product exceeded every expectation I had for it and more")
            .unwrap();
        assert_eq!(code, "en");
    }

    #[test]
    fn test_detects_spanish() {
        let model = WhatlangModel::new();
        let code = model
            .detect("El producto es terrible y no funciona como esperaba, muy decepcionado con la compra")
            .unwrap();
        assert_eq!(code, "es");
    }

    #[test]
    fn test_code_mapping() {
        assert_eq!(iso_639_1(Lang::Eng), "en");
        assert_eq!(iso_639_1(Lang::Spa), "es");
        assert_eq!(iso_639_1(Lang::Cmn), "zh");
    }
}
