pub mod fluent_loader;
pub mod helpers;
pub mod language;
pub mod localizer;

pub use fluent_loader::FluentLoader;
pub use helpers::I18n;
pub use language::SupportedLanguage;
pub use localizer::Localizer;

use anyhow::Result;

/// Initialize the i18n system with both site locales.
pub fn init_i18n() -> Result<Localizer> {
    let mut loader = FluentLoader::new();

    loader.load_locale(SupportedLanguage::English)?;
    loader.load_locale(SupportedLanguage::German)?;

    Ok(Localizer::new(loader))
}
