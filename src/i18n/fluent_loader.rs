use anyhow::{Context, Result};
use fluent_bundle::{concurrent::FluentBundle, FluentResource};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::i18n::language::SupportedLanguage;

pub type Bundle = FluentBundle<FluentResource>;

/// Loads and manages Fluent translation resources from `locales/<code>/`.
pub struct FluentLoader {
    bundles: HashMap<SupportedLanguage, Bundle>,
}

impl FluentLoader {
    pub fn new() -> Self {
        Self {
            bundles: HashMap::new(),
        }
    }

    /// Load all FTL files for a specific locale.
    pub fn load_locale(&mut self, language: SupportedLanguage) -> Result<()> {
        let lang_id = language.lang_id();
        let mut bundle = FluentBundle::new_concurrent(vec![lang_id]);

        let locale_dir = format!("locales/{}", language.code());
        if !Path::new(&locale_dir).is_dir() {
            anyhow::bail!("Missing locale directory: {}", locale_dir);
        }

        let paths = fs::read_dir(&locale_dir)
            .with_context(|| format!("Failed to read locale directory: {}", locale_dir))?;

        let mut loaded_files = 0;
        for path in paths {
            let path = path?.path();
            if path.extension().and_then(|s| s.to_str()) == Some("ftl") {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read file: {:?}", path))?;

                let resource = FluentResource::try_new(content).map_err(|(_, errors)| {
                    anyhow::anyhow!("Failed to parse FTL file {:?}: {:?}", path, errors)
                })?;

                bundle.add_resource(resource).map_err(|errors| {
                    anyhow::anyhow!("Failed to add resource to bundle: {:?}", errors)
                })?;

                loaded_files += 1;
            }
        }

        if loaded_files == 0 {
            anyhow::bail!("No FTL files found in {}", locale_dir);
        }

        tracing::info!("Loaded {} FTL files for locale {}", loaded_files, language.code());

        self.bundles.insert(language, bundle);
        Ok(())
    }

    pub fn get_bundle(&self, language: &SupportedLanguage) -> Option<&Bundle> {
        self.bundles.get(language)
    }
}

impl Default for FluentLoader {
    fn default() -> Self {
        Self::new()
    }
}
