use crate::domain::i18n::interpolate;
use crate::domain::ports::Translator;
use crate::error::Result;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Always answers with the inline fallback text.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackTranslator;

impl Translator for FallbackTranslator {
    fn translate(&self, _key: &str, fallback: &str, params: &[(&str, &str)]) -> String {
        interpolate(fallback, params)
    }
}

/// Translator backed by a flat JSON object of `key -> text`.
///
/// Keys missing from the catalog resolve to the fallback.
#[derive(Debug, Default, Clone)]
pub struct CatalogTranslator {
    entries: HashMap<String, String>,
}

impl CatalogTranslator {
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let entries = serde_json::from_reader(source)?;
        Ok(Self { entries })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, key: &str, fallback: &str, params: &[(&str, &str)]) -> String {
        let template = self.entries.get(key).map(String::as_str).unwrap_or(fallback);
        interpolate(template, params)
    }
}
