use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextDirection::Ltr => write!(f, "ltr"),
            TextDirection::Rtl => write!(f, "rtl"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// Rendering context passed explicitly to anything that depends on the
/// active locale or colour mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleContext {
    pub locale: String,
    pub color_mode: ColorMode,
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new("en")
    }
}

impl LocaleContext {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            color_mode: ColorMode::default(),
        }
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    /// Arabic is the only right-to-left locale the site ships.
    pub fn direction(&self) -> TextDirection {
        if self.locale == "ar" {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    pub fn is_dark(&self) -> bool {
        self.color_mode == ColorMode::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_is_rtl() {
        assert_eq!(LocaleContext::new("ar").direction(), TextDirection::Rtl);
    }

    #[test]
    fn test_other_locales_are_ltr() {
        assert_eq!(LocaleContext::new("en").direction(), TextDirection::Ltr);
        assert_eq!(LocaleContext::new("fr").direction(), TextDirection::Ltr);
    }

    #[test]
    fn test_color_mode() {
        let ctx = LocaleContext::default().with_color_mode(ColorMode::Dark);
        assert!(ctx.is_dark());
        assert!(!LocaleContext::default().is_dark());
    }
}
