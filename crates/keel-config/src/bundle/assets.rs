//! Content-hashed output paths for emitted assets.
//!
//! Assets are routed into a subdirectory by extension. The extension is the
//! text after the last `.` of the asset name, or the whole name when it has no
//! dot. Extension patterns are matched case-insensitively and unanchored, so
//! `jpeg` and `svgz` count as images and `woff2` counts as a font.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::bundle::helpers::{
    DEFAULT_ASSET_TEMPLATE, FONT_ASSET_TEMPLATE, FONT_EXT_PATTERN, IMAGE_ASSET_TEMPLATE,
    IMAGE_EXT_PATTERN,
};
use crate::bundle::types::AssetCategory;
use crate::error::{ConfigError, Result};

static IMAGE_EXT: Lazy<Regex> = Lazy::new(|| case_insensitive(IMAGE_EXT_PATTERN));
static FONT_EXT: Lazy<Regex> = Lazy::new(|| case_insensitive(FONT_EXT_PATTERN));

fn case_insensitive(pattern: &str) -> Regex {
    // Patterns are compile-time constants covered by the tests below.
    Regex::new(&format!("(?i){pattern}")).expect("asset extension pattern is valid")
}

/// Extension of an asset name as the naming rules see it.
pub fn extension(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Category an asset falls into. A missing name is [`AssetCategory::Other`].
pub fn classify(name: Option<&str>) -> AssetCategory {
    let Some(name) = name else {
        return AssetCategory::Other;
    };

    let ext = extension(name);
    if IMAGE_EXT.is_match(ext) {
        AssetCategory::Images
    } else if FONT_EXT.is_match(ext) {
        AssetCategory::Fonts
    } else {
        AssetCategory::Other
    }
}

/// Output path template for an asset.
///
/// # Example
///
/// ```
/// use keel_config::asset_file_name;
///
/// assert_eq!(asset_file_name(Some("logo.PNG")), "assets/images/[name]-[hash][extname]");
/// assert_eq!(asset_file_name(Some("inter.woff2")), "assets/fonts/[name]-[hash][extname]");
/// assert_eq!(asset_file_name(Some("data.json")), "assets/[name]-[hash][extname]");
/// ```
pub fn asset_file_name(name: Option<&str>) -> &'static str {
    classify(name).template()
}

impl AssetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Images => "images",
            AssetCategory::Fonts => "fonts",
            AssetCategory::Other => "other",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            AssetCategory::Images => IMAGE_ASSET_TEMPLATE,
            AssetCategory::Fonts => FONT_ASSET_TEMPLATE,
            AssetCategory::Other => DEFAULT_ASSET_TEMPLATE,
        }
    }
}

/// Serializable description of the asset routing rules.
///
/// The consuming tool receives the patterns and templates as data. The
/// default rule set agrees with [`asset_file_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFileNames {
    /// Tested in order; first match wins
    pub rules: Vec<AssetRule>,
    /// Template for assets no rule matches
    pub fallback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRule {
    pub category: AssetCategory,
    /// Case-insensitive, unanchored pattern tested against the extension
    pub pattern: String,
    pub template: String,
}

impl AssetRule {
    pub fn regex(&self) -> Result<Regex> {
        Regex::new(&format!("(?i){}", self.pattern)).map_err(|e| ConfigError::InvalidValue {
            field: format!("assetFileNames.{}.pattern", self.category.as_str()),
            hint: Some(e.to_string()),
        })
    }
}

/// Rule set with every pattern compiled, for routing many names.
#[derive(Debug, Clone)]
pub struct AssetMatcher<'a> {
    rules: Vec<(Regex, &'a str)>,
    fallback: &'a str,
}

impl<'a> AssetMatcher<'a> {
    pub fn file_name_for(&self, name: Option<&str>) -> &'a str {
        let Some(name) = name else {
            return self.fallback;
        };

        let ext = extension(name);
        self.rules
            .iter()
            .find(|(regex, _)| regex.is_match(ext))
            .map_or(self.fallback, |(_, template)| *template)
    }
}

impl AssetFileNames {
    /// Compile every rule pattern once.
    pub fn matcher(&self) -> Result<AssetMatcher<'_>> {
        let rules = self
            .rules
            .iter()
            .map(|rule| rule.regex().map(|regex| (regex, rule.template.as_str())))
            .collect::<Result<Vec<_>>>()?;

        Ok(AssetMatcher {
            rules,
            fallback: &self.fallback,
        })
    }

    /// Template for a single asset under this rule set.
    pub fn file_name_for(&self, name: Option<&str>) -> Result<&str> {
        Ok(self.matcher()?.file_name_for(name))
    }

    /// Every template this rule set can produce.
    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .map(|rule| rule.template.as_str())
            .chain(std::iter::once(self.fallback.as_str()))
    }
}

impl Default for AssetFileNames {
    fn default() -> Self {
        Self {
            rules: vec![
                AssetRule {
                    category: AssetCategory::Images,
                    pattern: IMAGE_EXT_PATTERN.to_string(),
                    template: IMAGE_ASSET_TEMPLATE.to_string(),
                },
                AssetRule {
                    category: AssetCategory::Fonts,
                    pattern: FONT_EXT_PATTERN.to_string(),
                    template: FONT_ASSET_TEMPLATE.to_string(),
                },
            ],
            fallback: DEFAULT_ASSET_TEMPLATE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGES: &str = "assets/images/[name]-[hash][extname]";
    const FONTS: &str = "assets/fonts/[name]-[hash][extname]";
    const OTHER: &str = "assets/[name]-[hash][extname]";

    #[test]
    fn image_extensions_route_to_images() {
        for name in [
            "hero.png", "photo.jpg", "photo.jpeg", "icon.svg", "spinner.gif", "scan.tiff",
            "old.bmp", "favicon.ico", "LOGO.PNG", "Banner.JpG",
        ] {
            assert_eq!(asset_file_name(Some(name)), IMAGES, "{name}");
        }
    }

    #[test]
    fn font_extensions_route_to_fonts() {
        for name in [
            "inter.woff", "inter.woff2", "legacy.eot", "roboto.ttf", "display.otf", "Mono.TTF",
        ] {
            assert_eq!(asset_file_name(Some(name)), FONTS, "{name}");
        }
    }

    #[test]
    fn other_extensions_route_to_generic_path() {
        for name in ["styles.css", "data.json", "video.mp4", "README"] {
            assert_eq!(asset_file_name(Some(name)), OTHER, "{name}");
        }
    }

    #[test]
    fn missing_name_uses_generic_path() {
        assert_eq!(asset_file_name(None), OTHER);
    }

    #[test]
    fn only_last_extension_counts() {
        assert_eq!(asset_file_name(Some("sprite.png.map")), OTHER);
        assert_eq!(asset_file_name(Some("archive.css.woff")), FONTS);
    }

    #[test]
    fn extension_without_dot_is_whole_name() {
        assert_eq!(extension("favicon"), "favicon");
        assert_eq!(extension("a.b.c"), "c");
        assert_eq!(extension("trailing."), "");
    }

    #[test]
    fn patterns_match_substrings_like_the_bundler() {
        // Unanchored match: the extension only needs to contain a known token.
        assert_eq!(classify(Some("vector.svgz")), AssetCategory::Images);
        assert_eq!(classify(Some("icons")), AssetCategory::Images);
    }

    #[test]
    fn rule_set_agrees_with_function() {
        let rules = AssetFileNames::default();
        for name in ["a.gif", "b.JPEG", "c.otf", "d.woff2", "e.css", "noext"] {
            assert_eq!(
                rules.file_name_for(Some(name)).unwrap(),
                asset_file_name(Some(name)),
                "{name}"
            );
        }
        assert_eq!(rules.file_name_for(None).unwrap(), OTHER);
        assert_eq!(rules.templates().count(), 3);
        assert_eq!(rules.rules[0].template, IMAGES);
        assert_eq!(rules.rules[1].template, FONTS);
        assert_eq!(rules.fallback, OTHER);
    }

    #[test]
    fn custom_rules_are_honored() {
        let rules = AssetFileNames {
            rules: vec![AssetRule {
                category: AssetCategory::Images,
                pattern: "^webp$".to_string(),
                template: "img/[name]-[hash][extname]".to_string(),
            }],
            fallback: "misc/[name]-[hash][extname]".to_string(),
        };
        assert_eq!(rules.file_name_for(Some("a.WEBP")).unwrap(), "img/[name]-[hash][extname]");
        assert_eq!(rules.file_name_for(Some("a.png")).unwrap(), "misc/[name]-[hash][extname]");
    }

    #[test]
    fn invalid_rule_pattern_is_an_error() {
        let rule = AssetRule {
            category: AssetCategory::Fonts,
            pattern: "(unclosed".to_string(),
            template: OTHER.to_string(),
        };
        assert!(matches!(
            rule.regex(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "assetFileNames.fonts.pattern"
        ));

        let rules = AssetFileNames {
            rules: vec![rule],
            fallback: OTHER.to_string(),
        };
        assert!(rules.matcher().is_err());
        assert!(rules.file_name_for(Some("a.ttf")).is_err());
    }

    #[test]
    fn matcher_routes_many_names_with_one_compile() {
        let rules = AssetFileNames::default();
        let matcher = rules.matcher().unwrap();
        let names = ["a.png", "b.woff2", "c.css", "d.ICO", "e.otf"];
        let routed: Vec<&str> = names
            .into_iter()
            .map(|name| matcher.file_name_for(Some(name)))
            .collect();
        assert_eq!(routed, [IMAGES, FONTS, OTHER, IMAGES, FONTS]);
        assert_eq!(matcher.file_name_for(None), OTHER);
    }
}
