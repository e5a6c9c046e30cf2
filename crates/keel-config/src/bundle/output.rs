use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::bundle::assets::AssetFileNames;
use crate::bundle::helpers::{
    owned, FABRIC_CHUNK, JS_FILE_TEMPLATE, UI_CHUNK, UTILS_CHUNK, VENDOR_CHUNK,
};
use crate::bundle::sanitize::FileNameSanitizer;

/// Options handed to the underlying rollup build
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RollupOptions {
    #[serde(default)]
    pub output: OutputOptions,
}

/// Output shaping: chunk grouping, file naming and import hoisting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// Library packages pinned to named chunks
    #[serde(default)]
    pub manual_chunks: ManualChunks,

    #[serde(default)]
    pub asset_file_names: AssetFileNames,

    pub chunk_file_names: String,

    pub entry_file_names: String,

    #[serde(default)]
    pub sanitize_file_name: FileNameSanitizer,

    /// Hoist imports of shared chunks into importing entry chunks
    #[serde(default)]
    pub hoist_transitive_imports: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            manual_chunks: ManualChunks::default(),
            asset_file_names: AssetFileNames::default(),
            chunk_file_names: JS_FILE_TEMPLATE.to_string(),
            entry_file_names: JS_FILE_TEMPLATE.to_string(),
            sanitize_file_name: FileNameSanitizer::default(),
            hoist_transitive_imports: true,
        }
    }
}

/// Ordered map from chunk name to the packages it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManualChunks(pub IndexMap<String, Vec<String>>);

impl ManualChunks {
    /// Name of the group a package is pinned to, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use keel_config::ManualChunks;
    ///
    /// let chunks = ManualChunks::default();
    /// assert_eq!(chunks.group_for("react-dom"), Some("vendor"));
    /// assert_eq!(chunks.group_for("lodash"), None);
    /// ```
    pub fn group_for(&self, package: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, packages)| packages.iter().any(|p| p == package))
            .map(|(name, _)| name.as_str())
    }

    pub fn get(&self, group: &str) -> Option<&[String]> {
        self.0.get(group).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(name, packages)| (name.as_str(), packages.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ManualChunks {
    fn default() -> Self {
        let mut groups = IndexMap::with_capacity(4);
        groups.insert("vendor".to_string(), owned(VENDOR_CHUNK));
        groups.insert("ui".to_string(), owned(UI_CHUNK));
        groups.insert("utils".to_string(), owned(UTILS_CHUNK));
        groups.insert("fabric".to_string(), owned(FABRIC_CHUNK));
        Self(groups)
    }
}
