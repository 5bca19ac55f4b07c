//! Asset catalog `Contents.json` for the generated icon set

use crate::icon_spec::IconSpec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppIconManifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        ManifestInfo {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

impl AppIconManifest {
    pub fn from_specs(specs: &[IconSpec]) -> Self {
        let images = specs
            .iter()
            .map(|spec| ManifestImage {
                filename: spec.file_name(),
                idiom: spec.idiom.as_str().to_string(),
                scale: spec.scale_label(),
                size: spec.size_label(),
            })
            .collect();

        AppIconManifest {
            images,
            info: ManifestInfo::default(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
