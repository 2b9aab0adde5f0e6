//! Theme descriptor reading.
//!
//! Each theme root carries one descriptor file naming the theme and,
//! optionally, the theme it inherits from. JSON and YAML are both accepted;
//! the first file found in [`DESCRIPTOR_FILES`] order wins.

use atelier_common::ThemeError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Descriptor file names, in lookup order.
pub const DESCRIPTOR_FILES: &[&str] = &["theme.json", "theme.yaml", "theme.yml"];

/// Parsed descriptor of one installed theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeMetadata {
    /// Directory name of the theme; the primary key.
    pub slug: String,
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    /// Single host this theme is pinned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Slug of the theme this one inherits from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl ThemeMetadata {
    /// Minimal metadata for a root theme; used by in-memory registries.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            version: version.into(),
            author: None,
            description: None,
            preview: None,
            domain: None,
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// What was found when reading a theme's descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorStatus {
    /// No descriptor file exists; the theme is mid-installation or broken.
    Missing,
    /// A descriptor exists but cannot be used; the string says why.
    Invalid(String),
    Valid(ThemeMetadata),
}

impl DescriptorStatus {
    pub fn metadata(&self) -> Option<&ThemeMetadata> {
        match self {
            DescriptorStatus::Valid(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn into_metadata(self) -> Option<ThemeMetadata> {
        match self {
            DescriptorStatus::Valid(meta) => Some(meta),
            _ => None,
        }
    }
}

/// Descriptor as written on disk, before required fields are enforced.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDescriptor {
    name: Option<String>,
    version: Option<String>,
    author: Option<String>,
    description: Option<String>,
    preview: Option<String>,
    domain: Option<String>,
    parent: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse descriptor text for `slug`; the file extension picks the format.
pub fn parse_descriptor(slug: &str, path: &Path, content: &str) -> DescriptorStatus {
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    let parsed: Result<RawDescriptor, String> = if is_yaml {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    };

    let raw = match parsed {
        Ok(raw) => raw,
        Err(e) => return DescriptorStatus::Invalid(format!("malformed descriptor: {e}")),
    };

    let Some(name) = non_blank(raw.name) else {
        return DescriptorStatus::Invalid("missing required field 'name'".into());
    };
    let Some(version) = non_blank(raw.version) else {
        return DescriptorStatus::Invalid("missing required field 'version'".into());
    };

    DescriptorStatus::Valid(ThemeMetadata {
        slug: slug.to_string(),
        name,
        version,
        author: non_blank(raw.author),
        description: non_blank(raw.description),
        preview: non_blank(raw.preview),
        domain: non_blank(raw.domain),
        parent: non_blank(raw.parent),
    })
}

/// Read and parse the descriptor inside `theme_root`.
///
/// A missing file is [`DescriptorStatus::Missing`], not an error; only
/// environment faults (permissions, disk errors) are returned as `Err`.
pub async fn read_descriptor(
    theme_root: &Path,
    slug: &str,
) -> Result<DescriptorStatus, ThemeError> {
    for file in DESCRIPTOR_FILES {
        let path = theme_root.join(file);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => return Ok(parse_descriptor(slug, &path, &content)),
            Err(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
                ) =>
            {
                continue
            }
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                return Ok(DescriptorStatus::Invalid(format!(
                    "descriptor is not valid UTF-8: {e}"
                )))
            }
            Err(e) => return Err(ThemeError::io(path, e)),
        }
    }
    Ok(DescriptorStatus::Missing)
}
