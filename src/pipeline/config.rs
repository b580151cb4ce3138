//! Named conversion profiles.
//!
//! A profile bundles the choices a caller would otherwise pass one by one:
//! which document format to assume (or to detect) and which output variant
//! to produce. Profiles live in a [ProfileRegistry]; the registry ships with
//! defaults and can be extended from a YAML profile file.

use crate::pipeline::DocumentFormat;
use crate::tokens::Conversions;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Which document format a profile assumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSpec {
    /// Detect from the document's root element.
    Auto,
    Tei,
    Xhtml,
}

impl FormatSpec {
    /// The fixed format, if the profile does not auto-detect.
    pub fn fixed(self) -> Option<DocumentFormat> {
        match self {
            FormatSpec::Auto => None,
            FormatSpec::Tei => Some(DocumentFormat::Tei),
            FormatSpec::Xhtml => Some(DocumentFormat::Xhtml),
        }
    }
}

/// Which output variant a profile produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantSpec {
    Human,
    Tools,
}

impl VariantSpec {
    pub fn conversions(self) -> Conversions {
        match self {
            VariantSpec::Human => Conversions::HUMAN,
            VariantSpec::Tools => Conversions::TOOLS,
        }
    }
}

/// A named conversion configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionProfile {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_format")]
    pub format: FormatSpec,
    pub variant: VariantSpec,
}

fn default_format() -> FormatSpec {
    FormatSpec::Auto
}

/// Errors while loading a profile file.
#[derive(Debug)]
pub enum ProfileError {
    /// The profile file is not valid YAML or misses required fields.
    Parse(serde_yaml::Error),
    /// Two profiles in the file share a name.
    DuplicateName(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::Parse(e) => write!(f, "profile file error: {}", e),
            ProfileError::DuplicateName(name) => {
                write!(f, "duplicate profile name \"{}\"", name)
            }
        }
    }
}

impl std::error::Error for ProfileError {}

impl From<serde_yaml::Error> for ProfileError {
    fn from(err: serde_yaml::Error) -> Self {
        ProfileError::Parse(err)
    }
}

#[derive(Debug, Deserialize)]
struct ProfileFile {
    profiles: Vec<ConversionProfile>,
}

/// Registry of conversion profiles.
pub struct ProfileRegistry {
    profiles: HashMap<String, ConversionProfile>,
}

impl ProfileRegistry {
    /// Creates an empty registry.
    pub fn new() -> ProfileRegistry {
        ProfileRegistry {
            profiles: HashMap::new(),
        }
    }

    /// Creates a registry with the standard profiles.
    pub fn with_defaults() -> ProfileRegistry {
        let mut registry = ProfileRegistry::new();

        registry.register(ConversionProfile {
            name: "tools".into(),
            description: "Plain text for text-processing tools; no placeholders".into(),
            format: FormatSpec::Auto,
            variant: VariantSpec::Tools,
        });

        registry.register(ConversionProfile {
            name: "human".into(),
            description: "Readable text with placeholders for images and footnotes".into(),
            format: FormatSpec::Auto,
            variant: VariantSpec::Human,
        });

        registry
    }

    /// Registers a profile, replacing any existing one of the same name.
    pub fn register(&mut self, profile: ConversionProfile) {
        self.profiles.insert(profile.name.clone(), profile);
    }

    pub fn get(&self, name: &str) -> Option<&ConversionProfile> {
        self.profiles.get(name)
    }

    /// All profiles, sorted by name.
    pub fn list_all(&self) -> Vec<&ConversionProfile> {
        let mut profiles: Vec<_> = self.profiles.values().collect();
        profiles.sort_by(|a, b| a.name.cmp(&b.name));
        profiles
    }

    /// Adds the profiles of a YAML profile file to this registry.
    ///
    /// The file holds a `profiles` list; each entry names a profile and
    /// gives its `variant` (`human` or `tools`) and optionally `format`
    /// (`auto`, `tei` or `xhtml`) and `description`. Names must be unique
    /// within the file, but may override defaults already registered.
    pub fn load_yaml(&mut self, source: &str) -> Result<(), ProfileError> {
        let file: ProfileFile = serde_yaml::from_str(source)?;

        let mut seen: Vec<&str> = Vec::new();
        for profile in &file.profiles {
            if seen.contains(&profile.name.as_str()) {
                return Err(ProfileError::DuplicateName(profile.name.clone()));
            }
            seen.push(&profile.name);
        }

        for profile in file.profiles {
            self.register(profile);
        }
        Ok(())
    }
}

impl Default for ProfileRegistry {
    fn default() -> ProfileRegistry {
        ProfileRegistry::with_defaults()
    }
}
