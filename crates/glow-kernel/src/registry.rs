//! The parsed OpenGL registry.
//!
//! This is the in-memory form of the Khronos `gl.xml` document, produced by
//! an external parser and exchanged as JSON. Nothing here carries logic
//! beyond (de)serialization: selection lives in [`crate::resolve`].

use crate::error::GlowError;
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    #[serde(default)]
    pub types: Vec<TypeDef>,
    #[serde(default)]
    pub enum_groups: Vec<EnumGroup>,
    #[serde(default)]
    pub commands: Vec<CommandDef>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

impl Registry {
    pub fn from_json_str(input: &str) -> Result<Self, GlowError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_json_slice(input: &[u8]) -> Result<Self, GlowError> {
        Ok(serde_json::from_slice(input)?)
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, GlowError> {
        let bytes = std::fs::read(path)?;
        Self::from_json_slice(&bytes)
    }

    /// Iterate every enum across all groups in document order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumDef> {
        self.enum_groups.iter().flat_map(|group| group.enums.iter())
    }
}

/// A `<type>` entry.
///
/// `declaration` is the raw inner markup, e.g.
/// `typedef void (<apientry/> *<name>GLDEBUGPROC</name>)(...)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeDef {
    pub name: String,
    /// Empty means the type applies to every api.
    #[serde(default)]
    pub api: String,
    pub declaration: String,
    #[serde(default)]
    pub requires: Option<String>,
}

/// An `<enums>` block. Membership is containment; the attributes are
/// informational only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnumGroup {
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub enums: Vec<EnumDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommandDef {
    pub name: String,
    pub return_type: String,
    /// Call-signature order.
    #[serde(default)]
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    /// Everything before the parameter name, e.g. `const GLchar *`.
    pub type_text: String,
    pub name: String,
}

impl Param {
    pub fn new(type_text: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_text: type_text.into(),
            name: name.into(),
        }
    }

    /// The `type name` text used in a C prototype.
    ///
    /// Pointer types bind the name directly (`const GLchar *name`).
    pub fn declaration(&self) -> String {
        let type_text = self.type_text.trim();
        if type_text.is_empty() || type_text.ends_with('*') {
            format!("{type_text}{}", self.name)
        } else {
            format!("{type_text} {}", self.name)
        }
    }
}

/// A `<feature>`: one version of one api.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub api: String,
    /// Display name, e.g. `GL_VERSION_3_0`. Emitted as a version guard.
    pub name: String,
    pub number: Version,
    #[serde(default)]
    pub requires: Vec<FeatureBlock>,
    #[serde(default)]
    pub removes: Vec<FeatureBlock>,
}

/// A `<require>` or `<remove>` block: names only, optionally profile-scoped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureBlock {
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub enums: Vec<String>,
    #[serde(default)]
    pub commands: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl FeatureBlock {
    pub fn profile(&self) -> &str {
        self.profile.as_deref().unwrap_or("")
    }
}

/// An `<extension>`. Carried for completeness; never merged by the resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    pub name: String,
    #[serde(default)]
    pub supported: String,
    #[serde(default)]
    pub requires: Vec<FeatureBlock>,
}
