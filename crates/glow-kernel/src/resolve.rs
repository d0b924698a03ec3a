//! Feature/profile selection.
//!
//! Resolution is a fold over the participating features in ascending version
//! order. Each feature contributes a [`FeaturePatch`]: the definitions its
//! matching require blocks add, then the names its matching remove blocks
//! revoke. Applying the patches in order yields the final [`Resolution`].
//!
//! Profile rules:
//! - a require block with no profile, or profile `core`/`common`, always
//!   applies; any other profile must equal the requested one;
//! - a remove block applies only on an exact profile match.

use crate::error::GlowError;
use crate::index::RegistryIndex;
use crate::registry::{CommandDef, EnumDef, Feature, FeatureBlock, Registry, TypeDef};
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Require-block profiles that apply regardless of the requested profile.
pub const DEFAULT_PROFILES: &[&str] = &["core", "common"];

/// The caller's `(api, version ceiling, profile)` choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub api: String,
    pub version: Version,
    pub profile: String,
}

impl Selection {
    pub fn new(api: impl Into<String>, version: Version, profile: impl Into<String>) -> Self {
        Self {
            api: api.into(),
            version,
            profile: profile.into(),
        }
    }

    /// Validate user-supplied selection strings.
    ///
    /// `api` and `profile` are kept verbatim and compared exactly, so
    /// `" core "` does not select `core` blocks.
    pub fn parse(api: &str, version: &str, profile: &str) -> Result<Self, GlowError> {
        if api.is_empty() {
            return Err(GlowError::EmptySelection("api"));
        }
        if profile.is_empty() {
            return Err(GlowError::EmptySelection("profile"));
        }
        Ok(Self::new(api, version.parse()?, profile))
    }

    fn includes(&self, feature: &Feature) -> bool {
        feature.api == self.api && feature.number <= self.version
    }

    fn requires_apply(&self, block: &FeatureBlock) -> bool {
        let profile = block.profile();
        profile.is_empty() || DEFAULT_PROFILES.contains(&profile) || profile == self.profile
    }

    fn removes_apply(&self, block: &FeatureBlock) -> bool {
        block.profile() == self.profile
    }
}

/// The resolved enums, commands, and types for one selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub enums: BTreeMap<&'a str, &'a EnumDef>,
    pub commands: BTreeMap<&'a str, &'a CommandDef>,
    pub types: BTreeMap<&'a str, &'a TypeDef>,
    /// Display names of every participating feature, in processing order.
    pub version_defs: Vec<&'a str>,
}

impl<'a> Resolution<'a> {
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.commands.is_empty() && self.types.is_empty()
    }

    /// Apply one feature's adds, then its removes.
    pub fn apply(mut self, patch: FeaturePatch<'a>) -> Self {
        self.version_defs.push(patch.feature);

        for def in patch.add_enums {
            self.enums.insert(def.name.as_str(), def);
        }
        for def in patch.add_commands {
            self.commands.insert(def.name.as_str(), def);
        }
        for def in patch.add_types {
            self.types.insert(def.name.as_str(), def);
        }

        for name in patch.remove_enums {
            self.enums.remove(name);
        }
        for name in patch.remove_commands {
            self.commands.remove(name);
        }
        for name in patch.remove_types {
            self.types.remove(name);
        }

        self
    }
}

/// What one feature contributes under a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturePatch<'a> {
    pub feature: &'a str,
    pub add_enums: Vec<&'a EnumDef>,
    pub add_commands: Vec<&'a CommandDef>,
    pub add_types: Vec<&'a TypeDef>,
    pub remove_enums: Vec<&'a str>,
    pub remove_commands: Vec<&'a str>,
    pub remove_types: Vec<&'a str>,
}

impl<'a> FeaturePatch<'a> {
    /// Collect a feature's effect. Names missing from the index are skipped.
    pub fn from_feature(
        feature: &'a Feature,
        index: &RegistryIndex<'a>,
        selection: &Selection,
    ) -> Self {
        let mut patch = Self {
            feature: feature.name.as_str(),
            ..Self::default()
        };

        for block in feature.requires.iter().filter(|b| selection.requires_apply(b)) {
            patch
                .add_enums
                .extend(lookup_all(&block.enums, "enum", feature, |n| index.enum_def(n)));
            patch
                .add_commands
                .extend(lookup_all(&block.commands, "command", feature, |n| {
                    index.command(n)
                }));
            patch
                .add_types
                .extend(lookup_all(&block.types, "type", feature, |n| index.type_def(n)));
        }

        for block in feature.removes.iter().filter(|b| selection.removes_apply(b)) {
            patch.remove_enums.extend(block.enums.iter().map(String::as_str));
            patch
                .remove_commands
                .extend(block.commands.iter().map(String::as_str));
            patch.remove_types.extend(block.types.iter().map(String::as_str));
        }

        patch
    }
}

fn lookup_all<'a, 'n, T: 'a>(
    names: &'n [String],
    kind: &'static str,
    feature: &'n Feature,
    lookup: impl Fn(&str) -> Option<&'a T> + 'n,
) -> impl Iterator<Item = &'a T> + 'n {
    names.iter().filter_map(move |name| {
        let found = lookup(name);
        if found.is_none() {
            tracing::trace!(
                feature = %feature.name,
                kind,
                name = %name,
                "skipping unresolved reference"
            );
        }
        found
    })
}

/// Features participating in `selection`, in ascending version order.
///
/// Ties keep document order.
pub fn participating_features<'a>(
    registry: &'a Registry,
    selection: &Selection,
) -> Vec<&'a Feature> {
    let mut features: Vec<&Feature> = registry
        .features
        .iter()
        .filter(|feature| selection.includes(feature))
        .collect();
    features.sort_by_key(|feature| feature.number);
    features
}

/// Resolve the enums, commands, and types `selection` must carry.
pub fn resolve<'a>(registry: &'a Registry, selection: &Selection) -> Resolution<'a> {
    let index = RegistryIndex::build(registry);
    participating_features(registry, selection)
        .into_iter()
        .map(|feature| FeaturePatch::from_feature(feature, &index, selection))
        .fold(Resolution::default(), |resolution, patch| {
            tracing::debug!(
                feature = patch.feature,
                enums = patch.add_enums.len(),
                commands = patch.add_commands.len(),
                types = patch.add_types.len(),
                removed = patch.remove_enums.len()
                    + patch.remove_commands.len()
                    + patch.remove_types.len(),
                "applying feature"
            );
            resolution.apply(patch)
        })
}
