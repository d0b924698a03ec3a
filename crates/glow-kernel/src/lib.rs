//! # Glow Kernel
//!
//! Selection semantics over the OpenGL registry: given an api, a version
//! ceiling, and a profile, decide exactly which enums, commands, and types a
//! generated loader must carry.
//!
//! This crate never reads registry XML and never renders text. It consumes
//! an already-parsed [`Registry`] and produces [`RenderData`], the flat
//! projection a loader template iterates over.
//!
//! ## Architecture
//!
//! ```text
//! Registry              ← Parsed tree: types, enum groups, commands, features
//!     │
//! RegistryIndex         ← Name → first definition in document order
//!     │
//! Selection             ← (api, version ceiling, profile), validated
//!     │
//! resolve               ← Fold of per-feature patches → Resolution
//!     │
//! classify_types        ← Includes + typedefs, document order
//!     │
//! assemble              ← RenderData for the template
//! ```

pub mod assemble;
pub mod classify;
pub mod error;
pub mod index;
pub mod registry;
pub mod resolve;
pub mod version;

pub use assemble::{CommandBundle, EnumEntry, RenderData, assemble, pfn_name};
pub use classify::{INLINE_INCLUDE_EXCEPTION, TypeDeclarations, classify_types};
pub use error::GlowError;
pub use index::RegistryIndex;
pub use registry::{
    CommandDef, EnumDef, EnumGroup, Extension, Feature, FeatureBlock, Param, Registry, TypeDef,
};
pub use resolve::{FeaturePatch, Resolution, Selection, resolve};
pub use version::Version;
