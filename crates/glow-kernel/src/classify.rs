//! Type declarations for the loader header.
//!
//! Types are emitted from the full registry table, not the resolved set:
//! typedefs reference each other by name without declaring the dependency,
//! so source order is kept exactly.

use crate::registry::TypeDef;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// The platform header the template embeds inline instead of `#include`-ing.
pub const INLINE_INCLUDE_EXCEPTION: &str = "khrplatform";

/// The template defines this macro for the `<apientry/>` marker.
pub const APIENTRY_POINTER: &str = "APIENTRYP";

const INCLUDE_DIRECTIVE: &str = "#include";

fn apientry_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<apientry\s*/>").expect("apientry regex must compile"))
}

fn name_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</?name>").expect("name-tag regex must compile"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDeclarations {
    pub includes: Vec<String>,
    pub typedefs: Vec<String>,
}

pub fn classify_types(types: &[TypeDef], api: &str) -> TypeDeclarations {
    let mut declarations = TypeDeclarations::default();
    for ty in types {
        if is_include(ty) {
            if ty.name != INLINE_INCLUDE_EXCEPTION {
                declarations.includes.push(ty.declaration.clone());
            }
        } else if ty.api.is_empty() || ty.api == api {
            declarations.typedefs.push(render_declaration(&ty.declaration));
        }
    }
    declarations
}

fn is_include(ty: &TypeDef) -> bool {
    ty.declaration.contains(INCLUDE_DIRECTIVE)
}

/// Rewrite registry markup into plain C.
pub fn render_declaration(raw: &str) -> String {
    let rewritten = apientry_marker_re().replace_all(raw, APIENTRY_POINTER);
    name_tag_re().replace_all(&rewritten, "").into_owned()
}
