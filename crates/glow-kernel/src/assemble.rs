//! Render data for the loader template.
//!
//! Flattens a [`Resolution`] and the classified type declarations into the
//! strings a template substitutes directly: `#define` pairs, function
//! pointer typedef names, and call/prototype argument lists.

use crate::classify::TypeDeclarations;
use crate::registry::{CommandDef, Param};
use crate::resolve::Resolution;
use serde::{Deserialize, Serialize};

pub const PFN_PREFIX: &str = "PFN";
pub const PFN_SUFFIX: &str = "PROC";

/// Command-name namespace token dropped from PFN names (`gl_Foo` → `glFoo`).
const NAMESPACE_SEPARATOR: &str = "gl_";
const NAMESPACE_JOINED: &str = "gl";

const ARG_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderData {
    pub includes: Vec<String>,
    pub typedefs: Vec<String>,
    pub version_defs: Vec<String>,
    pub enums: Vec<EnumEntry>,
    pub commands: Vec<CommandBundle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumEntry {
    pub name: String,
    pub value: String,
}

/// Everything the template needs to declare, load, and wrap one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandBundle {
    pub name: String,
    pub pfn_name: String,
    pub return_type: String,
    /// Argument names for a call site: `target, buffer`.
    pub args: String,
    /// `args` with a leading `", "`, or empty when there are no arguments.
    pub args_with_leading_comma: String,
    /// Typed parameters for a prototype: `GLenum target, GLuint buffer`.
    pub params: String,
}

impl CommandBundle {
    pub fn from_command(command: &CommandDef) -> Self {
        let args = join_params(&command.params, |p| p.name.clone());
        let args_with_leading_comma = if args.is_empty() {
            String::new()
        } else {
            format!("{ARG_SEPARATOR}{args}")
        };

        Self {
            name: command.name.clone(),
            pfn_name: pfn_name(&command.name),
            return_type: command.return_type.trim().to_string(),
            args,
            args_with_leading_comma,
            params: join_params(&command.params, Param::declaration),
        }
    }
}

fn join_params(params: &[Param], render: impl Fn(&Param) -> String) -> String {
    params
        .iter()
        .map(render)
        .collect::<Vec<_>>()
        .join(ARG_SEPARATOR)
}

/// `glBindBuffer` → `PFNGLBINDBUFFERPROC`.
pub fn pfn_name(command: &str) -> String {
    let joined = command.replacen(NAMESPACE_SEPARATOR, NAMESPACE_JOINED, 1);
    format!("{PFN_PREFIX}{}{PFN_SUFFIX}", joined.to_uppercase())
}

pub fn assemble(resolution: &Resolution<'_>, declarations: TypeDeclarations) -> RenderData {
    RenderData {
        includes: declarations.includes,
        typedefs: declarations.typedefs,
        version_defs: resolution
            .version_defs
            .iter()
            .map(|name| name.to_string())
            .collect(),
        enums: resolution
            .enums
            .values()
            .map(|def| EnumEntry {
                name: def.name.clone(),
                value: def.value.clone(),
            })
            .collect(),
        commands: resolution
            .commands
            .values()
            .map(|command| CommandBundle::from_command(command))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::resolve::{Selection, resolve};

    fn command(name: &str, return_type: &str, params: Vec<Param>) -> CommandDef {
        CommandDef {
            name: name.into(),
            return_type: return_type.into(),
            params,
        }
    }

    #[test]
    fn pfn_name_uppercases_and_drops_namespace_separator() {
        assert_eq!(pfn_name("Foo"), "PFNFOOPROC");
        assert_eq!(pfn_name("glBindBuffer"), "PFNGLBINDBUFFERPROC");
        assert_eq!(pfn_name("gl_Foo_gl_Bar"), "PFNGLFOO_GL_BARPROC");
    }

    #[test]
    fn bundle_preserves_parameter_order() {
        let bundle = CommandBundle::from_command(&command(
            "glBufferData",
            " void ",
            vec![
                Param::new("GLenum", "target"),
                Param::new("GLsizeiptr", "size"),
                Param::new("const void *", "data"),
                Param::new("GLenum", "usage"),
            ],
        ));

        assert_eq!(bundle.return_type, "void");
        assert_eq!(bundle.args, "target, size, data, usage");
        assert_eq!(bundle.args_with_leading_comma, ", target, size, data, usage");
        assert_eq!(
            bundle.params,
            "GLenum target, GLsizeiptr size, const void *data, GLenum usage"
        );
        assert_eq!(bundle.pfn_name, "PFNGLBUFFERDATAPROC");
    }

    #[test]
    fn zero_parameter_bundle_has_empty_arg_lists() {
        let bundle = CommandBundle::from_command(&command("glFinish", "void", Vec::new()));
        assert_eq!(bundle.args, "");
        assert_eq!(bundle.args_with_leading_comma, "");
        assert_eq!(bundle.params, "");
    }

    #[test]
    fn bundle_serializes_with_template_keys() {
        let bundle = CommandBundle::from_command(&command(
            "glGetError",
            "GLenum",
            Vec::new(),
        ));
        insta::assert_json_snapshot!(bundle, @r#"
        {
          "name": "glGetError",
          "pfnName": "PFNGLGETERRORPROC",
          "returnType": "GLenum",
          "args": "",
          "argsWithLeadingComma": "",
          "params": ""
        }
        "#);
    }

    #[test]
    fn assemble_projects_resolution() {
        let registry: Registry = serde_json::from_value(serde_json::json!({
            "enumGroups": [{"enums": [{"name": "ONE", "value": "0x1"}]}],
            "commands": [{"name": "Foo", "returnType": "void"}],
            "features": [{
                "api": "gl",
                "name": "GL_VERSION_1_0",
                "number": "1.0",
                "requires": [{"profile": "core", "enums": ["ONE"], "commands": ["Foo"]}]
            }]
        }))
        .unwrap();
        let resolution = resolve(&registry, &Selection::parse("gl", "1.0", "core").unwrap());
        let declarations = TypeDeclarations {
            includes: vec!["#include <stddef.h>".into()],
            typedefs: vec!["typedef unsigned int GLenum;".into()],
        };

        let data = assemble(&resolution, declarations);
        assert_eq!(data.includes, ["#include <stddef.h>"]);
        assert_eq!(data.typedefs, ["typedef unsigned int GLenum;"]);
        assert_eq!(data.version_defs, ["GL_VERSION_1_0"]);
        assert_eq!(
            data.enums,
            [EnumEntry {
                name: "ONE".into(),
                value: "0x1".into()
            }]
        );
        assert_eq!(data.commands.len(), 1);
        assert_eq!(data.commands[0].name, "Foo");
        assert_eq!(data.commands[0].pfn_name, "PFNFOOPROC");
        assert_eq!(data.commands[0].args, "");
    }
}
