use crate::support::{
    VERSION_SAMPLE_LIMIT, load_registry_or_exit, parse_selection_or_exit, print_version_guards,
};
use glow_kernel::{RenderData, Selection, assemble, classify_types, resolve};
use serde::Serialize;

pub struct Args {
    pub registry: String,
    pub api: String,
    pub spec: String,
    pub profile: String,
    pub debug: bool,
    pub json: bool,
}

/// Presentation fields passed through to the template untouched.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    pub version: String,
    pub date: String,
    pub command_line: String,
    pub online: String,
    pub specification: String,
    pub api: String,
    pub profile: String,
    pub debug: bool,
    /// Extensions are never merged into the selection.
    pub extensions: Vec<String>,
}

impl GenerationMetadata {
    /// `spec` is the version text exactly as the user typed it.
    fn new(selection: &Selection, spec: &str, debug: bool) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            date: chrono::Local::now().to_rfc3339(),
            command_line: command_line(selection, spec, debug),
            online: env!("CARGO_PKG_REPOSITORY").to_string(),
            specification: spec.to_string(),
            api: selection.api.clone(),
            profile: selection.profile.clone(),
            debug,
            extensions: Vec::new(),
        }
    }
}

/// The full object a loader template is rendered against.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateContext {
    #[serde(flatten)]
    pub metadata: GenerationMetadata,
    #[serde(flatten)]
    pub data: RenderData,
}

fn command_line(selection: &Selection, spec: &str, debug: bool) -> String {
    format!(
        "glow --api=\"{}\" --spec=\"{spec}\" --profile=\"{}\" --debug={debug}",
        selection.api, selection.profile
    )
}

pub fn run(args: Args) {
    let selection = parse_selection_or_exit(&args.api, &args.spec, &args.profile);
    let registry = load_registry_or_exit(&args.registry);

    tracing::info!(
        api = %selection.api,
        version = %selection.version,
        profile = %selection.profile,
        features = registry.features.len(),
        "resolving selection"
    );
    let resolution = resolve(&registry, &selection);
    if resolution.version_defs.is_empty() {
        tracing::warn!(
            api = %selection.api,
            version = %selection.version,
            "no features match the selection"
        );
    }
    let data = assemble(&resolution, classify_types(&registry.types, &selection.api));

    let context = TemplateContext {
        metadata: GenerationMetadata::new(&selection, &args.spec, args.debug),
        data,
    };

    if args.json {
        let rendered = serde_json::to_string_pretty(&context).unwrap_or_else(|err| {
            eprintln!("error: failed to render template context: {err}");
            std::process::exit(2);
        });
        println!("{rendered}");
        return;
    }

    let data = &context.data;
    println!("glow generate");
    println!("  Registry: {}", args.registry);
    println!("  Command line: {}", context.metadata.command_line);
    let hooks = if context.metadata.debug { "on" } else { "off" };
    println!("  Debug hooks: {hooks}");
    println!("  Includes: {}", data.includes.len());
    println!("  Typedefs: {}", data.typedefs.len());
    println!("  Enums: {}", data.enums.len());
    println!("  Commands: {}", data.commands.len());
    println!("  Versions: {}", data.version_defs.len());
    print_version_guards(&data.version_defs, VERSION_SAMPLE_LIMIT);
}
