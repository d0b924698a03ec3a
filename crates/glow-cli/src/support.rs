use glow_kernel::{Registry, Selection};
use std::io::Read;
use std::path::Path;

pub const STDIN_PATH: &str = "-";
pub const VERSION_SAMPLE_LIMIT: usize = 8;

pub fn parse_selection_or_exit(api: &str, spec: &str, profile: &str) -> Selection {
    Selection::parse(api, spec, profile).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn load_registry_or_exit(registry_arg: &str) -> Registry {
    let loaded = if registry_arg == STDIN_PATH {
        read_stdin_registry()
    } else {
        Registry::load_json(Path::new(registry_arg)).map_err(|e| e.to_string())
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("error: failed to load registry {registry_arg}: {e}");
        std::process::exit(1);
    })
}

fn read_stdin_registry() -> Result<Registry, String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|e| format!("failed to read stdin: {e}"))?;
    Registry::from_json_slice(&bytes).map_err(|e| e.to_string())
}

/// Print the `#define` guards a loader header opens with, eliding the middle
/// of long lists so the first and latest levels stay visible.
pub fn print_version_guards(version_defs: &[String], limit: usize) {
    if version_defs.is_empty() {
        println!("  Version guards: none");
        return;
    }

    println!("  Version guards:");
    if version_defs.len() <= limit {
        for name in version_defs {
            println!("    #define {name} 1");
        }
        return;
    }

    let head = limit.saturating_sub(1);
    for name in &version_defs[..head] {
        println!("    #define {name} 1");
    }
    println!("    /* {} more */", version_defs.len() - limit);
    if let Some(last) = version_defs.last() {
        println!("    #define {last} 1");
    }
}
