//! Name lookup over a [`Registry`].
//!
//! Feature blocks reference enums, commands, and types by name only. The
//! index maps each name to the first definition encountered in document
//! order; later duplicates (the same enum listed under several groups) are
//! shadowed.

use crate::registry::{CommandDef, EnumDef, Registry, TypeDef};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct RegistryIndex<'a> {
    enums: HashMap<&'a str, &'a EnumDef>,
    commands: HashMap<&'a str, &'a CommandDef>,
    types: HashMap<&'a str, &'a TypeDef>,
}

impl<'a> RegistryIndex<'a> {
    pub fn build(registry: &'a Registry) -> Self {
        Self {
            enums: first_by_name(registry.enums(), |e| &e.name),
            commands: first_by_name(registry.commands.iter(), |c| &c.name),
            types: first_by_name(registry.types.iter(), |t| &t.name),
        }
    }

    pub fn enum_def(&self, name: &str) -> Option<&'a EnumDef> {
        self.enums.get(name).copied()
    }

    pub fn command(&self, name: &str) -> Option<&'a CommandDef> {
        self.commands.get(name).copied()
    }

    pub fn type_def(&self, name: &str) -> Option<&'a TypeDef> {
        self.types.get(name).copied()
    }
}

fn first_by_name<'a, T: 'a>(
    items: impl Iterator<Item = &'a T>,
    name: impl Fn(&'a T) -> &'a String,
) -> HashMap<&'a str, &'a T> {
    let mut index = HashMap::new();
    for item in items {
        index.entry(name(item).as_str()).or_insert(item);
    }
    index
}
