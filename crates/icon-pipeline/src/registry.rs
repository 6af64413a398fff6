//! Registry artifact generation: module index, mapping, category index, and
//! the JSON build manifest.

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::error::PipelineError;
use crate::identifier::IconIdentifier;

/// Generated registry source files, ready to write next to the icon modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryArtifacts {
    /// `mod.rs`: module declarations and re-exports.
    pub modules: String,
    /// `mapping.rs`: definition table, available names, lazy registry.
    pub mapping: String,
    /// `categories.rs`: lookup key to category index.
    pub categories: String,
}

/// Checks lookup-key uniqueness and renders all registry artifacts.
///
/// `entries` pairs each source filename with its derived identifier and must
/// already be sorted by filename so repeated builds emit byte-identical
/// artifacts. A duplicate key aborts before any artifact text is produced.
pub fn build(entries: &[(String, IconIdentifier)]) -> Result<RegistryArtifacts, PipelineError> {
    check_unique(entries)?;
    let ids: Vec<&IconIdentifier> = entries.iter().map(|(_, id)| id).collect();
    Ok(RegistryArtifacts {
        modules: module_index(&ids),
        mapping: mapping_source(&ids),
        categories: category_source(&ids),
    })
}

/// Rejects duplicate lookup keys, reporting both colliding filenames.
pub fn check_unique(entries: &[(String, IconIdentifier)]) -> Result<(), PipelineError> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(entries.len());
    for (file, id) in entries {
        if let Some(first) = seen.insert(id.key.as_str(), file.as_str()) {
            return Err(PipelineError::DuplicateKey {
                key: id.key.clone(),
                first: first.to_owned(),
                second: file.clone(),
            });
        }
    }
    Ok(())
}

fn module_index(ids: &[&IconIdentifier]) -> String {
    let mut out = String::from("//! Auto-generated icon module index - do not edit manually.\n\n");
    out.push_str("pub mod categories;\npub mod mapping;\n\n");
    for id in ids {
        let _ = writeln!(out, "pub mod {};", id.module_name());
    }
    out.push('\n');

    let mut exports: Vec<String> = ids
        .iter()
        .map(|id| format!("pub use self::{}::{};", id.module_name(), id.const_name()))
        .collect();
    exports.push("pub use self::mapping::{registry, AVAILABLE_ICONS, ICONS};".to_owned());
    exports.sort();
    for export in exports {
        let _ = writeln!(out, "{export}");
    }
    out
}

fn mapping_source(ids: &[&IconIdentifier]) -> String {
    let mut out = String::from("//! Auto-generated icon mapping - do not edit manually.\n\n");
    out.push_str("use once_cell::sync::Lazy;\n\nuse crate::icon::{IconDef, IconRegistry};\n\n");
    for id in ids {
        let _ = writeln!(out, "use super::{}::{};", id.module_name(), id.const_name());
    }

    out.push_str("\n/// Every generated icon definition, ordered by source filename.\n");
    out.push_str("pub static ICONS: &[&IconDef] = &[\n");
    for id in ids {
        let _ = writeln!(out, "    &{},", id.const_name());
    }
    out.push_str("];\n");

    out.push_str("\n/// Lookup keys for every generated icon.\n");
    out.push_str("pub static AVAILABLE_ICONS: &[&str] = &[\n");
    for id in ids {
        let _ = writeln!(out, "    \"{}\",", id.key);
    }
    out.push_str("];\n");

    out.push_str(
        "\nstatic REGISTRY: Lazy<IconRegistry> = Lazy::new(|| IconRegistry::from_defs(ICONS));\n",
    );
    out.push_str("\n/// Shared registry over every generated icon.\n");
    out.push_str("pub fn registry() -> &'static IconRegistry {\n    &REGISTRY\n}\n");
    out
}

fn category_source(ids: &[&IconIdentifier]) -> String {
    let mut out =
        String::from("//! Auto-generated icon category index - do not edit manually.\n\n");
    out.push_str("/// Lookup key to category, ordered by source filename.\n");
    out.push_str("pub static ICON_CATEGORIES: &[(&str, &str)] = &[\n");
    for id in ids {
        let _ = writeln!(out, "    (\"{}\", \"{}\"),", id.key, id.category);
    }
    out.push_str("];\n");

    let mut unique: Vec<&str> = Vec::new();
    for id in ids {
        if !unique.contains(&id.category.as_str()) {
            unique.push(id.category.as_str());
        }
    }
    out.push_str("\n/// Unique categories in first-seen order.\n");
    let _ = writeln!(
        out,
        "pub static CATEGORIES: &[&str] = &[{}];",
        unique
            .iter()
            .map(|category| format!("\"{category}\""))
            .collect::<Vec<_>>()
            .join(", ")
    );
    out
}

/// Build report written next to the generated sources.
#[derive(Debug, Serialize)]
pub struct BuildManifest {
    /// Number of components generated.
    pub generated: usize,
    /// Number of assets that failed normalization.
    pub failed: usize,
    /// Identity of every generated icon.
    pub icons: Vec<ManifestEntry>,
}

/// One generated icon in the manifest.
#[derive(Debug, Serialize)]
pub struct ManifestEntry {
    /// Kebab-case lookup key.
    pub name: String,
    /// UpperCamelCase identifier.
    pub ident: String,
    /// Category token.
    pub category: String,
}

impl BuildManifest {
    /// Assembles the manifest from the generated identifiers.
    #[must_use]
    pub fn new(ids: &[&IconIdentifier], failed: usize) -> Self {
        Self {
            generated: ids.len(),
            failed,
            icons: ids
                .iter()
                .map(|id| ManifestEntry {
                    name: id.key.clone(),
                    ident: id.ident.clone(),
                    category: id.category.clone(),
                })
                .collect(),
        }
    }

    /// Serializes the manifest as pretty-printed JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        let mut json =
            serde_json::to_string_pretty(self).expect("manifest serialization cannot fail");
        json.push('\n');
        json
    }
}
