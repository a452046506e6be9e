use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const KNOWN_CATEGORIES: [&str; 5] = [
    "productivity",
    "utilities",
    "conversion",
    "generator",
    "other",
];

#[derive(Debug, Clone, Deserialize)]
struct SeedCatalog {
    schema_version: u32,
    tools: Vec<SeedTool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedTool {
    id: String,
    name: String,
    description: String,
    icon: String,
    category: String,
    #[serde(default = "enabled_by_default")]
    is_enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog.seed.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: SeedCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != 1 {
        panic!(
            "seed catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut ids = HashSet::new();
    for tool in &catalog.tools {
        if tool.id.trim().is_empty() || tool.name.trim().is_empty() {
            panic!("seed tool with empty id or name in {}", path.display());
        }
        if !ids.insert(tool.id.as_str()) {
            panic!("duplicate seed tool id `{}` in {}", tool.id, path.display());
        }
        if !KNOWN_CATEGORIES.contains(&tool.category.as_str()) {
            panic!(
                "seed tool `{}` has unknown category `{}` in {}",
                tool.id,
                tool.category,
                path.display()
            );
        }
    }

    let json = serde_json::to_string_pretty(&catalog.tools).expect("serialize seed catalog");
    let generated = format!(
        "/// Build-time generated seed catalog JSON.\n\
pub const SEED_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("seed_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
