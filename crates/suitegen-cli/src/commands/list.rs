//! Implementation of the `suitegen list` command.
//!
//! Reads the core's static registries and renders them; there is nothing
//! to resolve or validate here.

use serde_json::json;

use suitegen_core::domain::{API_VERSION_REGISTRY, MODULE_REGISTRY, SCRIPT_TYPE_REGISTRY};

use crate::{
    cli::{ListArgs, ListCategory, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        ListFormat::Table => print_table(args.category, &output)?,
        ListFormat::List => print_list(args.category),
        ListFormat::Json => print_json(args.category),
    }

    Ok(())
}

fn print_table(category: ListCategory, output: &OutputManager) -> CliResult<()> {
    if matches!(category, ListCategory::All | ListCategory::Types) {
        output.header("Script types:")?;
        for entry in SCRIPT_TYPE_REGISTRY {
            output.print(&format!(
                "  {:<16} @NScriptType {}",
                entry.display_name, entry.annotation
            ))?;
        }
    }

    if matches!(category, ListCategory::All | ListCategory::Versions) {
        output.header("API versions:")?;
        for entry in API_VERSION_REGISTRY {
            output.print(&format!("  {}", entry.display_value))?;
        }
    }

    if matches!(category, ListCategory::All | ListCategory::Modules) {
        output.header("Modules:")?;
        for entry in MODULE_REGISTRY {
            output.print(&format!("  {:<30} N/{}", entry.parameter, entry.path))?;
        }
    }

    Ok(())
}

fn print_list(category: ListCategory) {
    if matches!(category, ListCategory::All | ListCategory::Types) {
        for entry in SCRIPT_TYPE_REGISTRY {
            println!("{}", entry.display_name);
        }
    }
    if matches!(category, ListCategory::All | ListCategory::Versions) {
        for entry in API_VERSION_REGISTRY {
            println!("{}", entry.display_value);
        }
    }
    if matches!(category, ListCategory::All | ListCategory::Modules) {
        for entry in MODULE_REGISTRY {
            println!("{}", entry.path);
        }
    }
}

fn print_json(category: ListCategory) {
    // Serialised straight to stdout (bypasses OutputManager because JSON
    // output must be parseable even in non-TTY pipes).
    let mut doc = serde_json::Map::new();

    if matches!(category, ListCategory::All | ListCategory::Types) {
        let types: Vec<_> = SCRIPT_TYPE_REGISTRY
            .iter()
            .map(|e| json!({ "name": e.display_name, "annotation": e.annotation }))
            .collect();
        doc.insert("script_types".into(), json!(types));
    }

    if matches!(category, ListCategory::All | ListCategory::Versions) {
        let versions: Vec<_> = API_VERSION_REGISTRY
            .iter()
            .map(|e| e.display_value)
            .collect();
        doc.insert("api_versions".into(), json!(versions));
    }

    if matches!(category, ListCategory::All | ListCategory::Modules) {
        let modules: Vec<_> = MODULE_REGISTRY
            .iter()
            .map(|e| json!({ "path": format!("N/{}", e.path), "parameter": e.parameter }))
            .collect();
        doc.insert("modules".into(), json!(modules));
    }

    let rendered = serde_json::to_string_pretty(&doc).unwrap_or_else(|_| "{}".into());
    println!("{rendered}");
}
