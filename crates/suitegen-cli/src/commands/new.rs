//! Implementation of the `suitegen new` command.
//!
//! Responsibility: validate the output path, read the copyright companion
//! file, translate CLI arguments into a `GenerationRequest`, and call the
//! core generate service. No template logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use suitegen_adapters::LocalFilesystem;
use suitegen_core::{
    application::{GenerateService, ports::Filesystem},
    domain::GenerationRequest,
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `suitegen new` command.
///
/// Dispatch sequence:
/// 1. Validate the output filename (extension, parent directory)
/// 2. Read the copyright file, if one was requested
/// 3. Build the `GenerationRequest` (flags override config defaults)
/// 4. Early-exit if `--dry-run`: print instead of writing
/// 5. Generate and write via `GenerateService`
#[instrument(skip_all, fields(filename = %args.filename))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate output path
    validate_filename(&args.filename)?;

    let filesystem = LocalFilesystem::new();

    // 2. Copyright text: the flag wins, then the config default, then none.
    let copyright_path = args.copyright.clone().or(config.defaults.copyright.clone());
    let copyright_text = copyright_path
        .map(|path| read_copyright(&filesystem, &path))
        .transpose()?;

    // 3. Build the request
    let request = build_request(&args, &config, copyright_text);

    debug!(
        script_type = request.script_type.as_deref().unwrap_or("none"),
        api_version = %request.api_version,
        modules = request.modules.len(),
        "Request assembled"
    );

    let service = GenerateService::new(Box::new(filesystem));

    // 4. Dry run: render to stdout, touch nothing.
    if args.dry_run {
        let document = service.generate(&request)?;
        output.info(&format!("Dry run: would write '{}'", args.filename))?;
        output.print("")?;
        print!("{}", document.render());
        return Ok(());
    }

    // 5. Generate and write
    info!(filename = %args.filename, "Generation started");
    service.generate_to_file(&request, args.force)?;

    output.success(&format!("Created '{}'", args.filename))?;

    if !global.quiet {
        if let Some(raw) = &args.script_type {
            output.print(&format!("  Script type: {raw}"))?;
        }
        output.print(&format!("  API version: {}", request.api_version))?;
        if !request.modules.is_empty() {
            output.print(&format!("  Modules:     {}", request.modules.join(", ")))?;
        }
    }

    Ok(())
}

// ── Filename validation ───────────────────────────────────────────────────────

/// Reject anything the generator should not write to.
///
/// The core re-checks only that the name is non-empty; the extension and
/// parent-directory rules live here because they are presentation-layer
/// policy, not generation logic.
fn validate_filename(name: &str) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidFilename {
            name: name.into(),
            reason: "file name cannot be empty".into(),
        });
    }

    let path = Path::new(name);
    match path.extension() {
        Some(ext) if ext == "js" => {}
        Some(_) => {
            return Err(CliError::InvalidFilename {
                name: name.into(),
                reason: "only .js files can be generated".into(),
            });
        }
        None => {
            return Err(CliError::InvalidFilename {
                name: name.into(),
                reason: "file name missing extension".into(),
            });
        }
    }

    // Writing into a directory that does not exist would only fail later
    // with a less helpful I/O error.
    if name.contains('/') || name.contains('\\') {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(CliError::InvalidFilename {
                    name: name.into(),
                    reason: format!("parent directory '{}' does not exist", parent.display()),
                });
            }
        }
    }

    Ok(())
}

// ── Copyright handling ────────────────────────────────────────────────────────

/// Read the copyright companion file through the filesystem port.
///
/// The trailing newline most text files end with is stripped so the block
/// comment closes on the line after the last line of text; everything else
/// reaches the core verbatim.
fn read_copyright(filesystem: &dyn Filesystem, path: &PathBuf) -> CliResult<String> {
    let raw = filesystem
        .read_to_string(path)
        .map_err(|e| CliError::CopyrightFile {
            path: path.clone(),
            source: Box::new(e),
        })?;
    Ok(raw.trim_end_matches(['\n', '\r']).to_string())
}

// ── Request construction ──────────────────────────────────────────────────────

fn build_request(args: &NewArgs, config: &AppConfig, copyright_text: Option<String>) -> GenerationRequest {
    let mut request = GenerationRequest::new(&args.filename).with_modules(args.modules.clone());

    if let Some(text) = copyright_text {
        request = request.with_copyright_text(text);
    }
    if let Some(raw) = &args.script_type {
        request = request.with_script_type(raw);
    }
    // Flag wins, then config default, then the core's built-in default.
    if let Some(raw) = args.api_version.as_ref().or(config.defaults.api_version.as_ref()) {
        request = request.with_api_version(raw);
    }

    request
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use suitegen_adapters::MemoryFilesystem;

    fn new_args(filename: &str) -> NewArgs {
        NewArgs {
            filename: filename.into(),
            copyright: None,
            script_type: None,
            api_version: None,
            modules: Vec::new(),
            force: false,
            dry_run: false,
        }
    }

    // ── validate_filename ─────────────────────────────────────────────────

    #[test]
    fn plain_js_name_is_valid() {
        assert!(validate_filename("basic.js").is_ok());
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            validate_filename(""),
            Err(CliError::InvalidFilename { .. })
        ));
    }

    #[test]
    fn wrong_extension_is_invalid() {
        assert!(validate_filename("script.ts").is_err());
        assert!(validate_filename("script.txt").is_err());
    }

    #[test]
    fn missing_extension_is_invalid() {
        assert!(validate_filename("script").is_err());
    }

    #[test]
    fn nonexistent_parent_directory_is_invalid() {
        let err = validate_filename("/definitely/not/a/dir/out.js").unwrap_err();
        let CliError::InvalidFilename { reason, .. } = err else {
            panic!("expected InvalidFilename");
        };
        assert!(reason.contains("parent directory"));
    }

    #[test]
    fn existing_parent_directory_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("out.js");
        assert!(validate_filename(name.to_str().unwrap()).is_ok());
    }

    // ── build_request ─────────────────────────────────────────────────────

    #[test]
    fn flag_api_version_beats_config_default() {
        let mut args = new_args("a.js");
        args.api_version = Some("2.0".into());
        let mut config = AppConfig::default();
        config.defaults.api_version = Some("2.x".into());

        let request = build_request(&args, &config, None);
        assert_eq!(request.api_version, "2.0");
    }

    #[test]
    fn config_default_used_when_flag_absent() {
        let args = new_args("a.js");
        let mut config = AppConfig::default();
        config.defaults.api_version = Some("2.x".into());

        let request = build_request(&args, &config, None);
        assert_eq!(request.api_version, "2.x");
    }

    #[test]
    fn core_default_used_when_nothing_configured() {
        let request = build_request(&new_args("a.js"), &AppConfig::default(), None);
        assert_eq!(request.api_version, "2.1");
    }

    #[test]
    fn module_order_survives_request_construction() {
        let mut args = new_args("a.js");
        args.modules = vec!["search".into(), "record".into()];
        let request = build_request(&args, &AppConfig::default(), None);
        assert_eq!(request.modules, vec!["search", "record"]);
    }

    // ── read_copyright ────────────────────────────────────────────────────

    #[test]
    fn copyright_trailing_newline_is_stripped() {
        let fs = MemoryFilesystem::new();
        let path = PathBuf::from("copyright.txt");
        fs.write_file(&path, "Copyright (c) 2021 Example Corp\n")
            .unwrap();

        let text = read_copyright(&fs, &path).unwrap();
        assert_eq!(text, "Copyright (c) 2021 Example Corp");
    }

    #[test]
    fn copyright_interior_newlines_survive() {
        let fs = MemoryFilesystem::new();
        let path = PathBuf::from("copyright.txt");
        fs.write_file(&path, "Line one\nLine two\n\n").unwrap();

        let text = read_copyright(&fs, &path).unwrap();
        assert_eq!(text, "Line one\nLine two");
    }

    #[test]
    fn missing_copyright_file_maps_to_cli_error() {
        let fs = MemoryFilesystem::new();
        let path = PathBuf::from("nonexistent/copyright.txt");
        let err = read_copyright(&fs, &path).unwrap_err();
        assert!(matches!(err, CliError::CopyrightFile { .. }));
    }
}
