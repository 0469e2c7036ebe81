//! Check command implementation.

use anyhow::{bail, Context, Result};
use cmake_lint_core::{Linter, Outcome, SourceFile};
use cmake_lint_rules::all_rules;
use glob::Pattern;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::{OutputFormat, SettingsArgs};

/// Runs the check command.
///
/// # Errors
///
/// Fails before any file is linted if the configuration is invalid, an
/// exclude pattern does not parse, or a path cannot be read.
pub fn run(
    settings: &SettingsArgs,
    format: OutputFormat,
    exclude: &[String],
    paths: &[PathBuf],
) -> Result<Outcome> {
    if settings.filter.as_deref() == Some("") {
        let listing = SettingsArgs {
            filter: None,
            ..settings.clone()
        };
        super::list_categories::run(&listing)?;
        return Ok(Outcome::Clean);
    }

    let config = super::resolve_configuration(settings)?;
    let quiet = config.quiet();

    let exclude = compile_excludes(exclude)?;
    let files = discover(paths, &exclude)?;
    let sources = read_sources(&files)?;

    let linter = Linter::builder().config(config).rules(all_rules()).build();
    tracing::info!(
        "Checking {} file(s) with {} rules",
        sources.len(),
        linter.rule_count()
    );

    let report = linter.lint_sources(&sources);
    super::output::print(&report, &sources, format)?;

    let (errors, infos) = report.count_by_severity();
    tracing::info!("{errors} error(s), {infos} informational diagnostic(s)");
    if !(quiet && errors == 0) {
        eprintln!("Total Errors: {errors}");
    }

    Ok(report.outcome())
}

fn compile_excludes(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid exclude pattern: {p}")))
        .collect()
}

/// Returns true for `CMakeLists.txt` (any case) and `*.cmake` files.
fn is_cmake_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.eq_ignore_ascii_case("CMakeLists.txt")
        || path.extension().is_some_and(|ext| ext == "cmake")
}

/// Expands the given paths into the list of files to lint.
///
/// Directories are walked recursively; explicitly named files that are not
/// CMake sources are skipped with a warning.
fn discover(paths: &[PathBuf], exclude: &[Pattern]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkBuilder::new(path).build() {
                let entry =
                    entry.with_context(|| format!("Failed to walk {}", path.display()))?;
                let is_file = entry.file_type().is_some_and(|t| t.is_file());
                if is_file && is_cmake_file(entry.path()) {
                    found.push(entry.into_path());
                }
            }
            found.sort();
            files.extend(found);
        } else if path.is_file() {
            if is_cmake_file(path) {
                files.push(path.clone());
            } else {
                tracing::warn!("Ignoring file: {}", path.display());
            }
        } else {
            bail!("No such file or directory: {}", path.display());
        }
    }

    files.retain(|file| {
        let excluded = exclude.iter().any(|p| p.matches_path(file));
        if excluded {
            tracing::debug!("Excluded: {}", file.display());
        }
        !excluded
    });
    Ok(files)
}

fn read_sources(files: &[PathBuf]) -> Result<Vec<SourceFile>> {
    files
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(SourceFile::from_content(path.clone(), &content))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::write(root.join("CMakeLists.txt"), "project(demo)\n").unwrap();
        fs::write(root.join("README.md"), "# demo\n").unwrap();
        fs::create_dir_all(root.join("cmake")).unwrap();
        fs::write(root.join("cmake").join("helpers.cmake"), "set(A 1)\n").unwrap();
        fs::create_dir_all(root.join("build").join("gen")).unwrap();
        fs::write(
            root.join("build").join("gen").join("CMakeLists.txt"),
            "\tset(B 2)\n",
        )
        .unwrap();
        tmp
    }

    fn no_config() -> SettingsArgs {
        SettingsArgs {
            config: Some("None".to_string()),
            ..SettingsArgs::default()
        }
    }

    #[test]
    fn test_is_cmake_file() {
        assert!(is_cmake_file(Path::new("CMakeLists.txt")));
        assert!(is_cmake_file(Path::new("sub/cmakelists.TXT")));
        assert!(is_cmake_file(Path::new("cmake/FindFoo.cmake")));
        assert!(!is_cmake_file(Path::new("README.md")));
        assert!(!is_cmake_file(Path::new("CMakeLists.txt.in")));
    }

    #[test]
    fn test_discover_walks_directories() {
        let tmp = project();
        let files = discover(&[tmp.path().to_path_buf()], &[]).unwrap();
        let names: Vec<PathBuf> = files
            .iter()
            .map(|f| f.strip_prefix(tmp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            [
                PathBuf::from("CMakeLists.txt"),
                Path::new("build").join("gen").join("CMakeLists.txt"),
                Path::new("cmake").join("helpers.cmake"),
            ]
        );
    }

    #[test]
    fn test_discover_applies_excludes() {
        let tmp = project();
        let exclude = compile_excludes(&["**/build/**".to_string()]).unwrap();
        let files = discover(&[tmp.path().to_path_buf()], &exclude).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| !f.to_string_lossy().contains("build")));
    }

    #[test]
    fn test_explicit_non_cmake_file_is_ignored() {
        let tmp = project();
        let files = discover(&[tmp.path().join("README.md")], &[]).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = discover(&[tmp.path().join("absent")], &[]).unwrap_err();
        assert!(err.to_string().contains("No such file or directory"));
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        assert!(compile_excludes(&["[".to_string()]).is_err());
    }

    #[test]
    fn test_run_reports_outcome() {
        let tmp = project();
        let clean = [tmp.path().join("CMakeLists.txt")];
        let outcome = run(&no_config(), OutputFormat::Text, &[], &clean).unwrap();
        assert_eq!(outcome, Outcome::Clean);

        let tabbed = [tmp.path().join("build")];
        let outcome = run(&no_config(), OutputFormat::Text, &[], &tabbed).unwrap();
        assert_eq!(outcome, Outcome::ViolationsFound);

        let settings = SettingsArgs {
            filter: Some("-whitespace".to_string()),
            ..no_config()
        };
        let outcome = run(&settings, OutputFormat::Text, &[], &tabbed).unwrap();
        assert_eq!(outcome, Outcome::Clean);
    }

    #[test]
    fn test_run_rejects_malformed_filter() {
        let tmp = project();
        let settings = SettingsArgs {
            filter: Some("whitespace".to_string()),
            ..no_config()
        };
        let paths = [tmp.path().to_path_buf()];
        assert!(run(&settings, OutputFormat::Text, &[], &paths).is_err());
    }

    #[test]
    fn test_empty_filter_lists_categories() {
        let settings = SettingsArgs {
            filter: Some(String::new()),
            ..no_config()
        };
        let outcome = run(&settings, OutputFormat::Text, &[], &[]).unwrap();
        assert_eq!(outcome, Outcome::Clean);
    }
}
