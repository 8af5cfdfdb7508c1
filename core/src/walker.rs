//! # Directory Walker
//!
//! Visits every file under the configured root, patches the ones it
//! recognises and writes back only what changed.

use crate::config::PatchConfig;
use crate::error::{AppError, AppResult};
use crate::patcher::{EditKind, Patcher};
use crate::source_file::{read_source, write_source};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What happened to one visited file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// File path as yielded by the walk.
    pub path: PathBuf,
    /// Edit applied.
    pub kind: EditKind,
    /// Spans replaced.
    pub hits: usize,
    /// Content differs from what was read.
    pub changed: bool,
    /// New content was written to disk.
    pub written: bool,
}

/// Receives each modified file as soon as it has been handled.
pub trait Reporter {
    /// Called once per file whose content changed.
    fn modified(&mut self, outcome: &FileOutcome);
}

/// Decides which edit, if any, `path` receives.
pub fn classify(path: &Path, config: &PatchConfig) -> Option<EditKind> {
    let name = path.file_name()?;
    if name == config.target_file.as_str() {
        Some(EditKind::Targeted)
    } else if path
        .extension()
        .is_some_and(|ext| ext == config.extension.as_str())
    {
        Some(EditKind::Generic)
    } else {
        None
    }
}

/// Patches every recognised file under `config.root`.
///
/// Any error stops the walk; files already written stay written.
pub fn run(config: &PatchConfig, reporter: &mut impl Reporter) -> AppResult<Vec<FileOutcome>> {
    if !config.root.is_dir() {
        return Err(AppError::General(format!(
            "Root directory not found: {:?}",
            config.root
        )));
    }

    log::info!(
        "Patching {:?} (letters: {:?}, parens: {:?}, dry run: {})",
        config.root,
        config.letters,
        config.parens,
        config.dry_run
    );

    let patcher = Patcher::new(config)?;
    let mut outcomes = Vec::new();

    for entry in WalkDir::new(&config.root) {
        let entry = entry?;
        let path = entry.path();
        // Follows a link to a file; links to directories are not descended.
        if !path.is_file() {
            continue;
        }

        let Some(kind) = classify(path, config) else {
            log::trace!("Skipping {:?}", path);
            continue;
        };

        let outcome = process_file(path, kind, &patcher, config.dry_run)?;
        if outcome.changed {
            reporter.modified(&outcome);
        }
        outcomes.push(outcome);
    }

    let modified = outcomes.iter().filter(|o| o.changed).count();
    log::info!("Visited {} file(s), {} modified", outcomes.len(), modified);

    Ok(outcomes)
}

fn process_file(
    path: &Path,
    kind: EditKind,
    patcher: &Patcher,
    dry_run: bool,
) -> AppResult<FileOutcome> {
    log::debug!("Processing {:?} as {:?}", path, kind);

    let source = read_source(path)?;
    let patch = patcher.patch(kind, &source.text);

    if kind == EditKind::Targeted && patch.hits == 0 {
        log::warn!("No allowSpecialChars declaration found in {:?}", path);
    }

    let changed = patch.content != source.text;
    let written = changed && !dry_run;
    if written {
        write_source(path, &source.with_text(patch.content))?;
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        kind,
        hits: patch.hits,
        changed,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patcher::ParenMatch;
    use crate::rules::LetterPattern;
    use crate::whitelist::Whitelist;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Default)]
    struct Collect(Vec<PathBuf>);

    impl Reporter for Collect {
        fn modified(&mut self, outcome: &FileOutcome) {
            self.0.push(outcome.path.clone());
        }
    }

    fn config(root: &Path, wl: &str) -> PatchConfig {
        PatchConfig::new(root.to_path_buf(), Whitelist::new(wl))
    }

    #[test]
    fn test_classify() {
        let cfg = config(Path::new("."), "x");
        assert_eq!(
            classify(Path::new("a/Extensions.cs"), &cfg),
            Some(EditKind::Targeted)
        );
        assert_eq!(classify(Path::new("a/Foo.cs"), &cfg), Some(EditKind::Generic));
        assert_eq!(classify(Path::new("a/Foo.CS"), &cfg), None);
        assert_eq!(classify(Path::new("a/Foo.csproj"), &cfg), None);
        assert_eq!(classify(Path::new("a/.cs"), &cfg), None);
        assert_eq!(classify(Path::new("a/README"), &cfg), None);
    }

    #[test]
    fn test_patches_tree() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("Outputs");
        fs::create_dir(&nested).unwrap();

        let ext = dir.path().join("Extensions.cs");
        fs::write(
            &ext,
            "static string ToCIdentifier(this string s, string allowSpecialChars = \"\") {\n",
        )
        .unwrap();
        let cpp = nested.join("CppDeclarations.cs");
        fs::write(&cpp, "var s = \"hello world\";\n").unwrap();
        let notes = nested.join("notes.txt");
        fs::write(&notes, "\"hello\"").unwrap();

        let mut reporter = Collect::default();
        let outcomes = run(&config(dir.path(), "XYZ"), &mut reporter).unwrap();

        assert_eq!(
            fs::read_to_string(&ext).unwrap(),
            "static string ToCIdentifier(this string s, string allowSpecialChars = \"XYZ\") {\n"
        );
        assert_eq!(
            fs::read_to_string(&cpp).unwrap(),
            "var s = \"hXYZello world\";\n"
        );
        assert_eq!(fs::read_to_string(&notes).unwrap(), "\"hello\"");

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.changed && o.written));
        let mut reported = reporter.0;
        reported.sort();
        let mut expected = vec![ext, cpp];
        expected.sort();
        assert_eq!(reported, expected);
    }

    #[test]
    fn test_unchanged_file_not_reported_or_written() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("Plain.cs");
        fs::write(&plain, "int x = 1;\n").unwrap();
        let before = fs::metadata(&plain).unwrap().modified().unwrap();

        let mut reporter = Collect::default();
        let outcomes = run(&config(dir.path(), "XYZ"), &mut reporter).unwrap();

        assert!(reporter.0.is_empty());
        assert_eq!(outcomes.len(), 1);
        assert!(!outcomes[0].changed);
        assert!(!outcomes[0].written);
        assert_eq!(fs::read_to_string(&plain).unwrap(), "int x = 1;\n");
        assert_eq!(fs::metadata(&plain).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn test_no_sources_no_output() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "\"abc\"").unwrap();
        fs::write(dir.path().join("b.json"), "{\"k\": \"v\"}").unwrap();

        let mut reporter = Collect::default();
        let outcomes = run(&config(dir.path(), "XYZ"), &mut reporter).unwrap();

        assert!(outcomes.is_empty());
        assert!(reporter.0.is_empty());
        assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "\"abc\"");
    }

    #[test]
    fn test_dry_run_reports_without_writing() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("A.cs");
        fs::write(&file, "s = \"ab\";").unwrap();

        let mut cfg = config(dir.path(), "_");
        cfg.dry_run = true;
        let mut reporter = Collect::default();
        let outcomes = run(&cfg, &mut reporter).unwrap();

        assert_eq!(reporter.0, vec![file.clone()]);
        assert!(outcomes[0].changed);
        assert!(!outcomes[0].written);
        assert_eq!(fs::read_to_string(&file).unwrap(), "s = \"ab\";");
    }

    #[test]
    fn test_modes_from_config() {
        let dir = tempdir().unwrap();
        let ext = dir.path().join("Extensions.cs");
        fs::write(&ext, "F(string allowSpecialChars = \"\") => G(x);").unwrap();
        let regexes = dir.path().join("Naming.cs");
        fs::write(&regexes, "Regex.Replace(s, \"[^a-zA-Z0-9]\", \"_\");").unwrap();

        let mut cfg = config(dir.path(), "$");
        cfg.letters = LetterPattern::Range;
        cfg.parens = ParenMatch::First;
        run(&cfg, &mut Collect::default()).unwrap();

        assert_eq!(
            fs::read_to_string(&ext).unwrap(),
            "F(string allowSpecialChars = \"$\") => G(x);"
        );
        assert_eq!(
            fs::read_to_string(&regexes).unwrap(),
            "Regex.Replace(s, \"[^a-zA-Z$0-9]\", \"_\");"
        );
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = tempdir().unwrap();
        let res = run(&config(&dir.path().join("nope"), "x"), &mut Collect::default());
        assert!(matches!(res, Err(AppError::General(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_source_is_patched() {
        let dir = tempdir().unwrap();
        let elsewhere = tempdir().unwrap();
        let target = elsewhere.path().join("Shared.cs");
        fs::write(&target, "s = \"ab\";").unwrap();
        let link = dir.path().join("Shared.cs");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let mut reporter = Collect::default();
        let outcomes = run(&config(dir.path(), "_"), &mut reporter).unwrap();

        assert_eq!(reporter.0, vec![link.clone()]);
        assert!(outcomes[0].written);
        assert_eq!(fs::read_to_string(&target).unwrap(), "s = \"a_b\";");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    }

    #[test]
    fn test_encoding_error_aborts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Bad.cs"), b"\"caf\xE9\"").unwrap();
        let res = run(&config(dir.path(), "x"), &mut Collect::default());
        assert!(matches!(res, Err(AppError::Encoding(_))));
    }
}
