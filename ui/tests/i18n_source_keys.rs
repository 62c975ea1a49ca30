//! Every `t!("...")` literal in `src/` must exist in the fallback FTL.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "minerals-ui.ftl";

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

/// Literal first arguments of `t!(` calls. Dynamic ids and direct `fl!`
/// usage are not detected.
fn source_keys(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in content.split("t!(\"").skip(1) {
            if let Some(end) = chunk.find('"') {
                let key = &chunk[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = fs::read_to_string(crate_root.join("i18n/en-US").join(FTL_FILENAME))
        .expect("fallback FTL readable");
    let defined = parse_ftl_keys(&fallback);
    let referenced = source_keys(&crate_root.join("src"));

    assert!(!referenced.is_empty(), "no t! calls found under src/");
    let missing: Vec<_> = referenced.difference(&defined).cloned().collect();
    assert!(
        missing.is_empty(),
        "keys used in src/ but missing from en-US:\n{}",
        missing.join("\n")
    );
}

#[test]
fn fallback_has_no_unused_keys() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = fs::read_to_string(crate_root.join("i18n/en-US").join(FTL_FILENAME))
        .expect("fallback FTL readable");
    let defined = parse_ftl_keys(&fallback);
    let referenced = source_keys(&crate_root.join("src"));

    let unused: Vec<_> = defined.difference(&referenced).cloned().collect();
    assert!(unused.is_empty(), "unused en-US keys:\n{}", unused.join("\n"));
}
