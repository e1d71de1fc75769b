use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

const EN_US: &str = include_str!("../i18n/en-US/pulseboard-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/pulseboard-ui.ftl");

/// Every non-fallback locale provides at least the en-US keys, and nothing extra.
#[test]
fn locales_match_fallback_keys() {
    let fallback = extract_keys(EN_US);
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[("es-ES", ES_ES)];
    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);
        let keys = extract_keys(src);

        let missing: BTreeSet<_> = fallback.difference(&keys).cloned().collect();
        let extra: BTreeSet<_> = keys.difference(&fallback).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "{locale} is missing:\n  {}",
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
        if !extra.is_empty() {
            failures.push(format!(
                "{locale} defines keys unknown to en-US:\n  {}",
                extra.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!("Translation check failed:\n\n{}", failures.join("\n\n"));
    }
}

/// Placeables must survive translation unchanged.
#[test]
fn locales_keep_placeables() {
    for key in ["export-done-saved", "export-error"] {
        let en = message(EN_US, key).unwrap_or_else(|| panic!("en-US lacks {key}"));
        let es = message(ES_ES, key).unwrap_or_else(|| panic!("es-ES lacks {key}"));
        assert_eq!(placeables(en), placeables(es), "placeables differ for {key}");
    }
}

/// Every `t!("...")` in the crate resolves in the fallback bundle, and every
/// fallback key is used somewhere.
#[test]
fn source_keys_match_fallback() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let used = extract_source_keys(&src_root);
    let defined = extract_keys(EN_US);

    let undefined: BTreeSet<_> = used.difference(&defined).cloned().collect();
    assert!(undefined.is_empty(), "t! keys missing from en-US: {undefined:?}");

    let unused: BTreeSet<_> = defined.difference(&used).cloned().collect();
    assert!(unused.is_empty(), "en-US keys never used: {unused:?}");
}

/// Message ids: `key =` lines, ignoring comments, attributes and terms.
fn extract_keys(src: &str) -> HashSet<String> {
    src.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('.') || line.starts_with('-') {
                return None;
            }
            let (left, _) = line.split_once('=')?;
            let key = left.trim();
            let valid = !key.is_empty() && key.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'));
            valid.then(|| key.to_string())
        })
        .collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();
    for line in src.lines() {
        for key in extract_keys(line) {
            if !seen.insert(key.clone()) {
                dups.insert(key);
            }
        }
    }
    assert!(dups.is_empty(), "Duplicate keys in {locale}: {dups:?}");
}

fn message<'a>(src: &'a str, key: &str) -> Option<&'a str> {
    src.lines().find_map(|line| {
        let (left, right) = line.split_once('=')?;
        (left.trim() == key).then_some(right.trim())
    })
}

fn placeables(value: &str) -> BTreeSet<String> {
    value
        .split('{')
        .skip(1)
        .filter_map(|rest| rest.split_once('}').map(|(inner, _)| inner.trim().to_string()))
        .collect()
}

fn extract_source_keys(root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find("t!(\"") {
            let after = &rest[pos + 4..];
            let Some(end) = after.find('"') else {
                break;
            };
            let key = &after[..end];
            // Doc examples and macro patterns are not real lookups.
            if !key.is_empty() && key.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')) {
                found.insert(key.to_string());
            }
            rest = &after[end..];
        }
    }

    found
}
