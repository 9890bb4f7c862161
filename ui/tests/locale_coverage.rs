//! Every message the UI looks up exists in every embedded locale, with the
//! same placeables as the English source.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const EN_US: &str = include_str!("../i18n/en-US/webperf-ui.ftl");
const LOCALES: &[(&str, &str)] = &[("zh-CN", include_str!("../i18n/zh-CN/webperf-ui.ftl"))];

/// Message id -> placeable names (`{ $url }` gives `url`).
fn messages(ftl: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for line in ftl.lines() {
        if line.starts_with(['#', ' ', '\t', '.', '-']) || line.trim().is_empty() {
            continue;
        }
        let Some((id, body)) = line.split_once('=') else {
            continue;
        };
        let previous = out.insert(id.trim().to_string(), placeables(body));
        assert!(previous.is_none(), "message `{}` defined twice", id.trim());
    }
    out
}

fn placeables(body: &str) -> BTreeSet<String> {
    body.split("{ $")
        .skip(1)
        .filter_map(|rest| rest.split_once(" }").map(|(name, _)| name.to_string()))
        .collect()
}

/// Literal ids passed to `t!` anywhere under `src/`.
fn ids_used_in(dir: &Path) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    let mut pending: Vec<PathBuf> = vec![dir.to_path_buf()];
    while let Some(path) = pending.pop() {
        if path.is_dir() {
            for entry in fs::read_dir(&path).unwrap().flatten() {
                pending.push(entry.path());
            }
            continue;
        }
        if path.extension().is_some_and(|ext| ext == "rs") {
            let source = fs::read_to_string(&path).unwrap();
            for (at, call) in source.match_indices("t!(\"") {
                // `format!("` and friends end in `t!("` too.
                let macro_start = source[..at].chars().next_back();
                if macro_start.is_some_and(|c| c.is_alphanumeric() || c == '_') {
                    continue;
                }
                let rest = &source[at + call.len()..];
                if let Some((id, _)) = rest.split_once('"') {
                    ids.insert(id.to_string());
                }
            }
        }
    }
    ids
}

#[test]
fn english_defines_every_id_the_ui_uses() {
    let english = messages(EN_US);
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let used = ids_used_in(&src);
    assert!(used.contains("form-measure"), "source scan found no lookups");

    let missing: Vec<_> = used.iter().filter(|id| !english.contains_key(*id)).collect();
    assert!(missing.is_empty(), "en-US lacks {missing:?}");

    let unused: Vec<_> = english.keys().filter(|id| !used.contains(*id)).collect();
    assert!(unused.is_empty(), "en-US defines unused {unused:?}");
}

#[test]
fn every_locale_mirrors_english() {
    let english = messages(EN_US);
    for (tag, ftl) in LOCALES {
        let translated = messages(ftl);
        let ids: BTreeSet<_> = translated.keys().collect();
        let expected: BTreeSet<_> = english.keys().collect();
        assert_eq!(ids, expected, "{tag} message ids differ from en-US");

        for (id, vars) in &english {
            assert_eq!(
                &translated[id], vars,
                "{tag} `{id}` uses different placeables"
            );
        }
    }
}

#[test]
fn status_messages_carry_their_arguments() {
    let english = messages(EN_US);
    let expect = [
        ("status-measuring", "url"),
        ("status-completed", "url"),
        ("status-transport-failed", "reason"),
        ("status-remote-error", "reason"),
        ("status-timed-out", "seconds"),
        ("export-saved", "path"),
        ("export-started", "filename"),
    ];
    for (id, var) in expect {
        assert!(english[id].contains(var), "`{id}` should interpolate ${var}");
    }
}
