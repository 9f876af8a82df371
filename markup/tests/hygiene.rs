//! Hygiene: source-level budgets for panicking and error-swallowing code.
//!
//! Scans `src/` (test files excluded). Budgets only ever go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
}

const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0 };
// The two static tag patterns.
const EXPECT: Budget = Budget { pattern: ".expect(", max: 2 };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0 };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0 };
const TODO: Budget = Budget { pattern: "todo!(", max: 0 };
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0 };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0 };
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0 };

fn sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn check(budget: &Budget) {
    let mut files = Vec::new();
    sources(Path::new("src"), &mut files);
    let hits: Vec<(String, usize)> = files
        .iter()
        .map(|(path, content)| (path.clone(), content.lines().filter(|l| l.contains(budget.pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    let count: usize = hits.iter().map(|(_, n)| n).sum();
    let listing = hits.iter().map(|(p, n)| format!("  {p}: {n}")).collect::<Vec<_>>().join("\n");
    assert!(
        count <= budget.max,
        "`{}` budget exceeded: found {count}, max {}.\n{listing}",
        budget.pattern,
        budget.max
    );
}

#[test]
fn unwrap_budget() {
    check(&UNWRAP);
}

#[test]
fn expect_budget() {
    check(&EXPECT);
}

#[test]
fn panic_budget() {
    check(&PANIC);
}

#[test]
fn unreachable_budget() {
    check(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(&TODO);
}

#[test]
fn silent_discard_budget() {
    check(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(&DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}
