use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use chargram_lib::{PredicateTable, char_predicates, parse};
use chargram_lib::parser::Grammar;

pub fn check(path: &Path) -> ExitCode {
    let Some((grammar, table)) = load(path) else {
        return ExitCode::FAILURE;
    };
    let rules = grammar.rules.len();
    let predicates = table.len();
    println!("ok: {rules} rule{}, {predicates} predicate{}",
        plural(rules), plural(predicates));
    ExitCode::SUCCESS
}

pub fn rules(path: &Path) -> ExitCode {
    let Some((grammar, _)) = load(path) else {
        return ExitCode::FAILURE;
    };
    for rule in &grammar.rules {
        println!("{rule}");
    }
    ExitCode::SUCCESS
}

pub fn test(path: &Path, rule: &str, chars: &str) -> ExitCode {
    let Some((_, table)) = load(path) else {
        return ExitCode::FAILURE;
    };
    let Some(predicate) = table.get(rule) else {
        eprintln!("error: no rule `{rule}` in {}", path.display());
        return ExitCode::FAILURE;
    };
    for c in chars.chars() {
        let verdict = if predicate.test(c) { "match" } else { "no match" };
        println!("{c:?}: {verdict}");
    }
    ExitCode::SUCCESS
}

/// Reads, parses, and compiles a grammar file, printing any failure.
fn load(path: &Path) -> Option<(Grammar, PredicateTable)> {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read {}: {err}", path.display());
            return None;
        }
    };
    let grammar = match parse(&source) {
        Ok(grammar) => grammar,
        Err(err) => {
            let rendered = if std::io::stderr().is_terminal() {
                err.render_colored(&source)
            } else {
                err.render(&source)
            };
            eprintln!("{rendered}");
            return None;
        }
    };
    match char_predicates(&grammar, &PredicateTable::new()) {
        Ok(table) => Some((grammar, table)),
        Err(err) => {
            eprintln!("error: {err}");
            None
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
