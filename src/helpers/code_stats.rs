use std::collections::HashSet;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::enums::complexity::Complexity;
use crate::structs::code_stats::CodeStats;

// (pattern, weight) pairs summed into the complexity score
static COMPLEXITY_PATTERNS: Lazy<Vec<(Regex, usize)>> = Lazy::new(|| {
    compile(&[
        (r"\b(if|else|elif|switch|case)\b", 1),
        (r"\b(for|while|foreach|do)\b", 2),
        (r"\b(def|function|class|interface|async)\b", 3),
        (r"\b(try|catch|finally|throw|raise)\b", 2),
    ])
});

static FUNCTION_PATTERNS: Lazy<Vec<(Regex, usize)>> = Lazy::new(|| {
    compile(&[
        (r"def\s+([a-zA-Z_][a-zA-Z0-9_]*)", 0),
        (r"function\s+([a-zA-Z_][a-zA-Z0-9_]*)", 0),
        (r"([a-zA-Z_][a-zA-Z0-9_]*)\s*\(.*?\)\s*\{", 0),
        (r"([a-zA-Z_][a-zA-Z0-9_]*)::\s*function", 0),
    ])
});

fn compile(patterns: &[(&str, usize)]) -> Vec<(Regex, usize)> {
    patterns
        .iter()
        .filter_map(|(pattern, weight)| match Regex::new(pattern) {
            Ok(regex) => Some((regex, *weight)),
            Err(e) => {
                log::error!("Invalid stats pattern '{}': {}", pattern, e);
                None
            }
        })
        .collect()
}

pub fn count_lines(code: &str) -> usize {
    code.lines().count()
}

pub fn complexity_score(code: &str) -> usize {
    COMPLEXITY_PATTERNS
        .iter()
        .map(|(regex, weight)| regex.find_iter(code).count() * weight)
        .sum()
}

pub fn estimate_complexity(code: &str) -> Complexity {
    Complexity::from_score(complexity_score(code))
}

/// Distinct function-like names found by a handful of cross-language patterns.
/// Control-flow keywords followed by `(...) {` are counted too; this is a rough gauge.
pub fn extract_functions(code: &str) -> Vec<String> {
    let names: HashSet<String> = FUNCTION_PATTERNS
        .iter()
        .flat_map(|(regex, _)| regex.captures_iter(code))
        .filter_map(|captures| captures.get(1).map(|m| m.as_str().to_string()))
        .collect();

    let mut names: Vec<String> = names.into_iter().collect();
    names.sort();
    names
}

pub fn get_code_stats(code: &str) -> CodeStats {
    CodeStats {
        lines: count_lines(code),
        chars: code.chars().count(),
        complexity: estimate_complexity(code),
        functions: extract_functions(code).len(),
    }
}
