use once_cell::sync::Lazy;
use regex::Regex;
use crate::traits::lexer_guesser::{LexerError, LexerGuesser};

/// Grammar name reported when no rule scores, mirroring a plain-text lexer.
pub const PLAIN_TEXT_GRAMMAR: &str = "Text only";

struct GrammarRule {
    name: &'static str,
    patterns: Vec<(Regex, u32)>,
}

fn rule(name: &'static str, patterns: &[(&str, u32)]) -> GrammarRule {
    GrammarRule {
        name,
        patterns: patterns
            .iter()
            .filter_map(|(pattern, weight)| match Regex::new(pattern) {
                Ok(regex) => Some((regex, *weight)),
                Err(e) => {
                    log::error!("Invalid lexer pattern for {}: {}", name, e);
                    None
                }
            })
            .collect(),
    }
}

// Earlier grammars win ties.
static GRAMMARS: Lazy<Vec<GrammarRule>> = Lazy::new(|| {
    vec![
        rule("Python", &[
            (r"(?m)^\s*def\s+\w+\s*\(.*\)\s*(->\s*[\w\[\], .]+)?:\s*$", 3),
            (r"(?m)^\s*class\s+\w+(\(.*\))?:\s*$", 3),
            (r"(?m)^\s*(from\s+[\w.]+\s+)?import\s+[\w.]+(\s+as\s+\w+)?\s*$", 2),
            (r"(?m)^\s*(if|elif|while|for|with|try|except|else)\b.*:\s*$", 2),
            (r"\bself\.", 1),
            (r"\bprint\(", 1),
            (r"\b(None|True|False)\b", 1),
        ]),
        rule("TypeScript", &[
            (r"\binterface\s+\w+\s*\{", 3),
            (r"\b(const|let|var)\s+\w+\s*:\s*[\w\[\]<>|]+\s*=", 3),
            (r"\w+\??\s*:\s*(string|number|boolean|any|void|unknown)\b", 3),
            (r"(?m)^\s*(export\s+)?type\s+\w+\s*=", 2),
            (r"\):\s*[\w<>\[\]]+\s*(\{|=>)", 2),
        ]),
        rule("JavaScript", &[
            (r"\bconsole\.(log|error|warn)\(", 3),
            (r"\bfunction\s*\w*\s*\(", 2),
            (r"\b(const|let|var)\s+\w+\s*=", 2),
            (r"\brequire\(", 2),
            (r"\b(document|window)\.", 2),
            (r"=>", 1),
            (r"\bawait\b", 1),
        ]),
        rule("Rust", &[
            (r"\bfn\s+\w+\s*(<.*>)?\s*\(", 3),
            (r"\blet\s+mut\b", 3),
            (r"(?m)^\s*(pub\s+)?(impl|struct|enum|trait|mod)\b", 2),
            (r"(?m)^\s*use\s+\w+(::\w+)+", 2),
            (r"\b\w+!\(", 2),
            (r"->\s*[A-Z&]", 1),
        ]),
        rule("Go", &[
            (r"(?m)^package\s+\w+\s*$", 3),
            (r"\bfunc\s+(\(\w+\s+\*?\w+\)\s*)?\w+\s*\(", 3),
            (r"\bfmt\.\w+\(", 3),
            (r":=", 2),
            (r"(?m)^import\s+\(", 2),
        ]),
        rule("Java", &[
            (r"\bpublic\s+(static\s+)?(final\s+)?(class|interface|void|enum)\b", 3),
            (r"\bSystem\.out\.print", 3),
            (r"(?m)^import\s+java\.", 3),
            (r"\bString\[\]\s+\w+", 2),
            (r"\b(private|protected)\s+\w+(<.*>)?\s+\w+\s*[;=]", 1),
        ]),
        rule("C#", &[
            (r"(?m)^\s*using\s+System", 3),
            (r"\bConsole\.Write(Line)?\(", 3),
            (r"\bnamespace\s+[\w.]+", 2),
            (r"\{\s*get;\s*(set;)?\s*\}", 3),
        ]),
        rule("C++", &[
            (r"#include\s*<(iostream|vector|string|map|memory|algorithm|unordered_map)>", 3),
            (r"\bstd::", 3),
            (r"\bcout\s*<<|\bcin\s*>>", 3),
            (r"\btemplate\s*<", 2),
        ]),
        rule("C", &[
            (r"#include\s*<(stdio|stdlib|string|math|unistd)\.h>", 3),
            (r"\bprintf\s*\(", 2),
            (r"\b(malloc|calloc|free)\s*\(", 2),
            (r"\bint\s+main\s*\(", 1),
        ]),
        rule("Transact-SQL", &[
            (r"(?is)\bselect\b.+\bfrom\b", 3),
            (r"(?i)\b(insert\s+into|create\s+table|delete\s+from|alter\s+table)\b", 3),
            (r"(?i)\bupdate\s+\w+\s+set\b", 3),
            (r"(?i)\b(where|join|group\s+by|order\s+by)\b", 1),
        ]),
        rule("HTML", &[
            (r"(?i)<!DOCTYPE\s+html", 4),
            (r"(?i)<(html|head|body|div|span|p|a|ul|li|table|form)\b[^>]*>", 2),
            (r"</\w+>", 1),
        ]),
        rule("CSS", &[
            (r"\b(color|margin|padding|font-size|display|background(-color)?|border)\s*:", 3),
            (r"@media\b", 3),
            (r"(?m)^\s*[.#]?[\w-]+[^{};\n]*\{\s*$", 1),
        ]),
        rule("Bash", &[
            (r"(?m)^#!\s*/(usr/)?bin/(env\s+)?(ba)?sh", 5),
            (r"(?m)^\s*(echo|export|fi|done|esac)\b", 2),
            (r"\$\{\w+\}", 1),
        ]),
        rule("Ruby", &[
            (r"(?m)^\s*end\s*$", 3),
            (r"\.each\s+do\s*\|", 3),
            (r"(?m)^\s*def\s+\w+[?!]?(\(.*\))?\s*$", 2),
            (r"\bputs\s", 2),
            (r#"(?m)^\s*require\s+['"]"#, 2),
        ]),
        rule("PHP", &[
            (r"<\?php", 5),
            (r"\$\w+\s*=", 2),
            (r"->\w+\(", 1),
        ]),
    ]
});

/// Keyword-scoring lexer guesser: every grammar scores the snippet and the best score wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicLexer;

impl HeuristicLexer {
    pub fn new() -> Self {
        Self
    }

    fn score(rule: &GrammarRule, code: &str) -> u32 {
        rule.patterns
            .iter()
            .map(|(regex, weight)| regex.find_iter(code).take(10).count() as u32 * weight)
            .sum()
    }
}

impl LexerGuesser for HeuristicLexer {
    fn guess_grammar(&self, code: &str) -> Result<String, LexerError> {
        if code.trim().is_empty() {
            return Err(LexerError::NoMatch("empty input".to_string()));
        }

        let mut best: Option<(&'static str, u32)> = None;
        for rule in GRAMMARS.iter() {
            let score = Self::score(rule, code);
            log::trace!("grammar {} scored {}", rule.name, score);
            if score > 0 && best.map_or(true, |(_, top)| score > top) {
                best = Some((rule.name, score));
            }
        }

        Ok(best
            .map(|(name, _)| name.to_string())
            .unwrap_or_else(|| PLAIN_TEXT_GRAMMAR.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(code: &str) -> String {
        HeuristicLexer::new().guess_grammar(code).unwrap()
    }

    #[test]
    fn recognises_common_languages() {
        assert_eq!(guess("def add(a, b):\n    return a + b\n\nprint(add(1, 2))\n"), "Python");
        assert_eq!(guess("const total = items.map(x => x * 2);\nconsole.log(total);\n"), "JavaScript");
        assert_eq!(guess("interface User {\n  name: string;\n  age: number;\n}\n"), "TypeScript");
        assert_eq!(guess("fn main() {\n    let mut v = Vec::new();\n    println!(\"{:?}\", v);\n}\n"), "Rust");
        assert_eq!(guess("package main\n\nimport \"fmt\"\n\nfunc main() {\n\tx := 1\n\tfmt.Println(x)\n}\n"), "Go");
        assert_eq!(
            guess("public class Main {\n    public static void main(String[] args) {\n        System.out.println(\"hi\");\n    }\n}\n"),
            "Java"
        );
        assert_eq!(guess("#include <iostream>\nint main() {\n    std::cout << \"hi\";\n}\n"), "C++");
        assert_eq!(guess("#include <stdio.h>\nint main(void) {\n    printf(\"hi\\n\");\n    return 0;\n}\n"), "C");
        assert_eq!(guess("SELECT id, name FROM users WHERE active = 1 ORDER BY name;"), "Transact-SQL");
        assert_eq!(guess("<!DOCTYPE html>\n<html><body><p>Hello</p></body></html>"), "HTML");
        assert_eq!(guess("body {\n  margin: 0;\n  color: #333;\n}\n"), "CSS");
    }

    #[test]
    fn prose_falls_back_to_plain_text() {
        assert_eq!(guess("just some words here, nothing to see"), PLAIN_TEXT_GRAMMAR);
    }

    #[test]
    fn blank_input_is_an_error() {
        assert!(HeuristicLexer::new().guess_grammar("   ").is_err());
    }
}
