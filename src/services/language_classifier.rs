use std::sync::Arc;
use crate::config::constants::GRAMMAR_NORMALIZATION;
use crate::services::heuristic_lexer::HeuristicLexer;
use crate::structs::language_label::LanguageLabel;
use crate::traits::lexer_guesser::LexerGuesser;

/// Maps a snippet to a catalog language label. Never fails: anything it cannot place is `Unknown`.
#[derive(Clone)]
pub struct LanguageClassifier {
    lexer: Arc<dyn LexerGuesser>,
}

impl Default for LanguageClassifier {
    fn default() -> Self {
        Self::new(Arc::new(HeuristicLexer::new()))
    }
}

impl LanguageClassifier {
    pub fn new(lexer: Arc<dyn LexerGuesser>) -> Self {
        Self { lexer }
    }

    pub fn classify(&self, code: &str) -> LanguageLabel {
        if code.trim().is_empty() {
            return LanguageLabel::unknown();
        }

        match self.lexer.guess_grammar(code) {
            Ok(grammar) => {
                let label = Self::normalize(&grammar);
                log::debug!("🔎 Lexer guessed '{}', classified as {}", grammar, label);
                label
            }
            Err(e) => {
                log::debug!("Language detection failed: {}", e);
                LanguageLabel::unknown()
            }
        }
    }

    /// Plain substring containment in a fixed order; e.g. "JavaScript" is tested before "Java".
    /// Names embedding another language's name can misfire, which is accepted.
    pub fn normalize(grammar: &str) -> LanguageLabel {
        GRAMMAR_NORMALIZATION
            .iter()
            .find(|(fragment, _)| grammar.contains(fragment))
            .map(|(_, label)| LanguageLabel::new(*label))
            .unwrap_or_else(|| LanguageLabel::new(grammar))
    }

    /// Resolves the `Auto-detect` sentinel; concrete labels pass through untouched.
    pub fn resolve(&self, selected: &LanguageLabel, code: &str) -> LanguageLabel {
        if selected.is_auto_detect() {
            self.classify(code)
        } else {
            selected.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::lexer_guesser::LexerError;

    struct FixedLexer(Result<String, LexerError>);

    impl LexerGuesser for FixedLexer {
        fn guess_grammar(&self, _code: &str) -> Result<String, LexerError> {
            self.0.clone()
        }
    }

    fn classifier(result: Result<String, LexerError>) -> LanguageClassifier {
        LanguageClassifier::new(Arc::new(FixedLexer(result)))
    }

    #[test]
    fn blank_input_is_unknown_without_consulting_lexer() {
        let classifier = classifier(Ok("Python".into()));
        assert!(classifier.classify("").is_unknown());
        assert!(classifier.classify("  \n\t ").is_unknown());
    }

    #[test]
    fn lexer_failure_maps_to_unknown() {
        let classifier = classifier(Err(LexerError::Internal("boom".into())));
        assert!(classifier.classify("some code here").is_unknown());
    }

    #[test]
    fn grammar_names_are_normalized_in_priority_order() {
        assert_eq!(LanguageClassifier::normalize("Python 2.x").as_str(), "Python");
        assert_eq!(LanguageClassifier::normalize("JavaScript+Genshi Text").as_str(), "JavaScript");
        assert_eq!(LanguageClassifier::normalize("Transact-SQL").as_str(), "SQL");
        assert_eq!(LanguageClassifier::normalize("C++").as_str(), "C++");
        assert_eq!(LanguageClassifier::normalize("Bash").as_str(), "Bash");
        assert_eq!(LanguageClassifier::normalize("Text only").as_str(), "Text only");
    }

    #[test]
    fn naive_containment_quirk_is_preserved() {
        // A grammar whose name merely embeds "Java" still lands on Java.
        assert_eq!(LanguageClassifier::normalize("JavaProperties").as_str(), "Java");
        assert_eq!(LanguageClassifier::normalize("Gosu").as_str(), "Go");
    }

    #[test]
    fn resolve_only_touches_auto_detect() {
        let classifier = classifier(Ok("Rust".into()));
        let chosen = LanguageLabel::new("Kotlin");
        assert_eq!(classifier.resolve(&chosen, "fun main() {}"), chosen);
        assert_eq!(classifier.resolve(&LanguageLabel::auto_detect(), "fn main() {}").as_str(), "Rust");
    }
}
