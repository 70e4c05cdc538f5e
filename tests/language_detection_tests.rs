use code_explainer::constants::samples::SAMPLE_CODES;
use code_explainer::helpers::code_stats::get_code_stats;
use code_explainer::services::language_classifier::LanguageClassifier;
use code_explainer::structs::language_label::LanguageLabel;

#[test]
fn built_in_samples_are_classified_as_their_language() {
    let classifier = LanguageClassifier::default();

    for (name, language, code) in SAMPLE_CODES {
        assert_eq!(classifier.classify(code).as_str(), *language, "sample {}", name);
    }
}

#[test]
fn auto_detect_resolves_but_explicit_choice_wins() {
    let classifier = LanguageClassifier::default();
    let go = "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"hi\")\n}\n";

    assert_eq!(classifier.resolve(&LanguageLabel::auto_detect(), go).as_str(), "Go");
    assert_eq!(classifier.resolve(&LanguageLabel::new("Kotlin"), go).as_str(), "Kotlin");
}

#[test]
fn sql_grammar_is_normalized() {
    let classifier = LanguageClassifier::default();
    let query = "SELECT name, COUNT(*) FROM orders JOIN users ON users.id = orders.user_id GROUP BY name;";
    assert_eq!(classifier.classify(query).as_str(), "SQL");
}

#[test]
fn blank_input_is_unknown() {
    assert!(LanguageClassifier::default().classify("\n\n   ").is_unknown());
}

#[test]
fn sample_stats_match_their_shape() {
    let (_, _, fibonacci) = SAMPLE_CODES[2];
    let stats = get_code_stats(fibonacci);

    assert_eq!(stats.lines, 14);
    assert_eq!(stats.functions, 1);
    assert_eq!(stats.complexity.label(), "Moderate");
}
