use crate::constants::prompts::{
    ADVANCED_REQUIREMENTS, BASIC_REQUIREMENTS, DEBUG_INSTRUCTIONS, EXPLANATION_FORMAT,
    GENERIC_DEBUG_SYMPTOM, MEDIUM_REQUIREMENTS, OPTIMIZATION_INSTRUCTIONS, QUESTION_INSTRUCTIONS,
};
use crate::enums::detail_level::DetailLevel;
use crate::enums::mode_parameters::ModeParameters;
use crate::structs::language_label::LanguageLabel;

// Every builder is pure: same inputs, same prompt. Code is embedded verbatim.

fn code_block(code: &str, language: &str) -> String {
    format!("```{}\n{}\n```", language, code)
}

pub fn explanation_requirements(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Basic => BASIC_REQUIREMENTS,
        DetailLevel::Medium => MEDIUM_REQUIREMENTS,
        DetailLevel::Advanced => ADVANCED_REQUIREMENTS,
    }
}

pub fn generate_explanation_prompt(code: &str, language: &str, detail_level: DetailLevel) -> String {
    format!(
        "\nYou are an expert programming tutor explaining code to students. Analyze and explain the following {language} code.\n\n\
         CODE TO ANALYZE:\n{block}\n\n\
         EXPLANATION REQUIREMENTS (Level: {detail_level}):\n{requirements}\n\n\
         {format}",
        language = language,
        block = code_block(code, language),
        detail_level = detail_level,
        requirements = explanation_requirements(detail_level),
        format = EXPLANATION_FORMAT,
    )
}

pub fn generate_question_prompt(code: &str, language: &str, question: &str) -> String {
    format!(
        "\nYou are an expert developer. Answer a specific question about this {language} code.\n\n\
         CODE:\n{block}\n\n\
         QUESTION: {question}\n\n\
         {instructions}",
        language = language,
        block = code_block(code, language),
        question = question,
        instructions = QUESTION_INSTRUCTIONS,
    )
}

pub fn generate_debugging_prompt(code: &str, language: &str, error_message: Option<&str>) -> String {
    let error_info = match error_message.map(str::trim).filter(|message| !message.is_empty()) {
        Some(message) => format!("ERROR MESSAGE/SYMPTOM: {}", message),
        None => GENERIC_DEBUG_SYMPTOM.to_string(),
    };

    format!(
        "\nYou are a senior debugger. Identify bugs, logical errors, or performance issues in this {language} code.\n\n\
         CODE:\n{block}\n\n\
         {error_info}\n\n\
         {instructions}",
        language = language,
        block = code_block(code, language),
        error_info = error_info,
        instructions = DEBUG_INSTRUCTIONS,
    )
}

pub fn generate_optimization_prompt(code: &str, language: &str) -> String {
    format!(
        "\nYou are a performance engineer. Suggest optimizations for this {language} code to make it faster or more memory-efficient.\n\n\
         CODE:\n{block}\n\n\
         {instructions}",
        language = language,
        block = code_block(code, language),
        instructions = OPTIMIZATION_INSTRUCTIONS,
    )
}

pub fn generate_comparison_prompt(first_code: &str, second_code: &str, language: &str) -> String {
    format!(
        "\nYou are an expert code reviewer. Compare these two {language} snippets.\n\n\
         CODE SNIPPET 1:\n{first}\n\n\
         CODE SNIPPET 2:\n{second}\n\n\
         INSTRUCTIONS:\n\
         1. **Functionality**: Do they do the same thing?\n\
         2. **Performance**: Which one is more efficient?\n\
         3. **Readability**: Which one is easier to understand and maintain?\n\
         4. **Best Practices**: Which one follows {language} idioms better?\n\
         5. **Recommendation**: Which one would you recommend using and why?\n\n\
         FORMAT: Use a comparison table if applicable and clear sections.\n",
        language = language,
        first = code_block(first_code, language),
        second = code_block(second_code, language),
    )
}

/// Dispatches to the builder for the request's mode.
pub fn generate_prompt(code: &str, language: &LanguageLabel, parameters: &ModeParameters) -> String {
    let language = language.as_str();
    match parameters {
        ModeParameters::Explain { detail_level } => generate_explanation_prompt(code, language, *detail_level),
        ModeParameters::AskQuestion { question } => generate_question_prompt(code, language, question),
        ModeParameters::Debug { error_message } => generate_debugging_prompt(code, language, error_message.as_deref()),
        ModeParameters::Optimize => generate_optimization_prompt(code, language),
        ModeParameters::Compare { second_code } => generate_comparison_prompt(code, second_code, language),
    }
}
