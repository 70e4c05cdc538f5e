mod common;

mod configuration_tests;
mod gemini_provider_tests;
mod language_detection_tests;
