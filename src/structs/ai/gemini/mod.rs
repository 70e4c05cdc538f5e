pub mod gemini_content;
pub mod gemini_generation_config;
pub mod gemini_part;
pub mod gemini_request;
pub mod gemini_response;
