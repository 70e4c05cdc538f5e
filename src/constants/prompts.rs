pub const BASIC_REQUIREMENTS: &str = r#"
1. **Overview**: Simple overview of what this code does (2-3 sentences)
2. **Main Purpose**: Explain the main goal in plain English
3. **Key Components**: List the most important parts
4. **Simple Analogy**: Use a relatable analogy
5. **Output**: Describe what the code outputs or achieves
"#;

pub const MEDIUM_REQUIREMENTS: &str = r#"
1. **Overview**: Explain what this code does overall (2-3 sentences)
2. **Step-by-Step Breakdown**: Go through the code section by section
3. **Key Concepts**: Identify important programming concepts used
4. **Logic Flow**: Describe how data flows through the code
5. **Analogies**: Use 1-2 real-world analogies
6. **Potential Issues**: Identify any bugs or edge cases
7. **Improvements**: Suggest 2-3 improvements
8. **Complexity Analysis**: Time and Space complexity (Big O)
"#;

pub const ADVANCED_REQUIREMENTS: &str = r#"
1. **Executive Summary**: High-level technical summary
2. **Line-by-Line Analysis**: Deep dive into every logical unit
3. **Design Patterns**: Identify any patterns or architecture styles
4. **Performance Analysis**: In-depth Big O analysis and potential bottlenecks
5. **Code Quality Assessment**: Evaluate readability, maintainability, and idioms
6. **Security Considerations**: Highlight potential vulnerabilities
7. **Refactoring Suggestions**: Concrete examples of how to rewrite for better quality
8. **Testing Recommendations**: How would you unit test this code?
"#;

pub const EXPLANATION_FORMAT: &str = r#"FORMAT YOUR RESPONSE:
- Use markdown headers (##, ###) for sections
- Use bullet points for lists
- Use code blocks with syntax highlighting for code examples
- Use **bold** for important terms
- Use *italic* for emphasis
- Keep paragraphs concise and readable
"#;

pub const QUESTION_INSTRUCTIONS: &str = r#"INSTRUCTIONS:
- Provide a direct, accurate answer to the question
- Reference specific lines or sections of the code
- Explain the "why" behind the answer
- If the question is irrelevant to the code, politely point that out
- Use markdown formatting for clarity
"#;

pub const GENERIC_DEBUG_SYMPTOM: &str = "SYMPTOM: The code is not working as expected.";

pub const DEBUG_INSTRUCTIONS: &str = r#"INSTRUCTIONS:
1. **Issue Identification**: Clearly list the bugs or errors found
2. **Root Cause**: Explain why these issues are occurring
3. **Fixed Code**: Provide the corrected version of the code
4. **Explanation of Changes**: Explain what was changed and why
5. **Prevention**: How to avoid such mistakes in the future

FORMAT: Use clear markdown sections.
"#;

pub const OPTIMIZATION_INSTRUCTIONS: &str = r#"INSTRUCTIONS:
1. **Bottleneck Analysis**: Identify where the code is slow or inefficient
2. **Optimized Version**: Provide an optimized version of the code
3. **Comparison**: Explain the improvements in terms of Time/Space complexity
4. **Trade-offs**: Mention any trade-offs (e.g., readability vs. speed)

FORMAT: Use clear markdown sections.
"#;
