//! Prompt assembly for the analysis, fix, and summary requests.
//!
//! The analysis and fix prompts carry a pair of few-shot exchanges so the
//! model answers in a fixed shape (problem section plus a one-line
//! suggestion, or the complete corrected file and nothing else).

use crate::config::LlmConfig;
use crate::lookup::filter::normalize;
use crate::lookup::store::DeprecationRecord;
use crate::ports::llm::{ChatMessage, ChatRequest};

const ANALYSIS_SYSTEM_PROMPT: &str = "You are an assistant to an iOS developer to help them \
identify and fix deprecated modifiers in their swift files. When given a swift file, the first \
thing to do is identify lines that include deprecated elements. Then figure out how to fix it, \
using the context given at the end of this prompt. Then, you should return the part of the code \
that is problematic. Include the view that the deprecated modifier is modifying, as well as any \
other modifiers that are on that view. Then, after you have returned the problematic section, in \
one line, briefly state what modifier to use instead. Do not include ANYTHING else. You sometimes \
include '''swift - do not include this.";

const FIX_SYSTEM_PROMPT: &str = "You are an assistant that fixes deprecated Swift code. Given a \
Swift file that has deprecated elements, as well as how to fix it, provide the complete fixed \
file with all deprecated elements replaced with their current equivalents. Return ONLY the \
complete fixed code with no explanations. Do not include ANYTHING else. You sometimes include \
'''swift at the top of the file and ''' at the bottom. DO NOT INCLUDE THIS. Your output will be \
the exact new file, nothing else.";

/// Notice substituted when the relevance filter matched nothing.
pub const NO_DEPRECATIONS_NOTICE: &str =
    "No specific deprecations detected in this file; flag anything you recognize as deprecated.";

const EXAMPLE_INPUT_COLOR: &str = "import SwiftUI\n\nstruct ContentView: View {\n\n    var body: \
some View {\n        VStack {\n            Rectangle()\n                \
.foregroundColor(Color.blue)\n                .frame(width: 100, height: 100)\n        }\n    \
}\n}";

const EXAMPLE_ANSWER_COLOR: &str = "\nRectangle()\n    .foregroundColor(Color.blue) // Deprecated \
line\n    .frame(width: 100, height: 100\n\nUse `foregroundStyle(_:)` instead of \
`foregroundColor(_)`.";

const EXAMPLE_INPUT_SAFE_AREA: &str = "import SwiftUI\n\nstruct ContentView: View {\n\n    var \
body: some View {\n        VStack {\n            Rectangle()\n                .frame(width: 100, \
height: 100)\n                .edgesIgnoringSafeArea(.all)\n        }\n    }\n}";

const EXAMPLE_ANSWER_SAFE_AREA: &str = "Rectangle()\n    .frame(width: 100, height: 100)\n    \
.edgesIgnoringSafeArea(.all) // Deprecated line\n\nUse `ignoresSafeArea(_:edges:)` instead of \
`edgesIgnoringSafeArea(_)`.";

const EXAMPLE_FIXED_COLOR: &str = "import SwiftUI\n\nstruct ContentView: View {\n\n    var body: \
some View {\n        VStack {\n            Rectangle()\n                \
.foregroundStyle(Color.blue)\n                .frame(width: 100, height: 100)\n        }\n    \
}\n}";

/// Renders the relevance-filtered records as context lines for the
/// analysis prompt, or the generic notice when the set is empty.
#[must_use]
pub fn context_block(relevant: &[&DeprecationRecord]) -> String {
    if relevant.is_empty() {
        return NO_DEPRECATIONS_NOTICE.to_string();
    }
    relevant
        .iter()
        .map(|record| {
            format!(
                "{} is deprecated, use {} instead",
                normalize(&record.deprecated),
                record.replacement
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the analysis request: system prompt with the context block,
/// two few-shot exchanges, then the file contents.
#[must_use]
pub fn analysis_request(
    config: &LlmConfig,
    file_contents: &str,
    relevant: &[&DeprecationRecord],
) -> ChatRequest {
    let system = format!("{ANALYSIS_SYSTEM_PROMPT}\n\nHere is some context:\n{}", context_block(relevant));

    ChatRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage::system(system),
            ChatMessage::user(EXAMPLE_INPUT_COLOR),
            ChatMessage::assistant(EXAMPLE_ANSWER_COLOR),
            ChatMessage::user(EXAMPLE_INPUT_SAFE_AREA),
            ChatMessage::assistant(EXAMPLE_ANSWER_SAFE_AREA),
            ChatMessage::user(file_contents),
        ],
        temperature: 1.0,
        max_tokens: 2048,
    }
}

/// Builds the fix request: the original file plus the prior analysis
/// answer, asking for the complete corrected file.
#[must_use]
pub fn fix_request(config: &LlmConfig, file_contents: &str, analysis: &str) -> ChatRequest {
    ChatRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage::system(FIX_SYSTEM_PROMPT),
            ChatMessage::user(EXAMPLE_INPUT_COLOR),
            ChatMessage::assistant(EXAMPLE_ANSWER_COLOR),
            ChatMessage::assistant(EXAMPLE_FIXED_COLOR),
            ChatMessage::user(file_contents),
            ChatMessage::assistant(analysis),
        ],
        temperature: 0.2,
        max_tokens: 4096,
    }
}

/// Builds the summary request.
#[must_use]
pub fn summary_request(config: &LlmConfig, file_contents: &str) -> ChatRequest {
    ChatRequest {
        model: config.model.clone(),
        messages: vec![ChatMessage::user(format!(
            "Summarize the following text:\n\n{file_contents}"
        ))],
        temperature: 1.0,
        max_tokens: 100,
    }
}
