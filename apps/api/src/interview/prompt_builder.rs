//! Prompt Builder — maps a validated interview request plus a seed into the
//! generation prompt. Pure: the same request and seed always yield the same text.

use crate::interview::models::InterviewRequest;
use crate::interview::prompts::{
    algorithm_topics, difficulty_exemplars, difficulty_instruction, ALGORITHM_FOCUS_INSTRUCTION,
    ALGORITHM_FOCUS_TEMPLATE, ALGORITHM_FOCUS_TOKENS, QUESTION_PROMPT_TEMPLATE,
};

/// True when position, tech stack, or description mention algorithms or
/// data structures (case-insensitive).
pub fn is_algorithm_focused(request: &InterviewRequest) -> bool {
    [
        request.position(),
        request.tech_stack(),
        request.description(),
    ]
    .iter()
    .map(|field| field.to_lowercase())
    .any(|field| {
        ALGORITHM_FOCUS_TOKENS
            .iter()
            .any(|token| field.contains(token))
    })
}

/// Builds the question generation prompt.
///
/// `seed` only feeds the randomization marker; it never changes the
/// parameter content of the prompt.
pub fn build_prompt(request: &InterviewRequest, seed: u64) -> String {
    let difficulty = request.difficulty();
    let exemplars = difficulty_exemplars(difficulty);
    let focused = is_algorithm_focused(request);

    let focus_guidelines = if focused {
        fill_template(
            ALGORITHM_FOCUS_TEMPLATE,
            &[
                ("difficulty", difficulty.as_str()),
                ("topics", algorithm_topics(difficulty)),
            ],
        )
    } else {
        String::new()
    };
    let focus_instruction = if focused {
        ALGORITHM_FOCUS_INSTRUCTION
    } else {
        ""
    };

    let seed = seed.to_string();
    let experience = request.experience_years().to_string();

    fill_template(
        QUESTION_PROMPT_TEMPLATE,
        &[
            ("seed", &seed),
            ("position", request.position()),
            ("description", request.description()),
            ("experience", &experience),
            ("tech_stack", request.tech_stack()),
            ("difficulty", difficulty.as_str()),
            ("difficulty_instruction", difficulty_instruction(difficulty)),
            ("question_types", exemplars.question_types),
            ("complexity", exemplars.complexity),
            ("question_starters", exemplars.question_starters),
            ("focus_guidelines", &focus_guidelines),
            ("focus_instruction", focus_instruction),
        ],
    )
}

/// Substitutes `{key}` placeholders in a single pass.
///
/// Values are inserted verbatim and never rescanned, so user text that
/// happens to contain `{position}` or similar stays untouched. Braces that
/// do not name a known key (e.g. the JSON example) are copied as-is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let substitution = after_open.find('}').and_then(|close| {
            let key = &after_open[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match substitution {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after_open[close + 1..];
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}
