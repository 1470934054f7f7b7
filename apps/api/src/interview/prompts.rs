// LLM prompt constants and difficulty lookup tables for question generation.

use crate::interview::models::Difficulty;

/// System prompt for question generation. Enforces JSON-array-only output.
pub const QUESTION_SYSTEM: &str = "You are an experienced technical interviewer \
    writing mock interview questions with model answers. \
    You MUST respond with a valid JSON array only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Question generation prompt template.
/// Replace: {seed}, {position}, {description}, {experience}, {tech_stack},
///          {difficulty}, {difficulty_instruction}, {question_types},
///          {complexity}, {question_starters}, {focus_guidelines}, {focus_instruction}
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"As an experienced prompt engineer, generate a UNIQUE and RANDOM set of 5 technical interview questions along with detailed answers based on the following job information. Each object in the array should have the fields "question" and "answer", formatted as follows:

[
  { "question": "<Question text>", "answer": "<Answer text>" },
  ...
]

RANDOMIZATION REQUIREMENT: Generate completely different questions each time. Use this random seed for variety: {seed}

Job Information:
- Job Position: {position}
- Job Description: {description}
- Years of Experience Required: {experience}
- Tech Stacks: {tech_stack}
- Difficulty Level: {difficulty}

DIFFICULTY REQUIREMENTS ({difficulty}):
{difficulty_instruction}

QUESTION SPECIFICATIONS FOR {difficulty} LEVEL:
- Question Types: {question_types}
- Complexity Level: {complexity}
- Question Starters: {question_starters}
{focus_guidelines}
IMPORTANT INSTRUCTIONS:
1. Generate RANDOM and DIVERSE questions - avoid repetitive patterns
2. Ensure questions are SPECIFICALLY {difficulty} level - not easier or harder
3. Questions must be directly related to {tech_stack} and {position}
4. Each question should test different aspects/skills
5. Provide comprehensive, accurate answers that match the difficulty level
6. Vary question formats (theoretical, practical, scenario-based, problem-solving)
{focus_instruction}
Format the output strictly as a JSON array of exactly 5 objects with "question" and "answer" fields, without any additional labels, code blocks, or explanations. Return only the JSON array."#;

/// Algorithm / data-structure guideline block. Replace: {difficulty}, {topics}
pub const ALGORITHM_FOCUS_TEMPLATE: &str = r#"
ALGORITHM AND DATA STRUCTURE REQUIREMENTS:
- Include coding problems and algorithm questions
- Ask about time and space complexity analysis
- Cover data structures appropriate for {difficulty} level
- Include problem-solving and optimization questions
- For {difficulty} level: {topics}
"#;

/// Extra numbered instruction appended when the request is algorithm focused.
pub const ALGORITHM_FOCUS_INSTRUCTION: &str =
    "7. Include algorithm implementation details and complexity analysis in answers\n";

/// Lower-case tokens that mark a request as algorithm / data-structure focused.
pub const ALGORITHM_FOCUS_TOKENS: &[&str] = &["dsa", "algorithm", "data structure"];

/// Question types, complexity descriptors, and question starters for one level.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyExemplars {
    pub question_types: &'static str,
    pub complexity: &'static str,
    pub question_starters: &'static str,
}

/// Returns the instruction block for a difficulty level.
pub fn difficulty_instruction(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => {
            "Generate basic, entry-level questions suitable for beginners or junior developers. \
            Focus on fundamental concepts, basic syntax, and simple problem-solving scenarios. \
            Questions should be straightforward and test foundational knowledge."
        }
        Difficulty::Moderate => {
            "Generate intermediate-level questions for experienced professionals. \
            Include questions about best practices, design patterns, optimization, and real-world problem-solving. \
            Questions should require practical experience and deeper understanding."
        }
        Difficulty::Difficult => {
            "Generate advanced, challenging questions for senior-level positions. \
            Include complex system design, architecture decisions, performance optimization, scalability concerns, and advanced technical concepts. \
            Questions should test expert-level knowledge and strategic thinking."
        }
    }
}

/// Returns the exemplar descriptors for a difficulty level.
pub fn difficulty_exemplars(difficulty: Difficulty) -> DifficultyExemplars {
    match difficulty {
        Difficulty::Easy => DifficultyExemplars {
            question_types: "basic syntax, simple concepts, fundamental operations, basic debugging, entry-level best practices",
            complexity: "straightforward, one-concept-per-question, practical examples",
            question_starters: "What is, How do you, Explain the basic, Define, Give an example of",
        },
        Difficulty::Moderate => DifficultyExemplars {
            question_types: "design patterns, performance optimization, debugging complex issues, API integration, state management, testing strategies",
            complexity: "multi-concept questions, scenario-based problems, real-world applications",
            question_starters: "How would you implement, What are the pros and cons, Compare and contrast, How would you optimize, Describe a scenario where",
        },
        Difficulty::Difficult => DifficultyExemplars {
            question_types: "system architecture, scalability solutions, advanced algorithms, security considerations, performance bottlenecks, microservices design",
            complexity: "multi-layered problems, architectural decisions, trade-off analysis, complex scenarios",
            question_starters: "Design a system that, How would you scale, What are the architectural considerations, Analyze the performance implications, How would you handle",
        },
    }
}

/// Topic suggestions for algorithm-focused interviews at each level.
pub fn algorithm_topics(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Basic arrays, strings, simple sorting, basic recursion",
        Difficulty::Moderate => {
            "Trees, graphs, dynamic programming, hash tables, advanced sorting"
        }
        Difficulty::Difficult => {
            "Advanced trees, graph algorithms, complex DP, system design with algorithms"
        }
    }
}
