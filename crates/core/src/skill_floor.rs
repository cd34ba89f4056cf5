//! Skill floor check for users with under a year of experience.
//!
//! Three short Go code-reading questions. A user passes with at least
//! [`PASS_THRESHOLD`] correct answers. Grading is pure; persisting the
//! pass/fail outcome is done separately by the skill assessment endpoint.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CoreError;

/// Minimum number of correct answers to pass.
pub const PASS_THRESHOLD: usize = 2;

/// A multiple-choice question together with its answer key.
#[derive(Debug)]
pub struct Question {
    pub id: u32,
    pub code: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct_index: usize,
}

/// A question as shown to the user (no answer key).
#[derive(Debug, Clone, Serialize)]
pub struct PublicQuestion {
    pub id: u32,
    pub code: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

pub static QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        code: r#"func count(items []string, target string) int {
    total := 0
    for _, item := range items {
        if item == target {
            total++
        }
    }
    return total
}"#,
        prompt: r#"What does count([]string{"a", "b", "a", "c", "a"}, "a") return?"#,
        options: &["1", "2", "3", "5"],
        correct_index: 2,
    },
    Question {
        id: 2,
        code: r#"func transform(values []int) []int {
    result := []int{}
    for _, v := range values {
        if v%2 == 0 {
            result = append(result, v*v)
        }
    }
    return result
}"#,
        prompt: "What does transform([]int{1, 2, 3, 4, 5}) return?",
        options: &["[1, 4, 9, 16, 25]", "[2, 4]", "[4, 16]", "[1, 9, 25]"],
        correct_index: 2,
    },
    Question {
        id: 3,
        code: r#"func summarize(records map[string]int) int {
    sum := 0
    for _, v := range records {
        if v > 10 {
            sum += v
        }
    }
    return sum
}"#,
        prompt: r#"What does summarize(map[string]int{"a": 5, "b": 15, "c": 3, "d": 20}) return?"#,
        options: &["43", "35", "15", "20"],
        correct_index: 1,
    },
];

impl Question {
    pub fn public(&self) -> PublicQuestion {
        PublicQuestion {
            id: self.id,
            code: self.code,
            prompt: self.prompt,
            options: self.options,
        }
    }
}

/// All questions with answer keys stripped.
pub fn public_questions() -> Vec<PublicQuestion> {
    QUESTIONS.iter().map(Question::public).collect()
}

/// Outcome of grading a set of answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeResult {
    pub correct: usize,
    pub total: usize,
    pub passed: bool,
}

/// Grade answers keyed by question id (`option index` as value).
///
/// Unanswered questions count as wrong. Answers for unknown question ids or
/// option indices outside the question's range are rejected.
pub fn grade(answers: &HashMap<u32, usize>) -> Result<GradeResult, CoreError> {
    for (&id, &choice) in answers {
        let question = QUESTIONS
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| CoreError::Validation(format!("Unknown question id {id}")))?;
        if choice >= question.options.len() {
            return Err(CoreError::Validation(format!(
                "Option {choice} is out of range for question {id} (0..{})",
                question.options.len()
            )));
        }
    }

    let correct = QUESTIONS
        .iter()
        .filter(|q| answers.get(&q.id) == Some(&q.correct_index))
        .count();

    Ok(GradeResult {
        correct,
        total: QUESTIONS.len(),
        passed: correct >= PASS_THRESHOLD,
    })
}
