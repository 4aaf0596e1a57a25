//! Quiz question and answer wire types.

use serde::{Deserialize, Serialize};

/// Minimum number of answers a question must hold.
pub const MIN_ANSWERS: usize = 2;

/// Maximum length of question text.
pub const MAX_QUESTION_LEN: usize = 1000;

/// Maximum length of a single answer.
pub const MAX_ANSWER_LEN: usize = 500;

/// A persisted answer belonging to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
    pub order: i64,
    pub question_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A persisted quiz question with its answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,

    pub text: String,

    /// Display sequence within the video, intended distinct but not
    /// required unique.
    pub order: i64,

    pub video_id: String,

    pub created_at: String,

    pub updated_at: String,

    /// Answers in display order.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Question {
    /// Whether at least one answer is marked correct.
    #[must_use]
    pub fn has_correct_answer(&self) -> bool {
        self.answers.iter().any(|answer| answer.is_correct)
    }
}

/// An answer as submitted inside a question payload.
///
/// `id` is absent for answers that do not exist on the server yet; the
/// server replaces the full answer set on update either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub text: String,

    pub is_correct: bool,

    /// 0-based position of the answer in the draft at submit time.
    pub order: i64,
}

/// Payload for POST /api/videos/{id}/questions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionInput {
    pub text: String,

    /// Left out so the server appends at the end of the sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    pub answers: Vec<AnswerInput>,
}

/// Payload for PUT /api/questions/{id}. Carries the full replacement
/// answer set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<AnswerInput>>,
}

/// One entry of the bulk reorder payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOrder {
    pub id: String,
    pub order: i64,
}

/// Payload for PUT /api/videos/{id}/questions/order.
#[derive(Debug, Clone, Serialize)]
pub struct ReorderQuestionsInput {
    pub questions: Vec<QuestionOrder>,
}

/// Response wrapper for a video's question collection.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

/// Response wrapper for a single question.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionResponse {
    pub question: Question,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_parses_with_answers() {
        let json = r#"{
            "id": "q1",
            "text": "What is covered first?",
            "order": 0,
            "videoId": "v1",
            "createdAt": "2026-01-01T00:00:00.000Z",
            "updatedAt": "2026-01-01T00:00:00.000Z",
            "answers": [
                {"id": "a1", "text": "Safety", "isCorrect": true, "order": 0,
                 "questionId": "q1", "createdAt": "2026-01-01T00:00:00.000Z",
                 "updatedAt": "2026-01-01T00:00:00.000Z"},
                {"id": "a2", "text": "Billing", "isCorrect": false, "order": 1,
                 "questionId": "q1", "createdAt": "2026-01-01T00:00:00.000Z",
                 "updatedAt": "2026-01-01T00:00:00.000Z"}
            ]
        }"#;
        let question: Question = serde_json::from_str(json).expect("parse question");
        assert_eq!(question.answers.len(), 2);
        assert!(question.has_correct_answer());
    }

    #[test]
    fn answer_input_omits_missing_id() {
        let input = AnswerInput {
            id: None,
            text: "Safety".to_string(),
            is_correct: true,
            order: 0,
        };
        let json = serde_json::to_value(&input).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"text": "Safety", "isCorrect": true, "order": 0})
        );
    }

    #[test]
    fn create_input_omits_order() {
        let input = CreateQuestionInput {
            text: "New question".to_string(),
            order: None,
            answers: vec![],
        };
        let json = serde_json::to_value(&input).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"text": "New question", "answers": []})
        );
    }
}
