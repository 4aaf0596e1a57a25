//! Quiz question services.

use sentra_api::client::{ApiError, SentraClient};
use sentra_api::schema::{
    CreateQuestionInput, MessageResponse, Question, QuestionResponse, QuestionsResponse,
    ReorderQuestionsInput, UpdateQuestionInput,
};
use sentra_api::validate;

pub async fn fetch_questions(
    client: SentraClient,
    video_id: String,
) -> Result<Vec<Question>, ApiError> {
    let response: QuestionsResponse = client
        .get(
            &format!("/api/videos/{video_id}/questions"),
            Some(validate::questions_response),
        )
        .await?;
    Ok(response.questions)
}

pub async fn create_question(
    client: SentraClient,
    video_id: String,
    input: CreateQuestionInput,
) -> Result<Question, ApiError> {
    let response: QuestionResponse = client
        .post(
            &format!("/api/videos/{video_id}/questions"),
            &input,
            Some(validate::question_response),
        )
        .await?;
    tracing::info!(question_id = %response.question.id, "Question created");
    Ok(response.question)
}

pub async fn update_question(
    client: SentraClient,
    question_id: String,
    input: UpdateQuestionInput,
) -> Result<Question, ApiError> {
    let response: QuestionResponse = client
        .put(
            &format!("/api/questions/{question_id}"),
            &input,
            Some(validate::question_response),
        )
        .await?;
    Ok(response.question)
}

pub async fn delete_question(client: SentraClient, question_id: String) -> Result<(), ApiError> {
    let _: MessageResponse = client
        .delete(
            &format!("/api/questions/{question_id}"),
            Some(validate::message_response),
        )
        .await?;
    tracing::info!(question_id = %question_id, "Question deleted");
    Ok(())
}

/// Rewrites the order of every question under a video in one call.
pub async fn reorder_questions(
    client: SentraClient,
    video_id: String,
    input: ReorderQuestionsInput,
) -> Result<Vec<Question>, ApiError> {
    let response: QuestionsResponse = client
        .put(
            &format!("/api/videos/{video_id}/questions/order"),
            &input,
            Some(validate::questions_response),
        )
        .await?;
    Ok(response.questions)
}
