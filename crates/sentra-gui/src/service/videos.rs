//! Video services, including binary upload and replacement.

use sentra_api::client::{ApiError, FileBody, SentraClient};
use sentra_api::schema::{
    MessageResponse, UpdateVideoInput, Video, VideoResponse, VideosResponse,
};
use sentra_api::validate;

pub async fn fetch_videos(client: SentraClient) -> Result<Vec<Video>, ApiError> {
    let response: VideosResponse = client
        .get("/api/videos", Some(validate::videos_response))
        .await?;
    Ok(response.videos)
}

pub async fn fetch_video(client: SentraClient, id: String) -> Result<Video, ApiError> {
    let response: VideoResponse = client
        .get(&format!("/api/videos/{id}"), Some(validate::video_response))
        .await?;
    Ok(response.video)
}

/// Uploads a new video: raw bytes in the body, metadata in the query.
/// `company_id` is omitted entirely when the video is for everyone.
pub async fn upload_video(
    client: SentraClient,
    file: FileBody,
    title: String,
    publish_date: String,
    company_id: Option<String>,
) -> Result<Video, ApiError> {
    let mut query = vec![("title", title), ("publishDate", publish_date)];
    if let Some(company_id) = company_id {
        query.push(("companyId", company_id));
    }
    let response: VideoResponse = client
        .upload_file(
            "/api/videos/upload",
            &query,
            file,
            Some(validate::video_response),
        )
        .await?;
    tracing::info!(video_id = %response.video.id, "Video uploaded");
    Ok(response.video)
}

pub async fn update_video(
    client: SentraClient,
    id: String,
    input: UpdateVideoInput,
) -> Result<Video, ApiError> {
    let response: VideoResponse = client
        .put(
            &format!("/api/videos/{id}"),
            &input,
            Some(validate::video_response),
        )
        .await?;
    Ok(response.video)
}

/// Swaps the stored file for a video, keeping its metadata.
pub async fn replace_video_file(
    client: SentraClient,
    id: String,
    file: FileBody,
) -> Result<Video, ApiError> {
    let response: VideoResponse = client
        .replace_file(
            &format!("/api/videos/{id}/replace"),
            &[],
            file,
            Some(validate::video_response),
        )
        .await?;
    tracing::info!(video_id = %id, "Video file replaced");
    Ok(response.video)
}

pub async fn delete_video(client: SentraClient, id: String) -> Result<(), ApiError> {
    let _: MessageResponse = client
        .delete(&format!("/api/videos/{id}"), Some(validate::message_response))
        .await?;
    tracing::info!(video_id = %id, "Video deleted");
    Ok(())
}
