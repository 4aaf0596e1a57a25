//! User services.

use sentra_api::client::{ApiError, SentraClient};
use sentra_api::schema::{
    CreateUserInput, MessageResponse, Role, UpdateUserRoleInput, User, UserResponse, UsersResponse,
};
use sentra_api::validate;
use sentra_store::UserFilters;

pub async fn fetch_users(
    client: SentraClient,
    filters: UserFilters,
) -> Result<Vec<User>, ApiError> {
    let response: UsersResponse = client
        .get_query(
            "/api/users",
            &filters.query_pairs(),
            Some(validate::users_response),
        )
        .await?;
    Ok(response.users)
}

pub async fn fetch_user(client: SentraClient, id: String) -> Result<User, ApiError> {
    let response: UserResponse = client
        .get(&format!("/api/users/{id}"), Some(validate::user_response))
        .await?;
    Ok(response.user)
}

pub async fn create_user(client: SentraClient, input: CreateUserInput) -> Result<User, ApiError> {
    let response: UserResponse = client
        .post("/api/users", &input, Some(validate::user_response))
        .await?;
    tracing::info!(user_id = %response.user.id, "User created");
    Ok(response.user)
}

pub async fn update_user_role(
    client: SentraClient,
    id: String,
    role: Role,
) -> Result<User, ApiError> {
    let response: UserResponse = client
        .patch(
            &format!("/api/users/{id}/role"),
            &UpdateUserRoleInput { role },
            Some(validate::user_response),
        )
        .await?;
    tracing::info!(user_id = %id, role = %role, "Role updated");
    Ok(response.user)
}

pub async fn delete_user(client: SentraClient, id: String) -> Result<(), ApiError> {
    let _: MessageResponse = client
        .delete(&format!("/api/users/{id}"), Some(validate::message_response))
        .await?;
    tracing::info!(user_id = %id, "User deleted");
    Ok(())
}
