//! Session and registration services.

use sentra_api::client::{ApiError, SentraClient};
use sentra_api::schema::{
    AuthMeResponse, CheckDomainInput, CheckDomainResponse, RegisterInput, RegisterResponse, User,
};
use sentra_api::validate;

/// Looks up the account behind the current token.
pub async fn load_session(client: SentraClient) -> Result<User, ApiError> {
    let response: AuthMeResponse = client
        .get("/api/auth/me", Some(validate::auth_me_response))
        .await?;
    tracing::info!(email = %response.user.email, "Session verified");
    Ok(response.user)
}

/// Creates the account for a first-time sign-in.
///
/// The server matches the email's domain against the authorized list and
/// rejects with `DOMAIN_NOT_AUTHORIZED` when it is not covered.
pub async fn register(client: SentraClient, email: String) -> Result<RegisterResponse, ApiError> {
    tracing::info!(email = %email, "Registering account");
    let input = RegisterInput {
        email,
        first_name: None,
        last_name: None,
    };
    client
        .post("/api/auth/register", &input, Some(validate::register_response))
        .await
}

/// Asks whether an email's domain is authorized to sign up.
pub async fn check_domain(
    client: SentraClient,
    email: String,
) -> Result<CheckDomainResponse, ApiError> {
    client
        .post(
            "/api/auth/check-domain",
            &CheckDomainInput { email },
            Some(validate::check_domain_response),
        )
        .await
}
