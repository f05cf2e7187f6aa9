//! # User Endpoints
//!
//! Sign-in is the one endpoint that writes the session directly.

use shared::{AuthUser, LoginArgs, ResponseEnvelope};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// Sign in with login name and password and store the returned session.
#[tracing::instrument(skip(client, password), fields(name = %name))]
pub async fn sign_in(client: &ApiClient, name: String, password: String) -> Result<AuthUser, ApiError> {
    tracing::info!("Attempting sign-in");

    let args = LoginArgs { name, password };
    let envelope: ResponseEnvelope<AuthUser> = client.post("/user/sign-in", &args).await?;
    let user = envelope
        .data
        .ok_or_else(|| ApiError::Decode("sign-in response carried no user".to_string()))?;

    client.session().login(&user.name, &user.token);
    Ok(user)
}

/// Drop the local session. The server keeps no session state to revoke.
pub fn sign_out(client: &ApiClient) {
    client.session().logout();
}
