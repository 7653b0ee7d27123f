//! HTTP user repository over the users REST resource.

use crate::dto::ExternalUser;
use crate::mapper::{to_domain, to_external_payload, user_to_external_payload};
use crate::traits::UserRepository;
use async_trait::async_trait;
use reqwest::{Client, Response};
use roster_core::{RosterError, RosterResult, User, UserDraft, UserId};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

const LIST_FAILED: &str = "Failed to fetch users";
const GET_FAILED: &str = "Failed to fetch user";
const CREATE_FAILED: &str = "Failed to add user";
const UPDATE_FAILED: &str = "Failed to update user";
const DELETE_FAILED: &str = "Failed to delete user";

/// User repository backed by a JSON REST resource.
///
/// `base_url` is the collection endpoint, e.g.
/// `https://jsonplaceholder.typicode.com/users`. Items live at
/// `{base_url}/{id}`. No timeout is configured on the client; a request
/// that never completes never fails.
#[derive(Debug, Clone)]
pub struct HttpUserRepository {
    client: Client,
    base_url: String,
}

impl HttpUserRepository {
    /// Creates a new HTTP user repository.
    pub fn new(base_url: &str) -> RosterResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| RosterError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Creates a new HTTP user repository with a preconfigured client.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the collection endpoint.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &UserId) -> String {
        format!("{}/{}", self.base_url, id.as_path_segment())
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn list(&self) -> RosterResult<Vec<User>> {
        debug!("HTTP ListUsers: {}", self.base_url);

        let response = send(self.client.get(&self.base_url), LIST_FAILED).await?;
        let users: Vec<ExternalUser> = decode(response, LIST_FAILED).await?;

        info!(count = users.len(), "Users listed");
        Ok(users.into_iter().map(to_domain).collect())
    }

    async fn get(&self, id: &UserId) -> RosterResult<User> {
        debug!("HTTP GetUser: {}", id);

        let response = send(self.client.get(self.item_url(id)), GET_FAILED).await?;
        let user: ExternalUser = decode(response, GET_FAILED).await?;

        Ok(to_domain(user))
    }

    async fn create(&self, draft: &UserDraft) -> RosterResult<User> {
        debug!("HTTP CreateUser: {} {}", draft.first_name, draft.last_name);

        let request = self.client.post(&self.base_url).json(&to_external_payload(draft));
        let response = send(request, CREATE_FAILED).await?;
        let created: ExternalUser = decode(response, CREATE_FAILED).await?;

        // Only the id is taken from the response; the caller's fields win.
        // A missing or falsy id (`0`, `""`) is replaced locally.
        let id = match created.id.filter(|id| !id.is_blank()) {
            Some(id) => id,
            None => {
                let id = UserId::fallback();
                warn!(%id, "Create response carried no id, using local fallback");
                id
            }
        };

        info!("User created: {}", id);
        Ok(User::from_draft(id, draft.clone()))
    }

    async fn update(&self, user: &User) -> RosterResult<User> {
        debug!("HTTP UpdateUser: {}", user.id);

        let request = self
            .client
            .put(self.item_url(&user.id))
            .json(&user_to_external_payload(user));
        send(request, UPDATE_FAILED).await?;

        info!("User updated: {}", user.id);
        Ok(user.clone())
    }

    async fn remove(&self, id: &UserId) -> RosterResult<()> {
        debug!("HTTP DeleteUser: {}", id);

        send(self.client.delete(self.item_url(id)), DELETE_FAILED).await?;

        info!("User deleted: {}", id);
        Ok(())
    }
}

/// Sends a request; transport failures and non-2xx statuses become
/// `RosterError::Fetch(message)`.
async fn send(request: reqwest::RequestBuilder, message: &'static str) -> RosterResult<Response> {
    let response = request.send().await.map_err(|e| {
        warn!(error = %e, "{}", message);
        RosterError::fetch(message)
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), "{}", message);
        return Err(RosterError::fetch(message));
    }

    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response, message: &'static str) -> RosterResult<T> {
    response.json().await.map_err(|e| {
        warn!(error = %e, "{}: undecodable response body", message);
        RosterError::fetch(message)
    })
}
