use futures::future::{FutureExt, LocalBoxFuture};

use crate::domain::errors::AppError;
use crate::domain::logging::LogComponent;
use crate::domain::users::{Email, UserId, UserRepository, parse_user_email};
use crate::infrastructure::http::{HttpUtils, get_text};
use crate::log_info;

/// Client for a reqres-style user directory (`/api/users/{id}`).
#[derive(Debug, Clone)]
pub struct ReqresClient {
    base_url: String,
}

impl ReqresClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn user_url(&self, id: UserId) -> String {
        HttpUtils::join(&self.base_url, &format!("api/users/{id}"))
    }
}

impl UserRepository for ReqresClient {
    fn fetch_email(&self, id: UserId) -> LocalBoxFuture<'static, Result<Email, AppError>> {
        let url = self.user_url(id);
        async move {
            log_info!(LogComponent::Infrastructure("UsersAPI"), "📡 Fetching user from: {url}");
            let body = get_text(&url).await?;
            parse_user_email(&body)
        }
        .boxed_local()
    }
}
