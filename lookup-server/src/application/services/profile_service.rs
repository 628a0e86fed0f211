use std::time::Duration;

use serde_json::Value;

use crate::domain::{errors::AppError, models::ProfileRecord, ports::profile::ProfileRepository};
use crate::retry::{with_retry, RetryPolicy};
use crate::utils::{fetch_image_base64, IMAGE_FETCH_TIMEOUT};

#[derive(Clone)]
pub struct ProfileService<R: ProfileRepository> {
    repo: R,
    retry: RetryPolicy,
    image_timeout: Duration,
}

impl<R: ProfileRepository> ProfileService<R> {
    pub fn new(repo: R, retry: RetryPolicy) -> Self {
        Self {
            repo,
            retry,
            image_timeout: IMAGE_FETCH_TIMEOUT,
        }
    }

    pub fn with_image_timeout(mut self, image_timeout: Duration) -> Self {
        self.image_timeout = image_timeout;
        self
    }

    /// Public Instagram profile for `username` with the HD picture inlined.
    ///
    /// Fetch, extraction and picture download are retried together.
    pub async fn public_info(&self, username: &str) -> Result<ProfileRecord, AppError> {
        with_retry(&self.retry, "instagram_profile", || self.fetch_once(username)).await
    }

    async fn fetch_once(&self, username: &str) -> Result<ProfileRecord, AppError> {
        let data = self
            .repo
            .web_profile(username)
            .await
            .map_err(|e| e.for_username(username))?;

        let user = data
            .pointer("/response/body/data/user")
            .unwrap_or(&Value::Null);

        let profile_picture = match profile_picture_url(user) {
            Some(url) => Some(
                fetch_image_base64(url, self.image_timeout)
                    .await
                    .map_err(|e| e.for_username(username))?,
            ),
            None => None,
        };

        Ok(ProfileRecord {
            profile_picture,
            ..extract_profile(user)
        })
    }
}

fn profile_picture_url(user: &Value) -> Option<&str> {
    user.get("profile_pic_url_hd")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
}

/// Everything but the picture, from the `user` object of a web-profile payload.
pub fn extract_profile(user: &Value) -> ProfileRecord {
    let count = |pointer: &str| user.pointer(pointer).and_then(Value::as_u64).unwrap_or(0);

    ProfileRecord {
        full_name: user
            .get("full_name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .map(str::to_owned),
        profile_picture: None,
        biography: user
            .get("biography")
            .and_then(Value::as_str)
            .map(str::to_owned),
        following_count: count("/edge_follow/count"),
        followers_count: count("/edge_followed_by/count"),
        posts_count: count("/edge_owner_to_timeline_media/count"),
    }
}
