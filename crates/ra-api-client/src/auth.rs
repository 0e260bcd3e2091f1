use std::fmt;

/// Credentials sent with every RetroAchievements web API call.
///
/// The API expects the username and web API key as `z`/`y` query parameters.
/// The key is redacted from `Debug` output so it cannot leak through logging.
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization {
    username: String,
    web_api_key: String,
}

impl Authorization {
    pub fn new(username: impl Into<String>, web_api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            web_api_key: web_api_key.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Query pairs in the form the web API endpoints understand.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("z", self.username.as_str()),
            ("y", self.web_api_key.as_str()),
        ]
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorization")
            .field("username", &self.username)
            .field("web_api_key", &"<redacted>")
            .finish()
    }
}
