use std::fmt;

/// Credentials presented to the share. The password is never printed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
    pub domain: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("domain", &self.domain)
            .finish()
    }
}

/// The host whose shares are being probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareTarget {
    pub host: String,
    pub credentials: Credentials,
}

impl ShareTarget {
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            credentials: Credentials::default(),
        }
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// `DOMAIN\user`, `user`, or `guest` when no username is set.
    #[must_use]
    pub fn principal(&self) -> String {
        match (&self.credentials.domain, &self.credentials.username) {
            (Some(domain), Some(user)) => format!("{domain}\\{user}"),
            (None, Some(user)) => user.clone(),
            (_, None) => "guest".to_string(),
        }
    }
}
