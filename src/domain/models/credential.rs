use std::fmt;

/// App access token obtained through the client-credentials grant.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header for Helix requests.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// never print the token itself
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
