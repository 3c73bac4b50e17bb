//! Login session types

/// A logged-in user session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// User name
    pub user: String,
    /// Terminal line (e.g., "pts/0", "console")
    pub terminal: Option<String>,
    /// Remote host the session came from, if any
    pub host: Option<String>,
    /// Login time as reported by the system (e.g., "2024-05-01 09:30")
    pub started: Option<String>,
}
