//! Logged-in session context.

/// Menu privileges of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Admin,
    #[default]
    Standard,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

/// The user who logged in, passed to every menu operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

impl Session {
    /// Build a session; the admin role is reserved for `admin_username`
    pub fn new(username: impl Into<String>, admin_username: &str) -> Self {
        let username = username.into();
        let role = if username == admin_username {
            Role::Admin
        } else {
            Role::Standard
        };
        Self { username, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
