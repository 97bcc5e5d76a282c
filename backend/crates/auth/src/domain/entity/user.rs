//! User Entity
//!
//! A registered account. Created on registration and never updated.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::UserPassword,
};

#[derive(Debug, Clone)]
pub struct User {
    /// Server-generated UUID v4
    pub user_id: UserId,
    /// Unique, email-shaped login handle
    pub user_name: UserName,
    /// bcrypt hash; never serialized
    pub password: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh ID
    pub fn new(user_name: UserName, password: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            password,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    #[test]
    fn test_new_user_gets_fresh_id() {
        let raw = RawPassword::new("pw".to_string()).unwrap();
        let password = UserPassword::from_raw(&raw, 4).unwrap();
        let name = UserName::new("a@example.com").unwrap();

        let a = User::new(name.clone(), password.clone());
        let b = User::new(name, password);
        assert_ne!(a.user_id, b.user_id);
    }
}
