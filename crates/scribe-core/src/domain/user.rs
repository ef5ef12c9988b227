use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ADMIN_USER_ID;

/// User entity - a registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub joined_on: NaiveDate,
}

impl User {
    /// Whether this user holds the administrator id.
    pub fn is_admin(&self) -> bool {
        self.id == ADMIN_USER_ID
    }
}

/// A user that has not been persisted yet; the database assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub joined_on: NaiveDate,
}

impl NewUser {
    pub fn new(email: String, password_hash: String, name: String, joined_on: NaiveDate) -> Self {
        Self {
            email,
            password_hash,
            name,
            joined_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_user_is_admin() {
        let user = User {
            id: 1,
            email: "admin@example.com".to_owned(),
            password_hash: "hash".to_owned(),
            name: "Admin".to_owned(),
            joined_on: NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
        };
        assert!(user.is_admin());

        let other = User { id: 2, ..user };
        assert!(!other.is_admin());
    }
}
