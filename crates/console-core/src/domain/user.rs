//! User domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use console_shared::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SysUser {
    pub id: UserId,
    pub username: String,
    /// Argon2 PHC string.
    #[serde(skip_serializing)]
    pub password: String,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub phonenumber: Option<String>,
    pub login_date: Option<NaiveDate>,
    /// 0 active, 1 disabled.
    pub status: Option<i32>,
    pub create_time: Option<NaiveDate>,
    pub update_time: Option<NaiveDate>,
    pub remark: Option<String>,
}

impl SysUser {
    pub fn new(id: UserId, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
            avatar: None,
            email: None,
            phonenumber: None,
            login_date: None,
            status: Some(0),
            create_time: None,
            update_time: None,
            remark: None,
        }
    }
}
