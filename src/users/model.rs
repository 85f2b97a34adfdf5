//! User management DTOs

use serde::Deserialize;

use crate::models::{UserRole, UserStatus};

/// Request DTO for a partial admin update of a user
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub course: Option<String>,
    pub contact: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.course.is_none()
            && self.contact.is_none()
            && self.role.is_none()
            && self.status.is_none()
    }
}
