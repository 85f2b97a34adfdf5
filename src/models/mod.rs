//! Data models for the Campus Market backend
//!
//! The three shared document collections (ads, users, reports) plus the
//! embedded rating entries and the enums describing their lifecycles.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single time-boxed listing posted by a user.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub description: String,
    /// Display string, e.g. "R$ 25,00". Never parsed server-side.
    pub price: String,
    pub location: String,
    pub available_until: DateTime<Utc>,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub status: AdStatus,
    pub ratings: Vec<Rating>,
    /// Derived: one-decimal rounded mean of `ratings`, 0 when empty.
    pub average_rating: f64,
    /// Derived: always equal to `ratings.len()`.
    pub rating_count: u32,
    pub promotion_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_expires_at: Option<DateTime<Utc>>,
    /// Price snapshot captured at first promotion activation, set at most
    /// once per promotion lifetime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
}

impl Ad {
    /// No process transitions ad status on a clock; expiry is a fact readers
    /// derive by comparing `available_until` to now.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.available_until < now
    }

    /// Promotion expiry is likewise a read-time derived fact only.
    pub fn promotion_expired(&self, now: DateTime<Utc>) -> bool {
        match self.promotion_expires_at {
            Some(expires_at) => self.promotion_active && expires_at < now,
            None => false,
        }
    }

    /// The caller's rating on this ad, if any.
    pub fn rating_by(&self, user_id: Uuid) -> Option<&Rating> {
        self.ratings.iter().find(|r| r.user_id == user_id)
    }
}

/// Ad lifecycle status
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdStatus {
    Active,
    Sold,
    Expired,
}

/// A rating left on an ad, at most one per (ad, rater).
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub user_id: Uuid,
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An abuse report against an ad.
///
/// `ad_title`, `reporter_name` and `reporter_email` are snapshots captured at
/// creation time and never kept in sync with later edits. A report may outlive
/// its ad: deleting an ad does not cascade here.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub ad_id: Uuid,
    pub ad_title: String,
    pub reporter_id: Uuid,
    pub reporter_name: String,
    pub reporter_email: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

/// Report lifecycle status
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    InReview,
    Resolved,
}

impl ReportStatus {
    /// A report counts as open while it has not reached `resolved`.
    pub fn is_open(&self) -> bool {
        !matches!(self, ReportStatus::Resolved)
    }

    /// Transition table: forward-only, `resolved` is terminal.
    pub fn can_transition_to(&self, next: ReportStatus) -> bool {
        matches!(
            (self, next),
            (ReportStatus::Pending, ReportStatus::InReview)
                | (ReportStatus::Pending, ReportStatus::Resolved)
                | (ReportStatus::InReview, ReportStatus::Resolved)
        )
    }
}

/// User record. Credentials live with the external auth collaborator; this
/// side only carries the profile, role and favorites membership.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub course: String,
    pub contact: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub favorites: HashSet<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// User roles
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(UserRole::User),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// User account status
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// Simple acknowledgement body for mutations that return no document.
#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_report_status_transitions() {
        assert!(ReportStatus::Pending.can_transition_to(ReportStatus::InReview));
        assert!(ReportStatus::Pending.can_transition_to(ReportStatus::Resolved));
        assert!(ReportStatus::InReview.can_transition_to(ReportStatus::Resolved));

        // Regressions and anything out of resolved are rejected
        assert!(!ReportStatus::InReview.can_transition_to(ReportStatus::Pending));
        assert!(!ReportStatus::Resolved.can_transition_to(ReportStatus::Pending));
        assert!(!ReportStatus::Resolved.can_transition_to(ReportStatus::InReview));
        assert!(!ReportStatus::Pending.can_transition_to(ReportStatus::Pending));
    }

    #[test]
    fn test_report_status_is_open() {
        assert!(ReportStatus::Pending.is_open());
        assert!(ReportStatus::InReview.is_open());
        assert!(!ReportStatus::Resolved.is_open());
    }

    #[test]
    fn test_report_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&ReportStatus::InReview).unwrap(),
            "\"in_review\""
        );
        assert_eq!(
            serde_json::to_string(&ReportStatus::Pending).unwrap(),
            "\"pending\""
        );
    }

    #[test]
    fn test_promotion_expiry_is_read_time_only() {
        let now = Utc::now();
        let ad = Ad {
            id: Uuid::new_v4(),
            title: "Calculus textbook".to_string(),
            category: "Books".to_string(),
            description: "Lightly used".to_string(),
            price: "R$ 40,00".to_string(),
            location: "Building B".to_string(),
            available_until: now + Duration::days(7),
            author_id: Uuid::new_v4(),
            created_at: now,
            status: AdStatus::Active,
            ratings: vec![],
            average_rating: 0.0,
            rating_count: 0,
            promotion_active: true,
            promotion_label: Some("On sale".to_string()),
            promotion_expires_at: Some(now - Duration::hours(1)),
            original_price: Some("R$ 50,00".to_string()),
        };

        // The stored flag stays true; only the derived view reports expiry.
        assert!(ad.promotion_active);
        assert!(ad.promotion_expired(now));
        assert!(!ad.promotion_expired(now - Duration::hours(2)));
    }
}
