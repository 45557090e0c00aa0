//! Shared domain models for CampusLink.
//!
//! Every record here is exchanged verbatim with the backend as flat JSON;
//! the client holds no authoritative state. Field names match the wire
//! format exactly (snake_case).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod forms;
pub mod grade;
pub mod view;

pub use grade::Letter;

// =========================================================
// Constants
// =========================================================

/// Path prefix shared by every backend endpoint.
pub const API_PREFIX: &str = "/api";

// =========================================================
// Roles & Identity
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// The audience tag used by notices to target this role.
    pub fn audience_tag(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.audience_tag())
    }
}

/// Full user record as stored by the backend.
///
/// Role is immutable after creation in this UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    pub email: String,
    pub profile_pic: Option<String>,
}

/// Password-free projection of a [`User`], persisted as the session
/// identity. Must round-trip through serialization (plain record, no
/// functions or cycles).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub name: String,
    pub email: String,
    pub profile_pic: Option<String>,
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Identity {
            id: user.id,
            username: user.username,
            role: user.role,
            name: user.name,
            email: user.email,
            profile_pic: user.profile_pic,
        }
    }
}

// =========================================================
// Academic records
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub department: String,
    pub year: u32,
    pub semester: u32,
    pub email: String,
    pub phone: String,
    pub profile_pic: Option<String>,
}

/// Internal-assessment grade. Part A is out of 10, part B out of 40;
/// `total_marks` must equal their sum and `grade` is a pure function of
/// the total (see [`grade::letter_for`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub subject: String,
    pub subject_code: String,
    pub part_a_marks: u32,
    pub part_b_marks: u32,
    pub total_marks: u32,
    pub grade: Letter,
    pub semester: u32,
    pub year: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub subject: String,
    pub subject_code: String,
    pub total_classes: u32,
    pub attended_classes: u32,
    /// Precomputed by the backend; a waiver sets it to 100.0.
    pub percentage: f64,
    pub semester: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub teacher_id: String,
    pub teacher_name: String,
    pub subject: String,
    pub subject_code: String,
    pub day: String,
    pub time_slot: String,
    pub room: String,
    pub department: String,
    pub year: u32,
    pub semester: u32,
}

// =========================================================
// Campus resources
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyMaterial {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub subject_code: String,
    pub description: String,
    pub file_url: String,
    pub uploaded_by: String,
    pub uploaded_date: NaiveDate,
    pub semester: u32,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryBook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub available: bool,
    pub total_copies: u32,
    pub available_copies: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Academic,
    Cultural,
    Sports,
    Holiday,
}

impl EventType {
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Academic => "Academic",
            EventType::Cultural => "Cultural",
            EventType::Sports => "Sports",
            EventType::Holiday => "Holiday",
        }
    }
}

/// Registration is idempotent per user: a user id appears at most once in
/// `registered_users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub event_type: EventType,
    pub registration_required: bool,
    #[serde(default)]
    pub registered_users: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub content: String,
    pub posted_by: String,
    pub posted_date: NaiveDate,
    pub priority: Priority,
    /// Audience tags: "student", "teacher" or "all".
    pub target_audience: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintType {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    Pending,
    Resolved,
}

/// Status transitions pending -> resolved only; resolved is terminal.
/// A user id appears at most once in `voted_by`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub title: String,
    pub description: String,
    pub complaint_type: ComplaintType,
    pub status: ComplaintStatus,
    pub submitted_by: String,
    pub submitted_by_name: String,
    pub submitted_date: NaiveDate,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub votes: u32,
    #[serde(default)]
    pub voted_by: Vec<String>,
    #[serde(default)]
    pub response: Option<String>,
    /// RFC 3339 timestamp written by the resolve endpoint. Kept as a
    /// string: display-only, and historical records carry bare dates.
    #[serde(default)]
    pub resolved_date: Option<String>,
}

// =========================================================
// Request / response payloads
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceWaiver {
    pub student_id: String,
    pub subject_code: String,
    pub reason: String,
}

/// Body of `POST /events/{id}/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub user_id: String,
}

/// Body of `POST /complaints/{id}/vote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRequest {
    pub user_id: String,
}

/// Body of `PUT /complaints/{id}/resolve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub response: String,
}

/// Generic acknowledgement returned by action endpoints (register, vote,
/// waive, reset). The vote endpoint additionally reports whether the vote
/// was `added` or `removed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub action: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_round_trips_through_json() {
        let identity = Identity {
            id: "S123".into(),
            username: "alice".into(),
            role: Role::Student,
            name: "Alice James".into(),
            email: "alice@college.edu".into(),
            profile_pic: None,
        };
        let json = serde_json::to_string(&identity).unwrap();
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(identity, back);
    }

    #[test]
    fn role_uses_lowercase_wire_spelling() {
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
        assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
    }

    #[test]
    fn complaint_parses_backend_record() {
        let json = r#"{
            "id": "C1",
            "title": "WiFi connectivity issues in hostel",
            "description": "Frequent disconnections",
            "complaint_type": "public",
            "status": "pending",
            "submitted_by": "S123",
            "submitted_by_name": "Alice James",
            "submitted_date": "2025-01-20",
            "votes": 12,
            "voted_by": ["S123", "S124", "S125"]
        }"#;
        let complaint: Complaint = serde_json::from_str(json).unwrap();
        assert_eq!(complaint.complaint_type, ComplaintType::Public);
        assert_eq!(complaint.status, ComplaintStatus::Pending);
        assert_eq!(complaint.votes, 12);
        assert_eq!(complaint.voted_by.len(), 3);
        assert!(complaint.response.is_none());
        assert!(complaint.resolved_date.is_none());
    }

    #[test]
    fn event_registration_list_defaults_to_empty() {
        let json = r#"{
            "id": "E4",
            "title": "Pongal Holiday",
            "description": "Tamil harvest festival",
            "date": "2025-01-15",
            "time": "All Day",
            "location": "Campus Closed",
            "event_type": "holiday",
            "registration_required": false
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, EventType::Holiday);
        assert!(event.registered_users.is_empty());
    }
}
