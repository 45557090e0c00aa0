//! REST gateway facade.
//!
//! One base-URL-configured HTTP client shared by every dashboard, with one
//! method per (resource, verb) pair. Every call is a stateless
//! request/response: a network failure or non-2xx status surfaces as an
//! [`ApiError`] and never silently succeeds. No retries, no caching — the
//! dashboards re-fetch full collections after each mutation instead.

use campuslink_shared::{
    API_PREFIX, ActionResponse, Attendance, AttendanceWaiver, Complaint, Event, Grade, LibraryBook,
    LoginRequest, LoginResponse, Notice, RegisterRequest, ResolveRequest, Schedule, Student,
    StudyMaterial, User, VoteRequest,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Gateway call failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never completed (network error, CORS, aborted).
    Network(String),
    /// The backend answered with a non-2xx status.
    Status { context: &'static str, status: u16 },
    /// The response body did not match the expected shape.
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status { context, status } => {
                write!(f, "Failed to {context} (HTTP {status})")
            }
            ApiError::Decode(msg) => write!(f, "Unexpected response: {msg}"),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug, PartialEq)]
pub struct CampusApi {
    pub base_url: String,
}

impl CampusApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Client for a backend served from the same origin as the app.
    pub fn same_origin() -> Self {
        Self::new(String::new())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, context: &'static str) -> ApiResult<T> {
        let res = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(res, context).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        builder: gloo_net::http::RequestBuilder,
        body: &B,
        context: &'static str,
    ) -> ApiResult<T> {
        let res = builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(res, context).await
    }

    async fn decode<T: DeserializeOwned>(res: Response, context: &'static str) -> ApiResult<T> {
        if !res.ok() {
            return Err(ApiError::Status {
                context,
                status: res.status(),
            });
        }
        res.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    // =========================================================
    // Authentication
    // =========================================================

    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.send_json(Request::post(&self.url("/auth/login")), request, "log in")
            .await
    }

    // =========================================================
    // Users
    // =========================================================

    pub async fn get_users(&self) -> ApiResult<Vec<User>> {
        self.get_json("/users", "load users").await
    }

    pub async fn create_user(&self, user: &User) -> ApiResult<User> {
        self.send_json(Request::post(&self.url("/users")), user, "create user")
            .await
    }

    pub async fn update_user(&self, user: &User) -> ApiResult<User> {
        let path = format!("/users/{}", user.id);
        self.send_json(Request::put(&self.url(&path)), user, "update user")
            .await
    }

    pub async fn delete_user(&self, user_id: &str) -> ApiResult<()> {
        let res = Request::delete(&self.url(&format!("/users/{user_id}")))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !res.ok() {
            return Err(ApiError::Status {
                context: "delete user",
                status: res.status(),
            });
        }
        Ok(())
    }

    // =========================================================
    // Students
    // =========================================================

    pub async fn get_students(&self) -> ApiResult<Vec<Student>> {
        self.get_json("/students", "load students").await
    }

    pub async fn get_student(&self, student_id: &str) -> ApiResult<Student> {
        self.get_json(&format!("/students/{student_id}"), "load student")
            .await
    }

    // =========================================================
    // Grades
    // =========================================================

    pub async fn get_all_grades(&self) -> ApiResult<Vec<Grade>> {
        self.get_json("/grades", "load grades").await
    }

    pub async fn get_grades(&self, student_id: &str) -> ApiResult<Vec<Grade>> {
        self.get_json(&format!("/grades/{student_id}"), "load grades")
            .await
    }

    pub async fn create_grade(&self, grade: &Grade) -> ApiResult<Grade> {
        self.send_json(Request::post(&self.url("/grades")), grade, "create grade")
            .await
    }

    pub async fn update_grade(&self, grade: &Grade) -> ApiResult<Grade> {
        let path = format!("/grades/{}", grade.id);
        self.send_json(Request::put(&self.url(&path)), grade, "update grade")
            .await
    }

    // =========================================================
    // Attendance
    // =========================================================

    pub async fn get_all_attendance(&self) -> ApiResult<Vec<Attendance>> {
        self.get_json("/attendance", "load attendance").await
    }

    pub async fn get_attendance(&self, student_id: &str) -> ApiResult<Vec<Attendance>> {
        self.get_json(&format!("/attendance/{student_id}"), "load attendance")
            .await
    }

    pub async fn waive_attendance(&self, waiver: &AttendanceWaiver) -> ApiResult<ActionResponse> {
        self.send_json(
            Request::post(&self.url("/attendance/waive")),
            waiver,
            "waive attendance",
        )
        .await
    }

    // =========================================================
    // Materials & Library
    // =========================================================

    pub async fn get_materials(&self) -> ApiResult<Vec<StudyMaterial>> {
        self.get_json("/materials", "load materials").await
    }

    pub async fn create_material(&self, material: &StudyMaterial) -> ApiResult<StudyMaterial> {
        self.send_json(
            Request::post(&self.url("/materials")),
            material,
            "upload material",
        )
        .await
    }

    pub async fn get_library_books(&self) -> ApiResult<Vec<LibraryBook>> {
        self.get_json("/library", "load library").await
    }

    // =========================================================
    // Events
    // =========================================================

    pub async fn get_events(&self) -> ApiResult<Vec<Event>> {
        self.get_json("/events", "load events").await
    }

    pub async fn create_event(&self, event: &Event) -> ApiResult<Event> {
        self.send_json(Request::post(&self.url("/events")), event, "create event")
            .await
    }

    pub async fn update_event(&self, event: &Event) -> ApiResult<Event> {
        let path = format!("/events/{}", event.id);
        self.send_json(Request::put(&self.url(&path)), event, "update event")
            .await
    }

    pub async fn register_for_event(&self, event_id: &str, user_id: &str) -> ApiResult<ActionResponse> {
        let path = format!("/events/{event_id}/register");
        let body = RegisterRequest {
            user_id: user_id.to_string(),
        };
        self.send_json(Request::post(&self.url(&path)), &body, "register for event")
            .await
    }

    // =========================================================
    // Complaints
    // =========================================================

    pub async fn get_complaints(&self) -> ApiResult<Vec<Complaint>> {
        self.get_json("/complaints", "load complaints").await
    }

    pub async fn get_complaint(&self, complaint_id: &str) -> ApiResult<Complaint> {
        self.get_json(&format!("/complaints/{complaint_id}"), "load complaint")
            .await
    }

    pub async fn create_complaint(&self, complaint: &Complaint) -> ApiResult<Complaint> {
        self.send_json(
            Request::post(&self.url("/complaints")),
            complaint,
            "submit complaint",
        )
        .await
    }

    pub async fn vote_complaint(&self, complaint_id: &str, user_id: &str) -> ApiResult<ActionResponse> {
        let path = format!("/complaints/{complaint_id}/vote");
        let body = VoteRequest {
            user_id: user_id.to_string(),
        };
        self.send_json(Request::post(&self.url(&path)), &body, "vote on complaint")
            .await
    }

    pub async fn resolve_complaint(&self, complaint_id: &str, response: &str) -> ApiResult<Complaint> {
        let path = format!("/complaints/{complaint_id}/resolve");
        let body = ResolveRequest {
            response: response.to_string(),
        };
        self.send_json(Request::put(&self.url(&path)), &body, "resolve complaint")
            .await
    }

    // =========================================================
    // Schedules
    // =========================================================

    pub async fn get_schedules(&self) -> ApiResult<Vec<Schedule>> {
        self.get_json("/schedules", "load schedules").await
    }

    pub async fn get_teacher_schedules(&self, teacher_id: &str) -> ApiResult<Vec<Schedule>> {
        self.get_json(&format!("/schedules/teacher/{teacher_id}"), "load schedules")
            .await
    }

    pub async fn create_schedule(&self, schedule: &Schedule) -> ApiResult<Schedule> {
        self.send_json(
            Request::post(&self.url("/schedules")),
            schedule,
            "create schedule",
        )
        .await
    }

    pub async fn update_schedule(&self, schedule: &Schedule) -> ApiResult<Schedule> {
        let path = format!("/schedules/{}", schedule.id);
        self.send_json(Request::put(&self.url(&path)), schedule, "update schedule")
            .await
    }

    // =========================================================
    // Notices
    // =========================================================

    pub async fn get_notices(&self) -> ApiResult<Vec<Notice>> {
        self.get_json("/notices", "load notices").await
    }

    pub async fn create_notice(&self, notice: &Notice) -> ApiResult<Notice> {
        self.send_json(Request::post(&self.url("/notices")), notice, "post notice")
            .await
    }

    pub async fn delete_notice(&self, notice_id: &str) -> ApiResult<()> {
        let res = Request::delete(&self.url(&format!("/notices/{notice_id}")))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !res.ok() {
            return Err(ApiError::Status {
                context: "delete notice",
                status: res.status(),
            });
        }
        Ok(())
    }

    // =========================================================
    // Demo data
    // =========================================================

    pub async fn reset_demo_data(&self) -> ApiResult<ActionResponse> {
        let res = Request::post(&self.url("/reset-demo-data"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(res, "reset demo data").await
    }
}

/// Gateway handle from context. Provided once at the app root.
pub fn use_api() -> CampusApi {
    leptos::prelude::use_context::<CampusApi>().expect("CampusApi should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed_and_prefixed() {
        let api = CampusApi::new("https://campus.example.edu/".to_string());
        assert_eq!(api.url("/grades/S123"), "https://campus.example.edu/api/grades/S123");

        let same_origin = CampusApi::same_origin();
        assert_eq!(same_origin.url("/events"), "/api/events");
    }

    #[test]
    fn errors_render_user_facing_messages() {
        let err = ApiError::Status {
            context: "load grades",
            status: 503,
        };
        assert_eq!(err.to_string(), "Failed to load grades (HTTP 503)");
    }
}
