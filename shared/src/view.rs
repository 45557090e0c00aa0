//! Derived view state.
//!
//! Pure functions over the fetched collections. Nothing here is cached or
//! persisted; every dashboard recomputes these on render from the raw
//! records it last fetched.

use std::collections::BTreeSet;

use crate::{Attendance, Complaint, ComplaintStatus, ComplaintType, Event, Grade, Notice, Role, Schedule};

/// Display order for the teaching week.
pub const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Arithmetic mean of attendance percentages, rounded to 2 decimals.
/// Returns 0.0 when there are no records.
pub fn average_attendance(records: &[Attendance]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(|r| r.percentage).sum();
    let mean = sum / records.len() as f64;
    (mean * 100.0).round() / 100.0
}

/// Complaints a student may see: public ones plus their own.
pub fn visible_complaints<'a>(complaints: &'a [Complaint], user_id: &str) -> Vec<&'a Complaint> {
    complaints
        .iter()
        .filter(|c| c.complaint_type == ComplaintType::Public || c.submitted_by == user_id)
        .collect()
}

/// Whether this user already voted on the complaint.
pub fn has_voted(complaint: &Complaint, user_id: &str) -> bool {
    complaint.voted_by.iter().any(|id| id == user_id)
}

/// Whether this user is already registered for the event.
pub fn is_registered(event: &Event, user_id: &str) -> bool {
    event.registered_users.iter().any(|id| id == user_id)
}

/// Notices targeted at the given role, or at everyone.
pub fn notices_for<'a>(notices: &'a [Notice], role: Role) -> Vec<&'a Notice> {
    let tag = role.audience_tag();
    notices
        .iter()
        .filter(|n| n.target_audience.iter().any(|a| a == tag || a == "all"))
        .collect()
}

/// Unique subject codes drawn from a teacher's schedule entries.
pub fn teacher_subject_codes(schedules: &[Schedule], teacher_id: &str) -> BTreeSet<String> {
    schedules
        .iter()
        .filter(|s| s.teacher_id == teacher_id)
        .map(|s| s.subject_code.clone())
        .collect()
}

/// Grades for the subjects a teacher teaches (the schedule/grade join).
pub fn grades_for_subjects<'a>(grades: &'a [Grade], subjects: &BTreeSet<String>) -> Vec<&'a Grade> {
    grades
        .iter()
        .filter(|g| subjects.contains(&g.subject_code))
        .collect()
}

/// Groups schedule entries by weekday in fixed Monday..Friday order.
/// Days without entries are still present, with an empty group.
pub fn schedule_by_weekday<'a>(schedules: &'a [Schedule]) -> Vec<(&'static str, Vec<&'a Schedule>)> {
    WEEKDAYS
        .iter()
        .map(|&day| (day, schedules.iter().filter(|s| s.day == day).collect()))
        .collect()
}

/// Number of complaints still awaiting resolution.
pub fn pending_complaints(complaints: &[Complaint]) -> usize {
    complaints
        .iter()
        .filter(|c| c.status == ComplaintStatus::Pending)
        .count()
}

/// Number of users holding the given role.
pub fn count_by_role(users: &[crate::User], role: Role) -> usize {
    users.iter().filter(|u| u.role == role).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ComplaintStatus, EventType, Priority};
    use chrono::NaiveDate;

    fn attendance(percentage: f64) -> Attendance {
        Attendance {
            id: "AT1".into(),
            student_id: "S123".into(),
            student_name: "Alice James".into(),
            subject: "Data Structures".into(),
            subject_code: "CS301".into(),
            total_classes: 45,
            attended_classes: 42,
            percentage,
            semester: 5,
        }
    }

    fn complaint(id: &str, kind: ComplaintType, status: ComplaintStatus, by: &str) -> Complaint {
        Complaint {
            id: id.into(),
            title: "t".into(),
            description: "d".into(),
            complaint_type: kind,
            status,
            submitted_by: by.into(),
            submitted_by_name: by.into(),
            submitted_date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            assigned_to: None,
            votes: 0,
            voted_by: vec![],
            response: None,
            resolved_date: None,
        }
    }

    fn schedule(id: &str, teacher_id: &str, code: &str, day: &str) -> Schedule {
        Schedule {
            id: id.into(),
            teacher_id: teacher_id.into(),
            teacher_name: "Prof. V. Kumar".into(),
            subject: code.into(),
            subject_code: code.into(),
            day: day.into(),
            time_slot: "09:00 AM - 10:00 AM".into(),
            room: "CS Lab 1".into(),
            department: "Computer Science".into(),
            year: 3,
            semester: 5,
        }
    }

    fn notice(id: &str, audience: &[&str]) -> Notice {
        Notice {
            id: id.into(),
            title: "t".into(),
            content: "c".into(),
            posted_by: "Admin Office".into(),
            posted_date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            priority: Priority::Medium,
            target_audience: audience.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn average_attendance_rounds_to_two_decimals() {
        let records = vec![attendance(80.0), attendance(60.0), attendance(100.0)];
        assert_eq!(average_attendance(&records), 80.00);

        let uneven = vec![attendance(93.33), attendance(95.0), attendance(83.33)];
        assert_eq!(average_attendance(&uneven), 90.55);
    }

    #[test]
    fn average_attendance_of_no_records_is_zero() {
        assert_eq!(average_attendance(&[]), 0.0);
    }

    #[test]
    fn students_see_public_complaints_and_their_own() {
        let complaints = vec![
            complaint("C1", ComplaintType::Public, ComplaintStatus::Pending, "S123"),
            complaint("C2", ComplaintType::Private, ComplaintStatus::Pending, "S124"),
            complaint("C3", ComplaintType::Private, ComplaintStatus::Pending, "S123"),
        ];
        let visible = visible_complaints(&complaints, "S123");
        let ids: Vec<&str> = visible.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["C1", "C3"]);
    }

    #[test]
    fn vote_and_registration_membership() {
        let mut c = complaint("C1", ComplaintType::Public, ComplaintStatus::Pending, "S123");
        c.voted_by = vec!["S124".into()];
        assert!(has_voted(&c, "S124"));
        assert!(!has_voted(&c, "S125"));

        let event = Event {
            id: "E1".into(),
            title: "Tech Symposium".into(),
            description: "".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            time: "09:00 AM".into(),
            location: "Main Auditorium".into(),
            event_type: EventType::Academic,
            registration_required: true,
            registered_users: vec!["S123".into(), "S124".into()],
        };
        assert!(is_registered(&event, "S123"));
        assert!(!is_registered(&event, "S125"));
    }

    #[test]
    fn notices_filter_by_audience_tag_or_all() {
        let notices = vec![
            notice("N1", &["student", "teacher"]),
            notice("N2", &["teacher"]),
            notice("N3", &["all"]),
        ];
        let for_students = notices_for(&notices, Role::Student);
        let ids: Vec<&str> = for_students.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["N1", "N3"]);

        let for_teachers = notices_for(&notices, Role::Teacher);
        assert_eq!(for_teachers.len(), 3);
    }

    #[test]
    fn teacher_scoping_joins_schedule_and_grades() {
        let schedules = vec![
            schedule("SCH1", "T202", "CS301", "Monday"),
            schedule("SCH2", "T202", "CS302", "Tuesday"),
            schedule("SCH3", "T202", "CS301", "Wednesday"),
            schedule("SCH4", "T203", "CS303", "Thursday"),
        ];
        let subjects = teacher_subject_codes(&schedules, "T202");
        assert_eq!(
            subjects.iter().cloned().collect::<Vec<_>>(),
            vec!["CS301".to_string(), "CS302".to_string()]
        );

        let grade = |id: &str, code: &str| Grade {
            id: id.into(),
            student_id: "S123".into(),
            student_name: "Alice James".into(),
            subject: code.into(),
            subject_code: code.into(),
            part_a_marks: 8,
            part_b_marks: 35,
            total_marks: 43,
            grade: crate::Letter::A,
            semester: 5,
            year: 3,
        };
        let grades = vec![grade("G1", "CS301"), grade("G2", "CS303"), grade("G3", "CS302")];
        let scoped = grades_for_subjects(&grades, &subjects);
        let ids: Vec<&str> = scoped.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["G1", "G3"]);
    }

    #[test]
    fn weekday_grouping_keeps_fixed_order_and_empty_days() {
        let schedules = vec![
            schedule("SCH1", "T202", "CS301", "Wednesday"),
            schedule("SCH2", "T202", "CS302", "Monday"),
            schedule("SCH3", "T202", "CS301", "Monday"),
        ];
        let grouped = schedule_by_weekday(&schedules);
        assert_eq!(grouped.len(), 5);
        assert_eq!(grouped[0].0, "Monday");
        assert_eq!(grouped[0].1.len(), 2);
        assert_eq!(grouped[1].0, "Tuesday");
        assert!(grouped[1].1.is_empty());
        assert_eq!(grouped[2].1.len(), 1);
        assert_eq!(grouped[4].0, "Friday");
    }

    #[test]
    fn pending_complaint_count() {
        let complaints = vec![
            complaint("C1", ComplaintType::Public, ComplaintStatus::Pending, "S123"),
            complaint("C2", ComplaintType::Public, ComplaintStatus::Resolved, "S124"),
            complaint("C3", ComplaintType::Private, ComplaintStatus::Pending, "S125"),
        ];
        assert_eq!(pending_complaints(&complaints), 2);
    }
}
