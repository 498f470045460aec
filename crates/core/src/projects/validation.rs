//! Request validation for the project aggregate.
//!
//! Every function is pure: it inspects the request (and, for due dates, the
//! supplied "now") and reports the first failing rule as
//! [`CoreError::Validation`]. Rules are evaluated in a fixed order so that
//! callers always see the same message for the same input.

use chrono::{Datelike, Timelike};

use crate::error::CoreError;
use crate::types::Timestamp;

use super::request::{CreateInteractionRequest, CreateProjectRequest, TaskRequest};

pub const MSG_PROJECT_NAME: &str = "Project name can't be null, empty, or whitespace.";
pub const MSG_PROJECT_DATES: &str = "Project end date can't be earlier than the start date.";
pub const MSG_PROJECT_CLIENT: &str = "Client must be provided and be a valid integer.";
pub const MSG_PROJECT_CAMPAIGN_TYPE: &str =
    "Campaign type must be provided and be a valid integer.";
pub const MSG_DUPLICATE_PROJECT: &str = "A project with the same name already exists.";

pub const MSG_INTERACTION_NOTES: &str = "Notes cannot be null or empty.";
pub const MSG_INTERACTION_DATE: &str =
    "Interaction date is required and cannot be default value.";
pub const MSG_INTERACTION_TYPE: &str = "Interaction type must be a positive integer.";

pub const MSG_TASK_NAME: &str = "Task name can't be null, empty, or whitespace.";
pub const MSG_TASK_DUE_DATE: &str = "Due date can't be null or in the past.";
pub const MSG_TASK_USER: &str =
    "User assigned to the task must be provided and be a valid integer.";
pub const MSG_TASK_STATUS: &str = "Task status must be provided and be a valid integer.";

fn reject<T>(message: &str) -> Result<T, CoreError> {
    Err(CoreError::Validation(message.to_string()))
}

/// Whitespace-only strings count as blank.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Midnight of 0001-01-01 and the Unix epoch both stand in for "no date
/// supplied" from clients that always send a value.
fn is_default_timestamp(value: &Timestamp) -> bool {
    let midnight = value.num_seconds_from_midnight() == 0 && value.nanosecond() == 0;
    let epoch = value.timestamp() == 0 && value.timestamp_subsec_nanos() == 0;
    epoch || (midnight && value.year() == 1 && value.ordinal() == 1)
}

/// Validate a create-project request.
///
/// The date-order rule is checked from both sides (`end < start` and
/// `start > end`); together they admit `end == start` and `end > start`.
pub fn validate_project_request(request: &CreateProjectRequest) -> Result<(), CoreError> {
    if is_blank(&request.name) {
        return reject(MSG_PROJECT_NAME);
    }
    if request.end < request.start || request.start > request.end {
        return reject(MSG_PROJECT_DATES);
    }
    if request.client <= 0 {
        return reject(MSG_PROJECT_CLIENT);
    }
    if request.campaign_type <= 0 {
        return reject(MSG_PROJECT_CAMPAIGN_TYPE);
    }
    Ok(())
}

/// Validate an add-interaction request, returning the interaction date.
pub fn validate_interaction_request(
    request: &CreateInteractionRequest,
) -> Result<Timestamp, CoreError> {
    if is_blank(&request.notes) {
        return reject(MSG_INTERACTION_NOTES);
    }
    let date = match request.date {
        Some(date) if !is_default_timestamp(&date) => date,
        _ => return reject(MSG_INTERACTION_DATE),
    };
    if request.interaction_type <= 0 {
        return reject(MSG_INTERACTION_TYPE);
    }
    Ok(date)
}

/// Validate an add-task or update-task request against `now`, returning the
/// due date.
///
/// A due date equal to `now` is accepted; only strictly earlier dates fail.
pub fn validate_task_request(
    request: &TaskRequest,
    now: Timestamp,
) -> Result<Timestamp, CoreError> {
    if is_blank(&request.name) {
        return reject(MSG_TASK_NAME);
    }
    let due_date = match request.due_date {
        Some(due) if due >= now => due,
        _ => return reject(MSG_TASK_DUE_DATE),
    };
    if request.user <= 0 {
        return reject(MSG_TASK_USER);
    }
    if request.status <= 0 {
        return reject(MSG_TASK_STATUS);
    }
    Ok(due_date)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn ts(year: i32, month: u32, day: u32) -> Timestamp {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn project_request() -> CreateProjectRequest {
        CreateProjectRequest {
            name: "Campaign A".to_string(),
            start: ts(2025, 1, 1),
            end: ts(2025, 6, 1),
            client: 3,
            campaign_type: 2,
        }
    }

    fn interaction_request() -> CreateInteractionRequest {
        CreateInteractionRequest {
            notes: "Kickoff call".to_string(),
            date: Some(ts(2025, 2, 1)),
            interaction_type: 1,
        }
    }

    fn task_request(now: Timestamp) -> TaskRequest {
        TaskRequest {
            name: "Draft brief".to_string(),
            due_date: Some(now + Duration::days(7)),
            status: 1,
            user: 1,
        }
    }

    fn message<T: std::fmt::Debug>(result: Result<T, CoreError>) -> String {
        match result {
            Err(CoreError::Validation(msg)) => msg,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    // -- validate_project_request -------------------------------------------

    #[test]
    fn valid_project_request_accepted() {
        assert!(validate_project_request(&project_request()).is_ok());
    }

    #[test]
    fn same_start_and_end_accepted() {
        let mut req = project_request();
        req.end = req.start;
        assert!(validate_project_request(&req).is_ok());
    }

    #[test]
    fn blank_project_name_rejected() {
        let mut req = project_request();
        req.name = "   ".to_string();
        assert_eq!(message(validate_project_request(&req)), MSG_PROJECT_NAME);
    }

    #[test]
    fn end_before_start_rejected() {
        let mut req = project_request();
        req.end = ts(2024, 12, 31);
        assert_eq!(message(validate_project_request(&req)), MSG_PROJECT_DATES);
    }

    #[test]
    fn non_positive_client_rejected() {
        let mut req = project_request();
        req.client = 0;
        assert_eq!(message(validate_project_request(&req)), MSG_PROJECT_CLIENT);
    }

    #[test]
    fn non_positive_campaign_type_rejected() {
        let mut req = project_request();
        req.campaign_type = -1;
        assert_eq!(
            message(validate_project_request(&req)),
            MSG_PROJECT_CAMPAIGN_TYPE
        );
    }

    #[test]
    fn project_name_checked_before_dates() {
        let mut req = project_request();
        req.name = String::new();
        req.end = ts(2020, 1, 1);
        assert_eq!(message(validate_project_request(&req)), MSG_PROJECT_NAME);
    }

    // -- validate_interaction_request ---------------------------------------

    #[test]
    fn valid_interaction_request_returns_date() {
        let date = validate_interaction_request(&interaction_request()).unwrap();
        assert_eq!(date, ts(2025, 2, 1));
    }

    #[test]
    fn blank_notes_rejected() {
        let mut req = interaction_request();
        req.notes = "\t\n".to_string();
        assert_eq!(
            message(validate_interaction_request(&req)),
            MSG_INTERACTION_NOTES
        );
    }

    #[test]
    fn missing_interaction_date_rejected() {
        let mut req = interaction_request();
        req.date = None;
        assert_eq!(
            message(validate_interaction_request(&req)),
            MSG_INTERACTION_DATE
        );
    }

    #[test]
    fn zero_interaction_date_rejected() {
        let mut req = interaction_request();
        req.date = Some(Utc.timestamp_opt(0, 0).unwrap());
        assert_eq!(
            message(validate_interaction_request(&req)),
            MSG_INTERACTION_DATE
        );
    }

    #[test]
    fn year_one_interaction_date_rejected() {
        let mut req = interaction_request();
        req.date = Some(Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(
            message(validate_interaction_request(&req)),
            MSG_INTERACTION_DATE
        );
    }

    #[test]
    fn non_positive_interaction_type_rejected() {
        let mut req = interaction_request();
        req.interaction_type = 0;
        assert_eq!(
            message(validate_interaction_request(&req)),
            MSG_INTERACTION_TYPE
        );
    }

    // -- validate_task_request ----------------------------------------------

    #[test]
    fn valid_task_request_returns_due_date() {
        let now = Utc::now();
        let due = validate_task_request(&task_request(now), now).unwrap();
        assert_eq!(due, now + Duration::days(7));
    }

    #[test]
    fn due_date_equal_to_now_accepted() {
        let now = Utc::now();
        let mut req = task_request(now);
        req.due_date = Some(now);
        assert!(validate_task_request(&req, now).is_ok());
    }

    #[test]
    fn past_due_date_rejected() {
        let now = Utc::now();
        let mut req = task_request(now);
        req.due_date = Some(now - Duration::seconds(1));
        assert_eq!(message(validate_task_request(&req, now)), MSG_TASK_DUE_DATE);
    }

    #[test]
    fn missing_due_date_rejected() {
        let now = Utc::now();
        let mut req = task_request(now);
        req.due_date = None;
        assert_eq!(message(validate_task_request(&req, now)), MSG_TASK_DUE_DATE);
    }

    #[test]
    fn blank_task_name_rejected() {
        let now = Utc::now();
        let mut req = task_request(now);
        req.name = " ".to_string();
        assert_eq!(message(validate_task_request(&req, now)), MSG_TASK_NAME);
    }

    #[test]
    fn user_checked_before_status() {
        let now = Utc::now();
        let mut req = task_request(now);
        req.user = 0;
        req.status = 0;
        assert_eq!(message(validate_task_request(&req, now)), MSG_TASK_USER);
    }

    #[test]
    fn non_positive_status_rejected() {
        let now = Utc::now();
        let mut req = task_request(now);
        req.status = -4;
        assert_matches!(
            validate_task_request(&req, now),
            Err(CoreError::Validation(msg)) if msg == MSG_TASK_STATUS
        );
    }
}
