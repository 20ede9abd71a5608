//! Report triage reducer.
//!
//! ```text
//! pending --start--> in_progress --resolve--> resolved
//! ```

use chrono::{DateTime, Utc};
use paws_core::entities::{Record, Report, next_id, position};
use paws_core::enums::{ReportAction, ReportStatus};
use paws_core::errors::CoreError;
use paws_core::notification::Notification;
use paws_core::responses::ReportSubmission;

use crate::Reduced;

/// Minimum length (in characters, after trimming) of required report fields.
pub const MIN_FIELD_LEN: usize = 2;

/// Apply `action` to the report with `id`.
///
/// `start` is valid only from `pending`, `resolve` only from `in_progress`.
/// Anything else is an `InvalidTransition`; an unmatched id is `NotFound`.
pub fn apply(
    reports: &[Report],
    id: u32,
    action: ReportAction,
) -> Result<Reduced<Report>, CoreError> {
    let index =
        position(reports, id).ok_or_else(|| CoreError::not_found(Report::ENTITY_TYPE, id))?;
    let current = reports[index].status;
    let next = action.target_status();

    if !current.can_transition_to(next) {
        return Err(CoreError::invalid_transition(
            Report::ENTITY_TYPE,
            id,
            current,
            next,
        ));
    }

    let mut records = reports.to_vec();
    records[index].status = next;

    Ok(Reduced {
        records,
        index,
        notification: Notification::report_updated(id, action),
    })
}

/// Append a new `pending` report built from a public submission.
///
/// `species`, `condition` and `location` must each be at least
/// [`MIN_FIELD_LEN`] characters. Blank optional fields are dropped.
pub fn submit(
    reports: &[Report],
    submission: &ReportSubmission,
    reported_at: DateTime<Utc>,
) -> Result<Reduced<Report>, CoreError> {
    let species = required_field(&submission.species, "Species")?;
    let condition = required_field(&submission.condition, "Condition")?;
    let location = required_field(&submission.location, "Location")?;

    let report = Report {
        id: next_id(reports)?,
        species,
        condition,
        location,
        status: ReportStatus::Pending,
        description: non_blank(submission.description.as_deref()),
        image_url: non_blank(submission.image_url.as_deref()),
        reported_at: Some(reported_at),
    };

    let mut records = reports.to_vec();
    records.push(report);

    Ok(Reduced {
        index: records.len() - 1,
        records,
        notification: Notification::report_submitted(),
    })
}

fn required_field(value: &str, label: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.chars().count() < MIN_FIELD_LEN {
        return Err(CoreError::Validation(format!(
            "{label} must be at least {MIN_FIELD_LEN} characters."
        )));
    }
    Ok(trimmed.to_string())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use paws_core::seed;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn status_of(records: &[Report], id: u32) -> ReportStatus {
        records
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.status)
            .expect("report present")
    }

    #[test]
    fn start_moves_pending_to_in_progress() {
        let reduced = apply(&seed::reports(), 1, ReportAction::Start).unwrap();
        assert_eq!(status_of(&reduced.records, 1), ReportStatus::InProgress);
        assert_eq!(reduced.record().id, 1);
        assert_eq!(reduced.notification.description, "Report #1 has been started.");
    }

    #[test]
    fn resolve_moves_in_progress_to_resolved() {
        let reduced = apply(&seed::reports(), 2, ReportAction::Resolve).unwrap();
        assert_eq!(status_of(&reduced.records, 2), ReportStatus::Resolved);
        assert_eq!(reduced.notification.title, "Report Updated");
        assert_eq!(reduced.notification.description, "Report #2 has been resolved.");
    }

    #[test]
    fn other_reports_are_untouched() {
        let before = seed::reports();
        let reduced = apply(&before, 1, ReportAction::Start).unwrap();
        assert_eq!(reduced.records[1], before[1]);
        assert_eq!(reduced.records.len(), before.len());
    }

    #[rstest]
    #[case(1, ReportAction::Resolve, "pending", "resolved")]
    #[case(2, ReportAction::Start, "in_progress", "in_progress")]
    fn out_of_order_actions_are_rejected(
        #[case] id: u32,
        #[case] action: ReportAction,
        #[case] from: &str,
        #[case] to: &str,
    ) {
        let err = apply(&seed::reports(), id, action).unwrap_err();
        match err {
            CoreError::InvalidTransition {
                entity_type,
                from: got_from,
                to: got_to,
                ..
            } => {
                assert_eq!(entity_type, "report");
                assert_eq!(got_from, from);
                assert_eq!(got_to, to);
            }
            other => panic!("expected InvalidTransition, got {other:?}"),
        }
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = apply(&seed::reports(), 99, ReportAction::Start).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn full_lifecycle_then_restart_is_rejected() {
        let reports = seed::reports();
        let started = apply(&reports, 1, ReportAction::Start).unwrap().records;
        let resolved = apply(&started, 1, ReportAction::Resolve).unwrap().records;
        assert_eq!(status_of(&resolved, 1), ReportStatus::Resolved);

        let err = apply(&resolved, 1, ReportAction::Start).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
        assert_eq!(status_of(&resolved, 1), ReportStatus::Resolved);
    }

    #[test]
    fn submit_appends_pending_report_with_next_id() {
        let now = Utc::now();
        let submission = ReportSubmission {
            species: " Rabbit ".into(),
            condition: "Sick".into(),
            location: "Riverside Park".into(),
            description: Some("   ".into()),
            image_url: Some("/placeholder.svg?text=r.jpg".into()),
        };

        let reduced = submit(&seed::reports(), &submission, now).unwrap();
        let report = reduced.record();
        assert_eq!(report.id, 3);
        assert_eq!(report.species, "Rabbit");
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.description, None);
        assert_eq!(report.image_url.as_deref(), Some("/placeholder.svg?text=r.jpg"));
        assert_eq!(report.reported_at, Some(now));
        assert_eq!(reduced.notification.title, "Report submitted");
    }

    #[rstest]
    #[case("D", "Injured", "Main St", "Species")]
    #[case("Dog", " ", "Main St", "Condition")]
    #[case("Dog", "Injured", "", "Location")]
    fn submit_rejects_short_fields(
        #[case] species: &str,
        #[case] condition: &str,
        #[case] location: &str,
        #[case] label: &str,
    ) {
        let submission = ReportSubmission {
            species: species.into(),
            condition: condition.into(),
            location: location.into(),
            ..ReportSubmission::default()
        };
        let err = submit(&[], &submission, Utc::now()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Validation error: {label} must be at least 2 characters.")
        );
    }

    #[test]
    fn submit_fails_when_ids_are_exhausted() {
        let mut reports = seed::reports();
        reports[1].id = u32::MAX;
        let submission = ReportSubmission {
            species: "Dog".into(),
            condition: "Injured".into(),
            location: "Main St".into(),
            ..ReportSubmission::default()
        };
        let err = submit(&reports, &submission, Utc::now()).unwrap_err();
        assert!(matches!(err, CoreError::CapacityExceeded { .. }));
    }
}
