//! Property tests for the triage reducers.

use paws_admin::{adoptions, partnerships, reports};
use paws_core::entities::{AdoptionRequest, Partnership, Report};
use paws_core::enums::{
    AdoptionAction, AdoptionStatus, PartnershipStatus, ReportAction, ReportStatus,
};
use proptest::prelude::*;

fn report_status() -> impl Strategy<Value = ReportStatus> {
    prop_oneof![
        Just(ReportStatus::Pending),
        Just(ReportStatus::InProgress),
        Just(ReportStatus::Resolved),
    ]
}

fn report_action() -> impl Strategy<Value = ReportAction> {
    prop_oneof![Just(ReportAction::Start), Just(ReportAction::Resolve)]
}

fn adoption_status() -> impl Strategy<Value = AdoptionStatus> {
    prop_oneof![
        Just(AdoptionStatus::Pending),
        Just(AdoptionStatus::Approved),
        Just(AdoptionStatus::Rejected),
    ]
}

fn adoption_action() -> impl Strategy<Value = AdoptionAction> {
    prop_oneof![Just(AdoptionAction::Approve), Just(AdoptionAction::Reject)]
}

fn reports_with(statuses: &[ReportStatus]) -> Vec<Report> {
    statuses
        .iter()
        .zip(1u32..)
        .map(|(status, id)| Report {
            id,
            species: "Dog".into(),
            condition: "Injured".into(),
            location: "Main St".into(),
            status: *status,
            description: None,
            image_url: None,
            reported_at: None,
        })
        .collect()
}

proptest! {
    #[test]
    fn start_changes_status_iff_pending(
        statuses in prop::collection::vec(report_status(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let list = reports_with(&statuses);
        let target = &list[pick.index(list.len())];

        match reports::apply(&list, target.id, ReportAction::Start) {
            Ok(reduced) => {
                prop_assert_eq!(target.status, ReportStatus::Pending);
                prop_assert_eq!(reduced.record().status, ReportStatus::InProgress);
            }
            Err(_) => prop_assert_ne!(target.status, ReportStatus::Pending),
        }
    }

    #[test]
    fn resolve_changes_status_iff_in_progress(
        statuses in prop::collection::vec(report_status(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let list = reports_with(&statuses);
        let target = &list[pick.index(list.len())];

        match reports::apply(&list, target.id, ReportAction::Resolve) {
            Ok(reduced) => {
                prop_assert_eq!(target.status, ReportStatus::InProgress);
                prop_assert_eq!(reduced.record().status, ReportStatus::Resolved);
            }
            Err(_) => prop_assert_ne!(target.status, ReportStatus::InProgress),
        }
    }

    #[test]
    fn report_status_never_regresses(
        actions in prop::collection::vec((1u32..4, report_action()), 0..24),
    ) {
        let mut list = reports_with(&[ReportStatus::Pending; 3]);

        for (id, action) in actions {
            let before: Vec<u8> = list.iter().map(|r| r.status.rank()).collect();
            if let Ok(reduced) = reports::apply(&list, id, action) {
                list = reduced.records;
            }
            for (report, old_rank) in list.iter().zip(before) {
                prop_assert!(report.status.rank() >= old_rank);
            }
        }
    }

    #[test]
    fn decided_adoptions_are_final(
        status in adoption_status(),
        first in adoption_action(),
        second in adoption_action(),
    ) {
        let list = vec![AdoptionRequest {
            id: 1,
            animal_name: "Buddy".into(),
            requester_name: "John Doe".into(),
            status,
        }];

        match adoptions::apply(&list, 1, first) {
            Ok(reduced) => {
                prop_assert_eq!(status, AdoptionStatus::Pending);
                prop_assert!(reduced.record().status.is_terminal());
                prop_assert!(adoptions::apply(&reduced.records, 1, second).is_err());
            }
            Err(_) => prop_assert_ne!(status, AdoptionStatus::Pending),
        }
    }

    #[test]
    fn partnership_toggle_is_its_own_inverse(
        actives in prop::collection::vec(any::<bool>(), 1..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let list: Vec<Partnership> = actives
            .iter()
            .zip(1u32..)
            .map(|(active, id)| Partnership {
                id,
                name: format!("Partner {id}"),
                status: if *active { PartnershipStatus::Active } else { PartnershipStatus::Inactive },
            })
            .collect();
        let id = list[pick.index(list.len())].id;

        let once = partnerships::toggle(&list, id).unwrap().records;
        prop_assert_ne!(&once, &list);
        let twice = partnerships::toggle(&once, id).unwrap().records;
        prop_assert_eq!(twice, list);
    }
}
