//! Stateful owner of the admin lists.
//!
//! `AdminBoard` is the only place where reducer output is committed. A
//! mutation either replaces the affected list and delivers exactly one
//! notification, or leaves every list untouched.

use std::sync::Arc;

use chrono::Utc;
use paws_core::entities::{AdoptionRequest, Animal, Partner, Partnership, Record, Report};
use paws_core::enums::{AdoptionAction, ReportAction, UnknownIdPolicy};
use paws_core::errors::CoreError;
use paws_core::notification::{Notification, NotificationSink};
use paws_core::responses::{ContactForm, ReportSubmission};
use paws_core::seed;

use crate::{Reduced, adoptions, partners, partnerships, reports};

/// Upper bound on reports and on adoption requests accepted from the public
/// boundary.
pub const DEFAULT_RECORD_LIMIT: usize = 10_000;

/// What happened to a board mutation that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// State changed; `notification` was delivered to the sink.
    Applied { record: T, notification: Notification },
    /// The id matched nothing and the policy is `ignore`.
    Ignored,
}

impl<T> Outcome<T> {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

pub struct AdminBoard {
    reports: Vec<Report>,
    adoptions: Vec<AdoptionRequest>,
    partnerships: Vec<Partnership>,
    animals: Vec<Animal>,
    partners: Vec<Partner>,
    policy: UnknownIdPolicy,
    record_limit: usize,
    sink: Arc<dyn NotificationSink>,
}

impl AdminBoard {
    /// Empty board.
    pub fn new(policy: UnknownIdPolicy, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            reports: Vec::new(),
            adoptions: Vec::new(),
            partnerships: Vec::new(),
            animals: Vec::new(),
            partners: Vec::new(),
            policy,
            record_limit: DEFAULT_RECORD_LIMIT,
            sink,
        }
    }

    /// Board populated with the seed lists.
    pub fn seeded(policy: UnknownIdPolicy, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            reports: seed::reports(),
            adoptions: seed::adoption_requests(),
            partnerships: seed::partnerships(),
            animals: seed::animals(),
            partners: seed::partners(),
            policy,
            record_limit: DEFAULT_RECORD_LIMIT,
            sink,
        }
    }

    #[must_use]
    pub fn with_reports(mut self, reports: Vec<Report>) -> Self {
        self.reports = reports;
        self
    }

    #[must_use]
    pub fn with_adoptions(mut self, adoptions: Vec<AdoptionRequest>) -> Self {
        self.adoptions = adoptions;
        self
    }

    #[must_use]
    pub fn with_partnerships(mut self, partnerships: Vec<Partnership>) -> Self {
        self.partnerships = partnerships;
        self
    }

    #[must_use]
    pub fn with_animals(mut self, animals: Vec<Animal>) -> Self {
        self.animals = animals;
        self
    }

    #[must_use]
    pub fn with_partners(mut self, partners: Vec<Partner>) -> Self {
        self.partners = partners;
        self
    }

    /// Cap on how many reports, and separately how many adoption requests,
    /// submissions may grow the board to.
    #[must_use]
    pub const fn with_record_limit(mut self, record_limit: usize) -> Self {
        self.record_limit = record_limit;
        self
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn adoptions(&self) -> &[AdoptionRequest] {
        &self.adoptions
    }

    pub fn partnerships(&self) -> &[Partnership] {
        &self.partnerships
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn partners(&self) -> &[Partner] {
        &self.partners
    }

    pub const fn policy(&self) -> UnknownIdPolicy {
        self.policy
    }

    pub const fn record_limit(&self) -> usize {
        self.record_limit
    }

    pub fn start_report(&mut self, id: u32) -> Result<Outcome<Report>, CoreError> {
        self.apply_report(id, ReportAction::Start)
    }

    pub fn resolve_report(&mut self, id: u32) -> Result<Outcome<Report>, CoreError> {
        self.apply_report(id, ReportAction::Resolve)
    }

    pub fn apply_report(
        &mut self,
        id: u32,
        action: ReportAction,
    ) -> Result<Outcome<Report>, CoreError> {
        let result = reports::apply(&self.reports, id, action);
        commit(self.policy, self.sink.as_ref(), &mut self.reports, result)
    }

    pub fn apply_adoption(
        &mut self,
        id: u32,
        action: AdoptionAction,
    ) -> Result<Outcome<AdoptionRequest>, CoreError> {
        let result = adoptions::apply(&self.adoptions, id, action);
        commit(self.policy, self.sink.as_ref(), &mut self.adoptions, result)
    }

    pub fn toggle_partnership(&mut self, id: u32) -> Result<Outcome<Partnership>, CoreError> {
        let result = partnerships::toggle(&self.partnerships, id);
        commit(self.policy, self.sink.as_ref(), &mut self.partnerships, result)
    }

    /// Record a public report submission as a new `pending` report.
    pub fn submit_report(&mut self, submission: &ReportSubmission) -> Result<Report, CoreError> {
        check_capacity::<Report>(self.reports.len(), self.record_limit)?;
        let reduced = reports::submit(&self.reports, submission, Utc::now())?;
        let (record, _) = store(self.sink.as_ref(), &mut self.reports, reduced);
        tracing::info!(report_id = record.id, species = %record.species, "report submitted");
        Ok(record)
    }

    /// Record an adoption request for a listed animal.
    ///
    /// An unknown `animal_id` is always an error; the unknown-id policy covers
    /// triage actions only.
    pub fn submit_adoption(
        &mut self,
        animal_id: u32,
        requester_name: &str,
    ) -> Result<AdoptionRequest, CoreError> {
        let animal = self
            .animals
            .iter()
            .find(|animal| animal.id == animal_id)
            .ok_or_else(|| CoreError::not_found(Animal::ENTITY_TYPE, animal_id))?;
        check_capacity::<AdoptionRequest>(self.adoptions.len(), self.record_limit)?;
        let reduced = adoptions::submit(&self.adoptions, animal, requester_name)?;
        let (record, _) = store(self.sink.as_ref(), &mut self.adoptions, reduced);
        tracing::info!(request_id = record.id, animal = %record.animal_name, "adoption requested");
        Ok(record)
    }

    /// Send a contact-form message to a directory partner.
    ///
    /// Like adoption submissions, an unknown partner is always an error.
    pub fn contact_partner(
        &self,
        partner_id: u32,
        form: &ContactForm,
    ) -> Result<Notification, CoreError> {
        let notification = partners::contact(&self.partners, partner_id, form)?;
        self.sink.notify(&notification);
        tracing::info!(partner_id, "partner contacted");
        Ok(notification)
    }
}

impl std::fmt::Debug for AdminBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBoard")
            .field("reports", &self.reports.len())
            .field("adoptions", &self.adoptions.len())
            .field("partnerships", &self.partnerships.len())
            .field("animals", &self.animals.len())
            .field("partners", &self.partners.len())
            .field("policy", &self.policy)
            .field("record_limit", &self.record_limit)
            .finish_non_exhaustive()
    }
}

fn check_capacity<T: Record>(len: usize, limit: usize) -> Result<(), CoreError> {
    if len >= limit {
        tracing::warn!(entity = T::ENTITY_TYPE, limit, "record limit reached");
        return Err(CoreError::capacity_exceeded(T::ENTITY_TYPE, limit));
    }
    Ok(())
}

fn commit<T: Record + Clone>(
    policy: UnknownIdPolicy,
    sink: &dyn NotificationSink,
    list: &mut Vec<T>,
    result: Result<Reduced<T>, CoreError>,
) -> Result<Outcome<T>, CoreError> {
    match result {
        Ok(reduced) => {
            let (record, notification) = store(sink, list, reduced);
            tracing::debug!(entity = T::ENTITY_TYPE, id = record.id(), "mutation applied");
            Ok(Outcome::Applied {
                record,
                notification,
            })
        }
        Err(error) if error.is_not_found() && policy == UnknownIdPolicy::Ignore => {
            tracing::debug!(entity = T::ENTITY_TYPE, %error, "unknown id ignored");
            Ok(Outcome::Ignored)
        }
        Err(error) => {
            tracing::warn!(entity = T::ENTITY_TYPE, %error, "mutation rejected");
            Err(error)
        }
    }
}

fn store<T: Clone>(
    sink: &dyn NotificationSink,
    list: &mut Vec<T>,
    reduced: Reduced<T>,
) -> (T, Notification) {
    let record = reduced.record().clone();
    sink.notify(&reduced.notification);
    *list = reduced.records;
    (record, reduced.notification)
}
