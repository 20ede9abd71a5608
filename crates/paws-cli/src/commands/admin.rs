use std::sync::Arc;

use paws_admin::{AdminBoard, Outcome};
use paws_config::PawsConfig;
use paws_core::enums::{AdoptionAction, ReportAction, UnknownIdPolicy};
use paws_core::notification::{Notification, NotificationSink, TracingSink};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::admin::{AdminTable, ListArgs};
use crate::cli::subcommands::{AdminCommands, PartnershipCommands};
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

/// Result of one admin action followed by the table it touched.
#[derive(Debug, Serialize)]
struct ActionOutput<T> {
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification: Option<Notification>,
    records: Vec<T>,
}

impl<T: Clone> ActionOutput<T> {
    fn new(outcome: Outcome<T>, records: &[T]) -> Self {
        match outcome {
            Outcome::Applied { notification, .. } => Self {
                outcome: "applied",
                notification: Some(notification),
                records: records.to_vec(),
            },
            Outcome::Ignored => Self {
                outcome: "ignored",
                notification: None,
                records: records.to_vec(),
            },
        }
    }
}

pub fn handle(
    action: &AdminCommands,
    config: &PawsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AdminCommands::Report(args) => {
            let action: ReportAction = parse_enum(&args.action, "report action")?;
            let mut board = board(config, args.strict);
            let outcome = board.apply_report(args.id, action)?;
            output(&ActionOutput::new(outcome, board.reports()), flags.format)
        }
        AdminCommands::Adoption(args) => {
            let action: AdoptionAction = parse_enum(&args.action, "adoption action")?;
            let mut board = board(config, args.strict);
            let outcome = board.apply_adoption(args.id, action)?;
            output(&ActionOutput::new(outcome, board.adoptions()), flags.format)
        }
        AdminCommands::Partnership {
            action: PartnershipCommands::Toggle(args),
        } => {
            let mut board = board(config, args.strict);
            let outcome = board.toggle_partnership(args.id)?;
            output(
                &ActionOutput::new(outcome, board.partnerships()),
                flags.format,
            )
        }
        AdminCommands::List(args) => list(args, config, flags),
    }
}

fn list(args: &ListArgs, config: &PawsConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let board = board(config, false);
    match args.table {
        AdminTable::Reports => output(&board.reports(), flags.format),
        AdminTable::Adoptions => output(&board.adoptions(), flags.format),
        AdminTable::Partnerships => output(&board.partnerships(), flags.format),
    }
}

fn board(config: &PawsConfig, strict: bool) -> AdminBoard {
    let sink: Arc<dyn NotificationSink> = Arc::new(TracingSink);
    AdminBoard::seeded(policy(config, strict), sink)
}

const fn policy(config: &PawsConfig, strict: bool) -> UnknownIdPolicy {
    if strict {
        UnknownIdPolicy::Reject
    } else {
        config.admin.unknown_id
    }
}
