use std::sync::Arc;

use paws_admin::AdminBoard;
use paws_config::PawsConfig;
use paws_core::notification::{Notification, NotificationSink, TracingSink};
use paws_core::responses::ContactForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::partners::ContactArgs;
use crate::cli::subcommands::PartnersCommands;
use crate::output::output;

pub fn handle(
    action: &PartnersCommands,
    config: &PawsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let sink: Arc<dyn NotificationSink> = Arc::new(TracingSink);
    let board = AdminBoard::seeded(config.admin.unknown_id, sink);
    match action {
        PartnersCommands::List => output(&board.partners(), flags.format),
        PartnersCommands::Contact(args) => output(&contact(&board, args)?, flags.format),
    }
}

fn contact(board: &AdminBoard, args: &ContactArgs) -> anyhow::Result<Notification> {
    let form = ContactForm {
        name: args.name.clone(),
        email: args.email.clone(),
        message: args.message.clone(),
    };
    Ok(board.contact_partner(args.id, &form)?)
}
