use clap::{Args, Subcommand};

/// Partner directory commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PartnersCommands {
    /// List partner organizations.
    List,
    /// Send a contact-form message to a partner.
    Contact(ContactArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ContactArgs {
    /// Partner id.
    pub id: u32,
    /// Your name.
    #[arg(long)]
    pub name: String,
    /// Your email address.
    #[arg(long)]
    pub email: String,
    /// Message body.
    #[arg(long)]
    pub message: String,
}
