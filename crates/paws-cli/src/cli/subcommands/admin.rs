use clap::{Args, Subcommand, ValueEnum};

/// Admin triage commands.
///
/// Each invocation starts from the seed board; nothing is persisted.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Apply an action to a report (start, resolve).
    Report(TriageArgs),
    /// Decide an adoption request (approve, reject).
    Adoption(TriageArgs),
    /// Partnership commands.
    Partnership {
        #[command(subcommand)]
        action: PartnershipCommands,
    },
    /// List one of the admin tables.
    List(ListArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TriageArgs {
    /// Action name.
    pub action: String,
    /// Record id.
    pub id: u32,
    /// Fail on unknown ids instead of ignoring them.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Debug, Subcommand)]
pub enum PartnershipCommands {
    /// Flip a partnership between active and inactive.
    Toggle(PartnershipToggleArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PartnershipToggleArgs {
    /// Partnership id.
    pub id: u32,
    /// Fail on unknown ids instead of ignoring them.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Which table to list.
    #[arg(value_enum, default_value = "reports")]
    pub table: AdminTable,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AdminTable {
    Reports,
    Adoptions,
    Partnerships,
}
