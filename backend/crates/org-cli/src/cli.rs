use crate::commands::Commands;

use clap::Parser;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(about = "Inspect and reshape the reporting hierarchy")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// User ID performing the change (required for mutations; must be an admin)
    #[arg(long, global = true)]
    pub actor: Option<Uuid>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
