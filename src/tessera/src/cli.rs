use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;

pub mod io;

pub const HYPHEN: &str = "-";

/// The CLI interface for the Tessera application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: TesseraCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}

/// The top-level commands supported by Tessera.
#[derive(Debug, Subcommand)]
pub enum TesseraCommand {
    Msg(msg::Msg),
    Varint(varint::VarInt),
}

impl Command for TesseraCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Msg(msg) => msg.handle(),
            Self::Varint(varint) => varint.handle(),
        }
    }
}
