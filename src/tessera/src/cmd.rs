pub mod msg;
pub mod varint;

/// A command which can be executed by the CLI.
pub trait Command {
    /// Runs the command to completion.
    fn handle(self) -> eyre::Result<()>;
}
