use clap::{Args, Subcommand};
use tessera_codec::{ReaderOptions, from_bytes_with, to_bytes};
use tessera_messages::AssignCharacterResponse;

use super::Command;
use crate::cli::io::InputOutput;

/// Subcommand for working with encoded messages.
#[derive(Debug, Args)]
pub struct Msg {
    #[clap(subcommand)]
    command: MsgCommand,

    #[clap(flatten)]
    limits: Limits,
}

#[derive(Debug, Subcommand)]
enum MsgCommand {
    /// Deserializes an encoded AssignCharacterResponse into JSON format.
    De(InputOutput),
    /// Serializes an AssignCharacterResponse from JSON into its wire format.
    Ser(InputOutput),
}

/// Limits applied to untrusted input during deserialization.
#[derive(Clone, Copy, Debug, Args)]
struct Limits {
    /// The largest string length in bytes to accept.
    #[clap(long, global = true, env = "TESSERA_MAX_STRING_LEN")]
    max_string_len: Option<usize>,

    /// The largest sequence length in elements to accept.
    #[clap(long, global = true, env = "TESSERA_MAX_SEQUENCE_LEN")]
    max_sequence_len: Option<usize>,
}

impl Limits {
    fn reader_options(self) -> ReaderOptions {
        let defaults = ReaderOptions::default();
        ReaderOptions {
            max_string_len: self.max_string_len.unwrap_or(defaults.max_string_len),
            max_sequence_len: self.max_sequence_len.unwrap_or(defaults.max_sequence_len),
            ..defaults
        }
    }
}

// serde_json writes NaN and infinities as `null`, which `ser` can't read back.
fn ensure_json_floats(message: &AssignCharacterResponse) -> eyre::Result<()> {
    let position = &message.position;
    let actor_values = &message.all_actor_values;

    let finite = [position.x, position.y, position.z]
        .into_iter()
        .chain(
            actor_values
                .values
                .iter()
                .chain(&actor_values.max_values)
                .map(|v| v.value),
        )
        .all(f32::is_finite);

    if !finite {
        eyre::bail!("message contains NaN or infinite floats which cannot be represented in JSON");
    }

    Ok(())
}

impl Command for Msg {
    fn handle(self) -> eyre::Result<()> {
        match self.command {
            MsgCommand::De(args) => {
                let options = self.limits.reader_options();
                let data = args.read_input()?;

                log::info!("Deserializing {} bytes with config {options:?}", data.len());
                let message: AssignCharacterResponse = from_bytes_with(options, &data)
                    .inspect_err(|e| log::warn!("Rejected input: {e}"))?;
                ensure_json_floats(&message)?;

                let mut json = serde_json::to_vec_pretty(&message)?;
                json.push(b'\n');
                args.write_output(&json)
            }

            MsgCommand::Ser(args) => {
                let json = args.read_input()?;
                let message: AssignCharacterResponse = serde_json::from_slice(&json)?;

                let data = to_bytes(&message)?;
                log::info!("Serialized message into {} bytes", data.len());
                args.write_output(&data)
            }
        }
    }
}
