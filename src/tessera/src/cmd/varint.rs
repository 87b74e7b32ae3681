use clap::Args;
use tessera_codec::Writer;

use super::Command;

/// Subcommand for printing the variable-length encoding of an integer.
#[derive(Debug, Args)]
pub struct VarInt {
    /// The unsigned value to encode.
    value: u64,
}

impl Command for VarInt {
    fn handle(self) -> eyre::Result<()> {
        let mut writer = Writer::new();
        writer.write_var_int(self.value)?;

        let hex: Vec<String> = writer
            .finish()
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect();

        println!("{}", hex.join(" "));
        Ok(())
    }
}
