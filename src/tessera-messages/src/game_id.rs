use tessera_codec::{Decode, Encode, Error, Reader, Writer};

/// Identifies a game form by the mod that defines it and its id
/// within that mod.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameId {
    pub mod_id: u32,
    pub base_id: u32,
}

impl GameId {
    /// Creates a new [`GameId`].
    pub const fn new(mod_id: u32, base_id: u32) -> Self {
        Self { mod_id, base_id }
    }
}

impl Encode for GameId {
    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_var_u32(self.mod_id)?;
        writer.write_var_u32(self.base_id)
    }
}

impl Decode for GameId {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let mod_id = reader.read_var_u32()?;
        let base_id = reader.read_var_u32()?;

        Ok(Self { mod_id, base_id })
    }
}
