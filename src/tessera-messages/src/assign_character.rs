use tessera_codec::{Decode, Encode, Error, Reader, Writer};

use crate::{ActorValues, GameId, Vector3};

/// Server reply assigning a character to a client-side actor.
///
/// `appearance_buffer` is an opaque blob and need not be valid UTF-8.
/// `change_flags` is carried through as an opaque mask. Its bits
/// are meaningful to whoever consumes the message; every other
/// field is always present regardless of its value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignCharacterResponse {
    pub owner: bool,
    pub cookie: u32,
    pub server_id: u32,
    pub position: Vector3,
    pub cell_id: GameId,
    pub all_actor_values: ActorValues,
    pub change_flags: u32,
    pub appearance_buffer: Vec<u8>,
    pub is_dead: bool,
    pub is_weapon_drawn: bool,
    pub is_leveled_actor: bool,
}

impl Encode for AssignCharacterResponse {
    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_bool(self.owner)?;
        writer.write_var_u32(self.cookie)?;
        writer.write_var_u32(self.server_id)?;
        writer.write(&self.position)?;
        writer.write(&self.cell_id)?;
        writer.write(&self.all_actor_values)?;
        writer.write_bits(self.change_flags as u64, u32::BITS)?;
        writer.write_string(&self.appearance_buffer)?;
        writer.write_bool(self.is_dead)?;
        writer.write_bool(self.is_weapon_drawn)?;
        writer.write_bool(self.is_leveled_actor)
    }
}

impl Decode for AssignCharacterResponse {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        log::debug!("Deserializing AssignCharacterResponse");

        let owner = reader.read_bool()?;
        let cookie = reader.read_var_u32()?;
        let server_id = reader.read_var_u32()?;
        let position = reader.read()?;
        let cell_id = reader.read()?;
        let all_actor_values = reader.read()?;
        let change_flags = reader.read_bits(u32::BITS)? as u32;
        let appearance_buffer = reader.read_string()?;
        let is_dead = reader.read_bool()?;
        let is_weapon_drawn = reader.read_bool()?;
        let is_leveled_actor = reader.read_bool()?;

        log::trace!("Got cookie {cookie} for server id {server_id}");

        Ok(Self {
            owner,
            cookie,
            server_id,
            position,
            cell_id,
            all_actor_values,
            change_flags,
            appearance_buffer,
            is_dead,
            is_weapon_drawn,
            is_leveled_actor,
        })
    }
}
