use tessera_codec::{Decode, Encode, Error, Reader, Writer};

/// A single attribute of an actor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorValue {
    pub id: u32,
    pub value: f32,
}

impl Encode for ActorValue {
    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_var_u32(self.id)?;
        writer.write_f32(self.value)
    }
}

impl Decode for ActorValue {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let id = reader.read_var_u32()?;
        let value = reader.read_f32()?;

        Ok(Self { id, value })
    }
}

/// Current and maximum attribute values of an actor.
///
/// Both lists are encoded as a varint count followed by the entries.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorValues {
    pub values: Vec<ActorValue>,
    pub max_values: Vec<ActorValue>,
}

impl Encode for ActorValues {
    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write(&self.values)?;
        writer.write(&self.max_values)
    }
}

impl Decode for ActorValues {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let values: Vec<ActorValue> = reader.read()?;
        let max_values: Vec<ActorValue> = reader.read()?;

        log::trace!(
            "Read {} actor values and {} maximums",
            values.len(),
            max_values.len()
        );

        Ok(Self { values, max_values })
    }
}
