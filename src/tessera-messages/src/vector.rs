use tessera_codec::{Decode, Encode, Error, Reader, Writer};

/// A point or direction in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Encode for Vector3 {
    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_f32(self.x)?;
        writer.write_f32(self.y)?;
        writer.write_f32(self.z)
    }
}

impl Decode for Vector3 {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let x = reader.read_f32()?;
        let y = reader.read_f32()?;
        let z = reader.read_f32()?;

        Ok(Self { x, y, z })
    }
}
