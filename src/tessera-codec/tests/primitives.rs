use tessera_codec::{varint, Error, Reader, ReaderOptions, Writer};

fn var_int_bytes(value: u64) -> Result<Vec<u8>, Error> {
    let mut writer = Writer::new();
    writer.write_var_int(value)?;
    Ok(writer.finish())
}

#[test]
fn var_int_is_minimal() -> Result<(), Error> {
    assert_eq!(var_int_bytes(0)?, [0x00]);
    assert_eq!(var_int_bytes(127)?, [0x7F]);
    assert_eq!(var_int_bytes(128)?, [0x80, 0x01]);
    assert_eq!(var_int_bytes(300)?, [0xAC, 0x02]);
    assert_eq!(var_int_bytes(16_383)?.len(), 2);
    assert_eq!(var_int_bytes(16_384)?.len(), 3);

    let max = var_int_bytes(u64::MAX)?;
    assert_eq!(max.len(), varint::MAX_LEN);
    assert_eq!(max.last(), Some(&0x01));

    for shift in 0..u64::BITS {
        let value = 1u64 << shift;
        let expected = (shift as usize + 1).div_ceil(7);
        assert_eq!(var_int_bytes(value)?.len(), expected);
        assert_eq!(varint::encoded_len(value), expected);
    }

    Ok(())
}

#[test]
fn var_int_rejects_malformed_input() {
    // Non-minimal encoding of zero.
    let mut reader = Reader::new(&[0x80, 0x00]);
    assert_eq!(reader.read_var_int(), Err(Error::MalformedVarInt));

    // Eleven bytes of continuation.
    let mut reader = Reader::new(&[0xFF; 11]);
    assert_eq!(reader.read_var_int(), Err(Error::MalformedVarInt));

    // Tenth byte carries more than the topmost bit.
    let mut data = [0xFF; 10];
    data[9] = 0x02;
    let mut reader = Reader::new(&data);
    assert_eq!(reader.read_var_int(), Err(Error::MalformedVarInt));

    // Fine as u64, too large for u32.
    let mut reader = Reader::new(&[0x80, 0x80, 0x80, 0x80, 0x10]);
    assert_eq!(reader.read_var_u32(), Err(Error::MalformedVarInt));

    // High bits are not masked away.
    let mut reader = Reader::new(&[0x87, 0x80, 0x80, 0x80, 0x10]);
    assert_eq!(reader.read_var_u32(), Err(Error::MalformedVarInt));
}

#[test]
fn var_int_truncated() {
    let mut reader = Reader::new(&[0x80]);
    assert!(matches!(
        reader.read_var_int(),
        Err(Error::BufferUnderrun { requested: 8, remaining: 0 })
    ));
}

#[test]
fn fixed_bits_reject_overflow() -> Result<(), Error> {
    let mut writer = Writer::new();

    assert_eq!(
        writer.write_bits(16, 4),
        Err(Error::OverflowOnWrite { value: 16, width: 4 })
    );
    assert_eq!(
        writer.write_signed_bits(-5, 3),
        Err(Error::OverflowOnWrite { value: -5, width: 3 })
    );
    assert_eq!(writer.write_bits(0, 0), Err(Error::InvalidWidth(0)));
    assert_eq!(writer.write_bits(0, 65), Err(Error::InvalidWidth(65)));
    assert_eq!(writer.written_bits(), 0);

    writer.write_bits(15, 4)?;
    writer.write_signed_bits(-4, 3)?;
    writer.write_bits(u64::MAX, 64)?;
    assert_eq!(writer.written_bits(), 71);

    let data = writer.finish();
    let mut reader = Reader::new(&data);
    assert_eq!(reader.read_bits(4)?, 15);
    assert_eq!(reader.read_signed_bits(3)?, -4);
    assert_eq!(reader.read_bits(64)?, u64::MAX);

    Ok(())
}

#[test]
fn booleans_pack_into_bits() -> Result<(), Error> {
    let pattern = [true, false, true, true, false, false, true, false, true, true];

    let mut writer = Writer::new();
    for &b in &pattern {
        writer.write_bool(b)?;
    }
    let data = writer.finish();
    assert_eq!(data, [0b0100_1101, 0b0000_0011]);

    let mut reader = Reader::new(&data);
    for &b in &pattern {
        assert_eq!(reader.read_bool()?, b);
    }

    Ok(())
}

#[test]
fn empty_string_is_one_byte() -> Result<(), Error> {
    let mut writer = Writer::new();
    writer.write_string("")?;
    assert_eq!(writer.written_bits(), 8);

    let data = writer.finish();
    assert_eq!(data, [0x00]);

    let mut reader = Reader::new(&data);
    assert_eq!(reader.read_string()?, b"");
    assert_eq!(reader.remaining_bits(), 0);

    Ok(())
}

#[test]
fn strings_are_raw_bytes() -> Result<(), Error> {
    let mut writer = Writer::new();
    writer.write_bool(true)?;
    writer.write_string(&[0xFF, 0x00, 0xFE][..])?;
    writer.write_string("héllo")?;

    let data = writer.finish();
    let mut reader = Reader::new(&data);
    assert!(reader.read_bool()?);
    assert_eq!(reader.read_string()?, [0xFF, 0x00, 0xFE]);
    assert_eq!(reader.read_utf8()?, "héllo");

    Ok(())
}

#[test]
fn invalid_utf8_is_reported() -> Result<(), Error> {
    let mut writer = Writer::new();
    writer.write_string(&[0xC3, 0x28][..])?;

    let data = writer.finish();
    let mut reader = Reader::new(&data);
    assert!(matches!(reader.read_utf8(), Err(Error::InvalidUtf8(_))));

    Ok(())
}

#[test]
fn string_length_exceeding_input() {
    let mut reader = Reader::new(&[0x05, b'a', b'b']);
    assert_eq!(
        reader.read_string(),
        Err(Error::MalformedLength {
            declared: 5,
            available: 2
        })
    );
}

#[test]
fn string_length_exceeding_ceiling() -> Result<(), Error> {
    let mut writer = Writer::new();
    writer.write_string("abcd")?;
    let data = writer.finish();

    let options = ReaderOptions {
        max_string_len: 3,
        ..Default::default()
    };
    let mut reader = Reader::with_options(&data, options);
    assert_eq!(
        reader.read_string(),
        Err(Error::MalformedLength {
            declared: 4,
            available: 3
        })
    );

    Ok(())
}

#[test]
fn hostile_string_length() -> Result<(), Error> {
    let mut writer = Writer::new();
    writer.write_var_int(u64::MAX)?;
    let data = writer.finish();

    let mut reader = Reader::new(&data);
    assert_eq!(
        reader.read_string(),
        Err(Error::MalformedLength {
            declared: u64::MAX,
            available: ReaderOptions::default().max_string_len,
        })
    );

    Ok(())
}

#[test]
fn floats() -> Result<(), Error> {
    let mut writer = Writer::new();
    writer.write_f32(1.5)?;
    writer.write_f32(f32::NEG_INFINITY)?;

    let data = writer.finish();
    assert_eq!(&data[..4], &1.5f32.to_le_bytes());

    let mut reader = Reader::new(&data);
    assert_eq!(reader.read_f32()?, 1.5);
    assert_eq!(reader.read_f32()?, f32::NEG_INFINITY);

    Ok(())
}

#[test]
fn writer_reuses_allocation() -> Result<(), Error> {
    let mut writer = Writer::from_vec(vec![1, 2, 3]);
    writer.write_var_u32(1)?;

    assert_eq!(writer.finish(), [0x01]);

    Ok(())
}

#[test]
fn bit_buffer_errors_keep_their_meaning() {
    use tessera_bit_buf::Error as BitError;

    assert_eq!(
        Error::from(BitError::CapacityOverflow {
            requested: 8,
            available: 3
        }),
        Error::CapacityOverflow {
            requested: 8,
            available: 3
        }
    );
    assert_eq!(
        Error::from(BitError::InvalidWidth(65)),
        Error::InvalidWidth(65)
    );
}
