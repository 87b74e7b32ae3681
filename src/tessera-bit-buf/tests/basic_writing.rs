use tessera_bit_buf::{BitWriter, Error};

#[test]
fn write_primitives() -> Result<(), Error> {
    let mut writer = BitWriter::new();

    writer.offer(0xFF, u8::BITS)?;
    writer.offer(0xDEAD, u16::BITS)?;
    writer.offer(0xFF, u8::BITS)?;
    writer.commit();

    assert_eq!(writer.view(), &[0xFF, 0xAD, 0xDE, 0xFF]);

    Ok(())
}

#[test]
fn write_masks_excess_bits() -> Result<(), Error> {
    let mut writer = BitWriter::new();

    writer.write_bits(0xFFFF_FFFF, 4)?;
    writer.write_bits(0, 4)?;

    assert_eq!(writer.finish(), vec![0x0F]);

    Ok(())
}

#[test]
fn write_wide_values_across_commits() -> Result<(), Error> {
    let mut writer = BitWriter::new();

    writer.write_bits(1, 1)?;
    writer.write_bits(u64::MAX, 64)?;
    writer.write_bits(0, 7)?;
    assert_eq!(writer.written_bits(), 72);

    let out = writer.finish();
    assert_eq!(out, vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]);

    Ok(())
}

#[test]
fn write_rejects_bad_widths() {
    let mut writer = BitWriter::new();

    assert_eq!(writer.write_bits(0, 0), Err(Error::InvalidWidth(0)));
    assert_eq!(writer.write_bits(0, 65), Err(Error::InvalidWidth(65)));
    assert!(matches!(
        writer.offer(0, 57),
        Err(Error::CapacityOverflow { requested: 57, .. })
    ));
    assert_eq!(writer.written_bits(), 0);
}

#[test]
fn write_bytes_and_alignment() -> Result<(), Error> {
    let mut writer = BitWriter::new();

    writer.offer(1, 1)?;
    assert_eq!(writer.written_bits(), 1);

    writer.realign_to_byte();

    writer.offer(3, u8::BITS)?;
    writer.commit();
    assert_eq!(writer.written_bits(), 16);

    writer.offer(0, 1)?;
    writer.offer(1, 1)?;

    writer.realign_to_byte();

    writer.write_bytes(&[4, 5]);

    assert_eq!(writer.view(), &[1, 3, 2, 4, 5]);

    Ok(())
}

#[test]
fn write_bytes_unaligned() -> Result<(), Error> {
    let mut writer = BitWriter::new();

    writer.write_bits(1, 1)?;
    writer.write_bytes(&[0x80, 0xFF]);
    assert_eq!(writer.written_bits(), 17);
    assert_eq!(writer.written_bytes(), 3);

    assert_eq!(writer.finish(), vec![0x01, 0xFF, 0x01]);

    Ok(())
}

#[test]
fn booleans_pack_densely() -> Result<(), Error> {
    for n in 1..=64usize {
        let mut writer = BitWriter::new();
        for i in 0..n {
            writer.write_bits((i % 3 == 0) as u64, 1)?;
        }

        assert_eq!(writer.finish().len(), n.div_ceil(8));
    }

    Ok(())
}

#[test]
fn reuse_allocation() -> Result<(), Error> {
    let mut writer = BitWriter::from_vec(vec![9, 9, 9]);
    assert_eq!(writer.written_bits(), 0);

    writer.write_bits(0xAB, 8)?;
    let out = writer.finish();
    assert_eq!(out, vec![0xAB]);

    let mut writer = BitWriter::from_vec(out);
    writer.write_bits(1, 3)?;
    writer.reset();
    assert_eq!(writer.written_bits(), 0);
    assert!(writer.finish().is_empty());

    Ok(())
}
