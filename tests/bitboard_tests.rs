use tictactoe::{BitBoard, CellKey};

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::new();
    assert!(bb.is_empty());

    bb.set(CellKey::B2);
    assert!(bb.get(CellKey::B2));
    assert_eq!(bb.count_ones(), 1);

    bb.clear(CellKey::B2);
    assert!(!bb.get(CellKey::B2));

    bb.set(CellKey::C3);
    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_from_raw_masks_upper_bits() {
    let bb = BitBoard::from_raw(u16::MAX);
    assert_eq!(bb, BitBoard::full());
    assert_eq!(bb.count_ones(), 9);
    assert_eq!(bb.into_raw(), 0b1_1111_1111);
}

#[test]
fn test_from_keys_and_iter() {
    let bb = BitBoard::from_keys(&[CellKey::A1, CellKey::C3]);
    let keys: Vec<_> = bb.iter().collect();
    assert_eq!(keys, vec![CellKey::A1, CellKey::C3]);
    assert_eq!((bb & BitBoard::from_keys(&[CellKey::C3])).count_ones(), 1);
}
