use fixed_bitvec::{BitVector, BitVectorError, word_count};

type Small = BitVector<5, { word_count(5) }>;
type Wide = BitVector<153, { word_count(153) }>;

const FROM_VALUE: Small = Small::from_u64(0x0f);
const FROM_TEXT: Small = match Small::from_ascii(b"10101") {
    Ok(bv) => bv,
    Err(_) => panic!("invalid literal"),
};
const XORED: Small = FROM_VALUE.bit_xor(&FROM_TEXT);
const SHIFTED: Wide = Wide::from_u64(0b11).shifted_left(100);
const FLIPPED: Wide = {
    let mut bv = Wide::with_all_set();
    bv.flip_all();
    match bv.set(152) {
        Ok(_) => {}
        Err(_) => panic!("index in range"),
    }
    bv
};

const _: () = assert!(XORED.count() == 3);
const _: () = assert!(matches!(XORED.to_u64(), Ok(0x1a)));
const _: () = assert!(matches!(SHIFTED.test(101), Ok(true)));
const _: () = assert!(matches!(SHIFTED.test(102), Ok(false)));
const _: () = assert!(matches!(
    SHIFTED.test(153),
    Err(BitVectorError::OutOfRange { index: 153, len: 153 })
));
const _: () = assert!(SHIFTED.shifted_right(100).equals(&Wide::from_u64(0b11)));
const _: () = assert!(FLIPPED.count() == 1 && FLIPPED.get(152));
const _: () = assert!(Wide::from_u64(153).hash_value() == 153);
const _: () = assert!(Small::with_all_set().all() && Small::new().none());

fn main() {
    assert_eq!(XORED.to_string(), "11010");
    assert_eq!(FLIPPED.iter_ones().collect::<Vec<_>>(), [152]);
}
