use bit_words::{BitVector, IndexError, LengthMismatchError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn new_is_zeroed(len in 0usize..300) {
        let vector = BitVector::new(len);

        prop_assert_eq!(len, vector.len());
        prop_assert_eq!(0, vector.count());
        prop_assert_eq!(vec![false; len], vector.to_bools());
    }

    #[test]
    fn set_get((len, index) in len_and_index(300), value in any::<bool>()) {
        let mut vector = BitVector::new(len);
        vector.set(index, value).expect("in bounds");

        for j in 0..len {
            prop_assert_eq!(Ok(j == index && value), vector.get(j));
        }
    }

    #[test]
    fn set_out_of_bounds(len in 0usize..300, excess in 0usize..100) {
        let mut vector = BitVector::new(len);
        let index = len + excess;

        let error = IndexError { index, len };

        prop_assert_eq!(Err(error), vector.get(index));
        prop_assert_eq!(Some(error), vector.set(index, true).err());
        prop_assert_eq!(Some(error), vector.toggle(index).err());
        prop_assert_eq!(BitVector::new(len), vector);
    }

    #[test]
    fn toggle_self_inverse(bits in arbitrary_bits(300), seed in any::<usize>()) {
        prop_assume!(!bits.is_empty());

        let index = seed % bits.len();
        let original = BitVector::from_iter(bits.iter().copied());

        let mut vector = original.clone();
        vector.toggle(index).expect("in bounds");

        prop_assert_eq!(Ok(!bits[index]), vector.get(index));

        vector.toggle(index).expect("in bounds");

        prop_assert_eq!(original, vector);
    }

    #[test]
    fn matches_model(bits in arbitrary_bits(300)) {
        let vector = BitVector::from_iter(bits.iter().copied());

        let ones: Vec<usize> = bits.iter().enumerate().filter(|(_, bit)| **bit).map(|(i, _)| i).collect();
        let logical: String = bits.iter().map(|bit| if *bit { '1' } else { '0' }).collect();
        let binary: String = logical.chars().rev().collect();

        prop_assert_eq!(bits.len(), vector.len());
        prop_assert_eq!(ones.len(), vector.count());
        prop_assert_eq!(&bits, &vector.to_bools());
        prop_assert_eq!(ones, vector.to_indices());
        prop_assert_eq!(logical, vector.to_string());
        prop_assert_eq!(binary, vector.to_binary_string());
    }

    #[test]
    fn not_matches_model(bits in arbitrary_bits(300)) {
        let mut vector = BitVector::from_iter(bits.iter().copied());
        vector.not();

        let expected: Vec<bool> = bits.iter().map(|bit| !bit).collect();

        prop_assert_eq!(expected.iter().filter(|bit| **bit).count(), vector.count());
        prop_assert_eq!(expected, vector.to_bools());
    }

    #[test]
    fn not_twice(bits in arbitrary_bits(300)) {
        let original = BitVector::from_iter(bits);

        let mut vector = original.clone();
        vector.not().not();

        prop_assert_eq!(original, vector);
    }

    #[test]
    fn bitwise_matches_model((left, right) in equal_length_bits(300)) {
        let a = BitVector::from_iter(left.iter().copied());
        let b = BitVector::from_iter(right.iter().copied());

        let mut and = a.clone();
        and.and(&b).expect("same length");

        let mut or = a.clone();
        or.or(&b).expect("same length");

        let mut xor = a.clone();
        xor.xor(&b).expect("same length");

        let pairs = || left.iter().zip(right.iter());

        prop_assert_eq!(pairs().map(|(l, r)| *l && *r).collect::<Vec<_>>(), and.to_bools());
        prop_assert_eq!(pairs().map(|(l, r)| *l || *r).collect::<Vec<_>>(), or.to_bools());
        prop_assert_eq!(pairs().map(|(l, r)| *l ^ *r).collect::<Vec<_>>(), xor.to_bools());

        prop_assert_eq!(a.count() + b.count(), and.count() + or.count());
    }

    #[test]
    fn bitwise_length_mismatch(left in arbitrary_bits(100), right in arbitrary_bits(100)) {
        prop_assume!(left.len() != right.len());

        let original = BitVector::from_iter(left.iter().copied());
        let other = BitVector::from_iter(right.iter().copied());

        let error = LengthMismatchError { left: left.len(), right: right.len() };

        let mut vector = original.clone();

        prop_assert_eq!(Some(error), vector.and(&other).err());
        prop_assert_eq!(Some(error), vector.or(&other).err());
        prop_assert_eq!(Some(error), vector.xor(&other).err());
        prop_assert_eq!(original, vector);
    }

    #[test]
    fn equality_matches_model((left, right) in equal_length_bits(100)) {
        let a = BitVector::from_iter(left.iter().copied());
        let b = BitVector::from_iter(right.iter().copied());

        prop_assert_eq!(left == right, a == b);
    }

    #[test]
    fn hex_round_trip(hex in "(0x)?[0-9a-fA-F]{0,40}") {
        let vector = BitVector::from_hex(&hex).expect("valid");

        let digits = hex.trim_start_matches("0x").to_ascii_lowercase();
        let padded = format!("{digits:0>width$}", width = digits.len().div_ceil(8) * 8);

        prop_assert_eq!(padded, vector.to_hex_string());
    }

    #[test]
    fn hex_round_trip_with_len(bits in arbitrary_bits(300)) {
        let vector = BitVector::from_iter(bits);

        let parsed = BitVector::from_hex_with_len(vector.len().div_ceil(32) * 32, &vector.to_hex_string())
            .expect("valid");

        prop_assert_eq!(vector.words(), parsed.words());
    }

    #[test]
    fn json_round_trip(bits in arbitrary_bits(300)) {
        let vector = BitVector::from_iter(bits);

        let json = vector.to_json();

        prop_assert_eq!(Ok(vector.clone()), BitVector::from_json_with_len(vector.len(), &json));

        let whole = BitVector::from_json(&json).expect("valid");

        prop_assert_eq!(vector.words(), whole.words());
        prop_assert_eq!(vector.len().div_ceil(32) * 32, whole.len());
    }

    #[test]
    fn json_round_trip_whole_words(words in prop::collection::vec(any::<u32>(), 0..10)) {
        let vector = BitVector::from_word_vec(words.clone()).expect("no overflow");

        prop_assert_eq!(words, vector.to_words());
        prop_assert_eq!(Ok(vector.clone()), BitVector::from_json(&vector.to_json()));
    }
}

#[test]
fn concrete_set_scenario() {
    let mut vector = BitVector::new(32);
    vector.set(31, true).and_then(|v| v.set(0, true)).and_then(|v| v.set(15, true)).expect("in bounds");

    assert_eq!("10000000000000010000000000000001", vector.to_string());
}

#[test]
fn concrete_hex_scenario() {
    let vector = BitVector::from_hex_with_len(32, "deadbeef").expect("valid");

    assert_eq!("11011110101011011011111011101111", vector.to_binary_string());
    assert_eq!("deadbeef", vector.to_hex_string());
}

#[test]
fn concrete_count_scenario() {
    let mut vector = BitVector::new(72);

    for index in [1, 12, 32, 70] {
        vector.set(index, true).expect("in bounds");
    }

    assert_eq!(4, vector.count());
}

fn arbitrary_bits(max_len: usize) -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..max_len)
}

fn len_and_index(max_len: usize) -> impl Strategy<Value = (usize, usize)> {
    (1..max_len).prop_flat_map(|len| (Just(len), 0..len))
}

fn equal_length_bits(max_len: usize) -> impl Strategy<Value = (Vec<bool>, Vec<bool>)> {
    (0..max_len).prop_flat_map(|len| {
        (
            prop::collection::vec(any::<bool>(), len),
            prop::collection::vec(any::<bool>(), len),
        )
    })
}
