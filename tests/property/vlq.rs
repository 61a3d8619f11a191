use proptest::prelude::*;
use sourcemap_engine::vlq;

use crate::utils::encode_segment;

proptest! {
    #[test]
    fn test_round_trip_any_i32(value in any::<i32>()) {
        let encoded = vlq::encode(value);
        prop_assert_eq!(vlq::decode(&encoded).unwrap(), vec![value]);
    }

    #[test]
    fn test_round_trip_sequences(values in prop::collection::vec(any::<i32>(), 0..16)) {
        let encoded = encode_segment(&values);
        prop_assert_eq!(vlq::decode(&encoded).unwrap(), values);
    }

    #[test]
    fn test_foreign_characters_are_rejected(
        prefix in prop::collection::vec(-1000..1000i32, 0..4),
        foreign in any::<char>().prop_filter(
            "outside the Base64 alphabet",
            |c| !c.is_ascii_alphanumeric() && *c != '+' && *c != '/',
        ),
    ) {
        let mut input = encode_segment(&prefix);
        input.push(foreign);
        prop_assert!(vlq::decode(&input).is_err());
    }
}
