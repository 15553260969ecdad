//! Property tests for entity key encoding: byte order must follow the
//! logical `(account, number)` order so range scans walk posts in sequence.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use shared_types::{Address, ADDRESS_LENGTH};
    use sp_03_post_store::{AccountKey, Key, PostKey};

    fn arb_address() -> impl Strategy<Value = Address> {
        prop::array::uniform20(any::<u8>())
    }

    proptest! {
        #[test]
        fn prop_post_key_order_matches_tuple_order(
            a in arb_address(),
            b in arb_address(),
            m in 1u32..,
            n in 1u32..,
        ) {
            let left = PostKey::new(a, m).encode().unwrap();
            let right = PostKey::new(b, n).encode().unwrap();
            prop_assert_eq!(left.cmp(&right), (a, m).cmp(&(b, n)));
        }

        #[test]
        fn prop_account_bounds_hold_exactly_its_posts(
            owner in arb_address(),
            other in arb_address(),
            n in 1u32..,
        ) {
            let (start, end) = PostKey::for_account(owner).range_bounds();
            let own = PostKey::new(owner, n).encode().unwrap();
            prop_assert!(start <= own && own <= end);

            let foreign = PostKey::new(other, n).encode().unwrap();
            prop_assert_eq!(start <= foreign && foreign <= end, other == owner);

            let account = AccountKey::new(owner).encode().unwrap();
            prop_assert!(!(start <= account && account <= end));
        }

        #[test]
        fn prop_complete_keys_decode_back(owner in arb_address(), n in 1u32..) {
            let post = PostKey::new(owner, n);
            prop_assert_eq!(Key::decode(&post.encode().unwrap()), Some(Key::from(post)));

            let account = AccountKey::new(owner);
            let bytes = account.encode().unwrap();
            prop_assert_eq!(bytes.len(), 1 + ADDRESS_LENGTH);
            prop_assert_eq!(Key::decode(&bytes), Some(Key::from(account)));
        }

        #[test]
        fn prop_sentinel_number_is_incomplete(owner in arb_address()) {
            prop_assert!(!PostKey::for_account(owner).is_complete());
            prop_assert!(PostKey::for_account(owner).encode().is_err());
        }
    }
}
