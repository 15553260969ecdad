//! Property tests for the signature envelope: encoding round trips,
//! deterministic signing and tamper detection.

#[cfg(test)]
mod tests {
    use crate::fixtures::keypair;
    use proptest::prelude::*;
    use sp_02_signature_envelope::{Action, Codec, EnvelopeCodecApi, EnvelopeError};

    fn arb_action() -> impl Strategy<Value = Action> {
        prop_oneof![
            ".{0,32}".prop_map(|name| Action::create_account(name)),
            (".{0,32}", ".{0,128}").prop_map(|(title, content)| Action::add_post(title, content)),
        ]
    }

    proptest! {
        #[test]
        fn prop_payload_round_trip(action in arb_action()) {
            let codec = Codec::standard();
            let payload = codec.encode_action(&action).unwrap();
            prop_assert_eq!(codec.decode_action(&payload).unwrap(), action);
        }

        #[test]
        fn prop_signed_action_is_recovered(action in arb_action(), signer in 0u8..8) {
            let codec = Codec::standard();
            let key = keypair(signer);
            let validated = codec.receive(&codec.sign(&action, &key).unwrap()).unwrap();

            prop_assert!(validated.is_valid());
            prop_assert_eq!(validated.signer_address(), Some(key.public_key().address()));
            prop_assert_eq!(validated.action(), &action);
        }

        #[test]
        fn prop_signing_is_deterministic(action in arb_action(), signer in 0u8..8) {
            let codec = Codec::standard();
            let key = keypair(signer);
            prop_assert_eq!(codec.sign(&action, &key).unwrap(), codec.sign(&action, &key).unwrap());
        }

        #[test]
        fn prop_flipped_payload_bit_is_rejected(action in arb_action(), bit in any::<prop::sample::Index>()) {
            let codec = Codec::standard();
            let mut envelope = codec.seal(&action, &keypair(0)).unwrap();
            let i = bit.index(envelope.payload.len() * 8);
            envelope.payload[i / 8] ^= 1 << (i % 8);

            prop_assert!(matches!(codec.open(&envelope), Err(EnvelopeError::InvalidSignature)));
        }

        #[test]
        fn prop_flipped_signature_bit_is_rejected(action in arb_action(), bit in 0usize..512) {
            let codec = Codec::standard();
            let mut envelope = codec.seal(&action, &keypair(0)).unwrap();
            envelope.signature[bit / 8] ^= 1 << (bit % 8);

            prop_assert!(matches!(codec.open(&envelope), Err(EnvelopeError::InvalidSignature)));
        }

        #[test]
        fn prop_foreign_signer_is_rejected(action in arb_action(), a in 0u8..4, b in 4u8..8) {
            let codec = Codec::standard();
            let mut envelope = codec.seal(&action, &keypair(a)).unwrap();
            envelope.signer = *keypair(b).public_key().as_bytes();

            prop_assert!(matches!(codec.open(&envelope), Err(EnvelopeError::InvalidSignature)));
        }

        #[test]
        fn prop_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
            let _ = Codec::standard().receive(&bytes);
        }
    }
}
