//! Property tests over the streaming contract
//!
//! Only the elliptic-curve fixtures run here; RSA signing is too slow to
//! repeat for every generated case.

use proptest::prelude::*;
use streamsig::prelude::*;
use streamsig_tests::{fast, sign_chunks, verify_chunks, P256};

/// A message and a set of cut points splitting it into chunks
fn message_and_cuts() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
    prop::collection::vec(any::<u8>(), 1..512).prop_flat_map(|message| {
        let len = message.len();
        (Just(message), prop::collection::vec(0..=len, 0..8))
    })
}

fn split<'a>(message: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
    let mut cuts = cuts.to_vec();
    cuts.sort_unstable();
    let mut chunks = Vec::new();
    let mut start = 0;
    for cut in cuts {
        chunks.push(&message[start..cut]);
        start = cut;
    }
    chunks.push(&message[start..]);
    chunks
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn chunking_does_not_change_the_signature((message, cuts) in message_and_cuts()) {
        for fixture in fast() {
            let whole = sign_chunks(fixture, &[&message]);
            let pieces = sign_chunks(fixture, &split(&message, &cuts));
            prop_assert_eq!(&whole, &pieces);
            prop_assert!(verify_chunks(fixture, &split(&message, &cuts), &whole).is_ok());
        }
    }

    #[test]
    fn any_flipped_bit_is_detected(
        message in prop::collection::vec(any::<u8>(), 1..256),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let signature = sign_chunks(&P256, &[&message]);
        let mut tampered = message.clone();
        let i = index.index(tampered.len());
        tampered[i] ^= 1 << bit;

        let err = verify_chunks(&P256, &[&tampered], &signature).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidSignature);
    }

    #[test]
    fn size_queries_are_repeatable(
        queries in 1usize..5,
        capacity in 0usize..64,
    ) {
        let mut ctx = SignContext::new(&P256.private).unwrap();
        let mut buffer = vec![0u8; capacity];
        for _ in 0..queries {
            let err = ctx.finish(Some(&mut buffer)).unwrap_err();
            prop_assert_eq!(err.required_len(), Some(64));
            prop_assert_eq!(ctx.state(), State::Ready);
        }
    }

    #[test]
    fn truncating_a_key_blob_never_resolves(cut in 1usize..40) {
        let blob = &P256.private;
        let truncated = &blob[..blob.len().saturating_sub(cut)];
        prop_assert!(resolve(truncated).is_err());
    }
}
