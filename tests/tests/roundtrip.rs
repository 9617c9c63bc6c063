//! Sign/verify round trips across every supported algorithm

use streamsig::prelude::*;
use streamsig::keys::resolve;
use streamsig_tests::{all, sign_chunks, verify_chunks, P256, RSA_2048, RSA_4096};

#[test]
fn every_algorithm_round_trips() {
    for fixture in all() {
        let signature = sign_chunks(fixture, &[b"The quick brown fox ", b"jumps over the lazy dog"]);
        assert_eq!(signature.len(), signature_len(fixture.algorithm));
        verify_chunks(fixture, &[b"The quick brown fox jumps over the lazy dog"], &signature)
            .unwrap_or_else(|e| panic!("{}: {}", fixture.algorithm, e));
    }
}

#[test]
fn empty_message_round_trips() {
    for fixture in all() {
        let signature = sign_chunks(fixture, &[]);
        verify_chunks(fixture, &[], &signature).unwrap();
    }
}

#[test]
fn large_message_round_trips() {
    let message: Vec<u8> = (0..1_000_000u32).map(|i| (i % 251) as u8).collect();
    for fixture in [&*RSA_2048, &*P256] {
        let chunks: Vec<&[u8]> = message.chunks(4096).collect();
        let signature = sign_chunks(fixture, &chunks);
        verify_chunks(fixture, &[&message], &signature).unwrap();
    }
}

#[test]
fn one_flipped_byte_is_invalid_signature() {
    for fixture in all() {
        let message = b"authenticated session transcript".to_vec();
        let signature = sign_chunks(fixture, &[&message]);

        for position in [0, message.len() / 2, message.len() - 1] {
            let mut tampered = message.clone();
            tampered[position] ^= 0x01;
            let err = verify_chunks(fixture, &[&tampered], &signature).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidSignature, "{}", fixture.algorithm);
        }
    }
}

#[test]
fn signature_from_another_key_is_rejected() {
    let other = streamsig_tests::RSA_1024.private.clone();
    let mut ctx = SignContext::new(&other).unwrap();
    ctx.update(b"who signed this").unwrap();
    let signature = ctx.finish_vec().unwrap();

    // a 1024-bit signature is the wrong length for a 2048-bit key
    let err = verify_chunks(&RSA_2048, &[b"who signed this"], &signature).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Fail);
}

#[test]
fn rsa_4096_blobs_resolve_to_their_size_class() {
    let private = resolve(&RSA_4096.private).unwrap();
    let public = resolve(&RSA_4096.public).unwrap();
    assert_eq!(private.algorithm, AlgorithmId::RsaPss4096);
    assert_eq!(public.algorithm, AlgorithmId::RsaPss4096);
    assert_eq!(export_public_key(&private.material).unwrap(), RSA_4096.public);
}

#[test]
fn rsa_4096_sized_signing() {
    let mut ctx = SignContext::new(&RSA_4096.private).unwrap();
    assert_eq!(ctx.signature_len(), 512);
    ctx.update(b"a long-lived server identity").unwrap();

    let mut short = [0u8; 511];
    let err = ctx.finish(Some(&mut short)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferTooSmall);

    let mut signature = [0u8; 512];
    assert_eq!(ctx.finish(Some(&mut signature)).unwrap(), 512);
    verify_chunks(&RSA_4096, &[b"a long-lived server identity"], &signature).unwrap();
}
