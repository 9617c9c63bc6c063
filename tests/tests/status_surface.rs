//! The status-code surface as a session-protocol binding would drive it

use streamsig::api::Status;
use streamsig::sign::status::*;
use streamsig::sign::{SignContext, VerifyContext};
use streamsig_tests::{all, P256};

fn create_signer(blob: &[u8]) -> SignContext {
    let mut out = None;
    assert_eq!(sign_create(Some(blob), &mut out), Status::Success);
    out.unwrap()
}

fn create_verifier(blob: &[u8]) -> VerifyContext {
    let mut out = None;
    assert_eq!(verify_create(Some(blob), &mut out), Status::Success);
    out.unwrap()
}

#[test]
fn negotiate_then_sign_then_verify() {
    for fixture in all() {
        let mut signer = create_signer(&fixture.private);
        assert_eq!(sign_update(Some(&mut signer), Some(b"hello")), Status::Success);

        let mut len = 0;
        assert_eq!(sign_final(Some(&mut signer), None, Some(&mut len)), Status::BufferTooSmall);
        let mut signature = vec![0u8; len];

        // one byte short
        let mut short = len - 1;
        assert_eq!(
            sign_final(Some(&mut signer), Some(&mut signature), Some(&mut short)),
            Status::BufferTooSmall
        );
        assert_eq!(short, len);

        assert_eq!(
            sign_final(Some(&mut signer), Some(&mut signature), Some(&mut len)),
            Status::Success
        );
        assert_eq!(sign_destroy(Some(&mut signer)), Status::Success);
        assert_eq!(sign_destroy(Some(&mut signer)), Status::Success);

        let mut verifier = create_verifier(&fixture.public);
        assert_eq!(verify_update(Some(&mut verifier), Some(b"hello")), Status::Success);
        assert_eq!(verify_final(Some(&mut verifier), Some(&signature)), Status::Success);
    }
}

#[test]
fn invalid_arguments() {
    let mut signer = create_signer(&P256.private);
    assert_eq!(sign_update(Some(&mut signer), None), Status::InvalidParameter);
    assert_eq!(sign_update(Some(&mut signer), Some(&[])), Status::InvalidParameter);
    assert_eq!(sign_update(None, Some(b"x")), Status::InvalidParameter);
    assert_eq!(sign_destroy(None), Status::InvalidParameter);

    let mut verifier = create_verifier(&P256.public);
    assert_eq!(verify_update(Some(&mut verifier), None), Status::InvalidParameter);
    assert_eq!(verify_final(Some(&mut verifier), None), Status::InvalidParameter);
    assert_eq!(verify_destroy(None), Status::InvalidParameter);
}

#[test]
fn wrong_length_signature_is_fail() {
    let mut verifier = create_verifier(&P256.public);
    verify_update(Some(&mut verifier), Some(b"data"));
    assert_eq!(verify_final(Some(&mut verifier), Some(&[0u8; 63])), Status::Fail);
    assert_eq!(verify_final(Some(&mut verifier), Some(&[0u8; 64])), Status::InvalidSignature);
}

#[test]
fn raw_codes() {
    let mut out = None;
    assert_eq!(sign_create(Some(&[1, 2, 3]), &mut out).code(), 12);
    assert_eq!(sign_create(Some(&P256.public), &mut out).code(), 11);
    assert!(out.is_none());
}
