//! Context state machine, sizing protocol and key validation

use streamsig::prelude::*;
use streamsig_tests::{all, P256, P384, RSA_1024};

#[test]
fn size_query_is_idempotent_on_a_fresh_context() {
    for fixture in all() {
        let mut ctx = SignContext::new(&fixture.private).unwrap();
        let first = ctx.finish(None).unwrap_err();
        let second = ctx.finish(None).unwrap_err();
        assert_eq!(first, second);
        assert_eq!(first.required_len(), Some(ctx.signature_len()));
        assert_eq!(ctx.state(), State::Ready);
    }
}

#[test]
fn sizing_does_not_disturb_the_stream() {
    let mut ctx = SignContext::new(&P256.private).unwrap();
    ctx.update(b"part one, ").unwrap();
    assert_eq!(
        ctx.finish(Some(&mut [0u8; 10])).unwrap_err().kind(),
        ErrorKind::BufferTooSmall
    );
    ctx.update(b"part two").unwrap();
    let signature = ctx.finish_vec().unwrap();

    let mut verify = VerifyContext::new(&P256.public).unwrap();
    verify.update(b"part one, part two").unwrap();
    verify.verify(&signature).unwrap();
}

#[test]
fn split_and_combined_updates_agree() {
    // ECDSA signing is deterministic, so the signatures themselves match
    let combined = streamsig_tests::sign_chunks(&P384, &[b"abcdef"]);
    let split = streamsig_tests::sign_chunks(&P384, &[b"ab", b"cd", b"ef"]);
    assert_eq!(combined, split);
}

#[test]
fn signature_len_is_stable_across_states() {
    let mut ctx = SignContext::new(&RSA_1024.private).unwrap();
    let len = ctx.signature_len();
    ctx.update(b"x").unwrap();
    assert_eq!(ctx.signature_len(), len);
    ctx.finish_vec().unwrap();
    assert_eq!(ctx.signature_len(), len);
    ctx.destroy().unwrap();
    assert_eq!(ctx.signature_len(), len);
}

#[test]
fn double_destroy_is_safe() {
    for fixture in all() {
        let mut sign = SignContext::new(&fixture.private).unwrap();
        sign.destroy().unwrap();
        sign.destroy().unwrap();

        let mut verify = VerifyContext::new(&fixture.public).unwrap();
        verify.update(b"abandoned").unwrap();
        verify.destroy().unwrap();
        verify.destroy().unwrap();
        assert_eq!(verify.state(), State::Destroyed);
    }
}

#[test]
fn terminal_states_reject_streaming() {
    let mut ctx = SignContext::new(&P256.private).unwrap();
    ctx.finish_vec().unwrap();
    assert_eq!(ctx.update(b"more").unwrap_err().kind(), ErrorKind::InvalidParameter);

    let mut ctx = VerifyContext::new(&P256.public).unwrap();
    ctx.destroy().unwrap();
    assert_eq!(
        ctx.verify(&[0u8; 64]).unwrap_err().kind(),
        ErrorKind::InvalidParameter
    );
}

#[test]
fn zero_length_update_is_rejected() {
    let mut ctx = VerifyContext::new(&P384.public).unwrap();
    assert_eq!(ctx.update(&[]).unwrap_err().kind(), ErrorKind::InvalidParameter);
    assert_eq!(ctx.state(), State::Ready);
}

#[test]
fn truncated_key_blob_fails_construction() {
    for fixture in all() {
        for blob in [&fixture.private, &fixture.public] {
            let truncated = &blob[..blob.len() - 1];
            assert_eq!(
                VerifyContext::new(truncated).err().unwrap().kind(),
                ErrorKind::Fail
            );
        }
        let truncated = &fixture.private[..fixture.private.len() - 1];
        assert_eq!(SignContext::new(truncated).err().unwrap().kind(), ErrorKind::Fail);
    }
}

#[test]
fn header_only_and_empty_blobs() {
    assert_eq!(
        SignContext::new(&[]).err().unwrap().kind(),
        ErrorKind::InvalidParameter
    );
    assert_eq!(
        VerifyContext::new(&P256.public[..11]).err().unwrap().kind(),
        ErrorKind::InvalidParameter
    );
}

#[test]
fn drop_without_destroy_is_fine() {
    for fixture in all() {
        let mut ctx = SignContext::new(&fixture.private).unwrap();
        ctx.update(b"dropped mid-stream").unwrap();
        drop(ctx);
    }
}
