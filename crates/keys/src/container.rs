//! Key container framing
//!
//! Parsing validates the frame only: header present, declared size equal
//! to the blob length, CRC intact. What the tag and payload mean is left
//! to [`KeyTag`](crate::KeyTag) and the codecs.

use streamsig_api::{Error, Result};
use streamsig_params::container::{CRC_OFFSET, HEADER_SIZE, SIZE_OFFSET, TAG_SIZE};

const CONTEXT: &str = "key container";

/// A validated view into a key blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container<'a> {
    tag: [u8; TAG_SIZE],
    payload: &'a [u8],
}

impl<'a> Container<'a> {
    /// Validate the framing of `blob`
    ///
    /// A blob too short to hold a header is an invalid parameter; a header
    /// that disagrees with the blob is a failure.
    pub fn parse(blob: &'a [u8]) -> Result<Self> {
        if blob.len() < HEADER_SIZE {
            return Err(Error::invalid_parameter(
                CONTEXT,
                format!(
                    "blob of {} bytes is shorter than the {}-byte header",
                    blob.len(),
                    HEADER_SIZE
                ),
            ));
        }

        let declared = read_u32_be(blob, SIZE_OFFSET) as usize;
        if declared != blob.len() {
            return Err(Error::fail(
                CONTEXT,
                format!(
                    "declared size {} does not match blob length {}",
                    declared,
                    blob.len()
                ),
            ));
        }

        let stored = read_u32_be(blob, CRC_OFFSET);
        let computed = checksum(blob);
        if stored != computed {
            return Err(Error::fail(
                CONTEXT,
                format!("crc mismatch (stored {:08x}, computed {:08x})", stored, computed),
            ));
        }

        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(&blob[..TAG_SIZE]);

        Ok(Self {
            tag,
            payload: &blob[HEADER_SIZE..],
        })
    }

    pub fn tag(&self) -> [u8; TAG_SIZE] {
        self.tag
    }

    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

/// Frame `payload` under `tag`
pub fn encode(tag: [u8; TAG_SIZE], payload: &[u8]) -> Result<Vec<u8>> {
    let total = HEADER_SIZE + payload.len();
    let size = u32::try_from(total)
        .map_err(|_| Error::fail(CONTEXT, format!("payload of {} bytes is too large", payload.len())))?;

    let mut out = Vec::new();
    out.try_reserve_exact(total)?;
    out.extend_from_slice(&tag);
    out.extend_from_slice(&size.to_be_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(payload);

    let crc = checksum(&out);
    out[CRC_OFFSET..HEADER_SIZE].copy_from_slice(&crc.to_be_bytes());
    Ok(out)
}

/// CRC-32 of a whole container with its CRC field taken as zero
///
/// `container` must be at least [`HEADER_SIZE`] bytes long.
pub fn checksum(container: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&container[..CRC_OFFSET]);
    hasher.update(&[0u8; 4]);
    hasher.update(&container[HEADER_SIZE..]);
    hasher.finalize()
}

fn read_u32_be(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
