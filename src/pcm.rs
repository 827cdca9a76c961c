//! Lossless conversion between raw little-endian PCM byte payloads and
//! 16-bit samples.

use crate::error::{AudioError, Result};

/// Reinterprets a raw little-endian 16-bit payload as samples.
///
/// The payload must contain a whole number of samples; an odd byte count is
/// rejected rather than silently truncated.
pub fn samples_from_le_bytes(bytes: &[u8]) -> Result<Vec<i16>> {
    if bytes.len() % 2 != 0 {
        return Err(AudioError::MisalignedPcm(bytes.len()));
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Serializes samples back to raw little-endian bytes.
pub fn samples_to_le_bytes(samples: &[i16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}
