//! 16-bit mono PCM WAV container encoder.
//!
//! Builds the fixed 44-byte RIFF/WAVE descriptor and appends the raw sample
//! bytes unchanged: no resampling, no channel mixing, no amplitude
//! re-encoding. Output is deterministic, the same samples and rate always
//! produce identical bytes.

/// Size of the RIFF/WAVE descriptor preceding the sample data.
pub const HEADER_LEN: usize = 44;

/// Media type a playback surface should attach to the encoded buffer.
pub const MEDIA_TYPE: &str = "audio/wav";

const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const BYTES_PER_SAMPLE: u16 = BITS_PER_SAMPLE / 8;

/// Wraps mono 16-bit samples in a playable WAV container.
///
/// The result is exactly `44 + 2 * samples.len()` bytes. An empty slice is
/// valid and yields the header-only container.
///
/// `sample_rate` must be positive for the result to be playable; this is a
/// caller precondition, not a runtime check. A rate of zero still produces a
/// structurally well-formed header that no player can meaningfully interpret.
pub fn encode(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let data_size = (samples.len() * BYTES_PER_SAMPLE as usize) as u32;
    let file_size = 36 + data_size; // total size minus the 8-byte RIFF preamble
    let block_align = CHANNELS * BYTES_PER_SAMPLE;
    let byte_rate = sample_rate * block_align as u32;

    let mut wav = Vec::with_capacity(HEADER_LEN + data_size as usize);

    // RIFF header
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    // fmt chunk
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes()); // chunk size, 16 for PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // format tag, 1 = linear PCM
    wav.extend_from_slice(&CHANNELS.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        wav.extend_from_slice(&sample.to_le_bytes());
    }

    wav
}
