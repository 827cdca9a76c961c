//! # tts_audio
//!
//! Turns the raw audio payload returned by a speech-synthesis service into a
//! playable WAV byte buffer.
//!
//! This crate provides:
//! - A deterministic 16-bit mono PCM WAV encoder ([`wav::encode`])
//! - Lossless raw-byte / sample conversion ([`pcm`])
//! - Parsing of the inline audio part of a synthesis response, including the
//!   base64 payload and the `rate=<N>` MIME parameter ([`payload`])
//!
//! ## Example Usage
//!
//! ```rust
//! use tts_audio::wav;
//!
//! // Three samples at 24 kHz: 44-byte header plus 6 bytes of PCM data.
//! let buffer = wav::encode(&[0, 32767, -32768], 24_000);
//! assert_eq!(buffer.len(), 50);
//! assert_eq!(&buffer[0..4], b"RIFF");
//! ```

pub mod error;
pub mod payload;
pub mod pcm;
pub mod wav;

// Re-export commonly used types
pub use error::{AudioError, Result};
pub use payload::{DecodedPcm, InlineAudio, WavAudio, DEFAULT_SAMPLE_RATE};
pub use wav::{encode, HEADER_LEN, MEDIA_TYPE};
