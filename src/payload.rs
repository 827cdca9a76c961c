//! Inline audio payloads as returned by the speech-synthesis API.
//!
//! The TTS endpoint returns the synthesized speech as an inline-data part: a
//! MIME type such as `audio/L16;codec=pcm;rate=24000` and the raw 16-bit PCM
//! bytes encoded as standard base64. This module parses that shape and turns
//! it into a playable WAV buffer.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::{AudioError, Result};
use crate::{pcm, wav};

/// Sample rate assumed when the MIME type carries no `rate=` parameter.
pub const DEFAULT_SAMPLE_RATE: u32 = 24_000;

static RATE_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"rate=(\d+)").expect("valid regex"));

/// Inline audio part of a synthesis response (`inlineData` on the wire).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineAudio {
    pub mime_type: String,
    pub data: String,
}

/// Raw samples recovered from an inline audio payload.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPcm {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

/// A playable WAV buffer plus the label a playback surface should attach.
#[derive(Debug, Clone)]
pub struct WavAudio {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
}

/// Extracts the `rate=<N>` MIME parameter, falling back to
/// [`DEFAULT_SAMPLE_RATE`] when it is absent or unparsable.
pub fn sample_rate_from_mime(mime_type: &str) -> u32 {
    RATE_PARAM
        .captures(mime_type)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(DEFAULT_SAMPLE_RATE)
}

impl InlineAudio {
    /// Whether this part carries audio at all.
    pub fn is_audio(&self) -> bool {
        self.mime_type.starts_with("audio/")
    }

    /// Base64-decodes the payload into samples and the declared sample rate.
    pub fn decode(&self) -> Result<DecodedPcm> {
        if !self.is_audio() {
            return Err(AudioError::NotAudio(self.mime_type.clone()));
        }

        let sample_rate = sample_rate_from_mime(&self.mime_type);
        let raw = STANDARD.decode(&self.data)?;
        log::debug!(
            "decoded {} PCM bytes at {} Hz from '{}'",
            raw.len(),
            sample_rate,
            self.mime_type
        );

        let samples = pcm::samples_from_le_bytes(&raw)?;
        Ok(DecodedPcm {
            samples,
            sample_rate,
        })
    }

    /// Decodes the payload and wraps it in a playable WAV container.
    pub fn to_wav(&self) -> Result<WavAudio> {
        let decoded = self.decode()?;
        Ok(WavAudio {
            bytes: wav::encode(&decoded.samples, decoded.sample_rate),
            media_type: wav::MEDIA_TYPE,
        })
    }
}
