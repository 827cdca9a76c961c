use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hound::WavReader;
use tts_audio::{pcm, wav, InlineAudio};

/// Cross-checks the hand-rolled container against an independent WAV reader.
#[test]
fn test_encoded_wav_parses_with_hound() {
    env_logger::try_init().ok();

    let samples: Vec<i16> = (0..10_000).map(|i| ((i % 200) * 300 - 30_000) as i16).collect();
    let buffer = wav::encode(&samples, 24_000);
    println!("🎵 Encoded {} samples into {} bytes", samples.len(), buffer.len());

    let mut reader = WavReader::new(Cursor::new(buffer)).expect("hound should accept the container");
    let spec = reader.spec();

    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 24_000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let restored: Vec<i16> = reader
        .samples::<i16>()
        .collect::<Result<_, _>>()
        .expect("samples should read back");
    assert_eq!(restored, samples);
}

#[test]
fn test_header_only_container_parses_with_hound() {
    let buffer = wav::encode(&[], 16_000);
    assert_eq!(buffer.len(), wav::HEADER_LEN);

    let reader = WavReader::new(Cursor::new(buffer)).expect("hound should accept empty audio");
    assert_eq!(reader.spec().sample_rate, 16_000);
    assert_eq!(reader.len(), 0);
}

/// Decoding the data region and re-encoding at the same rate must reproduce
/// the container byte for byte.
#[test]
fn test_reencoding_is_byte_identical() {
    let samples = vec![0i16, 1, -1, 32767, -32768, 123, -456];
    let first = wav::encode(&samples, 44_100);

    let restored = pcm::samples_from_le_bytes(&first[wav::HEADER_LEN..]).unwrap();
    let second = wav::encode(&restored, 44_100);

    assert_eq!(first, second);
}

/// End-to-end path: synthesis response part → base64 decode → WAV buffer.
#[test]
fn test_inline_audio_payload_to_playable_wav() {
    env_logger::try_init().ok();

    let samples = vec![0i16, 32767, -32768];
    let part = InlineAudio {
        mime_type: "audio/L16;codec=pcm;rate=24000".to_string(),
        data: STANDARD.encode(pcm::samples_to_le_bytes(&samples)),
    };

    let audio = part.to_wav().expect("payload should decode");
    println!("🔊 Produced {} byte {} buffer", audio.bytes.len(), audio.media_type);

    assert_eq!(audio.media_type, "audio/wav");
    assert_eq!(audio.bytes.len(), 50);

    let mut reader = WavReader::new(Cursor::new(audio.bytes)).expect("hound should accept it");
    assert_eq!(reader.spec().sample_rate, 24_000);
    let restored: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(restored, samples);
}
