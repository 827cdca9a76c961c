use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Payload is not audio: {0}")]
    NotAudio(String),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Misaligned PCM payload: {0} bytes is not a whole number of 16-bit samples")]
    MisalignedPcm(usize),
}

pub type Result<T> = std::result::Result<T, AudioError>;
