use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Secret of {chars} characters does not fit: capacity is {capacity}")]
    CapacityExceeded { chars: usize, capacity: usize },

    #[error("Image dimensions differ: original is {original:?}, altered is {altered:?} (rows, cols)")]
    DimensionMismatch {
        original: (usize, usize),
        altered: (usize, usize),
    },

    #[error("Invalid code point: {0:#x}")]
    InvalidCodePoint(u32),

    #[error("Channel value {channel} cannot carry a change of {value} without leaving 0-255")]
    ChannelOverflow { value: u32, channel: u8 },

    #[error("Pixels are identical, nothing to decode")]
    UnchangedPixel,

    #[error("Secret is empty")]
    EmptySecret,

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Unsupported strategy: {0}")]
    UnsupportedStrategy(String),
}

pub type Result<T> = std::result::Result<T, StegoError>;
