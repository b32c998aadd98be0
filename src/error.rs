use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid {channel} channel: {value} (expected 0-255)")]
    InvalidChannel { channel: &'static str, value: i64 },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Point ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("No image loaded")]
    NoImage,

    #[error("Image is still decoding")]
    ImageNotReady,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Invalid key binding: {0}")]
    InvalidKeyBinding(String),
}

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Error::Clipboard(err.to_string())
    }
}
