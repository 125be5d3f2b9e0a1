//! Error type of the color map generators and serializers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("a color map needs at least 2 colors, got {0}")]
    TooFewColors(usize),

    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid color {0:?}: expected \"r,g,b\" with r, g, b in 0..=255")]
    InvalidColor(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
