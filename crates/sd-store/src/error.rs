use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unknown strategy id: {id} {location}")]
    UnknownStrategy { id: u32, location: ErrorLocation },

    #[error("No portfolio for {owner} {location}")]
    NoPortfolio {
        owner: String,
        location: ErrorLocation,
    },

    #[error("Strategy {strategy_id} is not in the portfolio {location}")]
    UnknownPosition {
        strategy_id: u32,
        location: ErrorLocation,
    },

    #[error("Strategy {strategy_id} is already in the portfolio {location}")]
    DuplicatePosition {
        strategy_id: u32,
        location: ErrorLocation,
    },

    #[error("Unknown threshold: {name} {location}")]
    UnknownThreshold {
        name: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
