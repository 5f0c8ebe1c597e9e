use thiserror::Error;

use tp_core::{PlatformId, TpError};
use tp_path::PathError;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("fleet configuration error: {0}")]
    Config(#[from] TpError),

    #[error("path synthesis failed: {0}")]
    Path(#[from] PathError),

    #[error("{0} is already spawned")]
    DuplicatePlatform(PlatformId),
}

pub type FleetResult<T> = Result<T, FleetError>;
