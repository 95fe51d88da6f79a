pub mod award_points;
pub mod process_receipt;

pub use award_points::{AwardPoints, PointsOutput};
pub use process_receipt::{ProcessReceipt, ProcessReceiptOutput};

use thiserror::Error;

use crate::ports::StoreError;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum UseCaseError {
    #[error("Invalid receipt: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
