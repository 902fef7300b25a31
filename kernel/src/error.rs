use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    ItemUnavailable,
    PenaltyThresholdExceeded,
    UnknownUser,
    InvalidPicture,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::ItemUnavailable => write!(f, "Item is not available for rent"),
            KernelError::PenaltyThresholdExceeded => {
                write!(f, "Unpaid penalties exceed the rental threshold")
            }
            KernelError::UnknownUser => write!(f, "No user matches the given name"),
            KernelError::InvalidPicture => write!(f, "Profile picture was rejected"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
