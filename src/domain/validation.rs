use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    LimitOutOfRange { min: u32, max: u32, actual: u32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LimitOutOfRange { min, max, actual } => {
                write!(f, "limit out of range: {actual} (expected {min}..={max})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
