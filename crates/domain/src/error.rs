use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    EmptyImageRef,
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyImageRef => write!(f, "image reference must not be empty"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "gallery index {index} out of range for {len} images")
            }
        }
    }
}

impl std::error::Error for DomainError {}
