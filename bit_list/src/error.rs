use raw_bytes::ContainerError;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitListError {
    #[cfg_attr(feature = "std", error("Index {0} is out of bounds for length {1}"))]
    IndexOutOfBounds(usize, usize),

    #[cfg_attr(
        feature = "std",
        error("Offset {0} is past the end of a destination of length {1}")
    )]
    OffsetOutOfBounds(usize, usize),

    #[cfg_attr(
        feature = "std",
        error("Destination is too short: {needed} slots needed, {available} available")
    )]
    DestinationTooShort { needed: usize, available: usize },

    #[cfg_attr(feature = "std", error("cursor has not started, call advance first"))]
    CursorNotStarted,

    #[cfg_attr(feature = "std", error("cursor already finished"))]
    CursorFinished,

    #[cfg_attr(feature = "std", error("{0} is not supported on a packed bit list"))]
    Unsupported(&'static str),

    #[cfg_attr(feature = "std", error("storage error: {0}"))]
    Container(#[cfg_attr(feature = "std", from)] ContainerError),
}

impl BitListError {
    /// Index, offset and destination-length violations.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            BitListError::IndexOutOfBounds(..)
                | BitListError::OffsetOutOfBounds(..)
                | BitListError::DestinationTooShort { .. }
                | BitListError::Container(ContainerError::OutOfBounds { .. })
        )
    }

    /// Cursor read outside of an active position.
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            BitListError::CursorNotStarted | BitListError::CursorFinished
        )
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitListError::IndexOutOfBounds(i, l) => {
                write!(f, "Index {} is out of bounds for length {}", i, l)
            }
            BitListError::OffsetOutOfBounds(o, l) => {
                write!(
                    f,
                    "Offset {} is past the end of a destination of length {}",
                    o, l
                )
            }
            BitListError::DestinationTooShort { needed, available } => write!(
                f,
                "Destination is too short: {} slots needed, {} available",
                needed, available
            ),
            BitListError::CursorNotStarted => {
                write!(f, "cursor has not started, call advance first")
            }
            BitListError::CursorFinished => write!(f, "cursor already finished"),
            BitListError::Unsupported(op) => {
                write!(f, "{} is not supported on a packed bit list", op)
            }
            BitListError::Container(e) => write!(f, "storage error: {}", e),
        }
    }
}

#[cfg(not(feature = "std"))]
impl From<ContainerError> for BitListError {
    fn from(err: ContainerError) -> Self {
        BitListError::Container(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        assert!(BitListError::IndexOutOfBounds(3, 2).is_out_of_range());
        assert!(BitListError::OffsetOutOfBounds(5, 2).is_out_of_range());
        assert!(
            BitListError::DestinationTooShort {
                needed: 4,
                available: 3
            }
            .is_out_of_range()
        );
        assert!(!BitListError::CursorFinished.is_out_of_range());

        assert!(BitListError::CursorNotStarted.is_invalid_state());
        assert!(BitListError::CursorFinished.is_invalid_state());
        assert!(!BitListError::Unsupported("contains").is_invalid_state());
        assert!(!BitListError::Unsupported("contains").is_out_of_range());
    }

    #[test]
    fn container_errors_convert() {
        let err: BitListError = ContainerError::OutOfBounds { index: 4, len: 1 }.into();
        assert!(err.is_out_of_range());
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages() {
        assert_eq!(
            BitListError::IndexOutOfBounds(9, 8).to_string(),
            "Index 9 is out of bounds for length 8"
        );
        assert_eq!(
            BitListError::Unsupported("index_of").to_string(),
            "index_of is not supported on a packed bit list"
        );
    }
}
