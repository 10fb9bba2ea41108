use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    MultipleCutPoints(usize), // position (1-based) of the second '&'
    EmptyAlphabet,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::MultipleCutPoints(i) => {
                write!(f, "More than one cut-point in input (second at position {})", i)
            }
            SequenceError::EmptyAlphabet => {
                write!(f, "Cannot draw symbols from an empty alphabet")
            }
        }
    }
}

impl std::error::Error for SequenceError {}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    Format, // a Display/Debug impl reported fmt::Error
    Alloc,  // the result buffer could not be grown
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Format => write!(f, "Formatting the string failed"),
            FormatError::Alloc => write!(f, "Memory allocation for formatted string failed"),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<fmt::Error> for FormatError {
    fn from(_: fmt::Error) -> Self {
        FormatError::Format
    }
}

impl From<std::collections::TryReserveError> for FormatError {
    fn from(_: std::collections::TryReserveError) -> Self {
        FormatError::Alloc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = SequenceError::MultipleCutPoints(7);
        assert_eq!(e.to_string(), "More than one cut-point in input (second at position 7)");
        assert!(FormatError::Alloc.to_string().contains("allocation"));
    }

    #[test]
    fn test_fmt_error_conversion() {
        let e: FormatError = fmt::Error.into();
        assert_eq!(e, FormatError::Format);
    }
}
