//! Domain error types.
//!
//! These errors describe a malformed transit network. They can only occur
//! while lines are being loaded; once a `Network` exists it is valid.

use super::{InvalidName, LineId, Station};

/// Construction-time errors for lines and networks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// A line was declared without any stations
    #[error("line {0} has no stations")]
    EmptyLine(LineId),

    /// A station appears more than once on the same line
    #[error("station {station} appears more than once on line {line}")]
    DuplicateStation { line: LineId, station: Station },

    /// Two lines share one identifier
    #[error("line {0} is declared more than once")]
    DuplicateLine(LineId),

    /// A line or station name failed validation
    #[error(transparent)]
    InvalidName(#[from] InvalidName),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let blue = LineId::parse("blue").unwrap();

        let err = TopologyError::EmptyLine(blue.clone());
        assert_eq!(err.to_string(), "line blue has no stations");

        let err = TopologyError::DuplicateStation {
            line: blue.clone(),
            station: Station::parse("East End").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "station East End appears more than once on line blue"
        );

        let err = TopologyError::DuplicateLine(blue);
        assert_eq!(err.to_string(), "line blue is declared more than once");

        let err = TopologyError::from(Station::parse("").unwrap_err());
        assert_eq!(err.to_string(), "invalid name \"\": must not be empty");
    }
}
