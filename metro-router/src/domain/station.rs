//! Station and line name types.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid station or line name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid name {input:?}: {reason}")]
pub struct InvalidName {
    input: String,
    reason: &'static str,
}

impl InvalidName {
    /// The rejected input, as given.
    pub fn input(&self) -> &str {
        &self.input
    }
}

fn parse_name(s: &str) -> Result<Arc<str>, InvalidName> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(InvalidName {
            input: s.to_string(),
            reason: "must not be empty",
        });
    }

    Ok(Arc::from(trimmed))
}

/// A station on the network.
///
/// The name is the station's only identity: two stations with the same
/// name are the same station, whichever lines they were declared on.
/// Surrounding whitespace is stripped and empty names are rejected, so any
/// `Station` value is a usable key.
///
/// Cloning is cheap (the name is reference counted), and a `Station` can be
/// looked up in maps and sets by `&str`.
///
/// # Examples
///
/// ```
/// use metro_router::domain::Station;
///
/// let station = Station::parse("  East End ").unwrap();
/// assert_eq!(station.as_str(), "East End");
///
/// assert!(Station::parse("").is_err());
/// assert!(Station::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(Arc<str>);

impl Station {
    /// Parse a station name.
    pub fn parse(s: &str) -> Result<Self, InvalidName> {
        parse_name(s).map(Station)
    }

    /// Returns the station name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.as_str())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identifier of a line, e.g. `"blue"`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(Arc<str>);

impl LineId {
    /// Parse a line identifier. Same rules as [`Station::parse`].
    pub fn parse(s: &str) -> Result<Self, InvalidName> {
        parse_name(s).map(LineId)
    }

    /// Returns the line identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LineId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.as_str())
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_names() {
        assert!(Station::parse("East End").is_ok());
        assert!(Station::parse("Foot Stand").is_ok());
        assert!(Station::parse("X").is_ok());
        assert!(LineId::parse("blue").is_ok());
    }

    #[test]
    fn trims_whitespace() {
        let station = Station::parse("\tBoxing Avenue  ").unwrap();
        assert_eq!(station.as_str(), "Boxing Avenue");
    }

    #[test]
    fn reject_empty() {
        assert!(Station::parse("").is_err());
        assert!(Station::parse("  \n").is_err());
        assert!(LineId::parse("").is_err());
    }

    #[test]
    fn error_display() {
        let err = Station::parse(" ").unwrap_err();
        assert_eq!(err.to_string(), "invalid name \" \": must not be empty");
        assert_eq!(err.input(), " ");
    }

    #[test]
    fn display() {
        let station = Station::parse("Neo Lane").unwrap();
        assert_eq!(format!("{}", station), "Neo Lane");
    }

    #[test]
    fn debug() {
        let station = Station::parse("Neo Lane").unwrap();
        assert_eq!(format!("{:?}", station), "Station(Neo Lane)");

        let line = LineId::parse("red").unwrap();
        assert_eq!(format!("{:?}", line), "LineId(red)");
    }

    #[test]
    fn equality_ignores_surrounding_whitespace() {
        let a = Station::parse("East End").unwrap();
        let b = Station::parse(" East End").unwrap();
        let c = Station::parse("West End").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn lookup_by_str() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::parse("East End").unwrap());
        assert!(set.contains("East End"));
        assert!(!set.contains("West End"));
    }
}
