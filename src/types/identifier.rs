//! Feature identifiers (COMIDs) as users supply them and as the API expects them.

use std::fmt;

/// One identifier item exactly as supplied by a caller.
///
/// Identifiers arrive loosely typed (from a command line, a config file, a
/// notebook). Only [`RawIdentifier::Integer`] is accepted by validation; the
/// other variants exist so a float or a quoted number is reported as an
/// invalid identifier instead of being silently coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum RawIdentifier {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawIdentifier {
    /// Classifies a command line token: integer if it parses as one, then
    /// float, otherwise text. Surrounding whitespace is ignored.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if let Ok(value) = token.parse::<i64>() {
            RawIdentifier::Integer(value)
        } else if let Ok(value) = token.parse::<f64>() {
            RawIdentifier::Float(value)
        } else {
            RawIdentifier::Text(token.to_string())
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RawIdentifier::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<i64> for RawIdentifier {
    fn from(value: i64) -> Self {
        RawIdentifier::Integer(value)
    }
}

impl From<i32> for RawIdentifier {
    fn from(value: i32) -> Self {
        RawIdentifier::Integer(value.into())
    }
}

impl From<u32> for RawIdentifier {
    fn from(value: u32) -> Self {
        RawIdentifier::Integer(value.into())
    }
}

impl From<f64> for RawIdentifier {
    fn from(value: f64) -> Self {
        RawIdentifier::Float(value)
    }
}

impl From<&str> for RawIdentifier {
    fn from(value: &str) -> Self {
        RawIdentifier::Text(value.to_string())
    }
}

impl From<String> for RawIdentifier {
    fn from(value: String) -> Self {
        RawIdentifier::Text(value)
    }
}

impl fmt::Display for RawIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawIdentifier::Integer(value) => write!(f, "{}", value),
            RawIdentifier::Float(value) => write!(f, "{}", value),
            RawIdentifier::Text(value) => write!(f, "\"{}\"", value),
        }
    }
}

/// A validated feature address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// A single reach or reservoir COMID.
    Reach(i64),
    /// A pair of grid indices on the land/forcing grid.
    Grid(i64, i64),
}

impl Location {
    /// The value sent as the `COMID` query parameter.
    pub fn wire_value(&self) -> String {
        match self {
            Location::Reach(comid) => comid.to_string(),
            Location::Grid(x, y) => format!("{},{}", x, y),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(RawIdentifier::from_token("5781915"), RawIdentifier::Integer(5781915));
        assert_eq!(RawIdentifier::from_token(" 2030"), RawIdentifier::Integer(2030));
        assert_eq!(RawIdentifier::from_token("1234.23"), RawIdentifier::Float(1234.23));
        assert_eq!(
            RawIdentifier::from_token("error"),
            RawIdentifier::Text("error".to_string())
        );
    }

    #[test]
    fn test_wire_value() {
        assert_eq!(Location::Reach(5781915).wire_value(), "5781915");
        assert_eq!(Location::Grid(1635, 2030).wire_value(), "1635,2030");
    }
}
