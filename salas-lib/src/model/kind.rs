//! Collection selector

use std::fmt;
use std::str::FromStr;

/// Which collection to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Rooms,
    Reservations,
}

impl ListKind {
    /// All kinds, in page order.
    pub const ALL: [ListKind; 2] = [ListKind::Rooms, ListKind::Reservations];

    /// Endpoint path appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Rooms => "salas",
            Self::Reservations => "reservas",
        }
    }

    /// Name of the output region the list is written to.
    pub fn region(self) -> &'static str {
        match self {
            Self::Rooms => "salas-lista",
            Self::Reservations => "reservas-lista",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Error returned when parsing an unknown list kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown list kind '{0}' (expected rooms or reservations)")]
pub struct UnknownListKind(pub String);

impl FromStr for ListKind {
    type Err = UnknownListKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rooms" | "salas" => Ok(Self::Rooms),
            "reservations" | "reservas" => Ok(Self::Reservations),
            _ => Err(UnknownListKind(s.to_string())),
        }
    }
}
