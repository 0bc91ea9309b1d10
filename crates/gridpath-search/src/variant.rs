use std::fmt;
use std::str::FromStr;

/// One of the two search configurations.
///
/// Ordered so that results keyed by variant list Dijkstra first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variant {
    /// Priority is accumulated cost only.
    Dijkstra,
    /// Priority is accumulated cost plus Manhattan distance to the target.
    AStar,
}

impl Variant {
    /// Every variant, in display order.
    pub const ALL: [Variant; 2] = [Variant::Dijkstra, Variant::AStar];

    /// Stable lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search variant \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for v in Variant::ALL {
            assert_eq!(v.to_string().parse::<Variant>(), Ok(v));
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("A*".parse::<Variant>(), Ok(Variant::AStar));
        assert_eq!(" Dijkstra ".parse::<Variant>(), Ok(Variant::Dijkstra));
        assert_eq!(
            "bfs".parse::<Variant>(),
            Err(UnknownVariant("bfs".to_owned()))
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Variant::AStar).unwrap(), r#""astar""#);
        let v: Variant = serde_json::from_str(r#""dijkstra""#).unwrap();
        assert_eq!(v, Variant::Dijkstra);
    }
}
