use std::fmt;
use std::str::FromStr;

/// Search strategy identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Breadth-first search: FIFO frontier, minimum-edge path.
    Bfs,
    /// Depth-first search: LIFO frontier, path not necessarily shortest.
    Dfs,
    /// Dijkstra: frontier keyed by distance.
    Dijkstra,
    /// A*: frontier keyed by `g + h` with a Manhattan heuristic.
    Astar,
}

impl Algorithm {
    /// Every strategy, in the order the comparison table lists them.
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::Astar];

    /// Canonical lowercase identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::Astar => "astar",
        }
    }

    /// Whether the strategy always returns a minimum-length path.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected bfs, dfs, dijkstra or astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" => Ok(Self::Astar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("bfs".parse(), Ok(Algorithm::Bfs));
        assert_eq!("DFS".parse(), Ok(Algorithm::Dfs));
        assert_eq!(" Dijkstra ".parse(), Ok(Algorithm::Dijkstra));
        assert_eq!("astar".parse(), Ok(Algorithm::Astar));
        assert_eq!("A*".parse(), Ok(Algorithm::Astar));
        assert!("greedy".parse::<Algorithm>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse(), Ok(a));
        }
    }

    #[test]
    fn display_honors_width() {
        assert_eq!(format!("{:<6}|", Algorithm::Bfs), "bfs   |");
        assert_eq!(format!("{:>9}", Algorithm::Astar), "    astar");
        assert_eq!(format!("{:-^7}", Algorithm::Dfs), "--dfs--");
    }

    #[test]
    fn only_dfs_is_not_optimal() {
        let non_optimal: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|a| !a.is_optimal())
            .collect();
        assert_eq!(non_optimal, vec![Algorithm::Dfs]);
    }
}
