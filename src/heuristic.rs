use crate::point::Point;

/// Distance estimator used to prioritize frontier expansion. Both variants
/// are admissible for 4-directional unit-cost movement; Manhattan is also
/// consistent and is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    /// Selects a heuristic by its wire name. Unrecognized names fall back to
    /// Manhattan rather than erroring.
    pub fn from_name(name: &str) -> Heuristic {
        match name {
            "euclidean" => Heuristic::Euclidean,
            _ => Heuristic::Manhattan,
        }
    }

    pub fn estimate(&self, a: &Point, b: &Point) -> f64 {
        match self {
            Heuristic::Manhattan => a.manhattan_distance(b),
            Heuristic::Euclidean => a.euclidean_distance(b),
        }
    }
}
