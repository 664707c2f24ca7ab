use std::fmt;

/// Where a point lies relative to an areal geometry.
///
/// `Boundary` wins over `Interior` and `Exterior`: a point on any
/// boundary segment is on the boundary, whatever the crossing parity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Interior,
    Boundary,
    Exterior,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Location::Interior => "Interior",
            Location::Boundary => "Boundary",
            Location::Exterior => "Exterior",
        };
        write!(f, "{}", name)
    }
}
