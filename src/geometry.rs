use crate::errors::LocatorError;
use crate::{Coordinate, Rectangle};

#[derive(PartialEq, Debug, Clone)]
pub struct Polygon {
    pub shell: Vec<Coordinate>,
    pub holes: Vec<Vec<Coordinate>>,
}

impl Polygon {
    pub fn new(shell: Vec<Coordinate>, holes: Vec<Vec<Coordinate>>) -> Self {
        Polygon { shell, holes }
    }

    /// The shell followed by each hole.
    pub fn rings(&self) -> impl Iterator<Item = &[Coordinate]> {
        std::iter::once(self.shell.as_slice()).chain(self.holes.iter().map(|h| h.as_slice()))
    }
}

/// The minimal geometry model consumed by the locators.
#[derive(PartialEq, Debug, Clone)]
pub enum Geometry {
    Empty,
    Point(Coordinate),
    MultiPoint(Vec<Coordinate>),
    LineString(Vec<Coordinate>),
    LinearRing(Vec<Coordinate>),
    MultiLineString(Vec<Vec<Coordinate>>),
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Empty => "Empty",
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::LinearRing(_) => "LinearRing",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// Whether the geometry bounds a region: polygons, multipolygons,
    /// linear rings, and the empty geometry.
    pub fn is_areal(&self) -> bool {
        matches!(
            self,
            Geometry::Empty
                | Geometry::LinearRing(_)
                | Geometry::Polygon(_)
                | Geometry::MultiPolygon(_)
        )
    }

    /// All boundary rings of an areal geometry: every shell and hole of
    /// every polygon.
    pub fn rings(&self) -> Result<Vec<&[Coordinate]>, LocatorError> {
        if !self.is_areal() {
            return Err(LocatorError::UnsupportedGeometry { kind: self.kind() });
        }
        let rings = match self {
            Geometry::LinearRing(coords) => vec![coords.as_slice()],
            Geometry::Polygon(poly) => poly.rings().collect(),
            Geometry::MultiPolygon(polys) => polys.iter().flat_map(|p| p.rings()).collect(),
            _ => Vec::new(),
        };
        Ok(rings)
    }

    pub fn envelope(&self) -> Rectangle {
        let mut envelope = Rectangle::new_empty();
        match self {
            Geometry::Empty => {}
            Geometry::Point(c) => envelope.expand(Rectangle::new(*c, *c)),
            Geometry::MultiPoint(coords)
            | Geometry::LineString(coords)
            | Geometry::LinearRing(coords) => envelope.expand(Rectangle::of_coords(coords)),
            Geometry::MultiLineString(lines) => {
                for line in lines {
                    envelope.expand(Rectangle::of_coords(line));
                }
            }
            Geometry::Polygon(poly) => envelope.expand(Rectangle::of_coords(&poly.shell)),
            Geometry::MultiPolygon(polys) => {
                for poly in polys {
                    envelope.expand(Rectangle::of_coords(&poly.shell));
                }
            }
            Geometry::GeometryCollection(geoms) => {
                for geom in geoms {
                    envelope.expand(geom.envelope());
                }
            }
        }
        envelope
    }
}
