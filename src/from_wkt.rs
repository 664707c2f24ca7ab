use crate::errors::WktError;
use crate::geometry::{Geometry, Polygon};
use crate::Coordinate;
use wkt::types;
use wkt::types::Coord;

// Any z or m ordinate is dropped.
impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Coordinate {
            x: coord.x,
            y: coord.y,
        }
    }
}

fn point_to_position(point: types::Point<f64>) -> Option<Coordinate> {
    Some(point.0?.into())
}

fn coords_to_positions(coords: Vec<Coord<f64>>) -> Vec<Coordinate> {
    coords.into_iter().map(Coordinate::from).collect()
}

fn linestring_to_positions(linestring: types::LineString<f64>) -> Vec<Coordinate> {
    coords_to_positions(linestring.0)
}

/// Parse every geometry in a WKT string.
pub fn parse_wkt(wkt_str: &str) -> Result<Vec<Geometry>, WktError> {
    let wkt_geoms =
        wkt::Wkt::from_str(wkt_str).map_err(|err| WktError::Parse(err.to_string()))?;
    let geoms = wkt_geoms.items.into_iter().map(from_wkt_geometry).collect();
    Ok(geoms)
}

/// Parse a WKT string holding exactly one geometry.
pub fn parse_single_wkt(wkt_str: &str) -> Result<Geometry, WktError> {
    let mut geoms = parse_wkt(wkt_str)?;
    if geoms.len() != 1 {
        return Err(WktError::Parse(format!(
            "expected one geometry, found {}",
            geoms.len()
        )));
    }
    Ok(geoms.remove(0))
}

fn from_wkt_geometry(geom: wkt::Geometry<f64>) -> Geometry {
    match geom {
        wkt::Geometry::Point(p) => from_wkt_point(p),
        wkt::Geometry::LineString(ls) => from_wkt_linestring(ls),
        wkt::Geometry::Polygon(p) => from_wkt_polygon(p),
        wkt::Geometry::MultiPoint(mp) => from_wkt_multi_point(mp),
        wkt::Geometry::MultiLineString(mls) => from_wkt_multi_linestring(mls),
        wkt::Geometry::MultiPolygon(mpoly) => from_wkt_multi_polygon(mpoly),
        wkt::Geometry::GeometryCollection(gc) => {
            Geometry::GeometryCollection(gc.0.into_iter().map(from_wkt_geometry).collect())
        }
    }
}

fn from_wkt_point(pt: types::Point<f64>) -> Geometry {
    match point_to_position(pt) {
        None => Geometry::Empty,
        Some(pos) => Geometry::Point(pos),
    }
}

fn from_wkt_linestring(ls: types::LineString<f64>) -> Geometry {
    Geometry::LineString(linestring_to_positions(ls))
}

fn _from_wkt_polygon(poly: types::Polygon<f64>) -> Option<Polygon> {
    let mut linestrings = poly.0;
    if linestrings.is_empty() {
        return None;
    }
    let shell: Vec<Coordinate> = linestring_to_positions(linestrings.remove(0));
    let holes: Vec<Vec<Coordinate>> = linestrings
        .into_iter()
        .map(linestring_to_positions)
        .collect();
    Some(Polygon { shell, holes })
}

fn from_wkt_polygon(poly: types::Polygon<f64>) -> Geometry {
    match _from_wkt_polygon(poly) {
        None => Geometry::Empty,
        Some(p) => Geometry::Polygon(p),
    }
}

fn from_wkt_multi_point(mp: types::MultiPoint<f64>) -> Geometry {
    Geometry::MultiPoint(mp.0.into_iter().filter_map(point_to_position).collect())
}

fn from_wkt_multi_linestring(mls: types::MultiLineString<f64>) -> Geometry {
    Geometry::MultiLineString(mls.0.into_iter().map(linestring_to_positions).collect())
}

fn from_wkt_multi_polygon(mpoly: types::MultiPolygon<f64>) -> Geometry {
    Geometry::MultiPolygon(mpoly.0.into_iter().filter_map(_from_wkt_polygon).collect())
}
