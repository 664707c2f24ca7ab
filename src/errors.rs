use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LocatorError {
    #[error("Unsupported geometry {kind}: only polygons, multipolygons and linear rings can be indexed")]
    UnsupportedGeometry { kind: &'static str },
}

#[derive(Error, Debug, PartialEq)]
pub enum WktError {
    #[error("Could not parse WKT: {0}")]
    Parse(String),
}
