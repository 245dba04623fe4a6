//! Shape type codes and their canonical names.

use std::fmt;

use serde::{Serialize, Serializer};

/// Geometry type declared in a shapefile header.
///
/// Codes outside the ESRI table are kept as [`GeometryType::Unknown`] and
/// render as `"UNKNOWN"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    /// Code 0.
    Null,
    /// Code 1.
    Point,
    /// Code 3.
    PolyLine,
    /// Code 5.
    Polygon,
    /// Code 8.
    MultiPoint,
    /// Code 11.
    PointZ,
    /// Code 13.
    PolyLineZ,
    /// Code 15.
    PolygonZ,
    /// Code 18.
    MultiPointZ,
    /// Code 21.
    PointM,
    /// Code 23.
    PolyLineM,
    /// Code 25.
    PolygonM,
    /// Code 28.
    MultiPointM,
    /// Code 31.
    MultiPatch,
    /// Any other code.
    Unknown(i32),
}

/// Name rendered for codes missing from the table.
pub const UNKNOWN_NAME: &str = "UNKNOWN";

const TABLE: [(i32, GeometryType, &str); 14] = [
    (0, GeometryType::Null, "NULL"),
    (1, GeometryType::Point, "POINT"),
    (3, GeometryType::PolyLine, "POLYLINE"),
    (5, GeometryType::Polygon, "POLYGON"),
    (8, GeometryType::MultiPoint, "MULTIPOINT"),
    (11, GeometryType::PointZ, "POINTZ"),
    (13, GeometryType::PolyLineZ, "POLYLINEZ"),
    (15, GeometryType::PolygonZ, "POLYGONZ"),
    (18, GeometryType::MultiPointZ, "MULTIPOINTZ"),
    (21, GeometryType::PointM, "POINTM"),
    (23, GeometryType::PolyLineM, "POLYLINEM"),
    (25, GeometryType::PolygonM, "POLYGONM"),
    (28, GeometryType::MultiPointM, "MULTIPOINTM"),
    (31, GeometryType::MultiPatch, "MULTIPATCH"),
];

impl GeometryType {
    /// Look up a header code.
    pub fn from_code(code: i32) -> Self {
        TABLE
            .iter()
            .find(|(known, _, _)| *known == code)
            .map_or(Self::Unknown(code), |(_, kind, _)| *kind)
    }

    /// The numeric header code.
    pub fn code(self) -> i32 {
        match self {
            Self::Unknown(code) => code,
            known => TABLE
                .iter()
                .find(|(_, kind, _)| *kind == known)
                .map_or(-1, |(code, _, _)| *code),
        }
    }

    /// Upper-case name, e.g. `"POLYGONZ"`.
    pub fn name(self) -> &'static str {
        TABLE
            .iter()
            .find(|(_, kind, _)| *kind == self)
            .map_or(UNKNOWN_NAME, |(_, _, name)| *name)
    }

    /// Returns `true` if the code is in the ESRI table.
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for GeometryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
