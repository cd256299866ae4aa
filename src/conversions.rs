//! Conversions from `geo-traits` implementors (and WKB blobs) into [`Geometry`].

use crate::error::{Result, WktError};
use crate::geometry::{
    Coordinate, CoordinateSequence, Geometry, GeometryCollection, LineString, LinearRing,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use geo_traits::{
    CoordTrait, Dimensions, GeometryCollectionTrait, GeometryTrait, LineStringTrait, LineTrait,
    MultiLineStringTrait, MultiPointTrait, MultiPolygonTrait, PointTrait, PolygonTrait, RectTrait,
    TriangleTrait,
};
use wkb::reader::Wkb;

impl Geometry {
    /// Copy any `geo-traits` geometry into the writer's model.
    ///
    /// `Line` becomes a line string, `Rect` and `Triangle` become polygons.
    /// Ordinates missing from the source dimension are stored as `NaN`.
    pub fn from_geo_traits<G: GeometryTrait<T = f64>>(geom: &G) -> Self {
        use geo_traits::GeometryType as GeoType;

        match geom.as_type() {
            GeoType::Point(point) => Self::Point(point_from_trait(point)),
            GeoType::LineString(line) => {
                Self::LineString(LineString::new(sequence_from_trait(line)))
            }
            GeoType::Polygon(poly) => Self::Polygon(polygon_from_trait(poly)),
            GeoType::MultiPoint(multi) => Self::MultiPoint(MultiPoint::new(
                multi.points().map(|p| point_from_trait(&p)).collect(),
            )),
            GeoType::MultiLineString(multi) => Self::MultiLineString(MultiLineString::new(
                multi
                    .line_strings()
                    .map(|l| LineString::new(sequence_from_trait(&l)))
                    .collect(),
            )),
            GeoType::MultiPolygon(multi) => Self::MultiPolygon(MultiPolygon::new(
                multi.polygons().map(|p| polygon_from_trait(&p)).collect(),
            )),
            GeoType::GeometryCollection(collection) => {
                Self::GeometryCollection(GeometryCollection::new(
                    collection
                        .geometries()
                        .map(|g| Self::from_geo_traits(&g))
                        .collect(),
                ))
            }
            GeoType::Rect(rect) => Self::Polygon(polygon_from_rect(rect)),
            GeoType::Triangle(triangle) => {
                let first = coordinate_from_trait(&triangle.first());
                let ring = vec![
                    first,
                    coordinate_from_trait(&triangle.second()),
                    coordinate_from_trait(&triangle.third()),
                    first,
                ];
                Self::Polygon(Polygon::new(LinearRing::new(ring), Vec::new()))
            }
            GeoType::Line(line) => {
                let coords = vec![
                    coordinate_from_trait(&line.start()),
                    coordinate_from_trait(&line.end()),
                ];
                Self::LineString(LineString::new(coords))
            }
        }
    }

    /// Decode a raw WKB or GeoPackage geometry blob.
    pub fn from_blob(blob: &[u8]) -> Result<Self> {
        let wkb = blob_to_wkb(blob)?;
        Ok(Self::from_geo_traits(&wkb))
    }
}

fn coordinate_from_trait<C: CoordTrait<T = f64>>(coord: &C) -> Coordinate {
    let (x, y) = coord.x_y();
    let nth = |n| coord.nth(n).unwrap_or(f64::NAN);
    match coord.dim() {
        Dimensions::Xy => Coordinate::new(x, y),
        Dimensions::Xyz => Coordinate::xyz(x, y, nth(2)),
        Dimensions::Xym => Coordinate::xym(x, y, nth(2)),
        Dimensions::Xyzm => Coordinate::xyzm(x, y, nth(2), nth(3)),
        // Treat extra unnamed ordinates as Z then M.
        Dimensions::Unknown(_) => Coordinate::xyzm(x, y, nth(2), nth(3)),
    }
}

fn point_from_trait<P: PointTrait<T = f64>>(point: &P) -> Point {
    match point.coord() {
        Some(coord) => Point::new(coordinate_from_trait(&coord)),
        None => Point::empty(),
    }
}

fn sequence_from_trait<L: LineStringTrait<T = f64>>(line: &L) -> CoordinateSequence {
    line.coords().map(|c| coordinate_from_trait(&c)).collect()
}

fn polygon_from_trait<P: PolygonTrait<T = f64>>(poly: &P) -> Polygon {
    let exterior = poly
        .exterior()
        .map(|ring| LinearRing::new(sequence_from_trait(&ring)))
        .unwrap_or_default();
    let interiors = poly
        .interiors()
        .map(|ring| LinearRing::new(sequence_from_trait(&ring)))
        .collect();
    Polygon::new(exterior, interiors)
}

fn polygon_from_rect<R: RectTrait<T = f64>>(rect: &R) -> Polygon {
    let (min_x, min_y) = rect.min().x_y();
    let (max_x, max_y) = rect.max().x_y();
    let ring = LinearRing::new(vec![
        (min_x, min_y),
        (max_x, min_y),
        (max_x, max_y),
        (min_x, max_y),
        (min_x, min_y),
    ]);
    Polygon::new(ring, Vec::new())
}

/// Strip the GeoPackage header and envelope if present; otherwise treat the
/// blob as plain WKB.
// cf. https://www.geopackage.org/spec140/index.html#gpb_format
pub(crate) fn blob_to_wkb(b: &[u8]) -> Result<Wkb<'_>> {
    if !b.starts_with(b"GP") {
        return Ok(Wkb::try_new(b)?);
    }

    const HEADER_LEN: usize = 8;
    if b.len() < HEADER_LEN {
        return Err(WktError::InvalidGpkgGeometryLength {
            len: b.len(),
            minimum: HEADER_LEN,
        });
    }

    let flags = b[3];
    let envelope_size: usize = match flags & 0b00001110 {
        0b00000000 => 0,  // no envelope
        0b00000010 => 32, // envelope is [minx, maxx, miny, maxy], 32 bytes
        0b00000100 => 48, // envelope is [minx, maxx, miny, maxy, minz, maxz], 48 bytes
        0b00000110 => 48, // envelope is [minx, maxx, miny, maxy, minm, maxm], 48 bytes
        0b00001000 => 64, // envelope is [minx, maxx, miny, maxy, minz, maxz, minm, maxm], 64 bytes
        _ => {
            return Err(WktError::InvalidGpkgGeometryFlags(flags));
        }
    };
    let offset = HEADER_LEN + envelope_size;
    if b.len() < offset {
        return Err(WktError::InvalidGpkgGeometryLength {
            len: b.len(),
            minimum: offset,
        });
    }

    Ok(Wkb::try_new(&b[offset..])?)
}
