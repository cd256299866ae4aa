//! Latitude-first WKT writer for geography geometries.
//!
//! ## Overview
//!
//! - `Geometry` is a closed set of geometry kinds (point, line string, linear
//!   ring, polygon, the three multi kinds and collections).
//! - `WriterConfiguration` holds the immutable output settings: dimension,
//!   pretty-printing, precision and dialect.
//! - `WktWriter` turns a `Geometry` into text, writing every coordinate as
//!   `Y X [Z] [M]`.
//!
//! A `Geometry` can be built by hand, converted from anything implementing
//! `geo_traits::GeometryTrait<T = f64>` (for example `geo_types` or `wkt::Wkt`),
//! or decoded from a WKB / GeoPackage geometry blob.
//!
//! ## Short usage
//!
//! ```
//! use geography_wkt::{Geometry, LineString, WktWriter, WriterConfiguration};
//!
//! let line: Geometry = LineString::new(vec![(1.0, 2.0), (3.0, 4.0)]).into();
//! let config = WriterConfiguration::default();
//! assert_eq!(WktWriter::new(&config).write(&line)?, "LINESTRING (2 1, 4 3)");
//! # Ok::<(), geography_wkt::WktError>(())
//! ```
//!
//! ## Dimensions and dialects
//!
//! Z and M are only written when they were requested *and* at least one
//! coordinate carries a real value. A coordinate without a value in an
//! ordinate that is written gets the dialect's missing marker for Z, and
//! `NaN` for M.
//!
//! ```
//! use geography_wkt::{Coordinate, CoordinateSequence, Geometry, LineString};
//! use geography_wkt::{WktWriter, WriterConfiguration};
//!
//! let line: Geometry = LineString::new(CoordinateSequence::new(vec![
//!     Coordinate::xyz(1.0, 2.0, 5.0),
//!     Coordinate::new(3.0, 4.0),
//! ]))
//! .into();
//!
//! let config = WriterConfiguration::builder().dimension(3).build()?;
//! assert_eq!(WktWriter::new(&config).write(&line)?, "LINESTRING Z (2 1 5, 4 3 NaN)");
//!
//! let config = WriterConfiguration::sql_server();
//! assert_eq!(WktWriter::new(&config).write(&line)?, "LINESTRING (2 1 5, 4 3 NULL)");
//! # Ok::<(), geography_wkt::WktError>(())
//! ```
//!
//! ## Pretty-printing
//!
//! ```
//! use geography_wkt::{Geometry, LinearRing, Polygon, WktWriter, WriterConfiguration};
//!
//! let polygon: Geometry = Polygon::new(
//!     LinearRing::new(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)]),
//!     vec![LinearRing::new(vec![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)])],
//! )
//! .into();
//!
//! let config = WriterConfiguration::default();
//! let text = WktWriter::new(&config).write_formatted(&polygon)?;
//! assert_eq!(text, "POLYGON ((0 0, 0 10, 10 10, 0 0), \n  (1 1, 1 2, 2 2, 1 1))");
//! # Ok::<(), geography_wkt::WktError>(())
//! ```
//!
//! ## SQLite
//!
//! `register_wkt_functions` adds `ST_AsGeographyText` and `ST_AsSqlServerText`
//! to a `rusqlite::Connection`. Both accept plain WKB or GeoPackage geometry
//! blobs.
//!
//! ```
//! use geography_wkt::register_wkt_functions;
//! use rusqlite::Connection;
//!
//! let conn = Connection::open_in_memory()?;
//! register_wkt_functions(&conn)?;
//! let text: String = conn.query_row(
//!     "SELECT ST_AsGeographyText(?1)",
//!     // WKB for POINT (1 2)
//!     [vec![1u8, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 240, 63, 0, 0, 0, 0, 0, 0, 0, 64]],
//!     |row| row.get(0),
//! )?;
//! assert_eq!(text, "POINT (2 1)");
//! # Ok::<(), geography_wkt::WktError>(())
//! ```
mod conversions;
mod error;
mod geometry;
mod sql_functions;
mod types;
mod writer;

pub use error::{Result, WktError};
pub use geometry::{
    Coordinate, CoordinateSequence, CoordinateSequenceFilter, Geometry, GeometryCollection,
    GeometryType, LineString, LinearRing, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
pub use sql_functions::register_wkt_functions;
pub use types::{Dialect, Ordinates, PrecisionModel};
pub use writer::{
    GeographyText, OrdinateFormatter, WktWriter, WriterConfiguration, WriterConfigurationBuilder,
    write_geometry,
};
