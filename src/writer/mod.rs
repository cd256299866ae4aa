mod config;
mod format;
mod indent;
mod presence;
mod tagged_text;

pub use config::{WriterConfiguration, WriterConfigurationBuilder};
pub use format::OrdinateFormatter;

use crate::error::{Result, WktError};
use crate::geometry::Geometry;
use geo_traits::GeometryTrait;
use indent::Indentation;
use presence::OrdinatePresence;
use std::fmt;
use tagged_text::TaggedText;

/// Writes [`Geometry`] values as latitude-first WKT.
///
/// The writer only borrows its configuration, so one configuration can back
/// any number of writers on any number of threads.
///
/// ```
/// use geography_wkt::{Coordinate, Geometry, Point, WktWriter, WriterConfiguration};
///
/// let config = WriterConfiguration::default();
/// let point: Geometry = Point::new(Coordinate::new(10.5, 20.25)).into();
/// assert_eq!(WktWriter::new(&config).write(&point)?, "POINT (20.25 10.5)");
/// # Ok::<(), geography_wkt::WktError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct WktWriter<'a> {
    config: &'a WriterConfiguration,
}

impl<'a> WktWriter<'a> {
    pub fn new(config: &'a WriterConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a WriterConfiguration {
        self.config
    }

    /// Write `geometry` into a new `String`.
    pub fn write(&self, geometry: &Geometry) -> Result<String> {
        let mut text = String::new();
        self.write_into(geometry, &mut text)?;
        Ok(text)
    }

    /// Write `geometry` with pretty-printing on, whatever the configuration says.
    pub fn write_formatted(&self, geometry: &Geometry) -> Result<String> {
        let config = self.config.formatted();
        WktWriter::new(&config).write(geometry)
    }

    /// Append `geometry` to a `fmt::Write` sink.
    ///
    /// On error the sink may hold a partial geometry.
    pub fn write_into<W: fmt::Write + ?Sized>(
        &self,
        geometry: &Geometry,
        out: &mut W,
    ) -> Result<()> {
        Ok(write_tagged_text(self.config, geometry, out)?)
    }

    /// Write `geometry` as UTF-8 to an `io::Write` sink.
    pub fn write_to_io<W: std::io::Write + ?Sized>(
        &self,
        geometry: &Geometry,
        out: &mut W,
    ) -> Result<()> {
        let mut adapter = IoAdapter {
            inner: out,
            error: None,
        };
        match write_tagged_text(self.config, geometry, &mut adapter) {
            Ok(()) => Ok(()),
            Err(err) => Err(adapter.error.take().map_or(WktError::Fmt(err), WktError::Io)),
        }
    }

    /// A [`fmt::Display`] view of `geometry`.
    pub fn display<'g>(&self, geometry: &'g Geometry) -> GeographyText<'a, 'g> {
        GeographyText {
            config: self.config,
            geometry,
        }
    }
}

/// Write any `geo-traits` geometry as latitude-first WKT.
///
/// ```
/// use geography_wkt::{WriterConfiguration, write_geometry};
///
/// let mut wkt = String::new();
/// let line = geo_types::LineString::from(vec![(1.0, 2.0), (3.0, 4.0)]);
/// write_geometry(&mut wkt, &line, &WriterConfiguration::default())?;
/// assert_eq!(wkt, "LINESTRING (2 1, 4 3)");
/// # Ok::<(), geography_wkt::WktError>(())
/// ```
pub fn write_geometry<W, G>(out: &mut W, geometry: &G, config: &WriterConfiguration) -> Result<()>
where
    W: fmt::Write + ?Sized,
    G: GeometryTrait<T = f64>,
{
    WktWriter::new(config).write_into(&Geometry::from_geo_traits(geometry), out)
}

/// Display adapter returned by [`WktWriter::display`].
#[derive(Clone, Copy, Debug)]
pub struct GeographyText<'a, 'g> {
    config: &'a WriterConfiguration,
    geometry: &'g Geometry,
}

impl fmt::Display for GeographyText<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tagged_text(self.config, self.geometry, f)
    }
}

fn write_tagged_text<W: fmt::Write + ?Sized>(
    config: &WriterConfiguration,
    geometry: &Geometry,
    out: &mut W,
) -> fmt::Result {
    let dialect = config.dialect();
    let ordinates =
        OrdinatePresence::detect(geometry, config.output_ordinates(), dialect.m_implies_z());
    log::trace!(
        "writing {:?} with ordinates {ordinates:?}",
        geometry.geometry_type()
    );

    let mut text = TaggedText {
        out,
        ordinates,
        dialect,
        formatter: OrdinateFormatter::new(config.precision_model()),
        indentation: Indentation::new(
            config.pretty_print(),
            config.indent_width(),
            config.max_coordinates_per_line(),
        ),
    };
    text.geometry(geometry, 0)
}

// Keeps the underlying io error, which `fmt::Error` cannot carry.
struct IoAdapter<'a, W: ?Sized> {
    inner: &'a mut W,
    error: Option<std::io::Error>,
}

impl<W: std::io::Write + ?Sized> fmt::Write for IoAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}
