use crate::error::{Result, WktError};
use crate::geometry::Geometry;
use crate::writer::{WktWriter, WriterConfiguration};
use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::types::{Type, ValueRef};
use rusqlite::{Connection, Error};

/// Register the geography WKT SQL functions in the provided connection.
///
/// - `ST_AsGeographyText(geom)`: latitude-first WKT with the default settings.
/// - `ST_AsGeographyText(geom, dimension)`: same, with an output dimension
///   of 2, 3 or 4.
/// - `ST_AsSqlServerText(geom)`: SQL Server geography text.
///
/// `geom` is either plain WKB or a GeoPackage geometry blob.
///
/// Example:
/// ```
/// use rusqlite::Connection;
/// use geography_wkt::register_wkt_functions;
///
/// let conn = Connection::open_in_memory()?;
/// register_wkt_functions(&conn)?;
/// let text: Option<String> =
///     conn.query_row("SELECT ST_AsGeographyText(NULL)", [], |row| row.get(0))?;
/// assert!(text.is_none());
/// # Ok::<(), geography_wkt::WktError>(())
/// ```
pub fn register_wkt_functions(conn: &Connection) -> Result<()> {
    register_st_asgeographytext(conn)?;
    register_st_asgeographytext_with_dimension(conn)?;
    register_st_assqlservertext(conn)?;
    log::debug!("registered geography wkt sql functions");
    Ok(())
}

pub(crate) fn register_st_asgeographytext(conn: &Connection) -> Result<()> {
    register_with_config(conn, "ST_AsGeographyText", WriterConfiguration::default())
}

pub(crate) fn register_st_assqlservertext(conn: &Connection) -> Result<()> {
    register_with_config(conn, "ST_AsSqlServerText", WriterConfiguration::sql_server())
}

pub(crate) fn register_st_asgeographytext_with_dimension(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        "ST_AsGeographyText",
        2,
        FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let dimension: i64 = ctx.get(1)?;
            // Anything outside u8 is rejected by the builder like any other bad dimension.
            let dimension = u8::try_from(dimension).unwrap_or(u8::MAX);
            let config = WriterConfiguration::builder()
                .dimension(dimension)
                .build()
                .map_err(user_function_error)?;
            geography_text(ctx, &config)
        },
    )?;
    Ok(())
}

fn register_with_config(
    conn: &Connection,
    name: &str,
    config: WriterConfiguration,
) -> Result<()> {
    conn.create_scalar_function(name, 1, FunctionFlags::SQLITE_DETERMINISTIC, move |ctx| {
        geography_text(ctx, &config)
    })?;
    Ok(())
}

fn geography_text(
    ctx: &Context<'_>,
    config: &WriterConfiguration,
) -> std::result::Result<Option<String>, Error> {
    let geometry = match geometry_from_ctx(ctx)? {
        Some(geometry) => geometry,
        None => return Ok(None),
    };
    WktWriter::new(config)
        .write(&geometry)
        .map(Some)
        .map_err(user_function_error)
}

fn geometry_from_ctx(ctx: &Context<'_>) -> std::result::Result<Option<Geometry>, Error> {
    match ctx.get_raw(0) {
        ValueRef::Null => Ok(None),
        ValueRef::Blob(blob) => Geometry::from_blob(blob)
            .map(Some)
            .map_err(user_function_error),
        _ => Err(Error::InvalidFunctionParameterType(0, Type::Blob)),
    }
}

fn user_function_error(err: WktError) -> Error {
    Error::UserFunctionError(Box::new(err))
}

#[cfg(test)]
mod tests {
    use super::register_wkt_functions;
    use rusqlite::{Connection, params};
    use std::str::FromStr;
    use wkt::Wkt;

    fn wkb_from_wkt(text: &str) -> crate::Result<Vec<u8>> {
        let geometry = Wkt::<f64>::from_str(text).expect("valid wkt");
        let mut wkb = Vec::new();
        wkb::writer::write_geometry(&mut wkb, &geometry, &Default::default())?;
        Ok(wkb)
    }

    fn gpkg_blob_from_wkt(text: &str) -> crate::Result<Vec<u8>> {
        let mut blob = vec![
            0x47u8, // magic
            0x50u8, // magic
            0x00u8, // version
            0x03u8, // flags (little endian SRS ID, [minx, maxx, miny, maxy] envelope)
        ];
        blob.extend_from_slice(&4326u32.to_le_bytes());
        for bound in [0.0f64, 0.0, 0.0, 0.0] {
            blob.extend_from_slice(&bound.to_le_bytes());
        }
        blob.extend_from_slice(&wkb_from_wkt(text)?);
        Ok(blob)
    }

    fn connection() -> crate::Result<Connection> {
        let conn = Connection::open_in_memory()?;
        register_wkt_functions(&conn)?;
        Ok(conn)
    }

    #[test]
    fn st_asgeographytext_swaps_axes() -> crate::Result<()> {
        let conn = connection()?;
        let blob = wkb_from_wkt("POINT (10.5 20.25)")?;

        let text: String =
            conn.query_row("SELECT ST_AsGeographyText(?1)", params![blob], |row| {
                row.get(0)
            })?;

        assert_eq!(text, "POINT (20.25 10.5)");
        Ok(())
    }

    #[test]
    fn st_asgeographytext_reads_gpkg_blobs() -> crate::Result<()> {
        let conn = connection()?;
        let blob = gpkg_blob_from_wkt("LINESTRING (1 2, 3 4)")?;

        let text: String =
            conn.query_row("SELECT ST_AsGeographyText(?1)", params![blob], |row| {
                row.get(0)
            })?;

        assert_eq!(text, "LINESTRING (2 1, 4 3)");
        Ok(())
    }

    #[test]
    fn st_asgeographytext_with_dimension() -> crate::Result<()> {
        let conn = connection()?;
        let blob = wkb_from_wkt("LINESTRING Z (1 2 5, 3 4 6)")?;

        let (flat, with_z): (String, String) = conn.query_row(
            "SELECT ST_AsGeographyText(?1, 2), ST_AsGeographyText(?1, 3)",
            params![blob],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        assert_eq!(flat, "LINESTRING (2 1, 4 3)");
        assert_eq!(with_z, "LINESTRING Z (2 1 5, 4 3 6)");
        Ok(())
    }

    #[test]
    fn st_asgeographytext_rejects_invalid_dimension() -> crate::Result<()> {
        let conn = connection()?;
        let blob = wkb_from_wkt("POINT (1 2)")?;

        for dimension in [1i64, 5, 300, -1] {
            let result: rusqlite::Result<String> = conn.query_row(
                "SELECT ST_AsGeographyText(?1, ?2)",
                params![blob, dimension],
                |row| row.get(0),
            );
            assert!(result.is_err(), "dimension {dimension}");
        }
        Ok(())
    }

    #[test]
    fn st_assqlservertext_drops_token() -> crate::Result<()> {
        let conn = connection()?;
        let blob = wkb_from_wkt("POINT ZM (1 2 3 4)")?;

        let text: String =
            conn.query_row("SELECT ST_AsSqlServerText(?1)", params![blob], |row| {
                row.get(0)
            })?;

        assert_eq!(text, "POINT (2 1 3 4)");
        Ok(())
    }

    #[test]
    fn null_in_null_out() -> crate::Result<()> {
        let conn = connection()?;

        let (a, b): (Option<String>, Option<String>) = conn.query_row(
            "SELECT ST_AsGeographyText(NULL), ST_AsSqlServerText(NULL)",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        assert!(a.is_none());
        assert!(b.is_none());
        Ok(())
    }

    #[test]
    fn non_blob_and_garbage_input_fail() -> crate::Result<()> {
        let conn = connection()?;

        let result: rusqlite::Result<String> =
            conn.query_row("SELECT ST_AsGeographyText('POINT (1 2)')", [], |row| {
                row.get(0)
            });
        assert!(result.is_err());

        let result: rusqlite::Result<String> = conn.query_row(
            "SELECT ST_AsGeographyText(?1)",
            params![vec![0x47u8, 0x50, 0x00, 0x0f]],
            |row| row.get(0),
        );
        assert!(result.is_err());
        Ok(())
    }
}
