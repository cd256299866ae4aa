//! Recursive WKT emission.
//!
//! Every function takes the nesting `level` explicitly; containers pass
//! `level + 1` to their children. Coordinates are written Y first.

use super::format::OrdinateFormatter;
use super::indent::Indentation;
use crate::geometry::{
    CoordinateSequence, Geometry, GeometryCollection, MultiLineString, MultiPoint, MultiPolygon,
    Polygon,
};
use crate::types::{Dialect, Ordinates};
use std::fmt::{self, Write};

pub(crate) struct TaggedText<'a, W: ?Sized> {
    pub(crate) out: &'a mut W,
    pub(crate) ordinates: Ordinates,
    pub(crate) dialect: Dialect,
    pub(crate) formatter: OrdinateFormatter,
    pub(crate) indentation: Indentation,
}

impl<W: Write + ?Sized> TaggedText<'_, W> {
    pub(crate) fn geometry(&mut self, geometry: &Geometry, level: usize) -> fmt::Result {
        self.indentation.indent(self.out, level)?;
        self.tag(geometry)?;
        match geometry {
            Geometry::Point(point) => self.sequence(point.coordinate_sequence(), level, false),
            Geometry::LineString(line) => self.sequence(line.coordinate_sequence(), level, false),
            Geometry::LinearRing(ring) => self.sequence(ring.coordinate_sequence(), level, false),
            Geometry::Polygon(polygon) => self.polygon(polygon, level, false),
            Geometry::MultiPoint(multi) => self.multi_point(multi, level),
            Geometry::MultiLineString(multi) => self.multi_line_string(multi, level),
            Geometry::MultiPolygon(multi) => self.multi_polygon(multi, level),
            Geometry::GeometryCollection(collection) => self.collection(collection, level),
        }
    }

    // "POINT ", then "Z "/"M "/"ZM " unless the dialect drops the token.
    fn tag(&mut self, geometry: &Geometry) -> fmt::Result {
        self.out.write_str(geometry.geometry_type().tag())?;
        self.out.write_char(' ')?;
        if self.dialect.emits_ordinate_token() {
            self.out.write_str(self.ordinates.token())?;
        }
        Ok(())
    }

    fn sequence(
        &mut self,
        seq: &CoordinateSequence,
        level: usize,
        indent_first: bool,
    ) -> fmt::Result {
        if seq.is_empty() {
            return self.out.write_str("EMPTY");
        }
        if indent_first {
            self.indentation.indent(self.out, level)?;
        }
        self.out.write_char('(')?;
        for i in 0..seq.count() {
            if i > 0 {
                self.out.write_str(", ")?;
                self.indentation.maybe_wrap(self.out, i, level + 1)?;
            }
            self.coordinate(seq, i)?;
        }
        self.out.write_char(')')
    }

    fn coordinate(&mut self, seq: &CoordinateSequence, i: usize) -> fmt::Result {
        self.formatter.write(self.out, seq.y(i))?;
        self.out.write_char(' ')?;
        self.formatter.write(self.out, seq.x(i))?;

        if self.ordinates.has_z() {
            self.out.write_char(' ')?;
            let z = seq.z(i);
            if z.is_nan() {
                self.out.write_str(self.dialect.missing_ordinate_marker())?;
            } else {
                self.formatter.write(self.out, z)?;
            }
        }
        // M has no missing-value substitution.
        if self.ordinates.has_m() {
            self.out.write_char(' ')?;
            self.formatter.write(self.out, seq.m(i))?;
        }
        Ok(())
    }

    fn polygon(&mut self, polygon: &Polygon, level: usize, indent_first: bool) -> fmt::Result {
        if polygon.is_empty() {
            return self.out.write_str("EMPTY");
        }
        if indent_first {
            self.indentation.indent(self.out, level)?;
        }
        self.out.write_char('(')?;
        self.sequence(polygon.exterior().coordinate_sequence(), level, false)?;
        for ring in polygon.interiors() {
            self.out.write_str(", ")?;
            self.sequence(ring.coordinate_sequence(), level + 1, true)?;
        }
        self.out.write_char(')')
    }

    fn multi_point(&mut self, multi: &MultiPoint, level: usize) -> fmt::Result {
        if multi.is_empty() {
            return self.out.write_str("EMPTY");
        }
        self.out.write_char('(')?;
        for (i, point) in multi.children().iter().enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
                self.indentation.maybe_wrap(self.out, i, level + 1)?;
            }
            self.sequence(point.coordinate_sequence(), level, false)?;
        }
        self.out.write_char(')')
    }

    fn multi_line_string(&mut self, multi: &MultiLineString, level: usize) -> fmt::Result {
        if multi.is_empty() {
            return self.out.write_str("EMPTY");
        }
        let mut child_level = level;
        let mut indent_first = false;
        self.out.write_char('(')?;
        for (i, line) in multi.children().iter().enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
                child_level = level + 1;
                indent_first = true;
            }
            self.sequence(line.coordinate_sequence(), child_level, indent_first)?;
        }
        self.out.write_char(')')
    }

    fn multi_polygon(&mut self, multi: &MultiPolygon, level: usize) -> fmt::Result {
        if multi.is_empty() {
            return self.out.write_str("EMPTY");
        }
        let mut child_level = level;
        let mut indent_first = false;
        self.out.write_char('(')?;
        for (i, polygon) in multi.children().iter().enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
                child_level = level + 1;
                indent_first = true;
            }
            self.polygon(polygon, child_level, indent_first)?;
        }
        self.out.write_char(')')
    }

    fn collection(&mut self, collection: &GeometryCollection, level: usize) -> fmt::Result {
        if collection.is_empty() {
            return self.out.write_str("EMPTY");
        }
        let mut child_level = level;
        self.out.write_char('(')?;
        for (i, child) in collection.children().iter().enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
                child_level = level + 1;
            }
            self.geometry(child, child_level)?;
        }
        self.out.write_char(')')
    }
}
