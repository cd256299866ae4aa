//! Read-only geometry model consumed by the writer.
//!
//! Optional ordinates (Z, M) are stored as `f64::NAN` when absent. There is no
//! separate presence flag: a NaN ordinate *is* an absent ordinate.

/// A single coordinate. `z` and `m` are `NaN` when absent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub m: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: f64::NAN,
            m: f64::NAN,
        }
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self { z, ..Self::new(x, y) }
    }

    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self { m, ..Self::new(x, y) }
    }

    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self { x, y, z, m }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Ordered list of coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordinateSequence(Vec<Coordinate>);

impl CoordinateSequence {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self(coordinates)
    }

    pub fn count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn x(&self, i: usize) -> f64 {
        self.0[i].x
    }

    pub fn y(&self, i: usize) -> f64 {
        self.0[i].y
    }

    /// Z of the `i`-th coordinate, `NaN` when absent.
    pub fn z(&self, i: usize) -> f64 {
        self.0[i].z
    }

    /// M of the `i`-th coordinate, `NaN` when absent.
    pub fn m(&self, i: usize) -> f64 {
        self.0[i].m
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }
}

impl<C: Into<Coordinate>> FromIterator<C> for CoordinateSequence {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<C: Into<Coordinate>> From<Vec<C>> for CoordinateSequence {
    fn from(coordinates: Vec<C>) -> Self {
        coordinates.into_iter().collect()
    }
}

/// A point holds zero (empty) or one coordinate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point(CoordinateSequence);

impl Point {
    pub fn new(coordinate: Coordinate) -> Self {
        Self(CoordinateSequence(vec![coordinate]))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn coordinate_sequence(&self) -> &CoordinateSequence {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineString(CoordinateSequence);

impl LineString {
    pub fn new(coordinates: impl Into<CoordinateSequence>) -> Self {
        Self(coordinates.into())
    }

    pub fn coordinate_sequence(&self) -> &CoordinateSequence {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A closed line string used as a polygon boundary.
///
/// Closure is not checked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearRing(CoordinateSequence);

impl LinearRing {
    pub fn new(coordinates: impl Into<CoordinateSequence>) -> Self {
        Self(coordinates.into())
    }

    pub fn coordinate_sequence(&self) -> &CoordinateSequence {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    exterior: LinearRing,
    interiors: Vec<LinearRing>,
}

impl Polygon {
    pub fn new(exterior: LinearRing, interiors: Vec<LinearRing>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    pub fn exterior(&self) -> &LinearRing {
        &self.exterior
    }

    pub fn num_interiors(&self) -> usize {
        self.interiors.len()
    }

    pub fn interior(&self, i: usize) -> &LinearRing {
        &self.interiors[i]
    }

    pub fn interiors(&self) -> &[LinearRing] {
        &self.interiors
    }

    /// A polygon is empty when its exterior ring has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }
}

macro_rules! impl_container {
    ($name:ident, $child:ty) => {
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name(Vec<$child>);

        impl $name {
            pub fn new(children: Vec<$child>) -> Self {
                Self(children)
            }

            pub fn child_count(&self) -> usize {
                self.0.len()
            }

            pub fn child(&self, i: usize) -> &$child {
                &self.0[i]
            }

            pub fn children(&self) -> &[$child] {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }
    };
}

impl_container!(MultiPoint, Point);
impl_container!(MultiLineString, LineString);
impl_container!(MultiPolygon, Polygon);
impl_container!(GeometryCollection, Geometry);

/// Discriminator of a [`Geometry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// The WKT tag word.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Point => "POINT",
            Self::LineString => "LINESTRING",
            Self::LinearRing => "LINEARRING",
            Self::Polygon => "POLYGON",
            Self::MultiPoint => "MULTIPOINT",
            Self::MultiLineString => "MULTILINESTRING",
            Self::MultiPolygon => "MULTIPOLYGON",
            Self::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(_) => GeometryType::Point,
            Self::LineString(_) => GeometryType::LineString,
            Self::LinearRing(_) => GeometryType::LinearRing,
            Self::Polygon(_) => GeometryType::Polygon,
            Self::MultiPoint(_) => GeometryType::MultiPoint,
            Self::MultiLineString(_) => GeometryType::MultiLineString,
            Self::MultiPolygon(_) => GeometryType::MultiPolygon,
            Self::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Point(g) => g.is_empty(),
            Self::LineString(g) => g.is_empty(),
            Self::LinearRing(g) => g.is_empty(),
            Self::Polygon(g) => g.is_empty(),
            Self::MultiPoint(g) => g.is_empty(),
            Self::MultiLineString(g) => g.is_empty(),
            Self::MultiPolygon(g) => g.is_empty(),
            Self::GeometryCollection(g) => g.is_empty(),
        }
    }

    /// Visit every coordinate in document order until `filter` reports done.
    pub fn apply<F: CoordinateSequenceFilter>(&self, filter: &mut F) {
        let _ = self.apply_until_done(filter);
    }

    // Returns `true` once the filter is done so callers can stop walking.
    fn apply_until_done<F: CoordinateSequenceFilter>(&self, filter: &mut F) -> bool {
        match self {
            Self::Point(g) => apply_sequence(g.coordinate_sequence(), filter),
            Self::LineString(g) => apply_sequence(g.coordinate_sequence(), filter),
            Self::LinearRing(g) => apply_sequence(g.coordinate_sequence(), filter),
            Self::Polygon(g) => apply_polygon(g, filter),
            Self::MultiPoint(g) => g
                .children()
                .iter()
                .any(|p| apply_sequence(p.coordinate_sequence(), filter)),
            Self::MultiLineString(g) => g
                .children()
                .iter()
                .any(|l| apply_sequence(l.coordinate_sequence(), filter)),
            Self::MultiPolygon(g) => g.children().iter().any(|p| apply_polygon(p, filter)),
            Self::GeometryCollection(g) => {
                g.children().iter().any(|child| child.apply_until_done(filter))
            }
        }
    }
}

fn apply_polygon<F: CoordinateSequenceFilter>(polygon: &Polygon, filter: &mut F) -> bool {
    apply_sequence(polygon.exterior().coordinate_sequence(), filter)
        || polygon
            .interiors()
            .iter()
            .any(|ring| apply_sequence(ring.coordinate_sequence(), filter))
}

fn apply_sequence<F: CoordinateSequenceFilter>(seq: &CoordinateSequence, filter: &mut F) -> bool {
    if filter.is_done() {
        return true;
    }
    for i in 0..seq.count() {
        filter.filter(seq, i);
        if filter.is_done() {
            return true;
        }
    }
    false
}

/// Read-only visitor over the coordinates of a geometry.
pub trait CoordinateSequenceFilter {
    /// Called for the `i`-th coordinate of `seq`.
    fn filter(&mut self, seq: &CoordinateSequence, i: usize);

    /// `true` once no further coordinates need to be visited.
    fn is_done(&self) -> bool;
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(g: $variant) -> Self {
                    Self::$variant(g)
                }
            }
        )*
    };
}

impl_from_variant!(
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        visited: usize,
        limit: usize,
    }

    impl CoordinateSequenceFilter for Counter {
        fn filter(&mut self, _seq: &CoordinateSequence, _i: usize) {
            self.visited += 1;
        }

        fn is_done(&self) -> bool {
            self.visited >= self.limit
        }
    }

    fn square() -> Polygon {
        Polygon::new(
            LinearRing::new(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)]),
            vec![LinearRing::new(vec![(0.2, 0.2), (0.2, 0.4), (0.4, 0.4), (0.2, 0.2)])],
        )
    }

    #[test]
    fn apply_visits_every_coordinate() {
        let collection: Geometry = GeometryCollection::new(vec![
            Point::new(Coordinate::new(1.0, 2.0)).into(),
            MultiPolygon::new(vec![square()]).into(),
            Point::empty().into(),
        ])
        .into();

        let mut counter = Counter {
            visited: 0,
            limit: usize::MAX,
        };
        collection.apply(&mut counter);
        assert_eq!(counter.visited, 9);
    }

    #[test]
    fn apply_stops_when_done() {
        let line: Geometry = LineString::new(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).into();
        let mut counter = Counter {
            visited: 0,
            limit: 2,
        };
        line.apply(&mut counter);
        assert_eq!(counter.visited, 2);
    }

    #[test]
    fn emptiness_is_per_variant() {
        assert!(Geometry::from(Point::empty()).is_empty());
        assert!(Geometry::from(LineString::default()).is_empty());
        assert!(Geometry::from(Polygon::default()).is_empty());
        assert!(Geometry::from(MultiPoint::default()).is_empty());
        assert!(!Geometry::from(square()).is_empty());
        // A collection holding only empty children is not itself empty.
        assert!(!Geometry::from(GeometryCollection::new(vec![Point::empty().into()])).is_empty());
    }

    #[test]
    fn indexed_accessors_walk_rings_and_children() {
        let polygon = square();
        assert_eq!(polygon.num_interiors(), 1);
        let rings: Vec<&LinearRing> = (0..polygon.num_interiors())
            .map(|i| polygon.interior(i))
            .collect();
        assert_eq!(rings[0].coordinate_sequence().count(), 4);
        assert_eq!(rings[0].coordinate_sequence().x(1), 0.2);
        assert_eq!(rings[0].coordinate_sequence().y(1), 0.4);

        let collection = GeometryCollection::new(vec![
            Point::new(Coordinate::new(1.0, 2.0)).into(),
            MultiPolygon::new(vec![square(), square()]).into(),
        ]);
        assert_eq!(collection.child_count(), 2);
        assert_eq!(collection.child(0).geometry_type(), GeometryType::Point);
        let Geometry::MultiPolygon(multi) = collection.child(1) else {
            panic!("expected a multipolygon");
        };
        assert_eq!(multi.child_count(), 2);
        assert_eq!(multi.child(1).num_interiors(), 1);
        assert_eq!(multi.child(1).exterior().coordinate_sequence().count(), 4);
    }

    #[test]
    fn absent_ordinates_are_nan() {
        let seq = CoordinateSequence::new(vec![
            Coordinate::new(1.0, 2.0),
            Coordinate::xym(1.0, 2.0, 3.0),
        ]);
        assert!(seq.z(0).is_nan());
        assert!(seq.m(0).is_nan());
        assert!(seq.z(1).is_nan());
        assert_eq!(seq.m(1), 3.0);
        assert_eq!(GeometryType::LinearRing.tag(), "LINEARRING");
    }
}
