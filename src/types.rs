use std::fmt;

/// Set of ordinates written for each coordinate.
///
/// X and Y are always part of the set; only Z and M can be toggled.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ordinates(u8);

impl Ordinates {
    const X_BIT: u8 = 0b0001;
    const Y_BIT: u8 = 0b0010;
    const Z_BIT: u8 = 0b0100;
    const M_BIT: u8 = 0b1000;

    pub const XY: Self = Self(Self::X_BIT | Self::Y_BIT);
    pub const XYZ: Self = Self(Self::XY.0 | Self::Z_BIT);
    pub const XYM: Self = Self(Self::XY.0 | Self::M_BIT);
    pub const XYZM: Self = Self(Self::XYZ.0 | Self::M_BIT);

    /// Ordinates implied by an output dimension (2, 3 or 4).
    pub fn from_dimension(dimension: u8) -> Option<Self> {
        match dimension {
            2 => Some(Self::XY),
            3 => Some(Self::XYZ),
            4 => Some(Self::XYZM),
            _ => None,
        }
    }

    pub fn has_z(self) -> bool {
        self.0 & Self::Z_BIT != 0
    }

    pub fn has_m(self) -> bool {
        self.0 & Self::M_BIT != 0
    }

    pub fn with_z(self) -> Self {
        Self(self.0 | Self::Z_BIT)
    }

    pub fn with_m(self) -> Self {
        Self(self.0 | Self::M_BIT)
    }

    /// The `Z`, `M` or `ZM` suffix written after a geometry tag, if any.
    pub(crate) fn token(self) -> &'static str {
        match (self.has_z(), self.has_m()) {
            (false, false) => "",
            (true, false) => "Z ",
            (false, true) => "M ",
            (true, true) => "ZM ",
        }
    }
}

impl Default for Ordinates {
    fn default() -> Self {
        Self::XY
    }
}

impl fmt::Debug for Ordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("XY")?;
        if self.has_z() {
            f.write_str("Z")?;
        }
        if self.has_m() {
            f.write_str("M")?;
        }
        Ok(())
    }
}

/// Number of significant digits kept when writing coordinate values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrecisionModel {
    /// Full `f64` precision; values are written with the shortest round-trip text.
    #[default]
    Floating,
    /// `f32` precision.
    FloatingSingle,
    /// Values are rounded to this many significant digits.
    ///
    /// A count of zero is treated as one.
    Fixed { significant_digits: u32 },
}

impl PrecisionModel {
    pub fn fixed(significant_digits: u32) -> Self {
        Self::Fixed { significant_digits }
    }

    /// Maximum number of significant digits this model can represent.
    pub fn maximum_significant_digits(&self) -> u32 {
        match self {
            Self::Floating => 17,
            Self::FloatingSingle => 9,
            Self::Fixed { significant_digits } => (*significant_digits).max(1),
        }
    }
}

/// Output flavour of the writer.
///
/// Every dialect writes Y before X. Dialects differ in the ordinate token, the
/// text written for a missing Z value and whether a real M forces a Z slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dialect {
    emit_ordinate_token: bool,
    m_implies_z: bool,
    missing_ordinate_marker: &'static str,
}

impl Dialect {
    /// `POINT Z (lat lon z)`, missing Z written as `NaN`.
    pub const STANDARD: Self = Self {
        emit_ordinate_token: true,
        m_implies_z: false,
        missing_ordinate_marker: "NaN",
    };

    /// SQL Server geography text: no ordinate token, missing Z written as
    /// `NULL`, and M is never written without a Z slot.
    pub const SQL_SERVER: Self = Self {
        emit_ordinate_token: false,
        m_implies_z: true,
        missing_ordinate_marker: "NULL",
    };

    pub const fn with_ordinate_token(self, emit_ordinate_token: bool) -> Self {
        Self {
            emit_ordinate_token,
            ..self
        }
    }

    pub const fn with_m_implies_z(self, m_implies_z: bool) -> Self {
        Self {
            m_implies_z,
            ..self
        }
    }

    pub const fn with_missing_ordinate_marker(self, missing_ordinate_marker: &'static str) -> Self {
        Self {
            missing_ordinate_marker,
            ..self
        }
    }

    pub fn emits_ordinate_token(&self) -> bool {
        self.emit_ordinate_token
    }

    pub fn m_implies_z(&self) -> bool {
        self.m_implies_z
    }

    /// Written in place of a Z value that is absent (`NaN`).
    pub fn missing_ordinate_marker(&self) -> &'static str {
        self.missing_ordinate_marker
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::STANDARD
    }
}
