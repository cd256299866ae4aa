use crate::error::{Result, WktError};
use crate::types::{Dialect, Ordinates, PrecisionModel};

/// Immutable writer settings.
///
/// Build one with [`WriterConfiguration::builder`] or use a preset
/// ([`Default`], [`WriterConfiguration::sql_server`]). A configuration can be
/// shared freely between threads; writers only borrow it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriterConfiguration {
    output_ordinates: Ordinates,
    pretty_print: bool,
    max_coordinates_per_line: usize,
    indent_width: usize,
    precision_model: PrecisionModel,
    dialect: Dialect,
}

impl WriterConfiguration {
    pub fn builder() -> WriterConfigurationBuilder {
        WriterConfigurationBuilder::default()
    }

    /// Preset for SQL Server geography text.
    ///
    /// Four dimensions, no ordinate token, `NULL` for a missing Z, and Z is
    /// always written when M is.
    pub fn sql_server() -> Self {
        Self {
            output_ordinates: Ordinates::XYZM,
            dialect: Dialect::SQL_SERVER,
            ..Self::default()
        }
    }

    /// Ordinates requested by the configured dimension.
    pub fn output_ordinates(&self) -> Ordinates {
        self.output_ordinates
    }

    /// Output dimension (2, 3 or 4).
    pub fn dimension(&self) -> u8 {
        match (self.output_ordinates.has_z(), self.output_ordinates.has_m()) {
            (false, false) => 2,
            (true, true) => 4,
            _ => 3,
        }
    }

    pub fn pretty_print(&self) -> bool {
        self.pretty_print
    }

    /// Coordinates written on one line before wrapping; `0` never wraps.
    pub fn max_coordinates_per_line(&self) -> usize {
        self.max_coordinates_per_line
    }

    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    pub fn precision_model(&self) -> PrecisionModel {
        self.precision_model
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Same settings with pretty-printing switched on.
    pub(crate) fn formatted(&self) -> Self {
        Self {
            pretty_print: true,
            ..self.clone()
        }
    }
}

impl Default for WriterConfiguration {
    fn default() -> Self {
        Self {
            output_ordinates: Ordinates::XY,
            pretty_print: false,
            max_coordinates_per_line: 0,
            indent_width: 2,
            precision_model: PrecisionModel::Floating,
            dialect: Dialect::STANDARD,
        }
    }
}

/// Builder for [`WriterConfiguration`]. Values are validated in [`build`].
///
/// [`build`]: WriterConfigurationBuilder::build
#[derive(Clone, Debug)]
pub struct WriterConfigurationBuilder {
    dimension: u8,
    pretty_print: bool,
    max_coordinates_per_line: usize,
    indent_width: usize,
    precision_model: PrecisionModel,
    dialect: Dialect,
}

impl Default for WriterConfigurationBuilder {
    fn default() -> Self {
        let defaults = WriterConfiguration::default();
        Self {
            dimension: defaults.dimension(),
            pretty_print: defaults.pretty_print,
            max_coordinates_per_line: defaults.max_coordinates_per_line,
            indent_width: defaults.indent_width,
            precision_model: defaults.precision_model,
            dialect: defaults.dialect,
        }
    }
}

impl WriterConfigurationBuilder {
    /// 2 writes XY, 3 writes XYZ, 4 writes XYZM.
    pub fn dimension(mut self, dimension: u8) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    pub fn max_coordinates_per_line(mut self, max_coordinates_per_line: usize) -> Self {
        self.max_coordinates_per_line = max_coordinates_per_line;
        self
    }

    pub fn indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    pub fn precision_model(mut self, precision_model: PrecisionModel) -> Self {
        self.precision_model = precision_model;
        self
    }

    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn build(self) -> Result<WriterConfiguration> {
        let output_ordinates = Ordinates::from_dimension(self.dimension)
            .ok_or(WktError::InvalidDimension(self.dimension))?;
        if self.indent_width == 0 {
            return Err(WktError::InvalidIndentWidth(self.indent_width));
        }

        Ok(WriterConfiguration {
            output_ordinates,
            pretty_print: self.pretty_print,
            max_coordinates_per_line: self.max_coordinates_per_line,
            indent_width: self.indent_width,
            precision_model: self.precision_model,
            dialect: self.dialect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::WriterConfiguration;
    use crate::Result;
    use crate::error::WktError;
    use crate::types::{Dialect, Ordinates, PrecisionModel};

    #[test]
    fn builder_defaults_match_default() -> Result<()> {
        let built = WriterConfiguration::builder().build()?;
        assert_eq!(built, WriterConfiguration::default());
        assert_eq!(built.dimension(), 2);
        assert_eq!(built.indent_width(), 2);
        assert_eq!(built.max_coordinates_per_line(), 0);
        assert!(!built.pretty_print());
        Ok(())
    }

    #[test]
    fn builder_maps_dimension_to_ordinates() -> Result<()> {
        for (dimension, ordinates) in [
            (2, Ordinates::XY),
            (3, Ordinates::XYZ),
            (4, Ordinates::XYZM),
        ] {
            let config = WriterConfiguration::builder().dimension(dimension).build()?;
            assert_eq!(config.output_ordinates(), ordinates);
            assert_eq!(config.dimension(), dimension);
        }
        Ok(())
    }

    #[test]
    fn builder_rejects_invalid_dimension() {
        for dimension in [0, 1, 5] {
            let result = WriterConfiguration::builder().dimension(dimension).build();
            assert!(matches!(result, Err(WktError::InvalidDimension(d)) if d == dimension));
        }
    }

    #[test]
    fn builder_rejects_zero_indent_width() {
        let result = WriterConfiguration::builder().indent_width(0).build();
        assert!(matches!(result, Err(WktError::InvalidIndentWidth(0))));
    }

    #[test]
    fn builder_keeps_every_setting() -> Result<()> {
        let config = WriterConfiguration::builder()
            .dimension(3)
            .pretty_print(true)
            .max_coordinates_per_line(4)
            .indent_width(3)
            .precision_model(PrecisionModel::fixed(5))
            .dialect(Dialect::SQL_SERVER)
            .build()?;
        assert!(config.pretty_print());
        assert_eq!(config.max_coordinates_per_line(), 4);
        assert_eq!(config.indent_width(), 3);
        assert_eq!(config.precision_model(), PrecisionModel::fixed(5));
        assert_eq!(config.dialect(), Dialect::SQL_SERVER);
        Ok(())
    }

    #[test]
    fn sql_server_preset() {
        let config = WriterConfiguration::sql_server();
        assert_eq!(config.dimension(), 4);
        assert_eq!(config.dialect(), Dialect::SQL_SERVER);
        assert!(!config.pretty_print());
    }

    #[test]
    fn configuration_is_shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<WriterConfiguration>();
    }
}
