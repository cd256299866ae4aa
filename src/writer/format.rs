use crate::types::PrecisionModel;
use std::fmt::{self, Write};

/// Writes single ordinate values as culture-invariant decimal text.
///
/// `f64`'s `Display` already produces the shortest text that round-trips and
/// never switches to exponent notation, so every precision model reduces to
/// "round, then display".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrdinateFormatter {
    precision_model: PrecisionModel,
}

impl OrdinateFormatter {
    pub fn new(precision_model: PrecisionModel) -> Self {
        Self { precision_model }
    }

    pub fn precision_model(&self) -> PrecisionModel {
        self.precision_model
    }

    /// Write `value` into `out`.
    ///
    /// `NaN` is written as `NaN`. Infinite values are a caller error.
    pub fn write<W: Write + ?Sized>(&self, out: &mut W, value: f64) -> fmt::Result {
        if value.is_nan() {
            return out.write_str("NaN");
        }
        debug_assert!(value.is_finite(), "cannot write infinite ordinate");
        if value.is_infinite() {
            return out.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }

        match self.precision_model {
            PrecisionModel::Floating => write!(out, "{value}"),
            PrecisionModel::FloatingSingle => {
                let narrowed = value as f32;
                // Finite values beyond the f32 range keep their f64 text.
                if narrowed.is_finite() {
                    write!(out, "{narrowed}")
                } else {
                    write!(out, "{value}")
                }
            }
            PrecisionModel::Fixed { .. } => {
                let digits = self.precision_model.maximum_significant_digits();
                write!(out, "{}", round_to_significant_digits(value, digits))
            }
        }
    }

    /// Convenience wrapper returning the text of one value.
    pub fn format(&self, value: f64) -> String {
        let mut text = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write(&mut text, value);
        text
    }
}

impl Default for OrdinateFormatter {
    fn default() -> Self {
        Self::new(PrecisionModel::Floating)
    }
}

/// Round a finite value to `digits` significant digits (`digits >= 1`).
fn round_to_significant_digits(value: f64, digits: u32) -> f64 {
    if value == 0.0 || digits >= 17 {
        return value;
    }
    let rounded = format!("{:.*e}", (digits - 1) as usize, value);
    rounded.parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::OrdinateFormatter;
    use crate::types::PrecisionModel;

    #[test]
    fn floating_uses_shortest_round_trip_text() {
        let formatter = OrdinateFormatter::default();
        assert_eq!(formatter.format(10.5), "10.5");
        assert_eq!(formatter.format(20.25), "20.25");
        assert_eq!(formatter.format(1.0), "1");
        assert_eq!(formatter.format(-0.1), "-0.1");
        assert_eq!(formatter.format(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(formatter.format(123456789.125), "123456789.125");
    }

    #[test]
    fn floating_never_uses_exponent_notation() {
        let formatter = OrdinateFormatter::default();
        assert_eq!(formatter.format(1e-7), "0.0000001");
        assert_eq!(formatter.format(1e21), "1000000000000000000000");
    }

    #[test]
    fn floating_single_narrows_to_f32() {
        let formatter = OrdinateFormatter::new(PrecisionModel::FloatingSingle);
        assert_eq!(formatter.format(0.1), "0.1");
        assert_eq!(formatter.format(1.0 / 3.0), "0.33333334");
    }

    #[test]
    fn floating_single_keeps_values_outside_f32_range() {
        let single = OrdinateFormatter::new(PrecisionModel::FloatingSingle);
        let double = OrdinateFormatter::default();
        for value in [1e39, -1e39, f64::MAX, f64::MIN] {
            let text = single.format(value);
            assert_eq!(text, double.format(value));
            assert!(!text.contains("inf"), "{text}");
        }
        assert!(single.format(1e39).starts_with("1000000000"));
        assert!(single.format(-1e39).starts_with("-1000000000"));
    }

    #[test]
    fn fixed_rounds_to_significant_digits() {
        let formatter = OrdinateFormatter::new(PrecisionModel::fixed(3));
        assert_eq!(formatter.format(1234.5678), "1230");
        assert_eq!(formatter.format(0.012345), "0.0123");
        assert_eq!(formatter.format(-9.876), "-9.88");
        assert_eq!(formatter.format(0.0), "0");

        let formatter = OrdinateFormatter::new(PrecisionModel::fixed(6));
        assert_eq!(formatter.format(47.6062095), "47.6062");
        assert_eq!(formatter.format(2.5), "2.5");
    }

    #[test]
    fn fixed_zero_digits_behaves_like_one() {
        let formatter = OrdinateFormatter::new(PrecisionModel::fixed(0));
        assert_eq!(formatter.format(47.6), "50");
    }

    #[test]
    fn nan_is_written_verbatim() {
        let formatter = OrdinateFormatter::default();
        assert_eq!(formatter.format(f64::NAN), "NaN");
    }

    #[test]
    fn formatting_is_idempotent() {
        for precision in [
            PrecisionModel::Floating,
            PrecisionModel::FloatingSingle,
            PrecisionModel::fixed(4),
        ] {
            let formatter = OrdinateFormatter::new(precision);
            for value in [0.0, -122.3321, 47.6062095, 1e-9, 98765.4321] {
                assert_eq!(formatter.format(value), formatter.format(value));
            }
        }
    }
}
