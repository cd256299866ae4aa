use std::fmt::{self, Write};

/// Line breaks and indentation for pretty-printed output.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Indentation {
    enabled: bool,
    width: usize,
    coordinates_per_line: usize,
}

impl Indentation {
    pub(crate) fn new(enabled: bool, width: usize, coordinates_per_line: usize) -> Self {
        Self {
            enabled,
            width,
            coordinates_per_line,
        }
    }

    /// Newline plus `level` indent units. No-op when disabled or at level 0.
    pub(crate) fn indent<W: Write + ?Sized>(&self, out: &mut W, level: usize) -> fmt::Result {
        if !self.enabled || level == 0 {
            return Ok(());
        }
        out.write_char('\n')?;
        for _ in 0..level * self.width {
            out.write_char(' ')?;
        }
        Ok(())
    }

    /// Start a new line before the `coordinate_index`-th coordinate when the
    /// per-line limit is reached.
    pub(crate) fn maybe_wrap<W: Write + ?Sized>(
        &self,
        out: &mut W,
        coordinate_index: usize,
        level: usize,
    ) -> fmt::Result {
        if self.coordinates_per_line == 0 || coordinate_index % self.coordinates_per_line != 0 {
            return Ok(());
        }
        self.indent(out, level)
    }
}
