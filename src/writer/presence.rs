use crate::geometry::{CoordinateSequence, CoordinateSequenceFilter, Geometry};
use crate::types::Ordinates;

/// Finds which of the requested optional ordinates carry at least one real
/// (non-NaN) value.
#[derive(Debug)]
pub(crate) struct OrdinatePresence {
    requested: Ordinates,
    found: Ordinates,
    m_implies_z: bool,
}

impl OrdinatePresence {
    pub(crate) fn new(requested: Ordinates, m_implies_z: bool) -> Self {
        Self {
            requested,
            found: Ordinates::XY,
            m_implies_z,
        }
    }

    /// Effective ordinates for `geometry`. Always contains X and Y.
    pub(crate) fn detect(
        geometry: &Geometry,
        requested: Ordinates,
        m_implies_z: bool,
    ) -> Ordinates {
        let mut presence = Self::new(requested, m_implies_z);
        geometry.apply(&mut presence);
        presence.found
    }
}

impl CoordinateSequenceFilter for OrdinatePresence {
    fn filter(&mut self, seq: &CoordinateSequence, i: usize) {
        if self.requested.has_z() && !self.found.has_z() && !seq.z(i).is_nan() {
            self.found = self.found.with_z();
        }
        if self.requested.has_m() && !self.found.has_m() && !seq.m(i).is_nan() {
            self.found = self.found.with_m();
            if self.m_implies_z {
                self.found = self.found.with_z();
            }
        }
    }

    fn is_done(&self) -> bool {
        self.found == self.requested
    }
}
