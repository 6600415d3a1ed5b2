#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geometry::{GeometryProvider, Point};
use crate::section::Section;

/// Which section (if any) is under the container-local point `local`.
///
/// Later groups paint over earlier ones, so sections are tested last to
/// first and the topmost hit wins.
#[must_use]
pub fn section_at<'s, G: GeometryProvider + ?Sized>(
    local: Point,
    sections: &'s [Section],
    geometry: &G,
) -> Option<&'s Section> {
    sections
        .iter()
        .rev()
        .find(|s| geometry.contains(&s.id, local))
}
