//! Render Transformer
//!
//! Converts the edit buffer into the render sequence shown on the display, and records
//! where each logical position lands in it.
//!
//! Some characters occupy two render units (see [`ExpansionRule`]). The index map has one
//! entry per logical position *including* the end-of-buffer insertion point, so
//! `index_map[len] == render_len`.

use std::fmt::Debug;

/// Per-character expansion rule.
///
/// An expanding character is rendered as two identical units; every other character is
/// rendered as one unit, unchanged.
pub trait ExpansionRule: Debug + Send {
    /// Returns `true` if `ch` occupies two render units.
    fn expands(&self, ch: char) -> bool;
}

/// Uppercase ASCII letters render doubled (`'A'` -> `"AA"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UppercaseExpansion;

impl ExpansionRule for UppercaseExpansion {
    fn expands(&self, ch: char) -> bool {
        ch.is_ascii_uppercase()
    }
}

/// Every character renders as exactly one unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoExpansion;

impl ExpansionRule for NoExpansion {
    fn expands(&self, _ch: char) -> bool {
        false
    }
}

/// Number of render units `ch` produces under `rule` (1 or 2).
pub fn unit_width(rule: &dyn ExpansionRule, ch: char) -> usize {
    if rule.expands(ch) { 2 } else { 1 }
}

/// Render sequence plus logical -> render index map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderLayout {
    units: Vec<char>,
    index_map: Vec<usize>,
}

impl RenderLayout {
    /// Build the layout for `chars`.
    pub fn build(chars: &[char], rule: &dyn ExpansionRule) -> Self {
        let mut layout = Self::default();
        layout.rebuild(chars, rule);
        layout
    }

    /// Regenerate the layout in place, reusing allocations.
    pub fn rebuild(&mut self, chars: &[char], rule: &dyn ExpansionRule) {
        self.units.clear();
        self.index_map.clear();

        for &ch in chars {
            self.index_map.push(self.units.len());
            self.units.push(ch);
            if rule.expands(ch) {
                self.units.push(ch);
            }
        }
        // End-of-buffer slot: where the cursor parks after the last character.
        self.index_map.push(self.units.len());

        log::trace!(
            "render layout rebuilt: len={} render_len={}",
            chars.len(),
            self.units.len()
        );
    }

    /// Rendered units.
    pub fn units(&self) -> &[char] {
        &self.units
    }

    /// Rendered units as a `String`.
    pub fn render_text(&self) -> String {
        self.units.iter().collect()
    }

    /// Length of the render sequence.
    pub fn render_len(&self) -> usize {
        self.units.len()
    }

    /// Logical -> render index map (`len + 1` entries).
    pub fn index_map(&self) -> &[usize] {
        &self.index_map
    }

    /// Number of logical positions covered (buffer length; the map has one more entry).
    pub fn logical_len(&self) -> usize {
        self.index_map.len().saturating_sub(1)
    }

    /// Render position of logical position `logical`.
    ///
    /// Positions past the end map to the end-of-buffer slot.
    pub fn render_pos(&self, logical: usize) -> usize {
        self.index_map
            .get(logical)
            .copied()
            .unwrap_or(self.units.len())
    }

    /// Logical position owning render position `render`.
    ///
    /// The second unit of an expanded character maps back to that character; positions
    /// at or past `render_len` map to the end-of-buffer position.
    pub fn logical_pos(&self, render: usize) -> usize {
        // Index map is non-decreasing: last entry <= render wins.
        self.index_map
            .partition_point(|&r| r <= render)
            .saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_unit_width() {
        assert_eq!(unit_width(&UppercaseExpansion, 'A'), 2);
        assert_eq!(unit_width(&UppercaseExpansion, 'a'), 1);
        assert_eq!(unit_width(&UppercaseExpansion, '1'), 1);
        assert_eq!(unit_width(&NoExpansion, 'Z'), 1);
    }

    #[test]
    fn test_empty_buffer_has_single_end_slot() {
        let layout = RenderLayout::build(&[], &UppercaseExpansion);
        assert_eq!(layout.render_len(), 0);
        assert_eq!(layout.index_map(), &[0]);
        assert_eq!(layout.logical_len(), 0);
    }

    #[test]
    fn test_logical_pos_inverts_index_map() {
        let layout = RenderLayout::build(&chars("ABc"), &UppercaseExpansion);
        // "AABBc"
        assert_eq!(layout.logical_pos(0), 0);
        assert_eq!(layout.logical_pos(1), 0);
        assert_eq!(layout.logical_pos(2), 1);
        assert_eq!(layout.logical_pos(3), 1);
        assert_eq!(layout.logical_pos(4), 2);
        assert_eq!(layout.logical_pos(5), 3);
        assert_eq!(layout.logical_pos(99), 3);
    }

    #[test]
    fn test_rebuild_replaces_previous_content() {
        let mut layout = RenderLayout::build(&chars("XYZ"), &UppercaseExpansion);
        layout.rebuild(&chars("q"), &UppercaseExpansion);
        assert_eq!(layout.render_text(), "q");
        assert_eq!(layout.index_map(), &[0, 1]);
    }
}
