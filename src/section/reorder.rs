//! Drag-and-drop reordering across the primary and secondary lists

use tracing::debug;

use super::Section;
use crate::errors::{Result, SidebarError};

impl Section {
    /// Move link `from` next to link `to`, above or below it.
    ///
    /// The dragged entry is removed from the list its segment names before
    /// the target index is looked up, so same-list moves need no index
    /// correction. The moved entry takes the target's segment. Unknown ids
    /// fail without touching either list.
    pub fn reorder(&mut self, from: u64, to: u64, above: bool) -> Result<()> {
        if from == to {
            return Ok(());
        }

        let (from_segment, from_idx) = self
            .position(from)
            .ok_or_else(|| SidebarError::not_found(format!("link #{}", from)))?;
        let to_segment = self
            .find_link(to)
            .map(|l| l.segment)
            .ok_or_else(|| SidebarError::not_found(format!("link #{}", to)))?;

        let mut moved = self.links_mut(from_segment).remove(from_idx);

        let Some(to_idx) = self.links(to_segment).iter().position(|l| l.object_id == to) else {
            self.links_mut(from_segment).insert(from_idx, moved);
            return Err(SidebarError::not_found(format!(
                "link #{} in {} links",
                to, to_segment
            )));
        };

        moved.segment = to_segment;
        let insert_at = if above { to_idx } else { to_idx + 1 };
        self.links_mut(to_segment).insert(insert_at, moved);

        debug!(
            "Moved link #{} from {}[{}] to {}[{}]",
            from, from_segment, from_idx, to_segment, insert_at
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{SectionLink, Segment};

    fn ids(links: &[SectionLink]) -> Vec<u64> {
        links.iter().map(|l| l.object_id).collect()
    }

    fn section(primary: &[u64], secondary: &[u64]) -> Section {
        Section {
            primary_links: primary
                .iter()
                .map(|&id| SectionLink::new(id, Segment::Primary))
                .collect(),
            secondary_links: secondary
                .iter()
                .map(|&id| SectionLink::new(id, Segment::Secondary))
                .collect(),
            ..Section::new()
        }
    }

    #[test]
    fn test_same_entry_is_noop() {
        let mut s = section(&[1, 2], &[3]);
        let before = s.clone();
        s.reorder(2, 2, true).unwrap();
        assert_eq!(s, before);
    }

    #[test]
    fn test_move_down_within_list() {
        // index 2 dropped above index 4 lands at index 3
        let mut s = section(&[0, 1, 2, 3, 4], &[]);
        s.reorder(2, 4, true).unwrap();
        assert_eq!(ids(&s.primary_links), vec![0, 1, 3, 2, 4]);
        assert_eq!(s.primary_links[3].object_id, 2);
    }

    #[test]
    fn test_move_up_within_list() {
        let mut s = section(&[0, 1, 2, 3, 4], &[]);
        s.reorder(4, 1, false).unwrap();
        assert_eq!(ids(&s.primary_links), vec![0, 1, 4, 2, 3]);

        s.reorder(3, 0, true).unwrap();
        assert_eq!(ids(&s.primary_links), vec![3, 0, 1, 4, 2]);
    }

    #[test]
    fn test_move_below_last() {
        let mut s = section(&[0, 1, 2], &[]);
        s.reorder(0, 2, false).unwrap();
        assert_eq!(ids(&s.primary_links), vec![1, 2, 0]);
    }

    #[test]
    fn test_move_primary_to_secondary() {
        let mut s = section(&[1, 2], &[3]);
        s.reorder(2, 3, false).unwrap();
        assert_eq!(ids(&s.primary_links), vec![1]);
        assert_eq!(ids(&s.secondary_links), vec![3, 2]);
        assert_eq!(s.secondary_links[1].segment, Segment::Secondary);
    }

    #[test]
    fn test_move_secondary_to_primary() {
        let mut s = section(&[1, 2], &[3, 4]);
        s.reorder(4, 1, true).unwrap();
        assert_eq!(ids(&s.primary_links), vec![4, 1, 2]);
        assert_eq!(ids(&s.secondary_links), vec![3]);
        assert!(s.primary_links[0].is_primary());
    }

    #[test]
    fn test_unknown_ids_leave_lists_untouched() {
        let mut s = section(&[1, 2], &[3]);
        let before = s.clone();
        assert!(matches!(s.reorder(9, 1, true), Err(SidebarError::NotFound(_))));
        assert!(matches!(s.reorder(1, 9, true), Err(SidebarError::NotFound(_))));
        assert_eq!(s, before);
    }

    #[test]
    fn test_mismatched_segment_tag_is_rejected() {
        let mut s = section(&[1, 2], &[3]);
        s.primary_links[1].segment = Segment::Secondary;
        let before = s.clone();
        assert!(s.reorder(2, 3, true).is_err());
        assert_eq!(s, before);
    }
}
