//! Story list ordering
//!
//! Sort selection with a toggleable direction per column, plus the pure
//! function that orders a story list. Sorting is stable, so ties keep
//! their fetch order and repeated runs are reproducible.

use super::story::Story;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Column a story list can be ordered by
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum SortKey {
    /// Original fetch order
    #[default]
    None,
    /// Ascending by title
    Title,
    /// Ascending by author
    Author,
    /// Most-commented first
    Comments,
    /// Highest-scored first
    Points,
}

/// Active sort column paired with a direction flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSelection {
    pub key: SortKey,
    pub reverse: bool,
}

impl SortSelection {
    /// Apply a column selection
    ///
    /// Selecting the already-active column flips the direction; selecting
    /// a different column activates it with the base direction.
    #[must_use]
    pub fn select(self, key: SortKey) -> SortSelection {
        if self.key == key {
            SortSelection {
                key,
                reverse: !self.reverse,
            }
        } else {
            SortSelection {
                key,
                reverse: false,
            }
        }
    }
}

/// Order a story list according to a sort selection
///
/// Computes the base ordering for the selected key, then reverses the
/// resulting sequence (not the comparator) when the reverse flag is set.
/// Toggling a column twice therefore restores the base ordering exactly.
pub fn sort_stories(stories: &[Story], selection: SortSelection) -> Vec<Story> {
    let mut ordered = stories.to_vec();

    match selection.key {
        SortKey::None => {}
        SortKey::Title => ordered.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Author => ordered.sort_by(|a, b| a.author.cmp(&b.author)),
        // Comment and point columns are most-first by default
        SortKey::Comments => ordered.sort_by(|a, b| b.num_comments.cmp(&a.num_comments)),
        SortKey::Points => ordered.sort_by(|a, b| b.points.cmp(&a.points)),
    }

    if selection.reverse {
        ordered.reverse();
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn react() -> Story {
        Story::new("0", "React", "Jordan Walke")
            .with_url("https://reactjs.org/")
            .with_stats(3, 4)
    }

    fn redux() -> Story {
        Story::new("1", "Redux", "Dan Abramov, Andrew Clark")
            .with_url("https://redux.js.org/")
            .with_stats(2, 5)
    }

    fn stories() -> Vec<Story> {
        vec![react(), redux()]
    }

    fn titles(stories: &[Story]) -> Vec<&str> {
        stories.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_select_new_key_resets_direction() {
        let selection = SortSelection {
            key: SortKey::Title,
            reverse: true,
        };

        let next = selection.select(SortKey::Author);
        assert_eq!(next.key, SortKey::Author);
        assert!(!next.reverse);
    }

    #[test]
    fn test_select_same_key_flips_direction() {
        let selection = SortSelection::default().select(SortKey::Title);
        assert_eq!(selection.key, SortKey::Title);
        assert!(!selection.reverse);

        let toggled = selection.select(SortKey::Title);
        assert!(toggled.reverse);

        // A second toggle returns to the base direction
        let toggled_back = toggled.select(SortKey::Title);
        assert!(!toggled_back.reverse);
    }

    #[test]
    fn test_sort_none_keeps_fetch_order() {
        let ordered = sort_stories(&stories(), SortSelection::default());
        assert_eq!(titles(&ordered), vec!["React", "Redux"]);
    }

    #[test]
    fn test_sort_by_title_ascending() {
        let selection = SortSelection::default().select(SortKey::Title);
        let ordered = sort_stories(&stories(), selection);
        assert_eq!(titles(&ordered), vec!["React", "Redux"]);
    }

    #[test]
    fn test_sort_by_author_ascending() {
        let selection = SortSelection::default().select(SortKey::Author);
        let ordered = sort_stories(&stories(), selection);
        // "Dan Abramov, Andrew Clark" < "Jordan Walke"
        assert_eq!(titles(&ordered), vec!["Redux", "React"]);
    }

    #[test]
    fn test_sort_by_comments_most_first() {
        let selection = SortSelection::default().select(SortKey::Comments);
        let ordered = sort_stories(&stories(), selection);
        assert_eq!(titles(&ordered), vec!["React", "Redux"]);
    }

    #[test]
    fn test_sort_by_points_most_first_and_toggle() {
        // The end-to-end scenario: points sort puts Redux (5) before
        // React (4); toggling flips the order back.
        let selection = SortSelection::default().select(SortKey::Points);
        let ordered = sort_stories(&stories(), selection);
        assert_eq!(titles(&ordered), vec!["Redux", "React"]);

        let toggled = selection.select(SortKey::Points);
        let reversed = sort_stories(&stories(), toggled);
        assert_eq!(titles(&reversed), vec!["React", "Redux"]);
    }

    #[test]
    fn test_reverse_is_sequence_reversal() {
        let base = sort_stories(&stories(), SortSelection::default().select(SortKey::Title));

        let mut expected = base.clone();
        expected.reverse();

        let reversed = sort_stories(
            &stories(),
            SortSelection {
                key: SortKey::Title,
                reverse: true,
            },
        );
        assert_eq!(reversed, expected);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let a = Story::new("a", "Alpha", "zoe").with_stats(1, 10);
        let b = Story::new("b", "Beta", "amy").with_stats(1, 10);
        let c = Story::new("c", "Gamma", "mia").with_stats(1, 10);
        let list = vec![a.clone(), b.clone(), c.clone()];

        // All stories tie on points: fetch order must be preserved
        let ordered = sort_stories(&list, SortSelection::default().select(SortKey::Points));
        assert_eq!(ordered, list);

        // Same for comments
        let ordered = sort_stories(&list, SortSelection::default().select(SortKey::Comments));
        assert_eq!(ordered, list);
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let input = stories();
        let _ = sort_stories(&input, SortSelection::default().select(SortKey::Points));
        assert_eq!(titles(&input), vec!["React", "Redux"]);
    }
}
