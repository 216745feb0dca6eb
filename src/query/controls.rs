use serde::Serialize;
use std::fmt;

/// Pages are listed in full up to this many
const MAX_VISIBLE_PAGES: usize = 5;

/// One label in the page-number strip
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PageControl {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageControl::Page(n) => write!(f, "{}", n),
            PageControl::Ellipsis => f.write_str("..."),
        }
    }
}

/// Page-number strip plus the targets of the previous/next buttons
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaginationControls {
    pub items: Vec<PageControl>,
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

impl PaginationControls {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            items: page_controls(current_page, total_pages),
            previous: (current_page > 1 && total_pages > 0)
                .then(|| (current_page - 1).min(total_pages)),
            next: (current_page < total_pages).then(|| current_page + 1),
        }
    }

    /// Nothing is rendered for a single page of results
    pub fn is_hidden(&self) -> bool {
        self.items.len() <= 1
    }
}

/// Page labels for the pagination strip.
///
/// The first and last pages are always present. Around the current page a
/// three-page window is shown, pinned to `2..=4` near the start and to
/// `total-3..=total-1` near the end, with an ellipsis on each side that does
/// not touch an end page.
pub fn page_controls(current_page: usize, total_pages: usize) -> Vec<PageControl> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageControl::Page).collect();
    }

    let mut start = current_page.saturating_sub(1).max(2);
    let mut end = current_page.saturating_add(1).min(total_pages - 1);
    if current_page <= 3 {
        end = 4;
    }
    if current_page >= total_pages - 2 {
        start = total_pages - 3;
    }

    let mut items = vec![PageControl::Page(1)];
    if start > 2 {
        items.push(PageControl::Ellipsis);
    }
    items.extend((start..=end).map(PageControl::Page));
    if end < total_pages - 1 {
        items.push(PageControl::Ellipsis);
    }
    items.push(PageControl::Page(total_pages));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageControl::{Ellipsis, Page};

    fn render(items: &[PageControl]) -> String {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_few_pages_are_listed_in_full() {
        assert_eq!(page_controls(1, 0), vec![]);
        assert_eq!(page_controls(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(render(&page_controls(4, 5)), "1 2 3 4 5");
    }

    #[test]
    fn test_middle_page_has_ellipsis_on_both_sides() {
        assert_eq!(
            page_controls(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_is_pinned_near_the_start() {
        assert_eq!(render(&page_controls(1, 10)), "1 2 3 4 ... 10");
        assert_eq!(render(&page_controls(3, 10)), "1 2 3 4 ... 10");
        assert_eq!(render(&page_controls(4, 10)), "1 ... 3 4 5 ... 10");
    }

    #[test]
    fn test_window_is_pinned_near_the_end() {
        assert_eq!(render(&page_controls(10, 10)), "1 ... 7 8 9 10");
        assert_eq!(render(&page_controls(8, 10)), "1 ... 7 8 9 10");
        assert_eq!(render(&page_controls(7, 10)), "1 ... 6 7 8 ... 10");
    }

    #[test]
    fn test_six_pages_elide_one_side() {
        assert_eq!(render(&page_controls(3, 6)), "1 2 3 4 ... 6");
        assert_eq!(render(&page_controls(4, 6)), "1 ... 3 4 5 6");
    }

    #[test]
    fn test_previous_and_next_targets() {
        let first = PaginationControls::new(1, 3);
        assert_eq!(first.previous, None);
        assert_eq!(first.next, Some(2));

        let last = PaginationControls::new(3, 3);
        assert_eq!(last.previous, Some(2));
        assert_eq!(last.next, None);

        assert!(PaginationControls::new(1, 1).is_hidden());
        assert!(!first.is_hidden());
    }

    #[test]
    fn test_out_of_range_pages_do_not_overflow() {
        assert_eq!(render(&page_controls(usize::MAX, 10)), "1 ... 7 8 9 10");
        assert_eq!(render(&page_controls(0, 10)), "1 2 3 4 ... 10");

        let huge = PaginationControls::new(usize::MAX, 10);
        assert_eq!(huge.previous, Some(10));
        assert_eq!(huge.next, None);
    }

    #[test]
    fn test_previous_never_points_past_the_last_page() {
        let past_end = PaginationControls::new(50, 2);
        assert_eq!(past_end.previous, Some(2));
        assert_eq!(past_end.next, None);

        assert_eq!(PaginationControls::new(0, 3).previous, None);
        assert_eq!(PaginationControls::new(0, 3).next, Some(1));
        assert_eq!(PaginationControls::new(4, 0).previous, None);
    }
}
