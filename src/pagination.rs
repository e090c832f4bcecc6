//! Client-side pagination over a fetched result set.
//!
//! The [`Paginator`] tracks the current page for a result set of known length
//! and rejects navigation outside `[1, total_pages]`. An empty result set still
//! has one (empty) page so the controls always show a "1" button.

use std::ops::Range;

/// A control in the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Prev { target: usize, disabled: bool },
    Page { number: usize, active: bool },
    Next { target: usize, disabled: bool },
}

impl PageButton {
    /// Page that clicking this button navigates to
    pub fn target(&self) -> usize {
        match *self {
            PageButton::Prev { target, .. } => target,
            PageButton::Page { number, .. } => number,
            PageButton::Next { target, .. } => target,
        }
    }

    pub fn is_disabled(&self) -> bool {
        match *self {
            PageButton::Prev { disabled, .. } | PageButton::Next { disabled, .. } => disabled,
            PageButton::Page { .. } => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Paginator {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    /// Recompute the page count for a new result set and go back to page 1
    pub fn set_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total_items / page_size)`, zero for an empty set
    pub fn raw_total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Number of navigable pages, never less than one
    pub fn total_pages(&self) -> usize {
        self.raw_total_pages().max(1)
    }

    /// Go to page `n`. Returns false and leaves the state untouched when `n`
    /// is outside `[1, total_pages]`.
    pub fn paginate(&mut self, n: usize) -> bool {
        if n < 1 || n > self.total_pages() {
            return false;
        }
        self.current_page = n;
        true
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn prev(&mut self) -> bool {
        self.paginate(self.current_page.saturating_sub(1))
    }

    pub fn next(&mut self) -> bool {
        self.paginate(self.current_page + 1)
    }

    /// Index range of the current page within a set of `len` items
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (self.current_page * self.page_size).min(len);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.visible_range(items.len())]
    }

    /// Prev, one button per page, next
    pub fn buttons(&self) -> Vec<PageButton> {
        let total = self.total_pages();
        let mut buttons = Vec::with_capacity(total + 2);

        buttons.push(PageButton::Prev {
            target: self.current_page.saturating_sub(1),
            disabled: !self.has_prev(),
        });
        buttons.extend((1..=total).map(|number| PageButton::Page {
            number,
            active: number == self.current_page,
        }));
        buttons.push(PageButton::Next {
            target: self.current_page + 1,
            disabled: !self.has_next(),
        });

        buttons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paginator_with(total: usize) -> Paginator {
        let mut paginator = Paginator::new(20);
        paginator.set_total(total);
        paginator
    }

    #[test]
    fn forty_five_items_make_three_pages() {
        let items: Vec<usize> = (0..45).collect();
        let mut paginator = paginator_with(items.len());

        assert_eq!(paginator.total_pages(), 3);
        assert_eq!(paginator.slice(&items), &items[0..20]);

        assert!(paginator.paginate(3));
        assert_eq!(paginator.slice(&items), &items[40..45]);
        assert_eq!(paginator.slice(&items).len(), 5);
    }

    #[test]
    fn empty_set_floors_at_one_page() {
        let paginator = paginator_with(0);

        assert_eq!(paginator.raw_total_pages(), 0);
        assert_eq!(paginator.total_pages(), 1);
        assert_eq!(paginator.current_page(), 1);
        assert!(paginator.slice::<u8>(&[]).is_empty());
        assert_eq!(
            paginator.buttons(),
            vec![
                PageButton::Prev {
                    target: 0,
                    disabled: true
                },
                PageButton::Page {
                    number: 1,
                    active: true
                },
                PageButton::Next {
                    target: 2,
                    disabled: true
                },
            ]
        );
    }

    #[test]
    fn out_of_range_pages_are_ignored() {
        let mut paginator = paginator_with(45);
        assert!(paginator.paginate(2));

        let before = paginator.clone();
        for n in [0, 4, 100, usize::MAX] {
            assert!(!paginator.paginate(n), "page {n} should be rejected");
            assert_eq!(paginator, before);
        }
    }

    #[test]
    fn total_pages_is_the_ceiling() {
        for (len, expected) in [(1, 1), (19, 1), (20, 1), (21, 2), (40, 2), (41, 3), (1000, 50)] {
            assert_eq!(paginator_with(len).raw_total_pages(), expected, "len {len}");
        }
    }

    #[test]
    fn pages_reconstruct_the_set() {
        for len in [0, 1, 19, 20, 21, 45, 60] {
            let items: Vec<usize> = (0..len).collect();
            let mut paginator = paginator_with(len);
            let mut rebuilt = Vec::new();

            for page in 1..=paginator.total_pages() {
                assert!(paginator.paginate(page));
                let slice = paginator.slice(&items);
                assert!(slice.len() <= paginator.page_size());
                rebuilt.extend_from_slice(slice);
            }

            assert_eq!(rebuilt, items, "len {len}");
        }
    }

    #[test]
    fn prev_and_next_stop_at_the_bounds() {
        let mut paginator = paginator_with(45);

        assert!(!paginator.has_prev());
        assert!(!paginator.prev());
        assert!(paginator.next());
        assert!(paginator.next());
        assert_eq!(paginator.current_page(), 3);
        assert!(!paginator.has_next());
        assert!(!paginator.next());
        assert_eq!(paginator.current_page(), 3);
    }

    #[test]
    fn buttons_mark_active_page_and_disable_bounds() {
        let mut paginator = paginator_with(45);
        paginator.paginate(3);

        let buttons = paginator.buttons();
        assert_eq!(buttons.len(), 5);
        assert!(!buttons[0].is_disabled());
        assert_eq!(buttons[0].target(), 2);
        assert_eq!(
            buttons[3],
            PageButton::Page {
                number: 3,
                active: true
            }
        );
        assert!(buttons[4].is_disabled());
    }

    #[test]
    fn new_result_set_resets_to_first_page() {
        let mut paginator = paginator_with(45);
        paginator.paginate(3);

        paginator.set_total(10);
        assert_eq!(paginator.current_page(), 1);
        assert_eq!(paginator.total_pages(), 1);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let mut paginator = Paginator::new(0);
        paginator.set_total(3);
        assert_eq!(paginator.page_size(), 1);
        assert_eq!(paginator.total_pages(), 3);
    }
}
