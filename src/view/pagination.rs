//! Page navigation for the paginated listings.

/// Pages shown in full before the bar collapses into gaps.
const MAX_FULL_PAGES: u32 = 7;

/// One entry of the page bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Gap,
}

/// `ceil(total / page_size)`.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Page bar around `current` out of `total` pages.
///
/// ```text
/// total <= 7           1 2 3 4 5 6 7
/// current <= 4         1 2 3 4 5 … 20
/// current >= total-3   1 … 16 17 18 19 20
/// otherwise            1 … 9 10 11 … 20
/// ```
pub fn visible_pages(current: u32, total: u32) -> Vec<PageLink> {
    if total <= MAX_FULL_PAGES {
        return (1..=total).map(PageLink::Page).collect();
    }

    let mut links = Vec::with_capacity(MAX_FULL_PAGES as usize);
    if current <= 4 {
        links.extend((1..=5).map(PageLink::Page));
        links.push(PageLink::Gap);
        links.push(PageLink::Page(total));
    } else if current >= total - 3 {
        links.push(PageLink::Page(1));
        links.push(PageLink::Gap);
        links.extend((total - 4..=total).map(PageLink::Page));
    } else {
        links.push(PageLink::Page(1));
        links.push(PageLink::Gap);
        links.extend((current - 1..=current + 1).map(PageLink::Page));
        links.push(PageLink::Gap);
        links.push(PageLink::Page(total));
    }
    links
}

/// Current position in a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub total_pages: u32,
}

impl Pager {
    pub fn new(current: u32, total: u64, page_size: u32) -> Self {
        Self {
            current: current.max(1),
            total_pages: total_pages(total, page_size),
        }
    }

    pub fn links(&self) -> Vec<PageLink> {
        visible_pages(self.current, self.total_pages)
    }

    /// Target page when it lies within `1..=total_pages`.
    pub fn go_to(&self, page: u32) -> Option<u32> {
        (1..=self.total_pages).contains(&page).then_some(page)
    }

    pub fn next(&self) -> Option<u32> {
        self.current.checked_add(1).and_then(|page| self.go_to(page))
    }

    pub fn previous(&self) -> Option<u32> {
        self.go_to(self.current.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Gap, Page};

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 9), 0);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(27, 9), 3);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn short_listing_shows_every_page() {
        assert_eq!(visible_pages(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(visible_pages(4, 7).len(), 7);
        assert!(visible_pages(1, 0).is_empty());
    }

    #[test]
    fn near_start() {
        assert_eq!(
            visible_pages(4, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(20)]
        );
    }

    #[test]
    fn near_end() {
        assert_eq!(
            visible_pages(17, 20),
            vec![Page(1), Gap, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn middle() {
        assert_eq!(
            visible_pages(10, 20),
            vec![Page(1), Gap, Page(9), Page(10), Page(11), Gap, Page(20)]
        );
    }

    #[test]
    fn pager_stays_in_range() {
        let pager = Pager::new(1, 27, 9);
        assert_eq!(pager.previous(), None);
        assert_eq!(pager.next(), Some(2));
        assert_eq!(pager.go_to(3), Some(3));
        assert_eq!(pager.go_to(4), None);

        let last = Pager::new(3, 27, 9);
        assert_eq!(last.next(), None);
        assert_eq!(last.previous(), Some(2));
    }

    #[test]
    fn pager_next_at_u32_max_is_none() {
        let pager = Pager {
            current: u32::MAX,
            total_pages: u32::MAX,
        };
        assert_eq!(pager.next(), None);
        assert_eq!(pager.previous(), Some(u32::MAX - 1));
    }
}
