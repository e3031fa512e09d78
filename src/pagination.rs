use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Window sizes for the rendered page-number strip.
const LEFT_EDGE: usize = 2;
const LEFT_CURRENT: usize = 2;
const RIGHT_CURRENT: usize = 4;
const RIGHT_EDGE: usize = 2;

/// Windowed list of page numbers; `None` marks a gap rendered as an ellipsis.
fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + LEFT_EDGE).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(LEFT_CURRENT));
    let mid_end = (current_page + RIGHT_CURRENT + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(RIGHT_EDGE) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of a collection plus the data needed to render its pagination
/// controls.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = page_window(total_pages, current_page);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_has_no_pages() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 1, 0);
        assert!(paginated.pages.is_empty());
        assert_eq!(paginated.total_pages, 0);
    }

    #[test]
    fn few_pages_render_without_gaps() {
        let paginated: Paginated<i32> = Paginated::new(vec![1, 2], 1, 3);
        assert_eq!(paginated.pages, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn middle_page_renders_both_gaps() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 10, 20);
        let pages = paginated.pages;
        assert_eq!(&pages[..2], &[Some(1), Some(2)]);
        assert_eq!(pages[2], None);
        assert!(pages.contains(&Some(10)));
        assert_eq!(pages[pages.len() - 3], None);
        assert_eq!(&pages[pages.len() - 2..], &[Some(19), Some(20)]);
    }

    #[test]
    fn zero_page_is_clamped_to_first() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 0, 5);
        assert_eq!(paginated.page, 1);
        assert_eq!(paginated.total_pages, 5);
    }
}
