//! Page arithmetic for client-side table pagination.
//!
//! Pages are 1-based. An empty list has zero pages, but the current page is
//! still clamped to 1 so the table never points before the first row.

#[cfg(test)]
#[path = "paging_test.rs"]
mod paging_test;

/// Number of pages needed to show `len` rows at `page_size` rows per page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Clamp `page` into `1..=max(total, 1)`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Rows shown on `page`. Out-of-range pages yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// One entry in the pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    /// Collapsed run of pages.
    Gap,
}

/// Pages on either side of the current page that stay visible.
const WINDOW: usize = 1;

/// Page buttons for `current` of `total`: first and last always, a window
/// around the current page, and gaps for anything collapsed.
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    let current = clamp_page(current, total);
    let lo = current.saturating_sub(WINDOW).max(1);
    let hi = (current + WINDOW).min(total);

    let mut items = Vec::new();
    if lo > 1 {
        items.push(PageItem::Page(1));
        if lo > 2 {
            items.push(PageItem::Gap);
        }
    }
    items.extend((lo..=hi).map(PageItem::Page));
    if hi < total {
        if hi + 1 < total {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Page(total));
    }
    items
}
