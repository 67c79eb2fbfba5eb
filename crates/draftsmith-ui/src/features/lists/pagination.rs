//! Pure pagination math for list views.
//!
//! # Design
//! - Keep token computation free of rendering concerns so it tests on host.
//! - First and last pages are always reachable; ellipses only compress the
//!   middle run.

/// Renderable token in a pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageToken {
    /// Clickable page number.
    Page(usize),
    /// Non-interactive gap marker.
    Ellipsis,
}

/// Total page count for a record count and page size.
#[must_use]
pub fn total_pages(total_items: u64, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    usize::try_from(total_items)
        .unwrap_or(usize::MAX)
        .div_ceil(page_size)
}

/// Clamp a requested page into the valid range for a page count.
#[must_use]
pub const fn clamp_page(page: usize, total: usize) -> usize {
    if total == 0 {
        1
    } else if page < 1 {
        1
    } else if page > total {
        total
    } else {
        page
    }
}

/// Compute the token run for a pagination control.
///
/// Seven or fewer pages render uncompressed. Beyond that, runs near either
/// edge keep four numerics on that side; anywhere else the current page is
/// shown with one neighbour on each side. The result is empty when there are
/// no pages, always starts with page 1 and ends with the last page otherwise,
/// never places two ellipses next to each other, and never exceeds seven
/// tokens.
#[must_use]
pub fn page_tokens(current: usize, total: usize) -> Vec<PageToken> {
    if total == 0 {
        return Vec::new();
    }
    let current = clamp_page(current, total);
    if total <= 7 {
        return (1..=total).map(PageToken::Page).collect();
    }
    if current <= 3 {
        return vec![
            PageToken::Page(1),
            PageToken::Page(2),
            PageToken::Page(3),
            PageToken::Page(4),
            PageToken::Ellipsis,
            PageToken::Page(total),
        ];
    }
    if current >= total - 2 {
        return vec![
            PageToken::Page(1),
            PageToken::Ellipsis,
            PageToken::Page(total - 3),
            PageToken::Page(total - 2),
            PageToken::Page(total - 1),
            PageToken::Page(total),
        ];
    }
    vec![
        PageToken::Page(1),
        PageToken::Ellipsis,
        PageToken::Page(current - 1),
        PageToken::Page(current),
        PageToken::Page(current + 1),
        PageToken::Ellipsis,
        PageToken::Page(total),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_no_tokens() {
        assert_eq!(total_pages(0, 12), 0);
        assert!(page_tokens(1, 0).is_empty());
    }

    #[test]
    fn short_runs_are_uncompressed() {
        assert_eq!(
            page_tokens(1, 3),
            vec![PageToken::Page(1), PageToken::Page(2), PageToken::Page(3)]
        );
        assert_eq!(page_tokens(4, 7).len(), 7);
        assert!(page_tokens(4, 7).iter().all(|t| *t != PageToken::Ellipsis));
    }

    #[test]
    fn forty_five_items_at_twenty_per_page() {
        assert_eq!(total_pages(45, 20), 3);
        assert_eq!(
            page_tokens(1, 3),
            vec![PageToken::Page(1), PageToken::Page(2), PageToken::Page(3)]
        );
    }

    #[test]
    fn edges_keep_four_numerics_on_the_near_side() {
        assert_eq!(
            page_tokens(2, 10),
            vec![
                PageToken::Page(1),
                PageToken::Page(2),
                PageToken::Page(3),
                PageToken::Page(4),
                PageToken::Ellipsis,
                PageToken::Page(10),
            ]
        );
        assert_eq!(
            page_tokens(9, 10),
            vec![
                PageToken::Page(1),
                PageToken::Ellipsis,
                PageToken::Page(7),
                PageToken::Page(8),
                PageToken::Page(9),
                PageToken::Page(10),
            ]
        );
    }

    #[test]
    fn middle_run_brackets_the_current_page() {
        assert_eq!(
            page_tokens(5, 10),
            vec![
                PageToken::Page(1),
                PageToken::Ellipsis,
                PageToken::Page(4),
                PageToken::Page(5),
                PageToken::Page(6),
                PageToken::Ellipsis,
                PageToken::Page(10),
            ]
        );
    }

    #[test]
    fn token_invariants_hold_for_every_page_count_up_to_1000() {
        for total in 1..=1000usize {
            for current in [1, 2, 3, total / 2 + 1, total.saturating_sub(2).max(1), total] {
                let tokens = page_tokens(current, total);
                assert!(tokens.len() <= 7, "len for {current}/{total}");
                assert_eq!(tokens.first(), Some(&PageToken::Page(1)));
                assert_eq!(tokens.last(), Some(&PageToken::Page(total)));
                for pair in tokens.windows(2) {
                    assert!(
                        pair != [PageToken::Ellipsis, PageToken::Ellipsis],
                        "adjacent ellipses for {current}/{total}"
                    );
                }
            }
        }
    }

    #[test]
    fn clamping_handles_out_of_range_pages() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(3, 0), 1);
    }
}
