//! Page slicing over a bounded offset list
//!
//! A page request for page `p` at size `S` asks the locator for
//! `S * (p + 1) + 1` offsets. The one extra offset is a probe: if it exists,
//! another page follows.

/// Page geometry for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    page: usize,
}

/// One page cut from a bounded offset list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice<'a> {
    pub offsets: &'a [usize],
    pub has_more: bool,
}

impl Pagination {
    /// A page size of zero is treated as one
    pub fn new(page_size: usize, page: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// First position of the page in the bounded list
    fn start(&self) -> usize {
        self.page_size.saturating_mul(self.page)
    }

    /// One past the last position of the page
    fn end(&self) -> usize {
        self.start().saturating_add(self.page_size)
    }

    /// How many offsets to request from the locator, probe included
    pub fn limit(&self) -> usize {
        self.end().saturating_add(1)
    }

    /// Cut the current page out of `offsets`
    pub fn slice<'a>(&self, offsets: &'a [usize]) -> PageSlice<'a> {
        let start = self.start();
        if start >= offsets.len() {
            return PageSlice {
                offsets: &[],
                has_more: false,
            };
        }

        let end = self.end().min(offsets.len());
        PageSlice {
            offsets: &offsets[start..end],
            has_more: offsets.len() > self.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_includes_probe() {
        assert_eq!(Pagination::new(20, 0).limit(), 21);
        assert_eq!(Pagination::new(20, 2).limit(), 61);
    }

    #[test]
    fn test_limit_saturates() {
        assert_eq!(Pagination::new(20, usize::MAX).limit(), usize::MAX);
    }

    #[test]
    fn test_first_page_with_probe() {
        let offsets: Vec<usize> = (100..121).collect();
        let page = Pagination::new(20, 0).slice(&offsets);

        assert_eq!(page.offsets.len(), 20);
        assert_eq!(page.offsets[0], 100);
        assert!(page.has_more);
    }

    #[test]
    fn test_exact_fit_has_no_more() {
        let offsets: Vec<usize> = (0..20).collect();
        let page = Pagination::new(20, 0).slice(&offsets);

        assert_eq!(page.offsets.len(), 20);
        assert!(!page.has_more);
    }

    #[test]
    fn test_partial_last_page() {
        let offsets: Vec<usize> = (0..25).collect();
        let page = Pagination::new(10, 2).slice(&offsets);

        assert_eq!(page.offsets, &[20, 21, 22, 23, 24]);
        assert!(!page.has_more);
    }

    #[test]
    fn test_page_past_end() {
        let offsets: Vec<usize> = (0..5).collect();
        let page = Pagination::new(10, 3).slice(&offsets);

        assert!(page.offsets.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_zero_page_size_clamped() {
        let pagination = Pagination::new(0, 0);
        assert_eq!(pagination.page_size(), 1);
        assert_eq!(pagination.limit(), 2);
    }

    #[test]
    fn test_pages_reconstruct_prefix() {
        let all: Vec<usize> = (0..47).map(|i| i * 7 % 53).collect();
        let size = 6;

        let mut collected = Vec::new();
        for p in 0.. {
            let pagination = Pagination::new(size, p);
            let bounded = &all[..pagination.limit().min(all.len())];
            let page = pagination.slice(bounded);
            collected.extend_from_slice(page.offsets);
            if !page.has_more {
                break;
            }
        }

        assert_eq!(collected, all);
    }
}
