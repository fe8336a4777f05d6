use serde::Serialize;

pub const PER_PAGE: usize = 20;

/// One page of a listing. Pages are 1-based.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
}

impl<T: Clone> Page<T> {
    /// Cuts page `page` out of `all`. Page `0` is treated as the first one.
    pub fn slice(all: &[T], page: usize, per_page: usize) -> Self {
        let page = page.max(1);
        let start = (page - 1).saturating_mul(per_page).min(all.len());
        let end = start.saturating_add(per_page).min(all.len());
        Self {
            items: all[start..end].to_vec(),
            page,
            per_page,
            total: all.len(),
        }
    }
}

impl<T> Page<T> {
    pub fn pages(&self) -> usize {
        self.total.div_ceil(self.per_page.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_twenty_per_page() {
        let all = (1..=45).collect::<Vec<_>>();
        let second = Page::slice(&all, 2, PER_PAGE);
        assert_eq!(second.items.first(), Some(&21));
        assert_eq!(second.items.len(), 20);
        assert_eq!(second.pages(), 3);

        let last = Page::slice(&all, 3, PER_PAGE);
        assert_eq!(last.items.len(), 5);
    }

    #[test]
    fn past_the_end_is_empty() {
        let all = vec![1, 2, 3];
        assert!(Page::slice(&all, 9, PER_PAGE).items.is_empty());
        assert_eq!(Page::slice(&all, 0, PER_PAGE).page, 1);
    }
}
