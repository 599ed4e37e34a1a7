use std::fmt;

/// Identifies one comment thread and the page to load from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThreadRef {
    pub id: String,
    pub page: u32,
}

impl ThreadRef {
    /// Page numbers start at 1; 0 is clamped up.
    pub fn at_page(id: impl Into<String>, page: u32) -> Self {
        Self {
            id: id.into(),
            page: page.max(1),
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }

    pub fn next(&self) -> Self {
        Self {
            id: self.id.clone(),
            page: self.page.saturating_add(1),
        }
    }
}

impl fmt::Display for ThreadRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} page {}", self.id, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn page_one_is_first_page() {
        assert!(ThreadRef::at_page("42", 1).is_first_page());
        assert!(!ThreadRef::at_page("42", 2).is_first_page());
    }

    #[rstest]
    #[case::zero_clamped(0, 1)]
    #[case::first(1, 1)]
    #[case::third(3, 3)]
    fn at_page_keeps_pages_positive(#[case] page: u32, #[case] expected: u32) {
        assert_eq!(ThreadRef::at_page("42", page).page, expected);
    }

    #[test]
    fn next_advances_page_and_keeps_id() {
        let next = ThreadRef::at_page("42", 2).next();
        assert_eq!(next, ThreadRef::at_page("42", 3));
        assert!(!next.is_first_page());
    }

    #[test]
    fn display_names_thread_and_page() {
        assert_eq!(ThreadRef::at_page("42", 2).to_string(), "#42 page 2");
    }
}
