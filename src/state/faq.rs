use crate::content::{FaqCategory, FaqEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(FaqCategory),
}

impl CategoryFilter {
    pub const CHOICES: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(FaqCategory::Installation),
        CategoryFilter::Only(FaqCategory::Equipment),
        CategoryFilter::Only(FaqCategory::Pricing),
        CategoryFilter::Only(FaqCategory::Support),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, entry: &FaqEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => entry.category == category,
        }
    }
}

/// Category filter plus single-open accordion over a fixed FAQ list.
///
/// `open_index` always refers to a position in the *filtered* list, which
/// is why every category change resets it to the first item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqFilterState {
    pub active: CategoryFilter,
    pub open_index: Option<usize>,
}

impl Default for FaqFilterState {
    fn default() -> Self {
        Self {
            active: CategoryFilter::All,
            open_index: Some(0),
        }
    }
}

impl FaqFilterState {
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.active = filter;
        self.open_index = Some(0);
    }

    pub fn toggle_item(&mut self, index: usize) {
        self.open_index = if self.open_index == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn visible<'a>(&self, entries: &'a [FaqEntry]) -> Vec<&'a FaqEntry> {
        entries.iter().filter(|e| self.active.matches(e)).collect()
    }

    /// An index past the end of the filtered list (only possible when it is
    /// empty) expands nothing.
    pub fn is_open(&self, index: usize, entries: &[FaqEntry]) -> bool {
        match self.open_index {
            Some(open) if open == index => {
                entries.iter().filter(|e| self.active.matches(e)).nth(index).is_some()
            }
            _ => false,
        }
    }
}

pub fn count(entries: &[FaqEntry], category: FaqCategory) -> usize {
    entries.iter().filter(|e| e.category == category).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQS;

    #[test]
    fn every_filter_preserves_authoring_order() {
        for filter in CategoryFilter::CHOICES {
            let mut state = FaqFilterState::default();
            state.select_category(filter);

            let expected: Vec<&FaqEntry> = FAQS.iter().filter(|e| filter.matches(e)).collect();
            assert_eq!(state.visible(&FAQS), expected);
        }
        let mut state = FaqFilterState::default();
        state.select_category(CategoryFilter::All);
        assert_eq!(state.visible(&FAQS).len(), FAQS.len());
    }

    #[test]
    fn selecting_a_category_opens_its_first_item() {
        let mut state = FaqFilterState::default();
        state.toggle_item(7);
        assert_eq!(state.open_index, Some(7));

        state.select_category(CategoryFilter::Only(FaqCategory::Support));
        assert_eq!(state.open_index, Some(0));

        state.toggle_item(0);
        assert_eq!(state.open_index, None);
        state.select_category(CategoryFilter::Only(FaqCategory::Support));
        assert_eq!(state.open_index, Some(0));
    }

    #[test]
    fn toggle_is_single_open() {
        let mut state = FaqFilterState::default();
        assert!(state.is_open(0, &FAQS));

        state.toggle_item(0);
        assert_eq!(state.open_index, None);
        assert!(!state.is_open(0, &FAQS));

        state.toggle_item(2);
        state.toggle_item(4);
        assert!(state.is_open(4, &FAQS));
        assert!(!state.is_open(2, &FAQS));
    }

    #[test]
    fn pricing_filter_yields_its_three_entries() {
        let mut state = FaqFilterState::default();
        state.select_category(CategoryFilter::Only(FaqCategory::Pricing));

        let visible = state.visible(&FAQS);
        let questions: Vec<&str> = visible.iter().map(|e| e.question).collect();
        assert_eq!(
            questions,
            vec![
                "How much does a security camera system cost?",
                "Do you offer financing or payment plans?",
                "Is the free assessment really free with no obligation?",
            ]
        );
        assert!(state.is_open(0, &FAQS));
    }

    #[test]
    fn empty_filtered_list_expands_nothing() {
        let only_support = [FAQS[9], FAQS[10]];
        let mut state = FaqFilterState::default();
        state.select_category(CategoryFilter::Only(FaqCategory::Pricing));

        assert!(state.visible(&only_support).is_empty());
        assert_eq!(state.open_index, Some(0));
        assert!(!state.is_open(0, &only_support));
    }

    #[test]
    fn badge_counts() {
        assert_eq!(count(&FAQS, FaqCategory::Equipment), 3);
        assert_eq!(count(&FAQS[..4], FaqCategory::Equipment), 1);
    }
}
