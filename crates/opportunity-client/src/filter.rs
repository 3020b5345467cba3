//! Client-side Filtering
//!
//! Category equality plus case-insensitive title search.

use crate::models::Opportunity;

/// Category selector; `All` is the "all" sentinel of the filter dropdown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn from_value(value: &str) -> Self {
        match value {
            "all" => CategoryFilter::All,
            other => CategoryFilter::Category(other.to_string()),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Category(c) => c,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => c == category,
        }
    }
}

/// Current filter bar state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpportunityFilter {
    pub category: CategoryFilter,
    pub search_term: String,
}

impl OpportunityFilter {
    pub fn new(category: CategoryFilter, search_term: impl Into<String>) -> Self {
        Self {
            category,
            search_term: search_term.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All || !self.search_term.is_empty()
    }

    pub fn matches(&self, opportunity: &Opportunity) -> bool {
        self.category.matches(&opportunity.category)
            && opportunity
                .title
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
    }
}

/// Records passing `filter`, in collection order
pub fn filter_opportunities<'a>(
    opportunities: &'a [Opportunity],
    filter: &OpportunityFilter,
) -> Vec<&'a Opportunity> {
    opportunities.iter().filter(|o| filter.matches(o)).collect()
}

#[cfg(test)]
pub(crate) fn make_opportunity(
    id: u32,
    title: &str,
    category: &str,
    status: &str,
    priority_score: impl Into<f64>,
) -> Opportunity {
    Opportunity {
        id,
        title: title.to_string(),
        category: category.to_string(),
        deadline: None,
        priority_score: priority_score.into(),
        status: status.to_string(),
        created_at: "2025-01-01T00:00:00".to_string(),
        content: None,
        requirements: Vec::new(),
        contact_info: None,
        source: None,
        updated_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Opportunity> {
        vec![
            make_opportunity(1, "Senior Engineer", "job", "new", 9),
            make_opportunity(2, "Research Grant", "grant", "applied", 6),
            make_opportunity(3, "Logo design gig", "freelance", "completed", 4),
            make_opportunity(4, "Sales Lead", "job", "rejected", 2),
            make_opportunity(5, "ENGINEERING challenge", "competition", "new", 8),
        ]
    }

    fn ids(result: &[&Opportunity]) -> Vec<u32> {
        result.iter().map(|o| o.id).collect()
    }

    #[test]
    fn test_no_filter_is_identity() {
        let all = sample();
        let result = filter_opportunities(&all, &OpportunityFilter::default());
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_category_and_search_combined() {
        let all = vec![
            make_opportunity(1, "Engineer", "job", "new", 5),
            make_opportunity(2, "Engineer", "grant", "new", 5),
            make_opportunity(3, "Sales", "job", "new", 5),
        ];
        let filter = OpportunityFilter::new(CategoryFilter::from_value("job"), "eng");
        assert_eq!(ids(&filter_opportunities(&all, &filter)), vec![1]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let all = sample();
        let filter = OpportunityFilter::new(CategoryFilter::All, "eNg");
        assert_eq!(ids(&filter_opportunities(&all, &filter)), vec![1, 5]);
    }

    #[test]
    fn test_category_is_exact() {
        let all = sample();
        let filter = OpportunityFilter::new(CategoryFilter::from_value("Job"), "");
        assert!(filter_opportunities(&all, &filter).is_empty());
    }

    #[test]
    fn test_result_is_subset_satisfying_predicate() {
        let all = sample();
        let filters = [
            OpportunityFilter::new(CategoryFilter::All, "a"),
            OpportunityFilter::new(CategoryFilter::from_value("job"), ""),
            OpportunityFilter::new(CategoryFilter::from_value("grant"), "GRANT"),
            OpportunityFilter::new(CategoryFilter::from_value("business"), ""),
        ];
        for filter in &filters {
            let result = filter_opportunities(&all, filter);
            for opp in &all {
                let expected = (filter.category == CategoryFilter::All
                    || opp.category == filter.category.value())
                    && opp.title.to_lowercase().contains(&filter.search_term.to_lowercase());
                assert_eq!(result.iter().any(|o| o.id == opp.id), expected, "{:?} on {}", filter, opp.id);
            }
        }
    }

    #[test]
    fn test_filter_value_round_trip() {
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_value("grant").value(), "grant");
        assert!(!OpportunityFilter::default().is_active());
        assert!(OpportunityFilter::new(CategoryFilter::All, "x").is_active());
    }
}
