//! Aggregate Counts
//!
//! Always computed over the full fetched collection, never the filtered view.

use crate::models::Opportunity;

/// Scores at or above this count as high priority
pub const HIGH_PRIORITY_THRESHOLD: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total: usize,
    /// Records with status `applied`
    pub active: usize,
    pub completed: usize,
    pub high_priority: usize,
}

impl DashboardStats {
    pub fn from_opportunities(opportunities: &[Opportunity]) -> Self {
        Self {
            total: opportunities.len(),
            active: opportunities.iter().filter(|o| o.status == "applied").count(),
            completed: opportunities.iter().filter(|o| o.status == "completed").count(),
            high_priority: opportunities
                .iter()
                .filter(|o| o.priority_score >= HIGH_PRIORITY_THRESHOLD)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::make_opportunity;

    #[test]
    fn test_stats_example() {
        let all = vec![
            make_opportunity(1, "A", "job", "applied", 9),
            make_opportunity(2, "B", "grant", "completed", 3),
        ];
        let stats = DashboardStats::from_opportunities(&all);
        assert_eq!(
            stats,
            DashboardStats { total: 2, active: 1, completed: 1, high_priority: 1 }
        );
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(DashboardStats::from_opportunities(&[]), DashboardStats::default());
    }

    #[test]
    fn test_unknown_status_counts_only_in_total() {
        let all = vec![
            make_opportunity(1, "A", "job", "archived", 8),
            make_opportunity(2, "B", "job", "in_progress", 7),
        ];
        let stats = DashboardStats::from_opportunities(&all);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 0);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.high_priority, 1);
    }

    #[test]
    fn test_high_priority_uses_exact_score() {
        let all = vec![
            make_opportunity(1, "A", "job", "new", 7.5),
            make_opportunity(2, "B", "job", "new", 7.6),
            make_opportunity(3, "C", "job", "new", 7.99),
            make_opportunity(4, "D", "job", "new", 8.0),
        ];
        assert_eq!(DashboardStats::from_opportunities(&all).high_priority, 1);
    }
}
