//! The budget model and spending status calculations.

/// The monthly budget a new ledger starts with.
pub const DEFAULT_BUDGET: f64 = 2000.0;

/// How close spending is to the budget, derived from the spent percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetBand {
    /// Spending is below 70% of the budget.
    Ok,
    /// Spending has reached 70% of the budget but is still below 90%.
    Warning,
    /// Spending has reached 90% of the budget.
    Critical,
}

impl BudgetBand {
    /// The band for a spent percentage in the range [0, 100].
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            BudgetBand::Critical
        } else if percentage >= 70.0 {
            BudgetBand::Warning
        } else {
            BudgetBand::Ok
        }
    }
}

/// A snapshot of spending measured against the monthly budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetStatus {
    /// The monthly budget.
    pub budget: f64,
    /// The total amount spent.
    pub spent: f64,
    /// How much of the budget has been spent, clamped to [0, 100].
    pub percentage: f64,
    /// How much of the budget is left, floored at zero.
    pub remaining: f64,
    /// The band the spent percentage falls into.
    pub band: BudgetBand,
}

/// Measure `total_expenses` against `budget`.
///
/// The percentage is clamped to 100 and the remaining amount is floored at
/// zero, so overspending never produces values outside the display range.
/// `budget` must be positive, which the ledger guarantees.
pub fn budget_status(budget: f64, total_expenses: f64) -> BudgetStatus {
    let percentage = (total_expenses / budget * 100.0).min(100.0);
    let remaining = (budget - total_expenses).max(0.0);

    BudgetStatus {
        budget,
        spent: total_expenses,
        percentage,
        remaining,
        band: BudgetBand::from_percentage(percentage),
    }
}

#[cfg(test)]
mod budget_status_tests {
    use super::{BudgetBand, budget_status};

    #[test]
    fn low_spending_is_in_the_ok_band() {
        let status = budget_status(2000.0, 500.0);

        assert_eq!(status.percentage, 25.0);
        assert_eq!(status.remaining, 1500.0);
        assert_eq!(status.band, BudgetBand::Ok);
    }

    #[test]
    fn seventy_percent_is_the_warning_boundary() {
        let status = budget_status(2000.0, 1400.0);

        assert_eq!(status.percentage, 70.0);
        assert_eq!(status.band, BudgetBand::Warning);
    }

    #[test]
    fn just_below_ninety_percent_stays_in_the_warning_band() {
        let status = budget_status(2000.0, 1799.99);

        assert!(status.percentage < 90.0);
        assert_eq!(status.band, BudgetBand::Warning);
    }

    #[test]
    fn ninety_five_percent_is_critical() {
        let status = budget_status(2000.0, 1900.0);

        assert_eq!(status.percentage, 95.0);
        assert_eq!(status.remaining, 100.0);
        assert_eq!(status.band, BudgetBand::Critical);
    }

    #[test]
    fn overspending_clamps_percentage_and_remaining() {
        let status = budget_status(2000.0, 2500.0);

        assert_eq!(status.percentage, 100.0);
        assert_eq!(status.remaining, 0.0);
        assert_eq!(status.band, BudgetBand::Critical);
    }

    #[test]
    fn no_spending_is_ok_with_the_full_budget_remaining() {
        let status = budget_status(2000.0, 0.0);

        assert_eq!(status.percentage, 0.0);
        assert_eq!(status.remaining, 2000.0);
        assert_eq!(status.band, BudgetBand::Ok);
    }
}
