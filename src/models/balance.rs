//! Income/expense aggregation

use super::record::Record;

/// Totals over a set of records, kept at full precision
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Balance {
    /// Sum of income amounts
    pub income: f64,
    /// Sum of expense amounts
    pub expense: f64,
}

impl Balance {
    /// Aggregate a sequence of records
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        records
            .into_iter()
            .fold(Self::default(), |mut balance, record| {
                if record.is_income() {
                    balance.income += record.amount;
                } else {
                    balance.expense += record.amount;
                }
                balance
            })
    }

    /// Income minus expense
    pub fn total(&self) -> f64 {
        self.income - self.expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_empty_balance() {
        let balance = Balance::from_records(&Vec::<Record>::new());
        assert_eq!(balance, Balance::default());
        assert_eq!(balance.total(), 0.0);
    }

    #[test]
    fn test_aggregation() {
        let records = vec![
            Record::new("2024-01-01", Category::Income, 1000.0, "USD", "Salary"),
            Record::new("2024-01-02", Category::Expense, 300.0, "USD", "Rent"),
            Record::new("2024-01-03", Category::Income, 50.0, "USD", "Gift"),
        ];
        let balance = Balance::from_records(&records);
        assert_eq!(balance.income, 1050.0);
        assert_eq!(balance.expense, 300.0);
        assert_eq!(balance.total(), 750.0);
    }

    #[test]
    fn test_overspent_balance_is_negative() {
        let records = vec![
            Record::new("2024-01-01", Category::Income, 10.0, "USD", ""),
            Record::new("2024-01-02", Category::Expense, 25.5, "USD", ""),
        ];
        assert_eq!(Balance::from_records(&records).total(), -15.5);
    }
}
