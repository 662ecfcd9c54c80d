use itertools::Itertools;

use crate::model::{PricePoint, Quotation, QuotationSummary};

/// Average price per date, dates ascending
pub fn average_by_date(quotations: &[Quotation]) -> Vec<PricePoint> {
    quotations
        .iter()
        .map(|q| q.date.as_str())
        .unique()
        .sorted()
        .map(|date| {
            let prices = quotations.iter().filter(|q| q.date == date).map(|q| q.price);
            PricePoint::new(date, average(prices))
        })
        .collect()
}

/// Average price per feed name, in the order each name first appears
pub fn average_by_feed(quotations: &[Quotation]) -> Vec<PricePoint> {
    quotations
        .iter()
        .map(|q| q.feed_name.as_str())
        .unique()
        .map(|feed_name| {
            let prices = quotations
                .iter()
                .filter(|q| q.feed_name == feed_name)
                .map(|q| q.price);
            PricePoint::new(feed_name, average(prices))
        })
        .collect()
}

pub fn summarize(quotations: &[Quotation]) -> QuotationSummary {
    QuotationSummary {
        by_date: average_by_date(quotations),
        by_feed: average_by_feed(quotations),
    }
}

/// Arithmetic mean; an empty group averages to 0
pub fn average<I>(prices: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = prices
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), price| (sum + price, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotation(feed_name: &str, price: f64, date: &str) -> Quotation {
        Quotation {
            id: 0,
            feed_name: feed_name.to_string(),
            price,
            date: date.to_string(),
            establishment_name: "FarmCo".to_string(),
        }
    }

    #[test]
    fn test_average_by_date() {
        let quotations = vec![
            quotation("Corn", 10.0, "2024-01-01"),
            quotation("Corn", 20.0, "2024-01-01"),
            quotation("Wheat", 5.0, "2024-01-02"),
        ];

        assert_eq!(
            average_by_date(&quotations),
            vec![
                PricePoint::new("2024-01-01", 15.0),
                PricePoint::new("2024-01-02", 5.0),
            ]
        );
    }

    #[test]
    fn test_dates_are_sorted_regardless_of_input_order() {
        let quotations = vec![
            quotation("Corn", 8.0, "2024-02-10"),
            quotation("Corn", 4.0, "2023-12-31"),
            quotation("Corn", 6.0, "2024-02-09"),
        ];

        let labels: Vec<String> = average_by_date(&quotations)
            .into_iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(labels, vec!["2023-12-31", "2024-02-09", "2024-02-10"]);
    }

    #[test]
    fn test_average_by_feed_keeps_first_occurrence_order() {
        let quotations = vec![
            quotation("Corn", 10.0, "2024-01-01"),
            quotation("Wheat", 4.0, "2024-01-01"),
            quotation("Corn", 20.0, "2024-01-02"),
        ];

        assert_eq!(
            average_by_feed(&quotations),
            vec![PricePoint::new("Corn", 15.0), PricePoint::new("Wheat", 4.0)]
        );
    }

    #[test]
    fn test_feed_grouping_is_exact() {
        let quotations = vec![
            quotation("Corn", 10.0, "2024-01-01"),
            quotation("corn", 30.0, "2024-01-01"),
        ];

        assert_eq!(average_by_feed(&quotations).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(average_by_date(&[]).is_empty());
        assert!(average_by_feed(&[]).is_empty());
        assert_eq!(summarize(&[]), QuotationSummary::default());
        assert_eq!(average(Vec::new()), 0.0);
    }
}
