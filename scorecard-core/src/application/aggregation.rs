// scorecard-core/src/application/aggregation.rs

use serde::Serialize;

use crate::domain::calendar::Month;
use crate::domain::metric::Metric;
use crate::domain::record::MonthlyRecord;

/// The year-to-date sums the dashboard shows. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct YearToDate {
    pub year: i32,
    pub services_sales: f64,
    pub new_clients: f64,
    pub new_client_revenue: f64,
    pub detected_amount: f64,
    pub quotes: f64,
    pub product_sales: f64,
}

/// One point of a chart series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub month: Month,
    pub value: f64,
}

/// Read-only queries over the monthly records loaded for one view.
///
/// Holds no state of its own: every answer is a function of the slice.
#[derive(Debug, Clone, Copy)]
pub struct Ledger<'a> {
    records: &'a [MonthlyRecord],
}

impl<'a> Ledger<'a> {
    pub fn new(records: &'a [MonthlyRecord]) -> Self {
        Self { records }
    }

    fn in_year(&self, year: i32) -> impl Iterator<Item = &'a MonthlyRecord> {
        self.records.iter().filter(move |r| r.year == year)
    }

    /// Sum of `metric` over every captured month of `year`; 0 when none.
    pub fn sum_year_to_date(&self, year: i32, metric: Metric) -> f64 {
        self.in_year(year).map(|r| r.get(metric)).sum()
    }

    /// The record of (year, month), or an all-zero record when nothing was
    /// captured. Never fails.
    pub fn month_record(&self, year: i32, month: Month) -> MonthlyRecord {
        self.in_year(year)
            .find(|r| r.month == month)
            .cloned()
            .unwrap_or_else(|| MonthlyRecord::empty(year, month))
    }

    pub fn year_to_date(&self, year: i32) -> YearToDate {
        YearToDate {
            year,
            services_sales: self.sum_year_to_date(year, Metric::ServicesSales),
            new_clients: self.sum_year_to_date(year, Metric::NewClients),
            new_client_revenue: self.sum_year_to_date(year, Metric::NewClientRevenue),
            detected_amount: self.sum_year_to_date(year, Metric::DetectedAmount),
            quotes: self.sum_year_to_date(year, Metric::Quotes),
            product_sales: self.sum_year_to_date(year, Metric::ProductSales),
        }
    }

    /// Captured months of `year` in calendar order, one point per month.
    pub fn monthly_series(&self, year: i32, metric: Metric) -> Vec<SeriesPoint> {
        let mut points: Vec<SeriesPoint> = self
            .in_year(year)
            .map(|r| SeriesPoint {
                month: r.month,
                value: r.get(metric),
            })
            .collect();
        points.sort_by_key(|p| p.month);
        points.dedup_by_key(|p| p.month);
        points
    }

    /// Running total of [`Ledger::monthly_series`].
    pub fn cumulative_series(&self, year: i32, metric: Metric) -> Vec<SeriesPoint> {
        let mut total = 0.0;
        self.monthly_series(year, metric)
            .into_iter()
            .map(|p| {
                total += p.value;
                SeriesPoint {
                    month: p.month,
                    value: total,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, month: Month) -> MonthlyRecord {
        MonthlyRecord::empty(year, month)
    }

    fn sample() -> Vec<MonthlyRecord> {
        vec![
            MonthlyRecord {
                services_sales: 300.0,
                product_sales: 30.0,
                ..record(2026, Month::Marzo)
            },
            MonthlyRecord {
                services_sales: 100.0,
                new_clients: 2,
                product_sales: 10.0,
                ..record(2026, Month::Enero)
            },
            MonthlyRecord {
                services_sales: 9_999.0,
                ..record(2027, Month::Enero)
            },
        ]
    }

    #[test]
    fn test_sum_year_to_date_filters_by_year() {
        let records = sample();
        let ledger = Ledger::new(&records);
        assert_eq!(ledger.sum_year_to_date(2026, Metric::ServicesSales), 400.0);
        assert_eq!(ledger.sum_year_to_date(2026, Metric::NewClients), 2.0);
        assert_eq!(ledger.sum_year_to_date(2027, Metric::ServicesSales), 9_999.0);
    }

    #[test]
    fn test_year_without_records_sums_to_zero() {
        let records = sample();
        let ledger = Ledger::new(&records);
        for metric in Metric::ALL {
            assert_eq!(ledger.sum_year_to_date(2031, metric), 0.0);
        }
        assert_eq!(ledger.year_to_date(2031), YearToDate { year: 2031, ..Default::default() });
    }

    #[test]
    fn test_month_record_defaults_when_absent() {
        let records = sample();
        let ledger = Ledger::new(&records);

        let found = ledger.month_record(2026, Month::Marzo);
        assert_eq!(found.services_sales, 300.0);

        let missing = ledger.month_record(2026, Month::Diciembre);
        assert_eq!(missing, MonthlyRecord::empty(2026, Month::Diciembre));

        let empty: Vec<MonthlyRecord> = Vec::new();
        assert_eq!(
            Ledger::new(&empty).month_record(2040, Month::Julio),
            MonthlyRecord::empty(2040, Month::Julio)
        );
    }

    #[test]
    fn test_series_are_month_ordered_and_cumulative() {
        let records = sample();
        let ledger = Ledger::new(&records);

        let series = ledger.monthly_series(2026, Metric::ProductSales);
        let months: Vec<Month> = series.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![Month::Enero, Month::Marzo]);

        let cumulative = ledger.cumulative_series(2026, Metric::ProductSales);
        let values: Vec<f64> = cumulative.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![10.0, 40.0]);
    }
}
