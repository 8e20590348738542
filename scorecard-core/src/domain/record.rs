// scorecard-core/src/domain/record.rs

use crate::domain::calendar::Month;
use crate::domain::error::DomainError;
use crate::domain::metric::Metric;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One row of the `Datos` worksheet: everything captured for a (year, month).
///
/// Counts are integers, amounts are floats; a freshly created record has every
/// metric at zero, which is also what a missing or malformed cell becomes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct MonthlyRecord {
    pub year: i32,
    pub month: Month,

    // --- Mario: services ---
    pub services_sales: f64,
    #[validate(range(min = 0))]
    pub new_clients: i64,
    pub new_client_revenue: f64,
    #[validate(range(min = 0))]
    pub technical_content: i64,

    // --- David: site operations ---
    pub detected_amount: f64,
    /// Percent. Lower is better.
    pub schedule_deviation: f64,
    /// NPS-style score out of 10.
    #[validate(range(min = 0.0, max = 10.0))]
    pub satisfaction: f64,
    #[validate(range(min = 0))]
    pub safety_courses: i64,
    pub performance_evaluation: f64,
    #[validate(range(min = 0))]
    pub quotes: i64,

    // --- Hellen: product sales ---
    pub product_sales: f64,
    #[validate(range(min = 0))]
    pub appointments: i64,
    #[validate(range(min = 0))]
    pub mailings: i64,
    #[validate(range(min = 0))]
    pub social_posts: i64,
    #[validate(range(min = 0))]
    pub articles: i64,
}

impl MonthlyRecord {
    /// The zero-filled record used whenever a (year, month) has no row.
    pub fn empty(year: i32, month: Month) -> Self {
        Self {
            year,
            month,
            ..Self::default()
        }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::ServicesSales => self.services_sales,
            Metric::NewClients => self.new_clients as f64,
            Metric::NewClientRevenue => self.new_client_revenue,
            Metric::TechnicalContent => self.technical_content as f64,
            Metric::DetectedAmount => self.detected_amount,
            Metric::ScheduleDeviation => self.schedule_deviation,
            Metric::Satisfaction => self.satisfaction,
            Metric::SafetyCourses => self.safety_courses as f64,
            Metric::PerformanceEvaluation => self.performance_evaluation,
            Metric::Quotes => self.quotes as f64,
            Metric::ProductSales => self.product_sales,
            Metric::Appointments => self.appointments as f64,
            Metric::Mailings => self.mailings as f64,
            Metric::SocialPosts => self.social_posts as f64,
            Metric::Articles => self.articles as f64,
        }
    }

    /// Sets a metric from a float. Count metrics truncate toward zero and a
    /// non-finite value stores zero.
    pub fn set(&mut self, metric: Metric, value: f64) {
        let value = if value.is_finite() { value } else { 0.0 };
        let count = value.trunc() as i64;
        match metric {
            Metric::ServicesSales => self.services_sales = value,
            Metric::NewClients => self.new_clients = count,
            Metric::NewClientRevenue => self.new_client_revenue = value,
            Metric::TechnicalContent => self.technical_content = count,
            Metric::DetectedAmount => self.detected_amount = value,
            Metric::ScheduleDeviation => self.schedule_deviation = value,
            Metric::Satisfaction => self.satisfaction = value,
            Metric::SafetyCourses => self.safety_courses = count,
            Metric::PerformanceEvaluation => self.performance_evaluation = value,
            Metric::Quotes => self.quotes = count,
            Metric::ProductSales => self.product_sales = value,
            Metric::Appointments => self.appointments = count,
            Metric::Mailings => self.mailings = count,
            Metric::SocialPosts => self.social_posts = count,
            Metric::Articles => self.articles = count,
        }
    }

    /// Applies a `column=value` assignment, as typed on the capture form.
    pub fn assign(&mut self, assignment: &str) -> Result<Metric, DomainError> {
        let (column, raw) = assignment
            .split_once('=')
            .ok_or_else(|| DomainError::InvalidAssignment(assignment.to_string()))?;
        let metric: Metric = column.parse()?;
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidAssignment(assignment.to_string()))?;
        self.set(metric, value);
        Ok(metric)
    }

    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::InvalidCapture(e.to_string()))
    }

    pub fn key(&self) -> (i32, Month) {
        (self.year, self.month)
    }
}
