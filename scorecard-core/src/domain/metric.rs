// scorecard-core/src/domain/metric.rs

use crate::domain::employee::Employee;
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a metric is a whole-number count or a decimal amount
/// (currency, percentage, score). Decides the zero default and coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    Count,
    Amount,
}

/// The fifteen numeric columns of a monthly record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    ServicesSales,
    NewClients,
    NewClientRevenue,
    TechnicalContent,
    DetectedAmount,
    ScheduleDeviation,
    Satisfaction,
    SafetyCourses,
    PerformanceEvaluation,
    Quotes,
    ProductSales,
    Appointments,
    Mailings,
    SocialPosts,
    Articles,
}

impl Metric {
    /// Sheet order.
    pub const ALL: [Metric; 15] = [
        Metric::ServicesSales,
        Metric::NewClients,
        Metric::NewClientRevenue,
        Metric::TechnicalContent,
        Metric::DetectedAmount,
        Metric::ScheduleDeviation,
        Metric::Satisfaction,
        Metric::SafetyCourses,
        Metric::PerformanceEvaluation,
        Metric::Quotes,
        Metric::ProductSales,
        Metric::Appointments,
        Metric::Mailings,
        Metric::SocialPosts,
        Metric::Articles,
    ];

    /// Header of the column in the `Datos` worksheet.
    pub fn column(&self) -> &'static str {
        match self {
            Self::ServicesSales => "m_ventas",
            Self::NewClients => "m_clientes",
            Self::NewClientRevenue => "m_ventas_nuevos",
            Self::TechnicalContent => "m_contenido",
            Self::DetectedAmount => "d_monto_det",
            Self::ScheduleDeviation => "d_crono_dev",
            Self::Satisfaction => "d_sat",
            Self::SafetyCourses => "d_seg",
            Self::PerformanceEvaluation => "d_eval",
            Self::Quotes => "d_obra",
            Self::ProductSales => "h_ventas",
            Self::Appointments => "h_citas",
            Self::Mailings => "h_mail",
            Self::SocialPosts => "h_fb",
            Self::Articles => "h_art",
        }
    }

    pub fn kind(&self) -> MetricKind {
        match self {
            Self::NewClients
            | Self::TechnicalContent
            | Self::SafetyCourses
            | Self::Quotes
            | Self::Appointments
            | Self::Mailings
            | Self::SocialPosts
            | Self::Articles => MetricKind::Count,
            _ => MetricKind::Amount,
        }
    }

    /// Who reports the metric. The column prefix carries the same information.
    pub fn owner(&self) -> Employee {
        match self.column().as_bytes().first() {
            Some(b'm') => Employee::Mario,
            Some(b'd') => Employee::David,
            _ => Employee::Hellen,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ServicesSales => "Services sales",
            Self::NewClients => "New clients",
            Self::NewClientRevenue => "New-client revenue",
            Self::TechnicalContent => "Technical content published",
            Self::DetectedAmount => "Additional work detected",
            Self::ScheduleDeviation => "Schedule / budget deviation",
            Self::Satisfaction => "Customer satisfaction (NPS)",
            Self::SafetyCourses => "Safety courses",
            Self::PerformanceEvaluation => "Performance evaluation",
            Self::Quotes => "Quotes generated",
            Self::ProductSales => "Product sales",
            Self::Appointments => "Appointments (CRM)",
            Self::Mailings => "Mailings sent",
            Self::SocialPosts => "Social posts",
            Self::Articles => "Product articles",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

impl std::str::FromStr for Metric {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Metric::ALL
            .into_iter()
            .find(|m| m.column() == wanted)
            .ok_or_else(|| DomainError::UnknownMetric(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_metric_parsing_by_column() -> anyhow::Result<()> {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_str(metric.column())?, metric);
        }
        assert!(Metric::from_str("m_unknown").is_err());
        Ok(())
    }

    #[test]
    fn test_metric_owner_follows_prefix() {
        assert_eq!(Metric::NewClientRevenue.owner(), Employee::Mario);
        assert_eq!(Metric::ScheduleDeviation.owner(), Employee::David);
        assert_eq!(Metric::Articles.owner(), Employee::Hellen);
    }

    #[test]
    fn test_metric_kinds() {
        assert_eq!(Metric::Quotes.kind(), MetricKind::Count);
        assert_eq!(Metric::Satisfaction.kind(), MetricKind::Amount);
        let counts = Metric::ALL
            .iter()
            .filter(|m| m.kind() == MetricKind::Count)
            .count();
        assert_eq!(counts, 8);
    }
}
