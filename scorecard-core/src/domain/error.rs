// scorecard-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Unknown month: '{0}'")]
    #[diagnostic(
        code(scorecard::domain::month),
        help("Use one of: Enero, Febrero, Marzo, Abril, Mayo, Junio, Julio, Agosto, Septiembre, Octubre, Noviembre, Diciembre.")
    )]
    UnknownMonth(String),

    #[error("Unknown employee: '{0}'")]
    #[diagnostic(
        code(scorecard::domain::employee),
        help("Use one of: mario, david, hellen.")
    )]
    UnknownEmployee(String),

    #[error("Unknown metric column: '{0}'")]
    #[diagnostic(
        code(scorecard::domain::metric),
        help("Metric columns look like 'm_ventas', 'd_monto_det' or 'h_mail'.")
    )]
    UnknownMetric(String),

    #[error("Fiscal year {year} is outside the selectable range {first}..={last}")]
    #[diagnostic(code(scorecard::domain::fiscal_year))]
    FiscalYearOutOfRange { year: i32, first: i32, last: i32 },

    #[error("Invalid capture: {0}")]
    #[diagnostic(code(scorecard::domain::capture))]
    InvalidCapture(String),

    #[error("Invalid assignment '{0}', expected column=value")]
    #[diagnostic(code(scorecard::domain::assignment))]
    InvalidAssignment(String),
}
