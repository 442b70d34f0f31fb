use super::domain::{EstimatorKind, ProjectRequest, ProjectType};
use super::schedule::latest_start_date;
use chrono::NaiveDate;
use serde::Deserialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw submission as it arrives from a form post or command line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectForm {
    pub area: String,
    pub workers: String,
    pub budget: String,
    pub project_type: String,
    pub start_date: String,
    #[serde(default)]
    pub estimator: Option<String>,
}

impl ProjectForm {
    pub fn parse(&self) -> Result<ProjectRequest, IntakeError> {
        let request = ProjectRequest {
            area: parse_amount("area", &self.area)?,
            total_workers: parse_workers(&self.workers)?,
            budget: parse_amount("budget", &self.budget)?,
            project_type: ProjectType::from_label(&self.project_type),
            start_date: parse_start_date(&self.start_date)?,
        };
        validate_request(request)
    }

    pub fn estimator(&self) -> Result<EstimatorKind, IntakeError> {
        match self.estimator.as_deref().map(str::trim) {
            None | Some("") => Ok(EstimatorKind::default()),
            Some(raw) => EstimatorKind::from_label(raw)
                .ok_or_else(|| IntakeError::UnknownEstimator(raw.to_string())),
        }
    }
}

pub fn parse_start_date(raw: &str) -> Result<NaiveDate, IntakeError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| IntakeError::InvalidDate {
        value: raw.to_string(),
    })
}

fn parse_amount(field: &'static str, raw: &str) -> Result<f64, IntakeError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| IntakeError::InvalidNumber {
            field,
            value: raw.to_string(),
        })?;
    if !value.is_finite() {
        return Err(IntakeError::InvalidNumber {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

fn parse_workers(raw: &str) -> Result<u32, IntakeError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| IntakeError::InvalidNumber {
            field: "workers",
            value: raw.to_string(),
        })
}

/// Rejects values outside the pipeline's domain. The pipeline itself never checks.
pub fn validate_request(request: ProjectRequest) -> Result<ProjectRequest, IntakeError> {
    if !request.area.is_finite() || request.area <= 0.0 {
        return Err(IntakeError::NotPositive { field: "area" });
    }
    if request.total_workers == 0 {
        return Err(IntakeError::NotPositive { field: "workers" });
    }
    if !request.budget.is_finite() || request.budget <= 0.0 {
        return Err(IntakeError::NotPositive { field: "budget" });
    }
    let latest = latest_start_date();
    if request.start_date > latest {
        return Err(IntakeError::StartDateOutOfRange {
            value: request.start_date,
            latest,
        });
    }
    Ok(request)
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("start_date must be YYYY-MM-DD, got '{value}'")]
    InvalidDate { value: String },
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
    #[error("start_date {value} is too late to schedule; latest accepted is {latest}")]
    StartDateOutOfRange { value: NaiveDate, latest: NaiveDate },
    #[error("unknown estimator '{0}'; expected 'formula' or 'model'")]
    UnknownEstimator(String),
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProjectForm {
        ProjectForm {
            area: "1000".to_string(),
            workers: " 20 ".to_string(),
            budget: "2000000".to_string(),
            project_type: "residential".to_string(),
            start_date: "2024-01-01".to_string(),
            estimator: None,
        }
    }

    #[test]
    fn parses_well_formed_submission() {
        let request = form().parse().expect("form parses");
        assert_eq!(request.area, 1000.0);
        assert_eq!(request.total_workers, 20);
        assert_eq!(request.budget, 2_000_000.0);
        assert_eq!(request.project_type, ProjectType::Residential);
        assert_eq!(
            request.start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
        );
        assert_eq!(form().estimator(), Ok(EstimatorKind::Formula));
    }

    #[test]
    fn unknown_project_type_is_not_an_error() {
        let mut form = form();
        form.project_type = "unknown_type".to_string();
        let request = form.parse().expect("form parses");
        assert_eq!(request.project_type, ProjectType::Other);
    }

    #[test]
    fn rejects_non_numeric_fields() {
        let mut form = form();
        form.workers = "twenty".to_string();
        assert_eq!(
            form.parse(),
            Err(IntakeError::InvalidNumber {
                field: "workers",
                value: "twenty".to_string(),
            })
        );

        let mut other = self::form();
        other.budget = "NaN".to_string();
        assert!(matches!(
            other.parse(),
            Err(IntakeError::InvalidNumber { field: "budget", .. })
        ));
    }

    #[test]
    fn rejects_negative_workers_as_malformed() {
        let mut form = form();
        form.workers = "-3".to_string();
        assert!(matches!(
            form.parse(),
            Err(IntakeError::InvalidNumber { field: "workers", .. })
        ));
    }

    #[test]
    fn rejects_values_outside_domain() {
        let mut form = form();
        form.area = "0".to_string();
        assert_eq!(form.parse(), Err(IntakeError::NotPositive { field: "area" }));

        let mut form = self::form();
        form.workers = "0".to_string();
        assert_eq!(
            form.parse(),
            Err(IntakeError::NotPositive { field: "workers" })
        );

        let mut form = self::form();
        form.budget = "-10".to_string();
        assert_eq!(
            form.parse(),
            Err(IntakeError::NotPositive { field: "budget" })
        );
    }

    #[test]
    fn rejects_malformed_dates() {
        let mut form = form();
        form.start_date = "01/02/2024".to_string();
        assert!(matches!(form.parse(), Err(IntakeError::InvalidDate { .. })));
    }

    #[test]
    fn rejects_start_dates_without_room_to_schedule() {
        let mut form = form();
        form.start_date = NaiveDate::MAX.format(DATE_FORMAT).to_string();
        assert_eq!(
            form.parse(),
            Err(IntakeError::StartDateOutOfRange {
                value: NaiveDate::MAX,
                latest: latest_start_date(),
            })
        );

        let mut form = self::form();
        form.start_date = latest_start_date().format(DATE_FORMAT).to_string();
        assert!(form.parse().is_ok());
    }

    #[test]
    fn estimator_selection_is_validated() {
        let mut form = form();
        form.estimator = Some("model".to_string());
        assert_eq!(form.estimator(), Ok(EstimatorKind::Model));

        form.estimator = Some("forest".to_string());
        assert_eq!(
            form.estimator(),
            Err(IntakeError::UnknownEstimator("forest".to_string()))
        );
    }
}
