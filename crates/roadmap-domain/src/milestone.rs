//! Milestone Entity
//!
//! A dated checkpoint inside a feature, with its own progress percentage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::{DomainError, DomainResult};
use crate::values::MilestoneType;

/// Upper bound for `percent_complete`
pub const MAX_PERCENT: u8 = 100;

/// A feature milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub description: String,
    #[serde(with = "crate::dates")]
    pub date: NaiveDate,
    #[serde(default)]
    pub completed: bool,
    /// 0..=100
    #[serde(default)]
    pub percent_complete: u8,
    #[serde(rename = "type", default)]
    pub kind: MilestoneType,
}

impl Milestone {
    /// Blank planning milestone dated `date`
    pub fn new(date: NaiveDate) -> Self {
        Self {
            description: String::new(),
            date,
            completed: false,
            percent_complete: 0,
            kind: MilestoneType::Planning,
        }
    }

    /// Checking a milestone marks it fully done; unchecking resets progress.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        self.percent_complete = if completed { MAX_PERCENT } else { 0 };
    }

    /// Set progress, clamped to 0..=100
    pub fn set_percent(&mut self, percent: i64) {
        self.percent_complete = percent.clamp(0, MAX_PERCENT as i64) as u8;
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.percent_complete > MAX_PERCENT {
            return Err(DomainError::InvalidInput(format!(
                "percentComplete must be between 0 and {}, got {}",
                MAX_PERCENT, self.percent_complete
            )));
        }
        Ok(())
    }
}

/// Mean of `percent_complete` across milestones; 0 when there are none.
pub fn completion(milestones: &[Milestone]) -> f64 {
    if milestones.is_empty() {
        return 0.0;
    }
    let total: u32 = milestones.iter().map(|m| m.percent_complete as u32).sum();
    total as f64 / milestones.len() as f64
}

/// `completion` rounded to a whole percentage (halves round up)
pub fn completion_percent(milestones: &[Milestone]) -> u8 {
    completion(milestones).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(percent: u8) -> Milestone {
        let mut m = Milestone::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        m.percent_complete = percent;
        m
    }

    #[test]
    fn test_completion_of_empty_is_zero() {
        assert_eq!(completion(&[]), 0.0);
        assert_eq!(completion_percent(&[]), 0);
    }

    #[test]
    fn test_completion_is_mean() {
        assert_eq!(completion(&[at(100), at(50), at(0)]), 50.0);
        assert_eq!(completion_percent(&[at(100), at(0), at(0)]), 33);
    }

    #[test]
    fn test_completion_rounds_half_up() {
        assert_eq!(completion_percent(&[at(50), at(51)]), 51);
    }

    #[test]
    fn test_set_completed_forces_percent() {
        let mut m = at(40);
        m.set_completed(true);
        assert!(m.completed);
        assert_eq!(m.percent_complete, 100);
        m.set_completed(false);
        assert_eq!(m.percent_complete, 0);
    }

    #[test]
    fn test_set_percent_clamps() {
        let mut m = at(0);
        m.set_percent(250);
        assert_eq!(m.percent_complete, 100);
        m.set_percent(-4);
        assert_eq!(m.percent_complete, 0);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let m: Milestone =
            serde_json::from_str(r#"{"description":"Design review","date":"2025-02-01"}"#).unwrap();
        assert!(!m.completed);
        assert_eq!(m.percent_complete, 0);
        assert_eq!(m.kind, MilestoneType::Planning);
    }

    #[test]
    fn test_validate_rejects_over_hundred() {
        assert!(at(100).validate().is_ok());
        assert!(matches!(at(101).validate(), Err(DomainError::InvalidInput(_))));
    }
}
