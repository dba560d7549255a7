//! Feature Entity
//!
//! A roadmap feature card. `FeatureInput` is the create payload (every
//! field but the id), `FeaturePatch` the partial update payload.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::entity::{DomainResult, Entity};
use crate::milestone::{self, Milestone};
use crate::values::{EffortLevel, Priority, TShirtSize};

/// A roadmap feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Unique identifier, assigned by the store
    pub id: u32,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    /// Free-text release label ("Q3", "v2.1", ...)
    pub release: String,
    #[serde(with = "crate::dates")]
    pub estimated_completion: NaiveDate,
    pub t_shirt_size: TShirtSize,
    pub effort_level: EffortLevel,
    pub backlog_items: Vec<String>,
    /// Markdown
    pub notes: String,
    pub milestones: Vec<Milestone>,
}

impl Feature {
    /// Shallow merge: every field present in `patch` replaces the stored one.
    pub fn apply(&mut self, patch: FeaturePatch) {
        let FeaturePatch {
            name,
            description,
            priority,
            release,
            estimated_completion,
            t_shirt_size,
            effort_level,
            backlog_items,
            notes,
            milestones,
        } = patch;

        if let Some(v) = name { self.name = v; }
        if let Some(v) = description { self.description = v; }
        if let Some(v) = priority { self.priority = v; }
        if let Some(v) = release { self.release = v; }
        if let Some(v) = estimated_completion { self.estimated_completion = v; }
        if let Some(v) = t_shirt_size { self.t_shirt_size = v; }
        if let Some(v) = effort_level { self.effort_level = v; }
        if let Some(v) = backlog_items { self.backlog_items = v; }
        if let Some(v) = notes { self.notes = v; }
        if let Some(v) = milestones { self.milestones = v; }
    }

    /// Mean milestone progress (0.0 without milestones)
    pub fn completion(&self) -> f64 {
        milestone::completion(&self.milestones)
    }

    /// Mean milestone progress rounded for display
    pub fn completion_percent(&self) -> u8 {
        milestone::completion_percent(&self.milestones)
    }

    /// Case-insensitive substring match on the name; an empty term matches all.
    pub fn matches_name(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }

    /// Editable copy of every field but the id
    pub fn to_input(&self) -> FeatureInput {
        FeatureInput {
            name: self.name.clone(),
            description: self.description.clone(),
            priority: self.priority,
            release: self.release.clone(),
            estimated_completion: self.estimated_completion,
            t_shirt_size: self.t_shirt_size,
            effort_level: self.effort_level,
            backlog_items: self.backlog_items.clone(),
            notes: self.notes.clone(),
            milestones: self.milestones.clone(),
        }
    }
}

impl Entity for Feature {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Create payload. Unknown keys, including `id`, are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureInput {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub release: String,
    #[serde(with = "crate::dates")]
    pub estimated_completion: NaiveDate,
    pub t_shirt_size: TShirtSize,
    pub effort_level: EffortLevel,
    pub backlog_items: Vec<String>,
    pub notes: String,
    pub milestones: Vec<Milestone>,
}

impl FeatureInput {
    /// Blank form values: medium priority, size M, medium effort, due `today`
    pub fn draft(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            priority: Priority::default(),
            release: String::new(),
            estimated_completion: today,
            t_shirt_size: TShirtSize::default(),
            effort_level: EffortLevel::default(),
            backlog_items: Vec::new(),
            notes: String::new(),
            milestones: Vec::new(),
        }
    }

    pub fn validate(self) -> DomainResult<Self> {
        for m in &self.milestones {
            m.validate()?;
        }
        Ok(self)
    }

    pub fn into_feature(self, id: u32) -> Feature {
        Feature {
            id,
            name: self.name,
            description: self.description,
            priority: self.priority,
            release: self.release,
            estimated_completion: self.estimated_completion,
            t_shirt_size: self.t_shirt_size,
            effort_level: self.effort_level,
            backlog_items: self.backlog_items,
            notes: self.notes,
            milestones: self.milestones,
        }
    }
}

/// Partial update payload. Absent keys leave the stored value untouched;
/// an explicit `null` is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturePatch {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(default, with = "crate::dates::option", skip_serializing_if = "Option::is_none")]
    pub estimated_completion: Option<NaiveDate>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub t_shirt_size: Option<TShirtSize>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub effort_level: Option<EffortLevel>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub backlog_items: Option<Vec<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub milestones: Option<Vec<Milestone>>,
}

impl FeaturePatch {
    pub fn validate(self) -> DomainResult<Self> {
        if let Some(milestones) = &self.milestones {
            for m in milestones {
                m.validate()?;
            }
        }
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        *self == FeaturePatch::default()
    }
}

impl From<FeatureInput> for FeaturePatch {
    fn from(input: FeatureInput) -> Self {
        Self {
            name: Some(input.name),
            description: Some(input.description),
            priority: Some(input.priority),
            release: Some(input.release),
            estimated_completion: Some(input.estimated_completion),
            t_shirt_size: Some(input.t_shirt_size),
            effort_level: Some(input.effort_level),
            backlog_items: Some(input.backlog_items),
            notes: Some(input.notes),
            milestones: Some(input.milestones),
        }
    }
}

/// Deserialize a key that is present; `null` fails like any other type error.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::MilestoneType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Feature {
        FeatureInput {
            name: "Dark mode".into(),
            description: "Theme toggle".into(),
            priority: Priority::High,
            release: "Q3".into(),
            estimated_completion: date(2025, 9, 30),
            t_shirt_size: TShirtSize::L,
            effort_level: EffortLevel::High,
            backlog_items: vec!["Audit colors".into()],
            notes: "# Notes".into(),
            milestones: vec![],
        }
        .into_feature(7)
    }

    #[test]
    fn test_feature_wire_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "Dark mode",
                "description": "Theme toggle",
                "priority": "high",
                "release": "Q3",
                "estimatedCompletion": "2025-09-30",
                "tShirtSize": "l",
                "effortLevel": "high",
                "backlogItems": ["Audit colors"],
                "notes": "# Notes",
                "milestones": []
            })
        );
    }

    #[test]
    fn test_apply_merges_only_supplied_fields() {
        let mut feature = sample();
        let patch: FeaturePatch =
            serde_json::from_value(json!({ "priority": "low", "release": "Q4" })).unwrap();
        feature.apply(patch);

        assert_eq!(feature.priority, Priority::Low);
        assert_eq!(feature.release, "Q4");
        assert_eq!(feature.name, "Dark mode");
        assert_eq!(feature.t_shirt_size, TShirtSize::L);
        assert_eq!(feature.id, 7);
    }

    #[test]
    fn test_apply_replaces_lists_wholesale() {
        let mut feature = sample();
        feature.apply(FeaturePatch {
            backlog_items: Some(vec![]),
            ..Default::default()
        });
        assert!(feature.backlog_items.is_empty());
    }

    #[test]
    fn test_patch_ignores_id_and_unknown_keys() {
        let patch: FeaturePatch =
            serde_json::from_value(json!({ "id": 99, "color": "red" })).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_patch_rejects_null() {
        let result = serde_json::from_value::<FeaturePatch>(json!({ "name": null }));
        assert!(result.is_err());
        let result = serde_json::from_value::<FeaturePatch>(json!({ "estimatedCompletion": null }));
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = FeaturePatch {
            t_shirt_size: Some(TShirtSize::Xs),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "tShirtSize": "xs" }));
    }

    #[test]
    fn test_input_requires_every_field() {
        let result = serde_json::from_value::<FeatureInput>(json!({ "name": "Partial" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_input_validation_checks_milestones() {
        let mut input = sample().to_input();
        let mut m = Milestone::new(date(2025, 1, 1));
        m.percent_complete = 120;
        input.milestones.push(m);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_completion_from_milestones() {
        let mut feature = sample();
        assert_eq!(feature.completion_percent(), 0);
        feature.milestones = vec![
            Milestone { percent_complete: 100, ..Milestone::new(date(2025, 1, 1)) },
            Milestone { percent_complete: 25, kind: MilestoneType::Testing, ..Milestone::new(date(2025, 2, 1)) },
        ];
        assert_eq!(feature.completion(), 62.5);
        assert_eq!(feature.completion_percent(), 63);
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let feature = sample();
        assert!(feature.matches_name("dark"));
        assert!(feature.matches_name("MODE"));
        assert!(feature.matches_name(""));
        assert!(!feature.matches_name("light"));
    }

    #[test]
    fn test_matches_name_keeps_spaces_in_term() {
        let feature = sample();
        assert!(feature.matches_name("k m"));
        assert!(!feature.matches_name("   "));
    }

    #[test]
    fn test_draft_defaults() {
        let draft = FeatureInput::draft(date(2025, 5, 1));
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.t_shirt_size, TShirtSize::M);
        assert_eq!(draft.effort_level, EffortLevel::Medium);
        assert_eq!(draft.estimated_completion, date(2025, 5, 1));
        assert!(draft.milestones.is_empty());
    }
}
