//! Board Layout
//!
//! Groups features into kanban columns keyed by a configurable field and
//! computes the update needed when a card is dropped on another column.

use crate::entity::{DomainError, DomainResult};
use crate::feature::{Feature, FeaturePatch};

/// Feature field the board is grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnField {
    #[default]
    Priority,
    Release,
    TShirtSize,
    EffortLevel,
}

impl ColumnField {
    pub const ALL: [ColumnField; 4] = [
        ColumnField::Priority,
        ColumnField::Release,
        ColumnField::TShirtSize,
        ColumnField::EffortLevel,
    ];

    /// JSON key of the field
    pub fn key(&self) -> &'static str {
        match self {
            ColumnField::Priority => "priority",
            ColumnField::Release => "release",
            ColumnField::TShirtSize => "tShirtSize",
            ColumnField::EffortLevel => "effortLevel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColumnField::Priority => "Priority",
            ColumnField::Release => "Release",
            ColumnField::TShirtSize => "T-Shirt Size",
            ColumnField::EffortLevel => "Level of Effort",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Column a feature belongs to
    pub fn value_of(&self, feature: &Feature) -> String {
        match self {
            ColumnField::Priority => feature.priority.as_str().to_string(),
            ColumnField::Release => feature.release.clone(),
            ColumnField::TShirtSize => feature.t_shirt_size.as_str().to_string(),
            ColumnField::EffortLevel => feature.effort_level.as_str().to_string(),
        }
    }

    /// Patch that moves a feature into the column `value`
    pub fn patch_for(&self, value: &str) -> DomainResult<FeaturePatch> {
        let mut patch = FeaturePatch::default();
        match self {
            ColumnField::Priority => patch.priority = Some(value.parse()?),
            ColumnField::Release => patch.release = Some(value.to_string()),
            ColumnField::TShirtSize => patch.t_shirt_size = Some(value.parse()?),
            ColumnField::EffortLevel => patch.effort_level = Some(value.parse()?),
        }
        Ok(patch)
    }
}

/// One board column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Shared field value of every card in the column
    pub value: String,
    pub features: Vec<Feature>,
}

/// Group features into columns.
///
/// Columns appear in order of first occurrence of their value and only for
/// values that occur; cards keep their relative order.
pub fn group_by(features: &[Feature], field: ColumnField) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::new();
    for feature in features {
        let value = field.value_of(feature);
        match columns.iter_mut().find(|c| c.value == value) {
            Some(column) => column.features.push(feature.clone()),
            None => columns.push(Column {
                value,
                features: vec![feature.clone()],
            }),
        }
    }
    columns
}

/// Features whose name contains `term`, ignoring case
pub fn filter_by_name(features: &[Feature], term: &str) -> Vec<Feature> {
    features.iter().filter(|f| f.matches_name(term)).cloned().collect()
}

/// Patch for dropping card `id` on column `target`.
///
/// `Ok(None)` when the card is unknown or already in that column.
pub fn move_card(
    features: &[Feature],
    id: u32,
    field: ColumnField,
    target: &str,
) -> DomainResult<Option<FeaturePatch>> {
    let Some(feature) = features.iter().find(|f| f.id == id) else {
        return Ok(None);
    };
    if field.value_of(feature) == target {
        return Ok(None);
    }
    field.patch_for(target).map(Some)
}

impl std::str::FromStr for ColumnField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| DomainError::InvalidInput(format!("unknown column field '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::FeatureInput;
    use crate::values::{EffortLevel, Priority, TShirtSize};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn feature(id: u32, name: &str, priority: Priority, release: &str) -> Feature {
        let mut input = FeatureInput::draft(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        input.name = name.into();
        input.priority = priority;
        input.release = release.into();
        input.into_feature(id)
    }

    fn board() -> Vec<Feature> {
        vec![
            feature(1, "Search", Priority::Low, "v2"),
            feature(2, "Export", Priority::High, "v1"),
            feature(3, "Sharing", Priority::Low, "v1"),
            feature(4, "Audit log", Priority::Medium, "v3"),
        ]
    }

    fn ids(column: &Column) -> Vec<u32> {
        column.features.iter().map(|f| f.id).collect()
    }

    #[test]
    fn test_group_by_first_appearance_order() {
        let columns = group_by(&board(), ColumnField::Priority);
        let values: Vec<&str> = columns.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["low", "high", "medium"]);
        assert_eq!(ids(&columns[0]), vec![1, 3]);
        assert_eq!(ids(&columns[1]), vec![2]);
    }

    #[test]
    fn test_group_by_release_text() {
        let columns = group_by(&board(), ColumnField::Release);
        let values: Vec<&str> = columns.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["v2", "v1", "v3"]);
        assert_eq!(ids(&columns[1]), vec![2, 3]);
    }

    #[test]
    fn test_group_by_skips_absent_values() {
        let columns = group_by(&board(), ColumnField::TShirtSize);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].value, "m");
        assert!(group_by(&[], ColumnField::EffortLevel).is_empty());
    }

    #[test]
    fn test_filter_by_name() {
        let found = filter_by_name(&board(), "EX");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Export");
        assert_eq!(filter_by_name(&board(), "").len(), 4);
    }

    #[test]
    fn test_patch_for_each_field() {
        assert_eq!(
            ColumnField::Priority.patch_for("high").unwrap().priority,
            Some(Priority::High)
        );
        assert_eq!(
            ColumnField::Release.patch_for("2026.1").unwrap().release.as_deref(),
            Some("2026.1")
        );
        assert_eq!(
            ColumnField::TShirtSize.patch_for("xl").unwrap().t_shirt_size,
            Some(TShirtSize::Xl)
        );
        assert_eq!(
            ColumnField::EffortLevel.patch_for("low").unwrap().effort_level,
            Some(EffortLevel::Low)
        );
        assert!(ColumnField::Priority.patch_for("someday").is_err());
    }

    #[test]
    fn test_move_card() {
        let features = board();
        let patch = move_card(&features, 1, ColumnField::Priority, "high").unwrap();
        assert_eq!(
            patch,
            Some(FeaturePatch {
                priority: Some(Priority::High),
                ..Default::default()
            })
        );
        assert_eq!(move_card(&features, 1, ColumnField::Priority, "low").unwrap(), None);
        assert_eq!(move_card(&features, 42, ColumnField::Priority, "high").unwrap(), None);
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in ColumnField::ALL {
            assert_eq!(ColumnField::from_key(field.key()), Some(field));
        }
        assert_eq!("tShirtSize".parse::<ColumnField>().unwrap(), ColumnField::TShirtSize);
        assert!("notes".parse::<ColumnField>().is_err());
    }
}
