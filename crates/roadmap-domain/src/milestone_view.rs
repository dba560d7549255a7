//! Milestone list view: type filter, description search and column sort.

use std::cmp::Ordering;

use crate::entity::DomainError;
use crate::milestone::Milestone;
use crate::values::MilestoneType;

/// Type filter for the milestone list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MilestoneFilter {
    #[default]
    All,
    Only(MilestoneType),
}

impl MilestoneFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneFilter::All => "all",
            MilestoneFilter::Only(kind) => kind.as_str(),
        }
    }

    fn accepts(&self, milestone: &Milestone) -> bool {
        match self {
            MilestoneFilter::All => true,
            MilestoneFilter::Only(kind) => milestone.kind == *kind,
        }
    }
}

impl std::str::FromStr for MilestoneFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(MilestoneFilter::All),
            other => other.parse().map(MilestoneFilter::Only),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Date,
    Type,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active filter/search/sort state. Defaults to all types sorted by date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MilestoneQuery {
    pub filter: MilestoneFilter,
    pub search: String,
    pub sort_field: SortField,
    pub direction: SortDirection,
}

impl MilestoneQuery {
    /// Clicking the active header flips direction; another header sorts
    /// ascending by that field.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.direction = self.direction.flipped();
        } else {
            self.sort_field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Visible rows paired with their index in `milestones`
    pub fn apply<'a>(&self, milestones: &'a [Milestone]) -> Vec<(usize, &'a Milestone)> {
        let needle = self.search.trim().to_lowercase();
        let mut rows: Vec<(usize, &Milestone)> = milestones
            .iter()
            .enumerate()
            .filter(|(_, m)| self.filter.accepts(m))
            .filter(|(_, m)| needle.is_empty() || m.description.to_lowercase().contains(&needle))
            .collect();

        rows.sort_by(|(_, a), (_, b)| {
            let ord = compare(self.sort_field, a, b);
            match self.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        rows
    }
}

fn compare(field: SortField, a: &Milestone, b: &Milestone) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Type => a.kind.as_str().cmp(b.kind.as_str()),
        SortField::Description => a
            .description
            .to_lowercase()
            .cmp(&b.description.to_lowercase())
            .then_with(|| a.description.cmp(&b.description)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn milestone(description: &str, day: u32, kind: MilestoneType) -> Milestone {
        Milestone {
            description: description.into(),
            kind,
            ..Milestone::new(NaiveDate::from_ymd_opt(2025, 4, day).unwrap())
        }
    }

    fn list() -> Vec<Milestone> {
        vec![
            milestone("Write tests", 20, MilestoneType::Testing),
            milestone("Kickoff", 1, MilestoneType::Planning),
            milestone("Ship beta", 28, MilestoneType::Deployment),
            milestone("API spike", 10, MilestoneType::Development),
            milestone("beta review", 25, MilestoneType::Review),
        ]
    }

    fn indices(rows: &[(usize, &Milestone)]) -> Vec<usize> {
        rows.iter().map(|(i, _)| *i).collect()
    }

    #[test]
    fn test_default_sorts_by_date_ascending() {
        let milestones = list();
        let rows = MilestoneQuery::default().apply(&milestones);
        assert_eq!(indices(&rows), vec![1, 3, 0, 4, 2]);
    }

    #[test]
    fn test_filter_by_type_keeps_source_index() {
        let milestones = list();
        let query = MilestoneQuery {
            filter: MilestoneFilter::Only(MilestoneType::Deployment),
            ..Default::default()
        };
        let rows = query.apply(&milestones);
        assert_eq!(indices(&rows), vec![2]);
        assert_eq!(rows[0].1.description, "Ship beta");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let milestones = list();
        let query = MilestoneQuery {
            search: "BETA".into(),
            ..Default::default()
        };
        assert_eq!(indices(&query.apply(&milestones)), vec![4, 2]);
    }

    #[test]
    fn test_toggle_sort() {
        let mut query = MilestoneQuery::default();
        query.toggle_sort(SortField::Date);
        assert_eq!(query.direction, SortDirection::Desc);

        query.toggle_sort(SortField::Description);
        assert_eq!(query.sort_field, SortField::Description);
        assert_eq!(query.direction, SortDirection::Asc);

        let milestones = list();
        let names: Vec<&str> = query
            .apply(&milestones)
            .iter()
            .map(|(_, m)| m.description.as_str())
            .collect();
        assert_eq!(names, vec!["API spike", "beta review", "Kickoff", "Ship beta", "Write tests"]);
    }

    #[test]
    fn test_sort_by_type_descending() {
        let milestones = list();
        let mut query = MilestoneQuery::default();
        query.toggle_sort(SortField::Type);
        query.toggle_sort(SortField::Type);
        let kinds: Vec<&str> = query.apply(&milestones).iter().map(|(_, m)| m.kind.as_str()).collect();
        assert_eq!(kinds, vec!["testing", "review", "planning", "development", "deployment"]);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<MilestoneFilter>().unwrap(), MilestoneFilter::All);
        assert_eq!(
            "review".parse::<MilestoneFilter>().unwrap(),
            MilestoneFilter::Only(MilestoneType::Review)
        );
        assert!("later".parse::<MilestoneFilter>().is_err());
    }

    #[test]
    fn test_filter_select_values_parse_back() {
        let all = MilestoneFilter::All;
        assert_eq!(all.as_str().parse::<MilestoneFilter>().unwrap(), all);
        let testing = MilestoneFilter::Only(MilestoneType::Testing);
        assert_eq!(testing.as_str(), "testing");
        assert_eq!(testing.as_str().parse::<MilestoneFilter>().unwrap(), testing);
    }
}
