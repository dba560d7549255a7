//! Enumerated Feature Fields
//!
//! Closed value sets used by features and milestones. Each serializes as
//! its lowercase name and round-trips through `as_str` / `FromStr`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entity::DomainError;

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    other => Err(DomainError::InvalidInput(format!("unknown {} '{}'", $what, other))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

field_enum! {
    /// Feature priority
    Priority, "priority" {
        High => "high",
        #[default]
        Medium => "medium",
        Low => "low",
    }
}

field_enum! {
    /// Relative size estimate
    TShirtSize, "t-shirt size" {
        Xs => "xs",
        S => "s",
        #[default]
        M => "m",
        L => "l",
        Xl => "xl",
    }
}

field_enum! {
    /// Level of effort
    EffortLevel, "effort level" {
        Low => "low",
        #[default]
        Medium => "medium",
        High => "high",
    }
}

field_enum! {
    /// Milestone category
    MilestoneType, "milestone type" {
        #[default]
        Planning => "planning",
        Development => "development",
        Testing => "testing",
        Deployment => "deployment",
        Review => "review",
    }
}

impl TShirtSize {
    /// Upper-case label shown in selectors ("XS", "M", ...)
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("xl".parse::<TShirtSize>().unwrap(), TShirtSize::Xl);
        assert_eq!(MilestoneType::Deployment.to_string(), "deployment");
        assert_eq!(TShirtSize::Xs.label(), "XS");
    }

    #[test]
    fn test_unknown_value_is_invalid_input() {
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err, DomainError::InvalidInput("unknown priority 'urgent'".into()));
        assert!("High".parse::<Priority>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&EffortLevel::High).unwrap(), "\"high\"");
        let size: TShirtSize = serde_json::from_str("\"s\"").unwrap();
        assert_eq!(size, TShirtSize::S);
        assert!(serde_json::from_str::<MilestoneType>("\"shipping\"").is_err());
    }

    #[test]
    fn test_defaults_match_new_feature_form() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(TShirtSize::default(), TShirtSize::M);
        assert_eq!(EffortLevel::default(), EffortLevel::Medium);
        assert_eq!(MilestoneType::default(), MilestoneType::Planning);
    }

    #[test]
    fn test_all_lists_declaration_order() {
        assert_eq!(Priority::ALL, &[Priority::High, Priority::Medium, Priority::Low]);
        assert_eq!(MilestoneType::ALL.len(), 5);
    }
}
