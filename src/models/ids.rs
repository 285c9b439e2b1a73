//! Typed identifiers for the dataset records
//!
//! Each record kind gets its own uuid newtype so a goal id can't be passed
//! where a budget id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// A fixed id, for the demo dataset and tests
            pub const fn from_u128(value: u128) -> Self {
                Self(Uuid::from_u128(value))
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        /// Short form for messages, e.g. `goal-550e8400`
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let simple = self.0.simple().to_string();
                write!(f, "{}-{}", $label, &simple[..8])
            }
        }

        /// Only the full uuid form parses; the short display form is ambiguous
        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim()).map(Self)
            }
        }
    };
}

define_id!(TransactionId, "txn");
define_id!(CategoryId, "cat");
define_id!(BudgetId, "bud");
define_id!(GoalId, "goal");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_display() {
        let id = GoalId::from_u128(0x550e8400_e29b_41d4_a716_446655440000);
        assert_eq!(id.to_string(), "goal-550e8400");
    }

    #[test]
    fn test_fixed_ids_are_stable() {
        assert_eq!(CategoryId::from_u128(7), CategoryId::from_u128(7));
        assert_ne!(CategoryId::from_u128(7), CategoryId::from_u128(8));
        assert_ne!(CategoryId::new(), CategoryId::new());
    }

    #[test]
    fn test_serializes_as_plain_uuid() {
        let id = BudgetId::from_u128(1);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000001\"");
        assert_eq!(serde_json::from_str::<BudgetId>(&json).unwrap(), id);
    }

    #[test]
    fn test_parse_requires_full_uuid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: TransactionId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
        assert!("txn-550e8400".parse::<TransactionId>().is_err());
    }
}
