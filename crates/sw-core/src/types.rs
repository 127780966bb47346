//! Core type definitions with validation.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The alert threshold was outside (0, 1].
    #[error("budget threshold must be greater than 0.0 and at most 1.0, got {value}")]
    ThresholdOutOfRange { value: f64 },

    /// Invalid transaction kind value.
    #[error("invalid transaction kind: {value}")]
    InvalidTransactionKind { value: String },
}

/// Direction of money movement for a personal transaction.
///
/// Parsed through [`FromStr`](std::str::FromStr) so unknown kinds surface as
/// [`ValidationError::InvalidTransactionKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TransactionKind {
    /// Money coming in (income, refunds).
    Credit,
    /// Money going out. Only debits count as spend.
    Debit,
}

impl TransactionKind {
    /// String representation used in snapshots and output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for TransactionKind {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            _ => Err(ValidationError::InvalidTransactionKind {
                value: s.to_string(),
            }),
        }
    }
}

/// Generates a validated string ID newtype with common trait implementations.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new ID after validation.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(ValidationError::Empty { field: $field_name });
                }
                Ok(Self(id))
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id!(
    /// A validated group member identifier.
    ///
    /// Member IDs are opaque non-empty strings issued by the auth backend.
    MemberId, "member ID"
);

define_string_id!(
    /// A validated category identifier.
    ///
    /// Budgets are keyed by category ID; transactions refer to categories by name.
    CategoryId, "category ID"
);

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn member_id_rejects_empty() {
        assert!(MemberId::new("").is_err());
        assert!(MemberId::new("user-1").is_ok());
    }

    #[test]
    fn category_id_rejects_empty() {
        let err = CategoryId::new("").unwrap_err();
        assert_eq!(err.to_string(), "category ID cannot be empty");
    }

    #[test]
    fn member_id_serde_rejects_empty() {
        let result: Result<MemberId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn member_id_serializes_as_plain_string() {
        let id = MemberId::new("alice").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"alice\"");
    }

    #[test]
    fn member_id_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(MemberId::new("alice").unwrap(), 1);
        assert_eq!(map.get("alice"), Some(&1));
        assert_eq!(map.get("bob"), None);
    }

    #[test]
    fn transaction_kind_from_str() {
        assert_eq!(
            "credit".parse::<TransactionKind>().unwrap(),
            TransactionKind::Credit
        );
        assert_eq!(
            "debit".parse::<TransactionKind>().unwrap(),
            TransactionKind::Debit
        );
        let err = "refund".parse::<TransactionKind>().unwrap_err();
        assert_eq!(err.to_string(), "invalid transaction kind: refund");
    }

    #[test]
    fn transaction_kind_serde_uses_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Debit).unwrap();
        assert_eq!(json, "\"debit\"");
        let parsed: TransactionKind = serde_json::from_str("\"credit\"").unwrap();
        assert_eq!(parsed, TransactionKind::Credit);
    }

    #[test]
    fn transaction_kind_serde_reports_invalid_kind() {
        let err = serde_json::from_str::<TransactionKind>("\"refund\"").unwrap_err();
        assert!(err.to_string().contains("invalid transaction kind: refund"));
    }
}
