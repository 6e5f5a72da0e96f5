//! Typed HPO term identifiers.
//!
//! The CLI accepts terms either on the form `HP:0001623` or as the bare
//! digits `0001623`; both normalize to the same `HpoTermId`. The `Display`
//! form is what goes on the wire: `HP:` plus seven zero-padded digits.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

/// A Human Phenotype Ontology term identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HpoTermId {
    inner: u32,
}

impl HpoTermId {
    pub fn to_u32(self) -> u32 {
        self.inner
    }
}

impl FromStr for HpoTermId {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("HP:").unwrap_or(s);
        digits
            .parse::<u32>()
            .map(|inner| HpoTermId { inner })
            .map_err(|_| ApiError::InvalidTerm(s.to_string()))
    }
}

impl From<u32> for HpoTermId {
    fn from(inner: u32) -> Self {
        Self { inner }
    }
}

impl fmt::Display for HpoTermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HP:{:07}", self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_digits_gain_the_hp_prefix() {
        let term: HpoTermId = "0001623".parse().unwrap();
        assert_eq!(term.to_string(), "HP:0001623");
    }

    #[test]
    fn prefixed_term_is_unchanged() {
        let term: HpoTermId = "HP:0001623".parse().unwrap();
        assert_eq!(term.to_string(), "HP:0001623");
    }

    #[test]
    fn short_ids_are_zero_padded() {
        assert_eq!(HpoTermId::from(252).to_string(), "HP:0000252");
    }

    #[test]
    fn non_numeric_term_is_rejected() {
        let err = "HP:ataxia".parse::<HpoTermId>().unwrap_err();
        assert_eq!(err, ApiError::InvalidTerm("HP:ataxia".to_string()));
    }

    #[test]
    fn foreign_prefix_is_rejected() {
        assert!("MP:0001623".parse::<HpoTermId>().is_err());
    }

    #[test]
    fn equal_ids_compare_equal_across_input_forms() {
        let bare: HpoTermId = "0002497".parse().unwrap();
        let prefixed: HpoTermId = "HP:0002497".parse().unwrap();
        assert_eq!(bare, prefixed);
    }
}
