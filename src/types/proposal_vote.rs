use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregate tallies of a DAO proposal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalVoteData {
    #[serde(
        rename = "tot-approved",
        deserialize_with = "crate::utils::balance::deserialize_reduced"
    )]
    pub tot_approved: f64,
    #[serde(
        rename = "tot-refused",
        deserialize_with = "crate::utils::balance::deserialize_reduced"
    )]
    pub tot_refused: f64,
}

impl ProposalVoteData {
    pub fn new(tot_approved: f64, tot_refused: f64) -> Self {
        Self {
            tot_approved,
            tot_refused,
        }
    }

    /// Sum of both tallies, with negative or non-finite tallies counted as zero
    pub fn total(&self) -> f64 {
        sanitize(self.tot_approved) + sanitize(self.tot_refused)
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// The choice recorded for the current account on a proposal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    #[default]
    Unset,
    Approved,
    Refused,
}

impl VoteChoice {
    /// Interpret an optional wire value; anything unrecognised is `Unset`
    pub fn from_optional(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or(VoteChoice::Unset)
    }

    pub fn is_recorded(&self) -> bool {
        !matches!(self, VoteChoice::Unset)
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteChoice::Unset => write!(f, "unset"),
            VoteChoice::Approved => write!(f, "approved"),
            VoteChoice::Refused => write!(f, "refused"),
        }
    }
}

impl FromStr for VoteChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "unset" => Ok(VoteChoice::Unset),
            "approved" => Ok(VoteChoice::Approved),
            "refused" => Ok(VoteChoice::Refused),
            _ => Err(format!(
                "Invalid vote choice '{}'. Valid options: approved, refused, unset",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_wire_keys() {
        let data: ProposalVoteData =
            serde_json::from_str(r#"{"tot-approved": 30, "tot-refused": {"decimal": "10.5"}}"#)
                .unwrap();
        assert_eq!(data.tot_approved, 30.0);
        assert_eq!(data.tot_refused, 10.5);
        assert_eq!(data.total(), 40.5);
    }

    #[test]
    fn test_vote_choice_from_optional() {
        assert_eq!(VoteChoice::from_optional(None), VoteChoice::Unset);
        assert_eq!(VoteChoice::from_optional(Some("")), VoteChoice::Unset);
        assert_eq!(VoteChoice::from_optional(Some("approved")), VoteChoice::Approved);
        assert_eq!(VoteChoice::from_optional(Some("REFUSED")), VoteChoice::Refused);
        assert_eq!(VoteChoice::from_optional(Some("maybe")), VoteChoice::Unset);
    }

    #[test]
    fn test_vote_choice_serde() {
        let json = serde_json::to_string(&VoteChoice::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
        assert!(!VoteChoice::Unset.is_recorded());
        assert!(VoteChoice::Refused.is_recorded());
    }
}
