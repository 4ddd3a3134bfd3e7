use serde::{Serialize, Deserialize};

pub type CandidateId = i64;
pub type VoterId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vote {
    pub candidate_id: CandidateId,
    pub voter_id: VoterId,
}

/// One row of `/api/results`, keyed by candidate name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TallyEntry {
    pub candidate: String,
    pub votes: u64,
}

/// One row of `/api/results/by-candidate`, keyed by the registered candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateTally {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
    pub votes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn welcome() -> Self {
        Self::new("Welcome to the Online Election Microservice!")
    }

    pub fn candidate_registered(candidate: &Candidate) -> Self {
        Self::new(format!("Candidate {} registered successfully!", candidate.name))
    }

    pub fn vote_submitted() -> Self {
        Self::new("Vote submitted successfully!")
    }
}

impl CandidateTally {
    pub(crate) fn first_vote(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name.clone(),
            party: candidate.party.clone(),
            votes: 1,
        }
    }
}
