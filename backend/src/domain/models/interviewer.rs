use serde::{Deserialize, Serialize};

/// Interviewer flattened out of the team → sub-team → member hierarchy.
/// `id` is the normalized email address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interviewer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub team: String,
    pub sub_team: String,
    pub available: bool,
}
