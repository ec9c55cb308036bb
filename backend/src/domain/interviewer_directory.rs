//! Flattens the nested team → sub-team → member structure into a list of
//! interviewers keyed by email.
//!
//! Duplicate emails resolve last-write-wins: the later member's data
//! replaces the earlier record, which keeps its original position.

use shared::Team;
use std::collections::HashMap;
use tracing::warn;

use super::models::Interviewer;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterviewerDirectory {
    interviewers: Vec<Interviewer>,
}

impl InterviewerDirectory {
    pub fn flatten(teams: &[Team]) -> Self {
        let mut interviewers: Vec<Interviewer> = Vec::new();
        let mut index_by_id: HashMap<String, usize> = HashMap::new();

        for team in teams {
            for sub_team in &team.sub_teams {
                for member in &sub_team.members {
                    let id = normalize_email(&member.email);
                    if id.is_empty() {
                        warn!(
                            "Skipping member '{}' of {}/{} without an email",
                            member.name, team.name, sub_team.name
                        );
                        continue;
                    }

                    let interviewer = Interviewer {
                        id: id.clone(),
                        name: member.name.trim().to_string(),
                        email: member.email.trim().to_string(),
                        team: team.name.clone(),
                        sub_team: sub_team.name.clone(),
                        available: true,
                    };

                    match index_by_id.get(&id) {
                        Some(&index) => {
                            warn!(
                                "Duplicate interviewer email {}: '{}' replaces '{}'",
                                id, interviewer.name, interviewers[index].name
                            );
                            interviewers[index] = interviewer;
                        }
                        None => {
                            index_by_id.insert(id, interviewers.len());
                            interviewers.push(interviewer);
                        }
                    }
                }
            }
        }

        Self { interviewers }
    }

    pub fn all(&self) -> &[Interviewer] {
        &self.interviewers
    }

    /// Case-insensitive lookup by email
    pub fn find_by_email(&self, email: &str) -> Option<&Interviewer> {
        let id = normalize_email(email);
        self.interviewers.iter().find(|interviewer| interviewer.id == id)
    }

    pub fn available(&self) -> impl Iterator<Item = &Interviewer> {
        self.interviewers.iter().filter(|interviewer| interviewer.available)
    }

    pub fn len(&self) -> usize {
        self.interviewers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interviewers.is_empty()
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{SubTeam, TeamMember};

    fn member(name: &str, email: &str) -> TeamMember {
        TeamMember {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    fn teams() -> Vec<Team> {
        vec![
            Team {
                name: "Engineering".to_string(),
                sub_teams: vec![
                    SubTeam {
                        name: "Backend".to_string(),
                        members: vec![
                            member("Asha Rao", "asha@example.com"),
                            member("Ben Ito", "ben@example.com"),
                        ],
                    },
                    SubTeam {
                        name: "Frontend".to_string(),
                        members: vec![member("Chen Li", "chen@example.com")],
                    },
                ],
            },
            Team {
                name: "People".to_string(),
                sub_teams: vec![SubTeam {
                    name: "Recruiting".to_string(),
                    members: vec![member("Dana Fox", "dana@example.com")],
                }],
            },
        ]
    }

    #[test]
    fn test_flatten_keeps_hierarchy_order() {
        let directory = InterviewerDirectory::flatten(&teams());

        let names: Vec<&str> = directory.all().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Asha Rao", "Ben Ito", "Chen Li", "Dana Fox"]);

        let chen = directory.find_by_email("chen@example.com").unwrap();
        assert_eq!(chen.id, "chen@example.com");
        assert_eq!(chen.team, "Engineering");
        assert_eq!(chen.sub_team, "Frontend");
        assert!(chen.available);
        assert_eq!(directory.available().count(), 4);
    }

    #[test]
    fn test_duplicate_email_is_last_write_wins_in_place() {
        let mut teams = teams();
        teams[1].sub_teams[0]
            .members
            .push(member("Asha R. (Recruiting)", "ASHA@example.com "));

        let directory = InterviewerDirectory::flatten(&teams);

        assert_eq!(directory.len(), 4);
        assert_eq!(directory.all()[0].name, "Asha R. (Recruiting)");
        assert_eq!(directory.all()[0].sub_team, "Recruiting");
        assert_eq!(directory.all()[0].id, "asha@example.com");
    }

    #[test]
    fn test_members_without_email_are_skipped() {
        let teams = vec![Team {
            name: "Ops".to_string(),
            sub_teams: vec![SubTeam {
                name: "Infra".to_string(),
                members: vec![member("No Mail", "  "), member("Eve", "eve@example.com")],
            }],
        }];

        let directory = InterviewerDirectory::flatten(&teams);
        assert_eq!(directory.len(), 1);
        assert!(directory.find_by_email("EVE@example.com").is_some());
    }

    #[test]
    fn test_empty_directory() {
        let directory = InterviewerDirectory::flatten(&[]);
        assert!(directory.is_empty());
        assert!(directory.find_by_email("nobody@example.com").is_none());
    }
}
