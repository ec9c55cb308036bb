use shared::InterviewerDto;

use crate::domain::date_utils;
use crate::domain::models::Interviewer;

pub struct InterviewerMapper;

impl InterviewerMapper {
    pub fn to_dto(interviewer: &Interviewer) -> InterviewerDto {
        InterviewerDto {
            id: interviewer.id.clone(),
            name: interviewer.name.clone(),
            email: interviewer.email.clone(),
            team: interviewer.team.clone(),
            sub_team: interviewer.sub_team.clone(),
            initials: date_utils::initials(&interviewer.name),
            available: interviewer.available,
        }
    }

    pub fn to_dto_list(interviewers: &[Interviewer]) -> Vec<InterviewerDto> {
        interviewers.iter().map(Self::to_dto).collect()
    }
}
