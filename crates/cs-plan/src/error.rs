use cs_core::CrewError;
use cs_timetable::TimetableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Core(#[from] CrewError),

    #[error(transparent)]
    Timetable(#[from] TimetableError),
}

pub type PlanResult<T> = Result<T, PlanError>;
