use cs_core::CrewError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("cannot build a timetable from an empty route list")]
    NoRoutes,

    #[error("route {0} has a zero drive duration")]
    ZeroDuration(String),

    #[error("route {0} appears more than once")]
    DuplicateRoute(String),

    #[error(transparent)]
    Core(#[from] CrewError),
}

pub type TimetableResult<T> = Result<T, TimetableError>;
