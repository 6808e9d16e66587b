mod submit_court_schedule;

pub use submit_court_schedule::{
    submit_court_schedule_controller, BackendWrite, SubmitCourtScheduleUseCase, UseCaseError,
};
