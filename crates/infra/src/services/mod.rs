mod court_schedule;

pub use court_schedule::{
    CourtScheduleWrite, HttpCourtScheduleService, ICourtScheduleService,
    InMemoryCourtScheduleService,
};
