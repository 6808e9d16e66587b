use crate::{
    error::CourtSchedulerError,
    shared::{
        notification::{Notification, Notifier},
        usecase::{execute, UseCase},
    },
};
use court_scheduler_domain::{CourtScheduleForm, CourtSchedulePlan, ScheduleValidationError, ID};
use court_scheduler_infra::CourtContext;
use tracing::error;

/// Validates the court form and writes the result to the backend.
///
/// Every outcome is reported through `notifier` exactly once.
pub async fn submit_court_schedule_controller(
    court_id: ID,
    form: CourtScheduleForm,
    ctx: &CourtContext,
    notifier: &dyn Notifier,
) -> Result<CourtSchedulePlan, CourtSchedulerError> {
    let usecase = SubmitCourtScheduleUseCase { court_id, form };

    notifier.loading(true);
    let res = execute(usecase, ctx)
        .await
        .map(|res| res.plan)
        .map_err(CourtSchedulerError::from);
    notifier.loading(false);

    match &res {
        Ok(_) => notifier.notify(Notification::success("Court schedule updated.")),
        Err(e) => notifier.notify(Notification::error(e.to_string())),
    }
    res
}

#[derive(Debug)]
pub struct SubmitCourtScheduleUseCase {
    pub court_id: ID,
    pub form: CourtScheduleForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendWrite {
    Availability,
    Unavailability,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    Validation(ScheduleValidationError),
    /// The writes that did not go through. Writes are neither retried nor
    /// rolled back, so the others may have been persisted.
    BackendWrites(Vec<BackendWrite>),
}

impl From<UseCaseError> for CourtSchedulerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Validation(e) => Self::InvalidSchedule(e),
            UseCaseError::BackendWrites(_) => Self::UpdateFailed,
        }
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub plan: CourtSchedulePlan,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SubmitCourtScheduleUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseError;

    const NAME: &'static str = "SubmitCourtSchedule";

    async fn execute(&mut self, ctx: &CourtContext) -> Result<UseCaseRes, UseCaseError> {
        let now = ctx.sys.now_in(&ctx.config.timezone);
        let plan = self
            .form
            .build_plan(now)
            .map_err(UseCaseError::Validation)?;

        let availability = ctx
            .court_schedules
            .create_availability(&self.court_id, &plan.daily_slots);

        // Both writes are in flight at once and both run to completion
        let (availability_res, unavailability_res) = match &plan.off_day {
            Some(exception) => {
                let unavailability = ctx
                    .court_schedules
                    .create_unavailability(&self.court_id, exception);
                let (a, u) = futures::join!(availability, unavailability);
                (a, Some(u))
            }
            None => (availability.await, None),
        };

        let mut failed = vec![];
        if let Err(e) = availability_res {
            error!("Court availability for {} was not saved: {:?}", self.court_id, e);
            failed.push(BackendWrite::Availability);
        }
        if let Some(Err(e)) = unavailability_res {
            error!("Court off-day for {} was not saved: {:?}", self.court_id, e);
            failed.push(BackendWrite::Unavailability);
        }

        if !failed.is_empty() {
            return Err(UseCaseError::BackendWrites(failed));
        }
        Ok(UseCaseRes { plan })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::notification::{NotificationKind, RecordingNotifier};
    use court_scheduler_domain::{OffDayDates, OffDayForm, OffDayScope, Weekday};
    use court_scheduler_infra::{
        Config, CourtScheduleWrite, InMemoryCourtScheduleService, StaticTimeSys,
    };
    use std::sync::Arc;

    struct TestContext {
        ctx: CourtContext,
        service: Arc<InMemoryCourtScheduleService>,
        notifier: RecordingNotifier,
    }

    fn setup(service: InMemoryCourtScheduleService) -> TestContext {
        let service = Arc::new(service);
        let config = Config {
            api_address: "http://localhost".into(),
            api_token: None,
            timezone: chrono_tz::Europe::Oslo,
        };
        // 2026-10-18T12:30:00+02:00
        let sys = StaticTimeSys {
            timestamp_millis: 1792319400000,
        };
        TestContext {
            ctx: CourtContext::new(service.clone(), config, Arc::new(sys)),
            service,
            notifier: RecordingNotifier::default(),
        }
    }

    fn weekday_form() -> CourtScheduleForm {
        CourtScheduleForm {
            weekday_pattern: Some("mondayToFriday".into()),
            opening_time: Some("08:00".into()),
            closing_time: Some("20:00".into()),
            off_day: None,
        }
    }

    fn form_with_partial_off_day() -> CourtScheduleForm {
        CourtScheduleForm {
            off_day: Some(OffDayForm {
                enabled: true,
                dates: Some(OffDayDates {
                    from: chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
                    to: None,
                }),
                scope: OffDayScope::Partial,
                start_time: Some("09:00".into()),
                end_time: Some("11:00".into()),
            }),
            ..weekday_form()
        }
    }

    fn court_id() -> ID {
        "court1".parse().unwrap()
    }

    #[tokio::test]
    async fn submits_weekly_availability_only() {
        let TestContext {
            ctx,
            service,
            notifier,
        } = setup(InMemoryCourtScheduleService::new());

        let res =
            submit_court_schedule_controller(court_id(), weekday_form(), &ctx, &notifier).await;
        assert!(res.is_ok());

        let writes = service.writes();
        assert_eq!(writes.len(), 1);
        match &writes[0] {
            CourtScheduleWrite::Availability {
                court_id: id,
                daily_slots,
            } => {
                assert_eq!(id, &court_id());
                assert_eq!(
                    daily_slots.iter().map(|s| s.day).collect::<Vec<_>>(),
                    vec![
                        Weekday::Monday,
                        Weekday::Tuesday,
                        Weekday::Wednesday,
                        Weekday::Thursday,
                        Weekday::Friday
                    ]
                );
                for slot in daily_slots {
                    assert_eq!(slot.open_time.to_string(), "08:00");
                    assert_eq!(slot.close_time.to_string(), "20:00");
                }
            }
            other => panic!("Unexpected write: {:?}", other),
        }

        assert_eq!(
            notifier.notifications(),
            vec![Notification::success("Court schedule updated.")]
        );
        assert_eq!(notifier.loading_signals(), vec![true, false]);
    }

    #[tokio::test]
    async fn submits_availability_and_off_day() {
        let TestContext {
            ctx,
            service,
            notifier,
        } = setup(InMemoryCourtScheduleService::new());

        let plan = submit_court_schedule_controller(
            court_id(),
            form_with_partial_off_day(),
            &ctx,
            &notifier,
        )
        .await
        .unwrap();

        let writes = service.writes();
        assert_eq!(writes.len(), 2);
        let exception = writes
            .iter()
            .find_map(|w| match w {
                CourtScheduleWrite::Unavailability { exception, .. } => Some(exception.clone()),
                _ => None,
            })
            .expect("Expected an off-day write");
        assert_eq!(Some(exception.clone()), plan.off_day);
        assert_eq!(
            exception.start_datetime().to_rfc3339(),
            "2026-10-19T09:00:00+02:00"
        );
        assert_eq!(
            exception.end_datetime().to_rfc3339(),
            "2026-10-19T11:00:00+02:00"
        );
        assert_eq!(notifier.notifications().len(), 1);
        assert_eq!(
            notifier.notifications()[0].kind,
            NotificationKind::Success
        );
    }

    #[tokio::test]
    async fn reports_single_failure_when_availability_fails() {
        let TestContext {
            ctx,
            service,
            notifier,
        } = setup(InMemoryCourtScheduleService::new().failing_availability());

        let res = submit_court_schedule_controller(
            court_id(),
            form_with_partial_off_day(),
            &ctx,
            &notifier,
        )
        .await;

        assert_eq!(res, Err(CourtSchedulerError::UpdateFailed));
        // The off-day write is still issued and not rolled back
        assert_eq!(service.writes().len(), 2);
        assert_eq!(
            notifier.notifications(),
            vec![Notification::error("Update failed. Please try again.")]
        );
    }

    #[tokio::test]
    async fn reports_single_failure_when_off_day_fails() {
        let TestContext {
            ctx,
            service,
            notifier,
        } = setup(InMemoryCourtScheduleService::new().failing_unavailability());

        let res = submit_court_schedule_controller(
            court_id(),
            form_with_partial_off_day(),
            &ctx,
            &notifier,
        )
        .await;

        assert_eq!(res, Err(CourtSchedulerError::UpdateFailed));
        assert_eq!(service.writes().len(), 2);
        let notifications = notifier.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Error);
    }

    #[tokio::test]
    async fn reports_which_writes_failed() {
        let TestContext { ctx, .. } = setup(
            InMemoryCourtScheduleService::new()
                .failing_availability()
                .failing_unavailability(),
        );
        let usecase = SubmitCourtScheduleUseCase {
            court_id: court_id(),
            form: form_with_partial_off_day(),
        };

        let res = execute(usecase, &ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::BackendWrites(vec![
                BackendWrite::Availability,
                BackendWrite::Unavailability
            ])
        );
    }

    #[tokio::test]
    async fn does_not_write_invalid_schedules() {
        let TestContext {
            ctx,
            service,
            notifier,
        } = setup(InMemoryCourtScheduleService::new());
        let mut form = form_with_partial_off_day();
        if let Some(off_day) = form.off_day.as_mut() {
            off_day.start_time = Some("07:00".into());
        }

        let res = submit_court_schedule_controller(court_id(), form, &ctx, &notifier).await;

        assert!(matches!(
            res,
            Err(CourtSchedulerError::InvalidSchedule(
                ScheduleValidationError::OutsideOperatingHours { .. }
            ))
        ));
        assert!(service.writes().is_empty());
        assert_eq!(
            notifier.notifications(),
            vec![Notification::error("Off-day must fall within 08:00 and 20:00.")]
        );
    }

    #[tokio::test]
    async fn rejects_full_off_day_today() {
        let TestContext {
            ctx,
            service,
            notifier,
        } = setup(InMemoryCourtScheduleService::new());
        let form = CourtScheduleForm {
            off_day: Some(OffDayForm {
                enabled: true,
                dates: Some(OffDayDates {
                    from: chrono::NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
                    to: None,
                }),
                scope: OffDayScope::Full,
                start_time: None,
                end_time: None,
            }),
            ..weekday_form()
        };

        let res = submit_court_schedule_controller(court_id(), form, &ctx, &notifier).await;

        assert_eq!(
            res,
            Err(CourtSchedulerError::InvalidSchedule(
                ScheduleValidationError::FullOffDayTooSoon
            ))
        );
        assert!(service.writes().is_empty());
        assert_eq!(
            notifier.notifications()[0].message,
            "Full off-days must be scheduled at least one day in advance."
        );
    }
}
