use sea_orm::DatabaseConnection;

use crate::server::{
    data::{driver::DriverRepository, fleet::FleetRepository, report::ReportRepository},
    error::{auth::AuthError, validation::ValidationError, AppError},
    middleware::auth::Viewer,
    model::{
        driver::Driver,
        report::{DateRange, DriverPerformanceReport, FleetMonthlyReport, ReportMonth},
        scope::FleetScope,
    },
};

/// Drivers a viewer may pick for the performance report and the one shown.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverSelection {
    /// Empty for driver accounts, which only ever see themselves.
    pub choices: Vec<Driver>,
    pub selected: Option<Driver>,
}

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Monthly totals of a fleet visible in `scope`.
    ///
    /// # Returns
    /// - `Ok(FleetMonthlyReport)` - Report for the month
    /// - `Err(ValidationError::NotFound("Fleet"))` - Fleet missing or out of
    ///   scope
    pub async fn fleet_monthly(
        &self,
        scope: FleetScope,
        fleet_id: i32,
        month: ReportMonth,
    ) -> Result<FleetMonthlyReport, AppError> {
        if !scope.permits(fleet_id) {
            return Err(ValidationError::NotFound("Fleet").into());
        }
        let Some(fleet) = FleetRepository::new(self.db).find_by_id(fleet_id).await? else {
            return Err(ValidationError::NotFound("Fleet").into());
        };

        ReportRepository::new(self.db).fleet_monthly(fleet, month).await
    }

    /// Decides whose performance the viewer sees.
    ///
    /// Drivers always get their own record whatever was requested. Managers
    /// pick from their fleet and default to the first driver by name; asking
    /// for a driver of another fleet is refused.
    ///
    /// # Returns
    /// - `Ok(DriverSelection)` - Choices and the selected driver, if any
    /// - `Err(AuthError::AccessDenied)` - A manager requested a driver outside
    ///   their fleet
    pub async fn select_driver(
        &self,
        viewer: &Viewer,
        requested: Option<i32>,
    ) -> Result<DriverSelection, AppError> {
        let repo = DriverRepository::new(self.db);

        if let Viewer::Driver { driver_id, .. } = viewer {
            let Some(own) = repo.find_by_id(*driver_id).await? else {
                return Err(ValidationError::NotFound("Driver").into());
            };
            return Ok(DriverSelection {
                choices: Vec::new(),
                selected: Some(own),
            });
        }

        let choices = repo.get_all(viewer.scope()).await?;
        let selected = match requested {
            Some(driver_id) => match choices.iter().find(|d| d.id == driver_id) {
                Some(driver) => Some(driver.clone()),
                None => match viewer.user_id() {
                    Some(user_id) => {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("driver {} is outside the viewer's fleet", driver_id),
                        )
                        .into());
                    }
                    None => return Err(ValidationError::NotFound("Driver").into()),
                },
            },
            None => choices.first().cloned(),
        };

        Ok(DriverSelection { choices, selected })
    }

    pub async fn driver_performance(
        &self,
        driver: Driver,
        range: DateRange,
    ) -> Result<DriverPerformanceReport, AppError> {
        ReportRepository::new(self.db)
            .driver_performance(driver, range)
            .await
    }
}
