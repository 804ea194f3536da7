//! Aggregations behind the fleet and driver reports.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect};

use crate::server::{
    data::exception::ExceptionRepository,
    error::AppError,
    model::{
        driver::Driver,
        fleet::Fleet,
        report::{
            ActivityTotals, DateRange, DriverPerformanceReport, FleetMonthlyReport, ReportMonth,
        },
    },
};

pub struct ReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Totals for one fleet over a calendar month.
    ///
    /// Orders are counted by creation time and must be on one of the fleet's
    /// vehicles; exceptions are counted by occurrence time. Every order is
    /// counted whatever its status.
    pub async fn fleet_monthly(
        &self,
        fleet: Fleet,
        month: ReportMonth,
    ) -> Result<FleetMonthlyReport, AppError> {
        let (start, end) = (month.start(), month.end());
        let mut totals = ActivityTotals::default();

        let orders = entity::prelude::DeliveryOrder::find()
            .inner_join(entity::prelude::Vehicle)
            .filter(entity::vehicle::Column::FleetId.eq(fleet.id))
            .filter(entity::delivery_order::Column::CreatedAt.gte(start))
            .filter(entity::delivery_order::Column::CreatedAt.lt(end))
            .all(self.db)
            .await?;
        for order in orders {
            totals.add_order(order.weight, order.volume);
        }

        let exceptions = entity::prelude::VehicleException::find()
            .inner_join(entity::prelude::Vehicle)
            .filter(entity::vehicle::Column::FleetId.eq(fleet.id))
            .filter(entity::vehicle_exception::Column::OccurTime.gte(start))
            .filter(entity::vehicle_exception::Column::OccurTime.lt(end))
            .all(self.db)
            .await?;
        for exception in exceptions {
            totals.add_exception(exception.fine_amount, exception.processed);
        }

        Ok(FleetMonthlyReport {
            fleet,
            month,
            totals,
        })
    }

    /// Totals and exception list for one driver over an inclusive date
    /// range.
    pub async fn driver_performance(
        &self,
        driver: Driver,
        range: DateRange,
    ) -> Result<DriverPerformanceReport, AppError> {
        let (start, end) = (range.start_time(), range.end_time());
        let mut totals = ActivityTotals::default();

        let orders = entity::prelude::DeliveryOrder::find()
            .filter(entity::delivery_order::Column::DriverId.eq(driver.id))
            .filter(entity::delivery_order::Column::CreatedAt.gte(start))
            .filter(entity::delivery_order::Column::CreatedAt.lt(end))
            .all(self.db)
            .await?;
        for order in orders {
            totals.add_order(order.weight, order.volume);
        }

        let exceptions = ExceptionRepository::new(self.db)
            .get_for_driver_between(driver.id, start, end)
            .await?;
        for detail in &exceptions {
            totals.add_exception(detail.exception.fine_amount, detail.exception.processed);
        }

        Ok(DriverPerformanceReport {
            driver,
            range,
            totals,
            exceptions,
        })
    }
}
