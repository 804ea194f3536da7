use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

use crate::{
    model::report::{DriverPerformanceStatsDto, FleetMonthlyReportDto},
    server::{
        error::validation::ValidationError,
        model::{driver::Driver, exception::ExceptionDetail, fleet::Fleet},
        util::parse::{parse_date, parse_i32, present},
    },
};

const MIN_REPORT_YEAR: i32 = 2000;
const MAX_REPORT_YEAR: i32 = 2100;
/// Length of the default driver performance window, in days before today.
pub const DEFAULT_RANGE_DAYS: i64 = 30;

/// A calendar month in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportMonth {
    pub year: i32,
    pub month: u32,
}

impl ReportMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(MIN_REPORT_YEAR..=MAX_REPORT_YEAR).contains(&year) {
            return Err(ValidationError::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(ValidationError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Reads `year` and `month` query fields.
    ///
    /// # Returns
    /// - `Ok(None)` - Either field is blank, so no report was requested
    /// - `Ok(Some(month))` - Both fields are valid
    /// - `Err(ValidationError)` - A field is malformed or out of range
    pub fn from_query(
        year: Option<String>,
        month: Option<String>,
    ) -> Result<Option<Self>, ValidationError> {
        let (Some(year), Some(month)) = (present(year), present(month)) else {
            return Ok(None);
        };

        let year = parse_i32("year", &year)?;
        let month = parse_i32("month", &month)?;
        let month = u32::try_from(month).map_err(|_| ValidationError::MonthOutOfRange(0))?;

        Self::new(year, month).map(Some)
    }

    /// Start of the month, inclusive.
    pub fn start(&self) -> DateTime<Utc> {
        start_of_day(first_day(self.year, self.month))
    }

    /// Start of the following month, exclusive.
    pub fn end(&self) -> DateTime<Utc> {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        start_of_day(first_day(year, month))
    }
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// The last [`DEFAULT_RANGE_DAYS`] days ending on `today`.
    pub fn default_ending(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(DEFAULT_RANGE_DAYS),
            end: today,
        }
    }

    /// Reads `start_date` and `end_date`; a blank field takes its default.
    pub fn from_query(
        start: Option<String>,
        end: Option<String>,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let default = Self::default_ending(today);

        let start = match present(start) {
            Some(value) => parse_report_date("start_date", &value)?,
            None => default.start,
        };
        let end = match present(end) {
            Some(value) => parse_report_date("end_date", &value)?,
            None => default.end,
        };

        if start > end {
            return Err(ValidationError::DateRangeReversed);
        }

        Ok(Self { start, end })
    }

    /// Start of the first day, inclusive.
    pub fn start_time(&self) -> DateTime<Utc> {
        start_of_day(self.start)
    }

    /// Start of the day after the last day, exclusive.
    pub fn end_time(&self) -> DateTime<Utc> {
        match self.end.succ_opt() {
            Some(next) => start_of_day(next),
            None => DateTime::<Utc>::MAX_UTC,
        }
    }
}

/// Parses a report date, limited to the same years as [`ReportMonth`].
fn parse_report_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    let date = parse_date(field, value)?;
    if !(MIN_REPORT_YEAR..=MAX_REPORT_YEAR).contains(&date.year()) {
        return Err(ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        });
    }
    Ok(date)
}

fn first_day(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Order and exception totals, shared by both reports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivityTotals {
    pub order_count: u64,
    pub total_weight: f64,
    pub total_volume: f64,
    pub exception_count: u64,
    pub processed_exception_count: u64,
    pub total_fines: f64,
}

impl ActivityTotals {
    pub fn add_order(&mut self, weight: f64, volume: f64) {
        self.order_count += 1;
        self.total_weight += weight;
        self.total_volume += volume;
    }

    pub fn add_exception(&mut self, fine_amount: f64, processed: bool) {
        self.exception_count += 1;
        self.total_fines += fine_amount;
        if processed {
            self.processed_exception_count += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FleetMonthlyReport {
    pub fleet: Fleet,
    pub month: ReportMonth,
    pub totals: ActivityTotals,
}

impl FleetMonthlyReport {
    pub fn into_dto(self) -> FleetMonthlyReportDto {
        FleetMonthlyReportDto {
            fleet_id: self.fleet.id,
            fleet_name: self.fleet.name,
            year: self.month.year,
            month: self.month.month,
            order_count: self.totals.order_count,
            total_weight: self.totals.total_weight,
            total_volume: self.totals.total_volume,
            exception_count: self.totals.exception_count,
            processed_exception_count: self.totals.processed_exception_count,
            total_fines: self.totals.total_fines,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverPerformanceReport {
    pub driver: Driver,
    pub range: DateRange,
    pub totals: ActivityTotals,
    /// Newest first.
    pub exceptions: Vec<ExceptionDetail>,
}

impl DriverPerformanceReport {
    pub fn stats_dto(&self) -> DriverPerformanceStatsDto {
        DriverPerformanceStatsDto {
            driver_id: self.driver.id,
            driver_name: self.driver.name.clone(),
            employee_no: self.driver.employee_no.clone(),
            order_count: self.totals.order_count,
            total_weight: self.totals.total_weight,
            total_volume: self.totals.total_volume,
            exception_count: self.totals.exception_count,
            total_fines: self.totals.total_fines,
        }
    }
}
