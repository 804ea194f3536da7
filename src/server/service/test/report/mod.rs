use crate::server::{
    error::{auth::AuthError, validation::ValidationError, AppError},
    middleware::auth::Viewer,
    model::{report::ReportMonth, scope::FleetScope},
    service::report::ReportService,
};
use test_utils::{builder::TestBuilder, factory};

mod fleet_monthly;
