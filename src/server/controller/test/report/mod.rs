use axum::{
    extract::{Query, State},
    http::Uri,
    response::IntoResponse,
};

use crate::{
    model::{
        api::FlashLevel,
        report::{
            DriverPerformancePageDto, DriverPerformanceQuery, FleetMonthlyPageDto,
            FleetMonthlyQuery,
        },
    },
    server::{
        controller::{
            report::{driver_performance, fleet_monthly, DRIVER_OUT_OF_FLEET_MESSAGE},
            test::{json_body, log_in, redirect_target, secured_state},
        },
        error::AppError,
        middleware::session::FlashSession,
        model::user::Role,
    },
};
use test_utils::{builder::TestBuilder, factory};
