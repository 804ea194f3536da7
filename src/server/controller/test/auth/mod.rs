use axum::{
    extract::{Query, State},
    http::Uri,
    response::IntoResponse,
    Form,
};

use crate::{
    model::{
        api::FlashLevel,
        user::{LoginFormDto, LoginPageDto, NextQuery},
    },
    server::{
        controller::{
            auth::{login, login_page, logout},
            driver::get_drivers,
            test::{json_body, log_in, redirect_target, secured_state},
        },
        error::AppError,
        middleware::session::{AuthSession, FlashSession},
        model::user::Role,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod login;

fn form(username: &str, password: &str, next: Option<&str>) -> LoginFormDto {
    LoginFormDto {
        username: Some(username.to_string()),
        password: Some(password.to_string()),
        next: next.map(str::to_string),
    }
}
