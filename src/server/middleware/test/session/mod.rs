use crate::{
    model::api::FlashDto,
    server::{
        error::AppError,
        middleware::session::{AuthSession, FlashSession},
        model::user::{Role, SessionUser},
    },
};
use test_utils::builder::TestBuilder;

mod flash_session;
