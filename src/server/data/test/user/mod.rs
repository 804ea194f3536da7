use crate::server::{data::user::UserRepository, error::AppError, model::user::Role};
use test_utils::{builder::TestBuilder, factory};
