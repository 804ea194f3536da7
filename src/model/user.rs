use serde::{Deserialize, Serialize};

use crate::model::api::FlashDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionUserDto {
    pub user_id: i32,
    pub username: String,
    pub role: String,
    pub related_id: i32,
    pub fleet_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HomePageDto {
    pub flashes: Vec<FlashDto>,
    pub user: Option<SessionUserDto>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginPageDto {
    pub flashes: Vec<FlashDto>,
    pub next: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct LoginFormDto {
    pub username: Option<String>,
    pub password: Option<String>,
    pub next: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct NextQuery {
    pub next: Option<String>,
}
