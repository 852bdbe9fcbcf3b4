use crate::server::{data::planet::PlanetRepository, model::planet::CreatePlanetParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
