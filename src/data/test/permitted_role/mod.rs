use crate::data::permitted_role::PermittedRoleRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_by_guild;
