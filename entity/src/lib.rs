pub mod event;
pub mod permitted_role;
pub mod prelude;
