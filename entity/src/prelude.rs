pub use crate::event::Entity as Event;
pub use crate::permitted_role::Entity as PermittedRole;
