pub mod form;
pub mod session;

pub use form::{ResourceForm, parse_resource_id};
pub use session::{Role, Session};
