mod errors;
mod member_service;

pub use errors::{MemberApplicationError, Result};
pub use member_service::{ServiceDependencies, find_members, find_one, join};
