mod group_members;
mod group_name;
mod message_format;

pub use group_members::{GroupMembers, MAX_MEMBERS, MIN_MEMBERS};
pub use group_name::GroupName;
pub use message_format::MessageFormat;
