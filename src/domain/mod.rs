mod branch_name;
mod commit_id;
mod message_template;
mod project_slug;
mod trigger_request;

pub use branch_name::*;
pub use commit_id::*;
pub use message_template::*;
pub use project_slug::*;
pub use trigger_request::*;
