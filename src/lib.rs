pub mod commit;
pub mod configuration;
pub mod domain;
pub mod error;
pub mod startup;
pub mod task;
pub mod travis_client;

pub use commit::*;
pub use configuration::*;
pub use domain::*;
pub use error::*;
pub use startup::*;
pub use task::*;
pub use travis_client::*;
