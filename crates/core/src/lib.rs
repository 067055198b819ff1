pub mod artifact;
pub mod deploy;
pub mod deployer;
pub mod deployments;
pub mod error;
pub mod types;

pub use artifact::*;
pub use deploy::*;
pub use deployer::*;
pub use deployments::*;
pub use error::*;
pub use types::*;
