pub mod deployment;
pub mod kind;
pub mod params;

pub use deployment::*;
pub use kind::*;
pub use params::*;
