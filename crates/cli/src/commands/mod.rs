pub mod deploy;
pub mod encode;
