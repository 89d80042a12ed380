pub mod common;
pub mod market;
pub mod question;
pub mod token;
