pub mod cookie;
pub mod jwt;
pub mod parse;
pub mod password;
