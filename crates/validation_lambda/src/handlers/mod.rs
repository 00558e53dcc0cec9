pub mod hello;
pub mod respond;
pub mod validate;
