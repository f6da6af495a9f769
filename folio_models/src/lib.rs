pub mod email_address;
mod macros;
pub mod message;
