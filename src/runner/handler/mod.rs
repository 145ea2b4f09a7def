pub mod mkdir;
pub mod touch;
pub mod rm;
pub mod put;
