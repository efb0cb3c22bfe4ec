pub mod endpoints;
pub mod invoke;
