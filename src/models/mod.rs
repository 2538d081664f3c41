pub mod responses;
pub mod volumes;
