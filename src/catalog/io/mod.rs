pub mod envelope;
pub mod http;
