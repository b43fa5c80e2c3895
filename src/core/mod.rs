pub mod forecast;

pub use crate::domain::ports::ConfigProvider;
