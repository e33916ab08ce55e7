pub mod code;
pub mod error;
pub mod resolver;
pub mod store;

pub use code::{DescriptionMap, StatusClass, StatusCode};
pub use error::{Result, StatusError};
pub use resolver::{BaselineSource, Descriptions, Origin, Resolved};
pub use store::{Store, default_config_dir};
