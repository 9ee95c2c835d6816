pub mod etl;
pub mod pipeline;
pub mod reporter;
pub mod statistic;
pub mod transformer;
pub mod validator;

pub use crate::domain::model::{RawSources, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
