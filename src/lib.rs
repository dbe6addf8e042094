mod config;
mod error;
mod queue;
pub mod timing;

// 重新导出数据结构供外部使用
pub use config::{ConfigError, HarnessConfig};
pub use error::{QueueError, Result};
pub use queue::{Iter, LinkedQueue};
