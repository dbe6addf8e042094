//! 计时程序的配置

use std::env;

use derive_new::new;
use thiserror::Error;

pub const SAMPLE_SIZE_ENV: &str = "LINKED_QUEUE_SAMPLE_SIZE";
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid sample size {0:?}: expected a positive integer")]
    InvalidSampleSize(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct HarnessConfig {
    /// 查找、排序、合并测量所用的元素个数
    pub sample_size: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZE)
    }
}

impl HarnessConfig {
    /// 读取环境变量，未设置时使用默认值
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(env::var(SAMPLE_SIZE_ENV).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = value else {
            return Ok(Self::default());
        };

        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(Self::new(n)),
            _ => Err(ConfigError::InvalidSampleSize(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(HarnessConfig::from_value(None), Ok(HarnessConfig::new(1000)));
    }

    #[test]
    fn test_override() {
        assert_eq!(
            HarnessConfig::from_value(Some(" 250 ")),
            Ok(HarnessConfig::new(250))
        );
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            HarnessConfig::from_value(Some("0")),
            Err(ConfigError::InvalidSampleSize("0".into()))
        );
        assert!(HarnessConfig::from_value(Some("many")).is_err());
        assert!(HarnessConfig::from_value(Some("-3")).is_err());
    }
}
