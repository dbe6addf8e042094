//! 队列错误类型

use thiserror::Error;

/// 队列操作可能产生的错误
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// 在空队列上出队
    #[error("queue underflow: dequeue on an empty queue")]
    Underflow,
}

pub type Result<T> = std::result::Result<T, QueueError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_underflow_message() {
        assert_eq!(
            QueueError::Underflow.to_string(),
            "queue underflow: dequeue on an empty queue"
        );
    }
}
