//! 操作耗时测量
//!
//! 队列本身不依赖这里的任何东西；这个模块只是在外部调用队列的公开操作并计时。

use std::fmt::{self, Display};
use std::time::Instant;

use derive_new::new;
use tracing::info;

use crate::config::HarnessConfig;
use crate::queue::LinkedQueue;

const OPERATION_WIDTH: usize = 30;
const TIME_WIDTH: usize = 20;
const RULE_WIDTH: usize = 70;

/// 执行一次闭包，返回耗时（微秒）
pub fn measure_micros<F: FnOnce()>(f: F) -> f64 {
    let start = Instant::now();
    f();
    start.elapsed().as_secs_f64() * 1_000_000.0
}

/// 结果表中的一行
#[derive(Debug, Clone, PartialEq, new)]
pub struct ComplexityRow {
    pub operation: String,
    pub micros: f64,
    pub complexity: &'static str,
}

impl Display for ComplexityRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<ow$}{:<tw$}{}",
            self.operation,
            format!("{:.3}", self.micros),
            self.complexity,
            ow = OPERATION_WIDTH,
            tw = TIME_WIDTH,
        )
    }
}

pub fn table_header() -> String {
    format!(
        "{:<ow$}{:<tw$}{}\n{}",
        "Operation",
        "Execution Time (μs)",
        "Theoretical Complexity",
        "-".repeat(RULE_WIDTH),
        ow = OPERATION_WIDTH,
        tw = TIME_WIDTH,
    )
}

/// 依次测量 enqueue / dequeue / search / sort / merge
pub fn run_suite(config: &HarnessConfig) -> Vec<ComplexityRow> {
    let n = config.sample_size;
    let n_i32 = i32::try_from(n).unwrap_or(i32::MAX);
    info!(sample_size = n, "running timing suite");

    let mut rows = Vec::with_capacity(5);

    let mut queue = LinkedQueue::new();
    let micros = measure_micros(|| queue.enqueue(100));
    rows.push(ComplexityRow::new("Enqueue".into(), micros, "O(1)"));

    let micros = measure_micros(|| {
        let _ = queue.dequeue();
    });
    rows.push(ComplexityRow::new("Dequeue".into(), micros, "O(1)"));

    // 最坏情况：目标在队尾
    let search_queue: LinkedQueue = (0..n_i32).collect();
    let micros = measure_micros(|| {
        let _ = search_queue.search(n_i32 - 1);
    });
    rows.push(ComplexityRow::new(
        format!("Search ({} elements)", n),
        micros,
        "O(n)",
    ));

    // 降序输入
    let mut sort_queue: LinkedQueue = (1..=n_i32).rev().collect();
    let micros = measure_micros(|| sort_queue.sort());
    rows.push(ComplexityRow::new(
        format!("Sort ({} elements)", n),
        micros,
        "O(n²)",
    ));

    let mut merge_into = LinkedQueue::new();
    let mut merge_from: LinkedQueue = (0..n_i32).collect();
    let micros = measure_micros(|| merge_into.merge(&mut merge_from));
    rows.push(ComplexityRow::new(
        format!("Merge ({} elements)", n),
        micros,
        "O(m)",
    ));

    rows
}
