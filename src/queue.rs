//! 基于双向链表的队列实现
//!
//! 节点不再通过裸指针互相引用，而是全部存放在队列自有的 arena（`Vec<Node>`）中，
//! `next` / `prev` 保存的是槽位下标。出队释放的槽位进入空闲链表，下次入队时复用。
//!
//! # 内存布局
//! ```text
//! front                  rear
//!   |                     |
//!   v                     v
//! +----+    +----+    +----+
//! | #2 |--->| #0 |--->| #1 |      slots: [#0, #1, #2, #3]
//! |    |<---|    |<---|    |      free:  [#3]
//! +----+    +----+    +----+
//! ```
//!
//! # 不变式
//! - `front`、`rear` 同时为 `None` 当且仅当 `len == 0`
//! - 从 `front` 沿 `next` 走 `len - 1` 步到达 `rear`，沿 `prev` 反向同理
//! - `front.prev` 与 `rear.next` 恒为 `None`

use std::fmt::{self, Display};

use derive_new::new;
use tracing::{debug, trace, warn};

use crate::error::{QueueError, Result};

#[derive(Clone, Debug, new)]
struct Node {
    val: i32,
    #[new(default)]
    next: Option<usize>,
    #[new(default)]
    prev: Option<usize>,
}

/// 先进先出队列，额外提供查找、原地排序与合并
#[derive(Clone, Debug, Default, new)]
pub struct LinkedQueue {
    // 拥有全部节点
    #[new(default)]
    slots: Vec<Node>,
    // 已释放、可复用的槽位
    #[new(default)]
    free: Vec<usize>,
    #[new(default)]
    front: Option<usize>,
    #[new(default)]
    rear: Option<usize>,
    #[new(default)]
    len: usize,
}

impl LinkedQueue {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// arena 曾分配过的槽位数量（包含空闲槽位）
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn front(&self) -> Option<i32> {
        self.front.map(|idx| self.slots[idx].val)
    }

    pub fn rear(&self) -> Option<i32> {
        self.rear.map(|idx| self.slots[idx].val)
    }

    fn alloc(&mut self, val: i32) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Node::new(val);
                idx
            }
            None => {
                self.slots.push(Node::new(val));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> i32 {
        let node = &mut self.slots[idx];
        node.next = None;
        node.prev = None;
        self.free.push(idx);
        node.val
    }

    /// 入队到队尾，O(1)
    pub fn enqueue(&mut self, val: i32) {
        let idx = self.alloc(val);

        match self.rear {
            Some(rear) => {
                self.slots[rear].next = Some(idx);
                self.slots[idx].prev = Some(rear);
            }
            // 空队列
            None => self.front = Some(idx),
        }

        self.rear = Some(idx);
        self.len += 1;
        trace!(val, len = self.len, "enqueue");
    }

    /// 从队首出队，O(1)
    ///
    /// 空队列返回 [`QueueError::Underflow`]，队列保持不变。
    pub fn dequeue(&mut self) -> Result<i32> {
        let Some(front) = self.front else {
            warn!("dequeue on empty queue");
            return Err(QueueError::Underflow);
        };

        match self.slots[front].next {
            Some(next) => {
                self.slots[next].prev = None;
                self.front = Some(next);
            }
            // 最后一个节点，front == rear
            None => {
                self.front = None;
                self.rear = None;
            }
        }

        self.len -= 1;
        let val = self.release(front);
        trace!(val, len = self.len, "dequeue");
        Ok(val)
    }

    /// 线性查找，返回第一次出现的位置（从 0 开始，以队首为 0）
    pub fn search(&self, val: i32) -> Option<usize> {
        let position = self.iter().position(|v| v == val);
        match position {
            Some(position) => debug!(val, position, "element found"),
            None => debug!(val, "element not found"),
        }
        position
    }

    /// 冒泡排序，升序
    ///
    /// 只交换节点中的值，不改动链接；相等元素不交换，因此排序是稳定的。
    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }

        // 本轮扫描的右边界，之后的节点已就位
        let mut last: Option<usize> = None;
        let mut passes = 0usize;

        loop {
            let Some(mut cur) = self.front else { return };
            let mut swapped = false;

            while self.slots[cur].next != last {
                let Some(next) = self.slots[cur].next else { break };
                if self.slots[cur].val > self.slots[next].val {
                    let tmp = self.slots[cur].val;
                    self.slots[cur].val = self.slots[next].val;
                    self.slots[next].val = tmp;
                    swapped = true;
                }
                cur = next;
            }

            last = Some(cur);
            passes += 1;
            if !swapped {
                break;
            }
        }

        debug!(len = self.len, passes, "sorted");
    }

    /// 把 `other` 中的值按顺序追加到队尾，随后清空 `other`
    ///
    /// 两个参数是互不重叠的可变借用，同一个队列无法合并进自身。
    pub fn merge(&mut self, other: &mut LinkedQueue) {
        if other.is_empty() {
            return;
        }

        let moved = other.len();
        for val in other.iter() {
            self.enqueue(val);
        }
        other.clear();

        debug!(moved, len = self.len, "merged");
    }

    /// 逐个出队直至为空
    pub fn clear(&mut self) {
        while !self.is_empty() {
            let _ = self.dequeue();
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: &self.slots,
            head: self.front,
            tail: self.rear,
            remaining: self.len,
        }
    }
}

/// 从队首到队尾的只读遍历
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    slots: &'a [Node],
    head: Option<usize>,
    tail: Option<usize>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.slots[self.head?];
        self.head = node.next;
        self.remaining -= 1;
        Some(node.val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.slots[self.tail?];
        self.tail = node.prev;
        self.remaining -= 1;
        Some(node.val)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a LinkedQueue {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<i32> for LinkedQueue {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut queue = LinkedQueue::new();
        queue.extend(iter);
        queue
    }
}

impl Extend<i32> for LinkedQueue {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for val in iter {
            self.enqueue(val);
        }
    }
}

// 只比较内容，不比较 arena 布局
impl PartialEq for LinkedQueue {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedQueue {}

impl Display for LinkedQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue [")?;

        let mut iter = self.iter().peekable();
        while let Some(val) = iter.next() {
            write!(f, "{}", val)?;
            if iter.peek().is_some() {
                write!(f, " <- ")?;
            }
        }

        write!(f, "]")
    }
}
