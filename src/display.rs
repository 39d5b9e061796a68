//! ASCII tree rendering for debugging
//!
//! [`TreeDisplay`] draws the live items of a heap as a binary tree. Each label
//! is `(priority,payload)`, padded with dots so it spans the gap between its
//! subtrees, with a `/ \` connector line underneath. The layout is meant for
//! eyeballing small heaps and is not stable output.
//!
//! ```rust
//! use rust_binary_heaps::PriorityQueue;
//! use rust_binary_heaps::binary::BinaryHeap;
//!
//! let mut heap: BinaryHeap<&str, i32> = BinaryHeap::new();
//! heap.push(8, "a").unwrap();
//! heap.push(29, "b").unwrap();
//! println!("{}", heap.tree());
//! ```

use std::fmt;

use crate::item::HeapItem;
use crate::raw::{left, right};

/// Renders a heap slice as an ASCII tree
pub struct TreeDisplay<'a, P, T> {
    items: &'a [HeapItem<P, T>],
}

/// A rendered subtree: its lines, the column of its root label's center, and
/// its total width
struct Block {
    lines: Vec<String>,
    pos: usize,
    width: usize,
}

impl Block {
    fn empty() -> Self {
        Self {
            lines: Vec::new(),
            pos: 0,
            width: 0,
        }
    }
}

impl<'a, P, T> TreeDisplay<'a, P, T> {
    /// Wraps a slice laid out in heap order
    pub fn new(items: &'a [HeapItem<P, T>]) -> Self {
        Self { items }
    }
}

impl<P: fmt::Display, T: fmt::Display> TreeDisplay<'_, P, T> {
    fn block(&self, index: usize) -> Block {
        if index >= self.items.len() {
            return Block::empty();
        }

        let label = self.items[index].to_string();
        let label_len = label.chars().count();
        let mut lhs = self.block(left(index));
        let mut rhs = self.block(right(index));

        let middle = (rhs.pos + lhs.width + 1)
            .saturating_sub(lhs.pos)
            .max(label_len)
            .max(2);
        let pos = lhs.pos + middle / 2;
        let width = lhs.pos + middle + rhs.width - rhs.pos;

        let rows = lhs.lines.len().max(rhs.lines.len());
        lhs.lines.resize(rows, " ".repeat(lhs.width));
        rhs.lines.resize(rows, " ".repeat(rhs.width));

        let label = dotted(&label, middle - label_len);

        let indent = " ".repeat(lhs.pos);
        let tail = " ".repeat(rhs.width - rhs.pos);
        let gap = " ".repeat(width - lhs.width - rhs.width);

        let mut lines = Vec::with_capacity(rows + 2);
        lines.push(format!("{indent}{label}{tail}"));
        lines.push(format!("{indent}/{}\\{tail}", " ".repeat(middle - 2)));
        lines.extend(
            lhs.lines
                .iter()
                .zip(&rhs.lines)
                .map(|(l, r)| format!("{l}{gap}{r}")),
        );

        Block { lines, pos, width }
    }
}

/// Centers `label` in `padding` extra dots, blanking the outermost dot on
/// each side. An odd spare column goes after the label.
fn dotted(label: &str, padding: usize) -> String {
    let before = padding / 2;
    let after = padding - before;
    let mut out = String::with_capacity(label.len() + padding);
    for i in 0..before {
        out.push(if i == 0 { ' ' } else { '.' });
    }
    out.push_str(label);
    for i in 0..after {
        out.push(if i + 1 == after { ' ' } else { '.' });
    }
    out
}

impl<P: fmt::Display, T: fmt::Display> fmt::Display for TreeDisplay<'_, P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let block = self.block(0);
        for (i, line) in block.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(i32, &'static str)]) -> Vec<HeapItem<i32, &'static str>> {
        pairs.iter().map(|&(p, t)| HeapItem::new(p, t)).collect()
    }

    #[test]
    fn test_empty() {
        let data: Vec<HeapItem<i32, &str>> = Vec::new();
        assert_eq!(TreeDisplay::new(&data).to_string(), "");
    }

    #[test]
    fn test_single_item() {
        let data = items(&[(8, "a")]);
        assert_eq!(TreeDisplay::new(&data).to_string(), "(8,a)\n/   \\");
    }

    #[test]
    fn test_root_with_left_child() {
        let data = items(&[(8, "a"), (29, "b")]);
        let expected = "   (8,a)\n   /   \\\n(29,b)\n/    \\";
        assert_eq!(TreeDisplay::new(&data).to_string(), expected);
    }

    #[test]
    fn test_every_label_is_drawn() {
        let data = items(&[(1, "a"), (2, "b"), (3, "c"), (4, "d"), (5, "e")]);
        let rendered = TreeDisplay::new(&data).to_string();
        for label in ["(1,a)", "(2,b)", "(3,c)", "(4,d)", "(5,e)"] {
            assert!(rendered.contains(label), "missing {label} in\n{rendered}");
        }
        // Three levels, two lines each
        assert_eq!(rendered.lines().count(), 6);
    }

    #[test]
    fn test_single_spare_column_is_blank() {
        // (2,b) gets one spare column from its two leaf children
        let data = items(&[(1, "a"), (2, "b"), (3, "c"), (4, "d"), (5, "e")]);
        let rendered = TreeDisplay::new(&data).to_string();
        let row = rendered.lines().nth(2).unwrap_or_default();
        assert!(row.contains("(2,b) "), "unexpected row {row:?}");
        assert!(!rendered.contains("(2,b)."), "stray dot in\n{rendered}");
    }

    #[test]
    fn test_dotted_padding() {
        assert_eq!(dotted("x", 0), "x");
        assert_eq!(dotted("x", 1), "x ");
        assert_eq!(dotted("x", 2), " x ");
        assert_eq!(dotted("x", 5), " .x.. ");
    }
}
