//! Text notation for a variation tree
//!
//! Moves read `X:5` (mark, 1-based cell). X moves carry the move number,
//! `1.X:5`; an O move that opens a line or follows a side line carries
//! `1...O:5`. A move that wins the game ends in `#`. Side lines follow the
//! main-line move they replace, in parentheses:
//!
//! ```text
//! 1.X:5 O:1 2.X:2 (2.X:4 O:9) 2...O:3
//! ```

use std::fmt;

use crate::board::Mark;

use super::node::NodeId;
use super::tree::VariationTree;

/// Render the whole tree from the root.
pub fn notation(tree: &VariationTree) -> String {
    tree.to_string()
}

impl fmt::Display for VariationTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.node(self.root());
        let Some(first) = root.main_child() else {
            return Ok(());
        };
        let offset = match root.state().to_move {
            Mark::X => 0,
            Mark::O => 1,
        };
        write_line(self, first, offset, f)
    }
}

/// Write the line starting at `start` and every side line below it.
/// `ply` counts half-moves as if X always moved first.
fn write_line(
    tree: &VariationTree,
    start: NodeId,
    mut ply: usize,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let mut node = Some(start);
    let mut numbered = true;

    while let Some(id) = node {
        if id != start {
            f.write_str(" ")?;
        }
        write_move(tree, id, ply, numbered, f)?;
        numbered = false;

        if let Some(parent) = tree.parent(id) {
            let siblings = tree.children(parent);
            // Side lines hang off the main-line move only
            if siblings.first() == Some(&id) {
                for &alt in &siblings[1..] {
                    f.write_str(" (")?;
                    write_line(tree, alt, ply, f)?;
                    f.write_str(")")?;
                    numbered = true;
                }
            }
        }

        node = tree.node(id).main_child();
        ply += 1;
    }
    Ok(())
}

fn write_move(
    tree: &VariationTree,
    id: NodeId,
    ply: usize,
    numbered: bool,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let node = tree.node(id);
    let (Some(mv), Some(mark)) = (node.mv(), node.mark()) else {
        return Ok(());
    };
    let number = ply / 2 + 1;
    match mark {
        Mark::X => write!(f, "{number}.")?,
        Mark::O if numbered => write!(f, "{number}...")?,
        Mark::O => {}
    }
    write!(f, "{}:{}", mark.to_char(), mv.cell + 1)?;
    if node.is_winning_move() {
        f.write_str("#")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Active, BoardState};
    use crate::rules::Rules;

    fn tree_from(lines: &[&str]) -> VariationTree {
        let mut tree = VariationTree::new(BoardState::new());
        for line in lines {
            tree.add_move_list(tree.root(), line).unwrap();
        }
        tree
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(notation(&tree_from(&[])), "");
    }

    #[test]
    fn test_main_line_pairs() {
        assert_eq!(notation(&tree_from(&["44"])), "1.X:5 O:5");
        assert_eq!(notation(&tree_from(&["401"])), "1.X:5 O:1 2.X:2");
    }

    #[test]
    fn test_side_line() {
        let tree = tree_from(&["4012", "4038"]);
        assert_eq!(tree.to_string(), "1.X:5 O:1 2.X:2 (2.X:4 O:9) 2...O:3");
    }

    #[test]
    fn test_side_line_on_o_move() {
        let tree = tree_from(&["40", "42"]);
        assert_eq!(notation(&tree), "1.X:5 O:1 (1...O:3)");
    }

    #[test]
    fn test_nested_side_lines() {
        let tree = tree_from(&["401", "403", "4035"]);
        // The second line shares "40"; the third extends it
        assert_eq!(notation(&tree), "1.X:5 O:1 2.X:2 (2.X:4 O:6)");

        let tree = tree_from(&["40", "8", "82", "87"]);
        assert_eq!(notation(&tree), "1.X:5 (1.X:9 O:3 (1...O:8)) 1...O:1");
    }

    #[test]
    fn test_winning_move_marked() {
        // X:4/0 O:0/4 X:4/1 O:1/4 X:4/2
        let tree = tree_from(&["04142"]);
        assert_eq!(notation(&tree), "1.X:1 O:5 2.X:2 O:5 3.X:3#");
    }

    #[test]
    fn test_display_writes_through_formatter() {
        use std::fmt::Write;

        let tree = tree_from(&["4012", "4038", "42"]);
        let mut out = String::from(">");
        write!(out, "{tree}").unwrap();
        assert_eq!(out, format!(">{}", notation(&tree)));
        assert_eq!(
            notation(&tree),
            "1.X:5 O:1 (1...O:3) 2.X:2 (2.X:4 O:9) 2...O:3"
        );
    }

    #[test]
    fn test_o_to_move_at_root() {
        let base = BoardState::empty(Mark::O, Active::Board(4));
        let tree = VariationTree::from_move_list(base, "40", Rules::default()).unwrap();
        assert_eq!(notation(&tree), "1...O:5 2.X:1");
    }
}
