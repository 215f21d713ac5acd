use crate::root::RbRoot;
use crate::types::RbNode;

/// Debug printer for red-black trees.
///
/// `label` renders the caller's part of a record; the printer adds the
/// index and color.
pub fn print<N, F>(arena: &[N], root: &RbRoot, label: F) -> String
where
    N: RbNode,
    F: Fn(&N) -> String,
{
    print_node(arena, root.node(), "", &label)
}

fn print_node<N, F>(arena: &[N], node: Option<u32>, tab: &str, label: &F) -> String
where
    N: RbNode,
    F: Fn(&N) -> String,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let color = if n.is_black() { "black" } else { "red" };
            let child_tab = format!("{tab}  ");
            let left = print_node(arena, n.l(), &child_tab, label);
            let right = print_node(arena, n.r(), &child_tab, label);
            format!(
                "Node[{i}] {color} {{ {} }}\n{tab}L={left}\n{tab}R={right}",
                label(n)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::red_black::{insert_fixup, link_node, Slot};
    use crate::types::RbLink;

    #[test]
    fn prints_colors_and_labels() {
        let mut arena = vec![RbLink::new(); 2];
        let mut root = RbRoot::new();
        link_node(&mut arena, &mut root, 0, Slot::Root);
        insert_fixup(&mut arena, &mut root, 0);
        link_node(&mut arena, &mut root, 1, Slot::Left(0));
        insert_fixup(&mut arena, &mut root, 1);

        let out = print(&arena, &root, |_| "x".to_string());
        assert_eq!(
            out,
            "Node[0] black { x }\nL=Node[1] red { x }\n  L=∅\n  R=∅\nR=∅"
        );
        assert_eq!(print(&arena, &RbRoot::new(), |_| String::new()), "∅");
    }
}
