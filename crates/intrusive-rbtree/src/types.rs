//! Node linkage and the embedding trait.
//!
//! A record joins a tree by embedding an [`RbLink`] by value and
//! implementing [`RbNode`] for it. All "pointers" are `Option<u32>`
//! indices into the caller-owned arena (`[N]`), so the node handle and the
//! record handle are the same index: recovering the record from a node is
//! `&arena[idx as usize]`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Node color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    #[default]
    Red,
    Black,
}

impl Color {
    #[inline]
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    #[inline]
    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

/// Linkage fields embedded inside a caller record.
///
/// `parent` is a non-owning back reference; `left` and `right` describe the
/// subtree below this node. The tree engine is the only writer of these
/// fields while the node is linked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RbLink {
    pub(crate) parent: Option<u32>,
    pub(crate) left: Option<u32>,
    pub(crate) right: Option<u32>,
    pub(crate) color: Color,
    pub(crate) linked: bool,
}

impl RbLink {
    /// A fresh, unlinked node. Its color is meaningless until it is linked.
    pub const fn new() -> Self {
        Self {
            parent: None,
            left: None,
            right: None,
            color: Color::Red,
            linked: false,
        }
    }

    pub fn parent(&self) -> Option<u32> {
        self.parent
    }

    pub fn left(&self) -> Option<u32> {
        self.left
    }

    pub fn right(&self) -> Option<u32> {
        self.right
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the node currently belongs to a tree.
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Returns the link to the unlinked state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

/// A record that embeds an [`RbLink`].
///
/// The accessor methods mirror the `p` / `l` / `r` shape used throughout the
/// crate; only [`rb_link`](RbNode::rb_link) and
/// [`rb_link_mut`](RbNode::rb_link_mut) need implementing.
pub trait RbNode {
    fn rb_link(&self) -> &RbLink;
    fn rb_link_mut(&mut self) -> &mut RbLink;

    #[inline]
    fn p(&self) -> Option<u32> {
        self.rb_link().parent
    }

    #[inline]
    fn l(&self) -> Option<u32> {
        self.rb_link().left
    }

    #[inline]
    fn r(&self) -> Option<u32> {
        self.rb_link().right
    }

    #[inline]
    fn color(&self) -> Color {
        self.rb_link().color
    }

    #[inline]
    fn is_black(&self) -> bool {
        self.rb_link().color.is_black()
    }

    #[inline]
    fn is_linked(&self) -> bool {
        self.rb_link().linked
    }

    #[inline]
    fn set_p(&mut self, v: Option<u32>) {
        self.rb_link_mut().parent = v;
    }

    #[inline]
    fn set_l(&mut self, v: Option<u32>) {
        self.rb_link_mut().left = v;
    }

    #[inline]
    fn set_r(&mut self, v: Option<u32>) {
        self.rb_link_mut().right = v;
    }

    #[inline]
    fn set_color(&mut self, color: Color) {
        self.rb_link_mut().color = color;
    }
}

impl RbNode for RbLink {
    fn rb_link(&self) -> &RbLink {
        self
    }

    fn rb_link_mut(&mut self) -> &mut RbLink {
        self
    }
}

/// Implements [`RbNode`] for a record type by naming its embedded link field.
///
/// ```
/// use intrusive_rbtree::{impl_rb_node, RbLink};
///
/// struct Timer {
///     deadline: u64,
///     node: RbLink,
/// }
///
/// impl_rb_node!(Timer, node);
/// ```
#[macro_export]
macro_rules! impl_rb_node {
    ($record:ty, $field:ident) => {
        impl $crate::RbNode for $record {
            #[inline]
            fn rb_link(&self) -> &$crate::RbLink {
                &self.$field
            }

            #[inline]
            fn rb_link_mut(&mut self) -> &mut $crate::RbLink {
                &mut self.$field
            }
        }
    };
}
