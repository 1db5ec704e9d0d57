//! Tree construction for a single block.
//!
//! The grammar only has opening tags. Each `<Entity: ...>` line therefore
//! nests under the entity opened just before it, and a block always becomes a
//! single chain below its synthetic root:
//!
//! ```text
//! <Entity: A>        root
//! <Entity: B>   =>    └── A
//! <Entity: C>              └── B
//!                               └── C
//! ```
//!
//! Descriptions and morphisms attach to the deepest open entity. Nesting is
//! never inferred from indentation.

use log::trace;

use emark_core::model::{Entity, Morphism};

use crate::line::{LineKind, classify_line};

/// Incremental builder for one block.
///
/// Open entities live on a stack that is only ever pushed. A freshly opened
/// entity is the only child its parent will ever receive within the block, so
/// the stack is folded into the chain in [`TreeBuilder::finish`].
#[derive(Debug)]
pub struct TreeBuilder {
    open: Vec<Entity>,
    has_current_morphism: bool,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            open: vec![Entity::root()],
            has_current_morphism: false,
        }
    }

    /// Feed one line of the block. Surrounding whitespace is ignored.
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.apply(classify_line(line));
    }

    /// Apply an already classified line.
    pub fn apply(&mut self, kind: LineKind<'_>) {
        match kind {
            LineKind::EntityOpen(name) => {
                self.open.push(Entity::new(name));
                self.has_current_morphism = false;
            }
            LineKind::Description(text) => self.current().set_description(text),
            LineKind::MorphismOpen(name) => {
                self.current().push_morphism(Morphism::new(name));
                self.has_current_morphism = true;
            }
            LineKind::Action(text) => {
                if !self.has_current_morphism {
                    trace!(action = text; "Dropping action without an open morphism");
                    return;
                }
                // The current morphism always belongs to the deepest entity.
                if let Some(morphism) = self.current().last_morphism_mut() {
                    morphism.push_action(text);
                }
            }
            LineKind::Unrecognized => {}
        }
    }

    /// Number of entities opened so far.
    pub fn depth(&self) -> usize {
        self.open.len() - 1
    }

    /// Finish the block and return its synthetic root.
    pub fn finish(self) -> Entity {
        self.open
            .into_iter()
            .rev()
            .reduce(|child, mut parent| {
                parent.push_child(child);
                parent
            })
            .unwrap_or_default()
    }

    fn current(&mut self) -> &mut Entity {
        let top = self.open.len() - 1;
        &mut self.open[top]
    }
}

/// Build the tree of one block.
///
/// # Examples
///
/// ```
/// use emark_parser::tree::build_tree;
///
/// let root = build_tree("<Entity: A>\n<Entity: B>");
/// let a = &root.children()[0];
/// assert_eq!(a.name(), "A");
/// assert_eq!(a.children()[0].name(), "B");
/// ```
pub fn build_tree(block: &str) -> Entity {
    let mut builder = TreeBuilder::new();
    for line in block.split('\n') {
        builder.push_line(line);
    }
    trace!(depth = builder.depth(); "Block tree built");
    builder.finish()
}
