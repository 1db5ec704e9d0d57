//! Parsed tree types for Entity Markup documents.
//!
//! A [`Document`] holds one synthetic root [`Entity`] per block. Roots have an
//! empty name and description and only serve as the anchor for the entities
//! declared in their block; renderers start from their children.
//!
//! Entities own their children exclusively. Because the grammar has no closing
//! tag, every block produces a single chain (`root -> e1 -> e2 -> ...`), but
//! the types themselves allow any number of children.
//!
//! Chains get as deep as the input has entity lines, so nothing here walks
//! the tree with recursion: counting and dropping use explicit work lists.

/// A named relation attached to an [`Entity`], with its ordered actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Morphism {
    name: String,
    actions: Vec<String>,
}

impl Morphism {
    /// Create a morphism with no actions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actions: Vec::new(),
        }
    }

    /// Append an action, keeping textual order.
    pub fn push_action(&mut self, action: impl Into<String>) {
        self.actions.push(action.into());
    }

    /// Builder-style variant of [`Morphism::push_action`].
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.push_action(action);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }
}

/// A named node of the parsed tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entity {
    name: String,
    description: String,
    morphisms: Vec<Morphism>,
    children: Vec<Entity>,
}

impl Entity {
    /// Create an entity with an empty description, no morphisms and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            morphisms: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create the synthetic root that anchors the entities of one block.
    pub fn root() -> Self {
        Self::default()
    }

    /// Replace the description. The last assignment wins.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Builder-style variant of [`Entity::set_description`].
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.set_description(description);
        self
    }

    /// Append a morphism and return a handle to it so actions can follow.
    pub fn push_morphism(&mut self, morphism: Morphism) -> &mut Morphism {
        self.morphisms.push(morphism);
        let last = self.morphisms.len() - 1;
        &mut self.morphisms[last]
    }

    /// Builder-style variant of [`Entity::push_morphism`].
    pub fn with_morphism(mut self, morphism: Morphism) -> Self {
        self.morphisms.push(morphism);
        self
    }

    /// Mutable access to the most recently added morphism.
    pub fn last_morphism_mut(&mut self) -> Option<&mut Morphism> {
        self.morphisms.last_mut()
    }

    /// Append a child entity.
    pub fn push_child(&mut self, child: Entity) {
        self.children.push(child);
    }

    /// Builder-style variant of [`Entity::push_child`].
    pub fn with_child(mut self, child: Entity) -> Self {
        self.push_child(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn morphisms(&self) -> &[Morphism] {
        &self.morphisms
    }

    pub fn children(&self) -> &[Entity] {
        &self.children
    }

    /// Number of entities in this subtree, excluding `self`.
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&Entity> = self.children.iter().collect();
        while let Some(entity) = pending.pop() {
            count += 1;
            pending.extend(entity.children.iter());
        }
        count
    }

    /// Length of the longest path below this entity.
    ///
    /// A leaf has depth 0; a block root holding the chain `A -> B -> C` has
    /// depth 3.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Entity, usize)> =
            self.children.iter().map(|child| (child, 1)).collect();
        while let Some((entity, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(entity.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

impl Drop for Entity {
    fn drop(&mut self) {
        // Detach every descendant first so each one drops with no children.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut entity) = pending.pop() {
            pending.append(&mut entity.children);
        }
    }
}

/// The parsed form of a whole input: one root per block, in block order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Entity>,
}

impl Document {
    pub fn new(blocks: Vec<Entity>) -> Self {
        Self { blocks }
    }

    /// The synthetic block roots.
    pub fn blocks(&self) -> &[Entity] {
        &self.blocks
    }

    /// The renderable top-level entities: every root's children, in block order.
    pub fn top_level(&self) -> impl Iterator<Item = &Entity> {
        self.blocks.iter().flat_map(|root| root.children().iter())
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Total number of entities across all blocks, roots excluded.
    pub fn entity_count(&self) -> usize {
        self.blocks.iter().map(Entity::descendant_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl From<Vec<Entity>> for Document {
    fn from(blocks: Vec<Entity>) -> Self {
        Self::new(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Entity {
        Entity::root().with_child(
            Entity::new("A").with_child(Entity::new("B").with_child(Entity::new("C"))),
        )
    }

    #[test]
    fn test_new_entity_is_empty() {
        let entity = Entity::new("Server");
        assert_eq!(entity.name(), "Server");
        assert_eq!(entity.description(), "");
        assert!(entity.morphisms().is_empty());
        assert!(entity.children().is_empty());
    }

    #[test]
    fn test_root_has_no_name() {
        let root = Entity::root();
        assert_eq!(root.name(), "");
        assert_eq!(root.description(), "");
    }

    #[test]
    fn test_description_last_assignment_wins() {
        let mut entity = Entity::new("X");
        entity.set_description("first");
        entity.set_description("second");
        assert_eq!(entity.description(), "second");
    }

    #[test]
    fn test_push_morphism_returns_handle() {
        let mut entity = Entity::new("X");
        entity.push_morphism(Morphism::new("m")).push_action("a1");
        entity.last_morphism_mut().unwrap().push_action("a2");

        assert_eq!(entity.morphisms().len(), 1);
        assert_eq!(entity.morphisms()[0].name(), "m");
        assert_eq!(entity.morphisms()[0].actions(), ["a1", "a2"]);
    }

    #[test]
    fn test_descendant_count_and_depth() {
        let root = chain();
        assert_eq!(root.descendant_count(), 3);
        assert_eq!(root.depth(), 3);
        assert_eq!(Entity::new("leaf").depth(), 0);
    }

    #[test]
    fn test_document_top_level_skips_roots() {
        let second = Entity::root().with_child(Entity::new("D"));
        let document = Document::new(vec![chain(), second]);

        let names: Vec<_> = document.top_level().map(Entity::name).collect();
        assert_eq!(names, ["A", "D"]);
        assert_eq!(document.block_count(), 2);
        assert_eq!(document.entity_count(), 4);
        assert!(!document.is_empty());
    }

    /// `A0 -> A1 -> ... -> A{len - 1}`, built without recursion.
    fn deep_chain(len: usize) -> Entity {
        let mut entity = Entity::new(format!("A{}", len - 1));
        for i in (0..len - 1).rev() {
            entity = Entity::new(format!("A{i}")).with_child(entity);
        }
        entity
    }

    #[test]
    fn test_deep_chain_counts_and_drops() {
        let root = Entity::root().with_child(deep_chain(100_000));
        assert_eq!(root.descendant_count(), 100_000);
        assert_eq!(root.depth(), 100_000);
        drop(root);
    }

    #[test]
    fn test_depth_takes_longest_branch() {
        let root = Entity::new("R")
            .with_child(Entity::new("short"))
            .with_child(Entity::new("long").with_child(Entity::new("leaf")))
            .with_child(Entity::new("other"));
        assert_eq!(root.depth(), 2);
        assert_eq!(root.descendant_count(), 4);
    }

    #[test]
    fn test_empty_document() {
        let document = Document::default();
        assert!(document.is_empty());
        assert_eq!(document.top_level().count(), 0);
        assert_eq!(document.entity_count(), 0);
    }
}
