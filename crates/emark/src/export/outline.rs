//! Plain-text tree view of a document.
//!
//! ```text
//! Entity: Gateway
//!     Description: Routes traffic
//!     ├── Morphism: forwards
//!     │   ├── validate token
//!   └── Entity: Service
//! ```

use emark_core::model::{Document, Entity};

use super::Exporter;

/// Renders documents as an indented tree, one line per item.
#[derive(Debug, Default, Clone, Copy)]
pub struct OutlineExporter;

impl Exporter for OutlineExporter {
    fn export(&self, document: &Document) -> String {
        let mut out = String::new();
        for entity in document.top_level() {
            write_entity(&mut out, entity, 0);
        }
        out
    }
}

/// Pre-order walk with an explicit stack; chains can be arbitrarily deep.
fn write_entity(out: &mut String, entity: &Entity, level: usize) {
    let mut pending = vec![(entity, level)];

    while let Some((entity, level)) = pending.pop() {
        let indent = "  ".repeat(level);
        let branch = if level > 0 { "└── " } else { "" };

        out.push_str(&format!("{indent}{branch}Entity: {}\n", entity.name()));
        if !entity.description().is_empty() {
            out.push_str(&format!("{indent}    Description: {}\n", entity.description()));
        }

        for morphism in entity.morphisms() {
            out.push_str(&format!("{indent}    ├── Morphism: {}\n", morphism.name()));
            for action in morphism.actions() {
                out.push_str(&format!("{indent}    │   ├── {action}\n"));
            }
        }

        pending.extend(
            entity
                .children()
                .iter()
                .rev()
                .map(|child| (child, level + 1)),
        );
    }
}

#[cfg(test)]
mod tests {
    use emark_core::model::Morphism;

    use super::*;

    #[test]
    fn test_outline_layout() {
        let gateway = Entity::new("Gateway")
            .with_description("Routes traffic")
            .with_morphism(Morphism::new("forwards").with_action("validate token"))
            .with_child(Entity::new("Service"));
        let document = Document::new(vec![Entity::root().with_child(gateway)]);

        let expected = "\
Entity: Gateway
    Description: Routes traffic
    ├── Morphism: forwards
    │   ├── validate token
  └── Entity: Service
";
        assert_eq!(OutlineExporter.export(&document), expected);
    }

    #[test]
    fn test_empty_description_omitted() {
        let document = Document::new(vec![Entity::root().with_child(Entity::new("Bare"))]);
        assert_eq!(OutlineExporter.export(&document), "Entity: Bare\n");
    }

    #[test]
    fn test_children_listed_in_order_after_subtree() {
        let parent = Entity::new("P")
            .with_child(Entity::new("A").with_child(Entity::new("A1")))
            .with_child(Entity::new("B"));
        let document = Document::new(vec![Entity::root().with_child(parent)]);

        let expected = "\
Entity: P
  └── Entity: A
    └── Entity: A1
  └── Entity: B
";
        assert_eq!(OutlineExporter.export(&document), expected);
    }

    #[test]
    fn test_deep_chain_outline() {
        let mut entity = Entity::new("E4999");
        for i in (0..4_999).rev() {
            entity = Entity::new(format!("E{i}")).with_child(entity);
        }
        let document = Document::new(vec![Entity::root().with_child(entity)]);
        let outline = OutlineExporter.export(&document);

        assert_eq!(outline.lines().count(), 5_000);
        let last = outline.lines().last().unwrap();
        assert_eq!(last, format!("{}└── Entity: E4999", "  ".repeat(4_999)));
    }

    #[test]
    fn test_blocks_follow_each_other() {
        let document = Document::new(vec![
            Entity::root().with_child(Entity::new("A")),
            Entity::root().with_child(Entity::new("B")),
        ]);
        assert_eq!(OutlineExporter.export(&document), "Entity: A\nEntity: B\n");
    }
}
