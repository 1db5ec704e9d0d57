//! HTML fragment serializer.
//!
//! Each entity becomes an `entity-card` container tagged with its depth:
//!
//! ```text
//! <div class="entity-card" data-level="D">
//!   <div class="entity-header"><hN>name</hN><p class="description">...</p></div>
//!   <div class="entity-content">
//!     <div class="morphisms">...</div>     only with morphisms
//!     <div class="children">...</div>      only with children
//!   </div>
//! </div>
//! ```
//!
//! Text goes out verbatim: the parser's sanitizer has already escaped it.

use emark_core::model::{Document, Entity, Morphism};

use super::Exporter;

/// Deepest heading HTML provides.
const MAX_HEADING: usize = 6;

/// Renders the top-level entities of a document as one HTML fragment.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlExporter;

impl Exporter for HtmlExporter {
    fn export(&self, document: &Document) -> String {
        let mut out = String::new();
        for entity in document.top_level() {
            write_entity(&mut out, entity, 0);
        }
        out
    }
}

/// Render one entity and its subtree, starting at `depth`.
///
/// # Examples
///
/// ```
/// use emark::{export::html::render_entity, model::Entity};
///
/// let html = render_entity(&Entity::new("Leaf"), 0);
/// assert!(html.starts_with(r#"<div class="entity-card" data-level="0">"#));
/// assert!(html.contains("<h2>Leaf</h2>"));
/// ```
pub fn render_entity(entity: &Entity, depth: usize) -> String {
    let mut out = String::new();
    write_entity(&mut out, entity, depth);
    out
}

/// Heading level for an entity name at `depth`; morphisms use one level more.
fn heading_level(depth: usize) -> usize {
    (depth + 2).min(MAX_HEADING)
}

/// Closes `entity-content` and `entity-card`.
const CARD_CLOSE: &str = "</div></div>";

/// Closes `children`, then the card around it.
const CHILDREN_AND_CARD_CLOSE: &str = "</div></div></div>";

/// Pending work while walking a subtree.
enum Step<'e> {
    Open(&'e Entity, usize),
    Close(&'static str),
}

/// Write `entity` and its subtree, walking with an explicit work stack.
fn write_entity(out: &mut String, entity: &Entity, depth: usize) {
    let mut pending = vec![Step::Open(entity, depth)];

    while let Some(step) = pending.pop() {
        let (entity, depth) = match step {
            Step::Close(closer) => {
                out.push_str(closer);
                continue;
            }
            Step::Open(entity, depth) => (entity, depth),
        };

        write_card_head(out, entity, depth);

        if entity.children().is_empty() {
            out.push_str(CARD_CLOSE);
            continue;
        }

        out.push_str(r#"<div class="children">"#);
        pending.push(Step::Close(CHILDREN_AND_CARD_CLOSE));
        pending.extend(
            entity
                .children()
                .iter()
                .rev()
                .map(|child| Step::Open(child, depth + 1)),
        );
    }
}

/// Everything up to the point where children would be nested.
fn write_card_head(out: &mut String, entity: &Entity, depth: usize) {
    let level = heading_level(depth);

    out.push_str(&format!(
        r#"<div class="entity-card" data-level="{depth}"><div class="entity-header"><h{level}>{name}</h{level}><p class="description">{description}</p></div><div class="entity-content">"#,
        name = entity.name(),
        description = entity.description(),
    ));

    if !entity.morphisms().is_empty() {
        out.push_str(r#"<div class="morphisms">"#);
        for morphism in entity.morphisms() {
            write_morphism(out, morphism, (level + 1).min(MAX_HEADING));
        }
        out.push_str("</div>");
    }
}

fn write_morphism(out: &mut String, morphism: &Morphism, level: usize) {
    out.push_str(&format!(
        r#"<div class="morphism"><h{level}>{name}</h{level}><ul>"#,
        name = morphism.name(),
    ));
    for action in morphism.actions() {
        out.push_str(&format!("<li>{action}</li>"));
    }
    out.push_str("</ul></div>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_entity_has_no_sub_containers() {
        let entity = Entity::new("Leaf").with_description("just a leaf");
        let html = render_entity(&entity, 0);

        assert_eq!(
            html,
            concat!(
                r#"<div class="entity-card" data-level="0">"#,
                r#"<div class="entity-header"><h2>Leaf</h2><p class="description">just a leaf</p></div>"#,
                r#"<div class="entity-content"></div></div>"#,
            )
        );
        assert!(!html.contains("morphisms"));
        assert!(!html.contains("children"));
    }

    #[test]
    fn test_morphisms_rendered_in_order() {
        let entity = Entity::new("X")
            .with_morphism(Morphism::new("m").with_action("a1").with_action("a2"))
            .with_morphism(Morphism::new("n"));
        let html = render_entity(&entity, 0);

        assert!(html.contains(concat!(
            r#"<div class="morphisms">"#,
            r#"<div class="morphism"><h3>m</h3><ul><li>a1</li><li>a2</li></ul></div>"#,
            r#"<div class="morphism"><h3>n</h3><ul></ul></div>"#,
            "</div>",
        )));
    }

    #[test]
    fn test_children_nest_with_increasing_depth() {
        let entity = Entity::new("A").with_child(Entity::new("B").with_child(Entity::new("C")));
        let html = render_entity(&entity, 0);

        let a = html.find(r#"data-level="0""#).unwrap();
        let b = html.find(r#"data-level="1""#).unwrap();
        let c = html.find(r#"data-level="2""#).unwrap();
        assert!(a < b && b < c);
        assert!(html.contains("<h3>B</h3>"));
        assert!(html.contains("<h4>C</h4>"));
        assert_eq!(html.matches(r#"<div class="children">"#).count(), 2);
    }

    #[test]
    fn test_start_depth_is_respected() {
        let html = render_entity(&Entity::new("Deep"), 3);
        assert!(html.contains(r#"data-level="3""#));
        assert!(html.contains("<h5>Deep</h5>"));
    }

    #[test]
    fn test_heading_is_clamped_but_level_is_not() {
        let entity = Entity::new("Bottom").with_morphism(Morphism::new("m"));
        let html = render_entity(&entity, 9);

        assert!(html.contains(r#"data-level="9""#));
        assert!(html.contains("<h6>Bottom</h6>"));
        assert!(html.contains("<h6>m</h6>"));
    }

    #[test]
    fn test_containers_are_balanced() {
        let entity = Entity::new("A")
            .with_morphism(Morphism::new("m").with_action("x"))
            .with_child(Entity::new("B"));
        let html = render_entity(&entity, 0);

        assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
    }

    #[test]
    fn test_siblings_close_before_next_sibling() {
        let entity = Entity::new("P")
            .with_child(Entity::new("A").with_child(Entity::new("A1")))
            .with_child(Entity::new("B"));
        let html = render_entity(&entity, 0);

        let a1_closed = html.find("<h4>A1</h4>").unwrap();
        let b_opened = html.find("<h3>B</h3>").unwrap();
        let between = &html[a1_closed..b_opened];
        // A1 header, content and card, then A's children, content and card.
        assert_eq!(between.matches("</div>").count(), 6);
        assert!(html.ends_with("</div></div></div></div></div>"));
        assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
    }

    #[test]
    fn test_deep_chain_renders_without_recursion() {
        let mut entity = Entity::new("E99999");
        for i in (0..99_999).rev() {
            entity = Entity::new(format!("E{i}")).with_child(entity);
        }
        let html = render_entity(&entity, 0);

        assert!(html.contains(r#"data-level="99999"><div class="entity-header"><h6>E99999</h6>"#));
        assert_eq!(html.matches(r#"<div class="children">"#).count(), 99_999);
        assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
    }

    #[test]
    fn test_exporter_skips_block_roots() {
        let document = Document::new(vec![
            Entity::root().with_child(Entity::new("A")),
            Entity::root().with_child(Entity::new("B")),
        ]);
        let html = HtmlExporter.export(&document);

        assert_eq!(html.matches(r#"data-level="0""#).count(), 2);
        assert!(!html.contains("<h2></h2>"));
        assert!(html.find("<h2>A</h2>").unwrap() < html.find("<h2>B</h2>").unwrap());
    }

    #[test]
    fn test_empty_document_renders_nothing() {
        assert_eq!(HtmlExporter.export(&Document::default()), "");
    }
}
