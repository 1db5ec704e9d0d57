//! Line classification for the block grammar.
//!
//! Every line of a block is exactly one [`LineKind`]. The four recognized
//! forms are tried in a fixed priority order and the first one that matches
//! wins; a form may start anywhere in the line, so decoration in front of a
//! tag is tolerated. Lines that match nothing are [`LineKind::Unrecognized`]
//! and carry no meaning.
//!
//! Captures stop at the first closing delimiter; there is no escape mechanism
//! for `>`, `"` or `]` inside them.

use winnow::{
    Parser as _,
    ascii::multispace0,
    combinator::{alt, delimited, preceded},
    error::{ContextError, ErrMode},
    token::{literal, take_till, take_until},
};

/// Opener of an entity tag.
pub const ENTITY_OPENER: &str = "<Entity:";
/// Opener of a morphism (relation) tag.
pub const MORPHISM_OPENER: &str = "<Morphism:";
/// Key of a description assignment.
pub const DESCRIPTION_KEY: &str = "Description:";

/// A quote that went through the sanitizer.
const ESCAPED_QUOTE: &str = "&quot;";

type Input<'s> = &'s str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// The meaning of a single block line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'s> {
    /// `<Entity: NAME>`
    EntityOpen(&'s str),
    /// `Description: "TEXT"`
    Description(&'s str),
    /// `<Morphism: NAME>`
    MorphismOpen(&'s str),
    /// `[TEXT]`
    Action(&'s str),
    /// Anything else. Ignored by the tree builder.
    Unrecognized,
}

/// Classify one (already trimmed) line.
///
/// # Examples
///
/// ```
/// use emark_parser::line::{LineKind, classify_line};
///
/// assert_eq!(classify_line("<Entity: Server>"), LineKind::EntityOpen("Server"));
/// assert_eq!(classify_line("[restart]"), LineKind::Action("restart"));
/// assert_eq!(classify_line("plain prose"), LineKind::Unrecognized);
/// ```
pub fn classify_line(line: &str) -> LineKind<'_> {
    if let Some(name) = find_form(line, ENTITY_OPENER, entity_open) {
        return LineKind::EntityOpen(name);
    }
    if let Some(text) = find_form(line, DESCRIPTION_KEY, description) {
        return LineKind::Description(text);
    }
    if let Some(name) = find_form(line, MORPHISM_OPENER, morphism_open) {
        return LineKind::MorphismOpen(name);
    }
    if let Some(text) = find_form(line, "[", action) {
        return LineKind::Action(text);
    }
    LineKind::Unrecognized
}

/// Run `form` at every occurrence of `anchor` and return the first success.
fn find_form<'s, O>(
    line: &'s str,
    anchor: &str,
    mut form: impl FnMut(&mut Input<'s>) -> IResult<O>,
) -> Option<O> {
    line.match_indices(anchor).find_map(|(offset, _)| {
        let mut input = &line[offset..];
        form(&mut input).ok()
    })
}

/// Tag name: leading whitespace skipped, then everything up to `>`.
///
/// A name made only of whitespace is not a name, so `<Entity:   >` does not
/// open anything.
fn tag_name<'s>(input: &mut Input<'s>) -> IResult<&'s str> {
    preceded(multispace0, take_till(1.., '>')).parse_next(input)
}

fn entity_open<'s>(input: &mut Input<'s>) -> IResult<&'s str> {
    delimited(literal(ENTITY_OPENER), tag_name, '>').parse_next(input)
}

fn morphism_open<'s>(input: &mut Input<'s>) -> IResult<&'s str> {
    delimited(literal(MORPHISM_OPENER), tag_name, '>').parse_next(input)
}

fn description<'s>(input: &mut Input<'s>) -> IResult<&'s str> {
    preceded(
        (literal(DESCRIPTION_KEY), multispace0),
        alt((plain_quoted, escaped_quoted)),
    )
    .parse_next(input)
}

fn plain_quoted<'s>(input: &mut Input<'s>) -> IResult<&'s str> {
    delimited('"', take_till(1.., '"'), '"').parse_next(input)
}

fn escaped_quoted<'s>(input: &mut Input<'s>) -> IResult<&'s str> {
    delimited(
        literal(ESCAPED_QUOTE),
        take_until(1.., ESCAPED_QUOTE),
        literal(ESCAPED_QUOTE),
    )
    .parse_next(input)
}

fn action<'s>(input: &mut Input<'s>) -> IResult<&'s str> {
    delimited('[', take_till(1.., ']'), ']').parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_open() {
        assert_eq!(classify_line("<Entity: Foo>"), LineKind::EntityOpen("Foo"));
        assert_eq!(classify_line("<Entity:Foo>"), LineKind::EntityOpen("Foo"));
        assert_eq!(
            classify_line("<Entity: Web Server>"),
            LineKind::EntityOpen("Web Server")
        );
    }

    #[test]
    fn test_entity_name_keeps_trailing_whitespace() {
        assert_eq!(classify_line("<Entity: Foo >"), LineKind::EntityOpen("Foo "));
    }

    #[test]
    fn test_entity_requires_name_and_closer() {
        assert_eq!(classify_line("<Entity:>"), LineKind::Unrecognized);
        assert_eq!(classify_line("<Entity: Foo"), LineKind::Unrecognized);
    }

    #[test]
    fn test_whitespace_only_tag_name_is_unrecognized() {
        assert_eq!(classify_line("<Entity: >"), LineKind::Unrecognized);
        assert_eq!(classify_line("<Entity:\t  >"), LineKind::Unrecognized);
        assert_eq!(classify_line("<Morphism: >"), LineKind::Unrecognized);
        assert_eq!(
            classify_line("<Entity: > <Entity: Real>"),
            LineKind::EntityOpen("Real")
        );
    }

    #[test]
    fn test_entity_found_after_decoration() {
        assert_eq!(
            classify_line("├── <Entity: Child>"),
            LineKind::EntityOpen("Child")
        );
    }

    #[test]
    fn test_entity_wins_over_other_forms() {
        assert_eq!(
            classify_line("[x] <Entity: A> <Morphism: m>"),
            LineKind::EntityOpen("A")
        );
    }

    #[test]
    fn test_description_plain_quotes() {
        assert_eq!(
            classify_line(r#"Description: "a thing""#),
            LineKind::Description("a thing")
        );
        assert_eq!(
            classify_line(r#"Description:"tight""#),
            LineKind::Description("tight")
        );
    }

    #[test]
    fn test_description_sanitized_quotes() {
        assert_eq!(
            classify_line("Description: &quot;it&apos;s here&quot;"),
            LineKind::Description("it&apos;s here")
        );
    }

    #[test]
    fn test_description_stops_at_first_quote() {
        assert_eq!(
            classify_line(r#"Description: "one" and "two""#),
            LineKind::Description("one")
        );
    }

    #[test]
    fn test_description_requires_text() {
        assert_eq!(classify_line(r#"Description: """#), LineKind::Unrecognized);
        assert_eq!(classify_line("Description: unquoted"), LineKind::Unrecognized);
    }

    #[test]
    fn test_description_retries_later_occurrence() {
        assert_eq!(
            classify_line(r#"Description: none, Description: "real""#),
            LineKind::Description("real")
        );
    }

    #[test]
    fn test_morphism_open() {
        assert_eq!(
            classify_line("<Morphism: depends on>"),
            LineKind::MorphismOpen("depends on")
        );
    }

    #[test]
    fn test_action() {
        assert_eq!(classify_line("[do it]"), LineKind::Action("do it"));
        assert_eq!(classify_line("- [first] [second]"), LineKind::Action("first"));
    }

    #[test]
    fn test_action_requires_text() {
        assert_eq!(classify_line("[]"), LineKind::Unrecognized);
        assert_eq!(classify_line("[unclosed"), LineKind::Unrecognized);
    }

    #[test]
    fn test_empty_bracket_does_not_hide_later_action() {
        assert_eq!(classify_line("[] [late]"), LineKind::Action("late"));
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(classify_line(""), LineKind::Unrecognized);
        assert_eq!(classify_line("just text"), LineKind::Unrecognized);
        assert_eq!(classify_line("&lt;div>"), LineKind::Unrecognized);
    }
}
