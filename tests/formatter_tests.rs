#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::unwrap_used)]

use xmlforge::{
    formatter::{MAX_INDENT_SPACES, XML_DECLARATION},
    test_utils::*,
    FormatError, Indent, XmlErrorKind,
};

fn leaf(name: &str, attrs: &[(&str, &str)]) -> Entity {
    let mut entity = Entity::new(name);
    for (k, v) in attrs {
        entity.add_attribute(*k, *v);
    }
    entity
}

#[test]
fn test_self_closing_leaf() {
    let entity = leaf("componente", &[("nome", "Quizzes"), ("peso", "20%")]);
    assert_eq!(render(&entity, 0), "<componente nome=\"Quizzes\" peso=\"20%\"/>");
}

#[test]
fn test_empty_text_is_self_closing() {
    let entity = Entity::with_text("nome", "");
    assert_eq!(render(&entity, 0), "<nome/>");
}

#[test]
fn test_text_leaf_is_inline() {
    let entity = Entity::with_text("ects", "6.0");
    assert_eq!(render(&entity, 2), "\t\t<ects>6.0</ects>");
}

#[test]
fn test_children_and_text() {
    let mut entity = Entity::with_text("nota", "texto solto");
    entity.add_child(leaf("item", &[]));
    assert_eq!(
        render(&entity, 1),
        "\t<nota>\n\t\t<item/>\n\t\ttexto solto\n\t</nota>"
    );
}

#[test]
fn test_pretty_print_prepends_declaration_without_trailing_newline() {
    let entity = leaf("raiz", &[]);
    let xml = pretty_print(&entity);
    assert_eq!(xml, format!("{}\n<raiz/>", XML_DECLARATION));
    assert!(!xml.ends_with('\n'));
}

#[test]
fn test_text_is_not_escaped() {
    let mut entity = Entity::with_text("expr", "a < b & c");
    entity.add_attribute("src", "x\"y");
    assert_eq!(render(&entity, 0), "<expr src=\"x\"y\">a < b & c</expr>");
}

#[test]
fn test_query_results_render_at_depth_zero() {
    let plan = build_record(&sample_plan()).unwrap();
    let rendered: String = query(&plan, "plano/FUC/componente")
        .iter()
        .map(|entity| format!("{}\n", render(entity, 0)))
        .collect();
    assert_eq!(
        rendered,
        "<componente nome=\"Quizzes\" peso=\"20%\"/>\n\
<componente nome=\"Projeto\" peso=\"80%\"/>\n\
<componente nome=\"Dissertação\" peso=\"60%\"/>\n\
<componente nome=\"Apresentação\" peso=\"20%\"/>\n\
<componente nome=\"Discussão\" peso=\"20%\"/>\n"
    );
}

#[test]
fn test_configured_spaces_without_declaration() {
    let entity = nested_abc();
    let config = FormatConfig {
        indent: Indent::Spaces(2),
        declaration: false,
    };
    assert_eq!(
        XmlFormatter.format(&entity, &config),
        "<a>\n  <b>\n    <c>x</c>\n  </b>\n</a>"
    );
}

#[test]
fn test_default_config_matches_pretty_print() {
    let entity = build_record(&sample_course_unit()).unwrap();
    assert_eq!(
        XmlFormatter.format(&entity, &FormatConfig::default()),
        pretty_print(&entity)
    );
}

fn nested_abc() -> Entity {
    let mut b = leaf("b", &[]);
    b.add_child(Entity::with_text("c", "x"));
    let mut a = leaf("a", &[]);
    a.add_child(b);
    a
}

#[test]
fn test_wide_space_indent_is_rejected() {
    let err = FormatConfig::with_spaces(usize::MAX / 2 + 1).unwrap_err();
    assert_eq!(
        err.kind(),
        &XmlErrorKind::Format(FormatError::InvalidIndentation {
            spaces: usize::MAX / 2 + 1,
            max: MAX_INDENT_SPACES,
        })
    );
    assert!(FormatConfig::with_spaces(MAX_INDENT_SPACES + 1).is_err());

    let config = FormatConfig::with_spaces(MAX_INDENT_SPACES).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.indentation(1), " ".repeat(MAX_INDENT_SPACES));
}

#[test]
fn test_unchecked_wide_indent_is_clamped() {
    let config = FormatConfig {
        indent: Indent::Spaces(usize::MAX / 2 + 1),
        declaration: false,
    };
    assert!(config.validate().is_err());
    assert_eq!(
        XmlFormatter.format(&nested_abc(), &config),
        "<a>\n        <b>\n                <c>x</c>\n        </b>\n</a>"
    );
}
