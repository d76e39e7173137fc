use super::{FormatConfig, Formatter, XML_DECLARATION};
use crate::model::Entity;

/// Renders entities as indented XML.
///
/// Text and attribute values are written verbatim, without escaping.
pub struct XmlFormatter;

impl Formatter for XmlFormatter {
    fn format(&self, entity: &Entity, config: &FormatConfig) -> String {
        let body = Self::render(entity, 0, config);
        if config.declaration {
            format!("{}\n{}", XML_DECLARATION, body)
        } else {
            body
        }
    }
}

impl XmlFormatter {
    /// Renders `entity` at `depth` with no declaration and no trailing
    /// newline; callers separate siblings.
    pub fn render(entity: &Entity, depth: usize, config: &FormatConfig) -> String {
        let mut out = String::new();
        Self::write_entity(&mut out, entity, depth, config);
        out
    }

    fn write_entity(out: &mut String, entity: &Entity, depth: usize, config: &FormatConfig) {
        let indent = config.indentation(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(entity.name());
        for attribute in entity.attributes() {
            out.push(' ');
            out.push_str(&attribute.to_string());
        }

        match (entity.has_children(), entity.visible_text()) {
            (false, None) => out.push_str("/>"),
            (false, Some(text)) => {
                out.push('>');
                out.push_str(text);
                Self::close_tag(out, entity);
            }
            (true, text) => {
                out.push_str(">\n");
                for child in entity.children() {
                    Self::write_entity(out, child, depth + 1, config);
                    out.push('\n');
                }
                if let Some(text) = text {
                    out.push_str(&config.indentation(depth + 1));
                    out.push_str(text);
                    out.push('\n');
                }
                out.push_str(&indent);
                Self::close_tag(out, entity);
            }
        }
    }

    fn close_tag(out: &mut String, entity: &Entity) {
        out.push_str("</");
        out.push_str(entity.name());
        out.push('>');
    }
}
