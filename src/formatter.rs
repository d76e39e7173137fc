mod xml;

pub use self::xml::XmlFormatter;
use crate::{
    error::{FormatError, Result},
    model::Entity,
};

/// XML declaration emitted ahead of the root element
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Widest indentation unit a config may ask for
pub const MAX_INDENT_SPACES: usize = 8;

/// Unit of indentation per nesting level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Tabs,
    Spaces(usize),
}

/// Configuration options for formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Indentation used for each nesting level
    pub indent: Indent,
    /// Whether to prepend the XML declaration line
    pub declaration: bool,
}

/// Default configuration: tab indentation with the declaration line
impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: Indent::Tabs,
            declaration: true,
        }
    }
}

impl FormatConfig {
    /// Space-indented configuration with the declaration line
    pub fn with_spaces(spaces: usize) -> Result<Self> {
        let config = Self {
            indent: Indent::Spaces(spaces),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects space indentation wider than [`MAX_INDENT_SPACES`]
    pub fn validate(&self) -> Result<()> {
        match self.indent {
            Indent::Spaces(spaces) if spaces > MAX_INDENT_SPACES => {
                Err(FormatError::InvalidIndentation {
                    spaces,
                    max: MAX_INDENT_SPACES,
                }
                .into())
            }
            _ => Ok(()),
        }
    }

    /// Indentation string for `depth` levels. Unchecked configs are
    /// clamped to [`MAX_INDENT_SPACES`] per level.
    pub fn indentation(&self, depth: usize) -> String {
        match self.indent {
            Indent::Tabs => "\t".repeat(depth),
            Indent::Spaces(n) => " ".repeat(depth.saturating_mul(n.min(MAX_INDENT_SPACES))),
        }
    }
}

/// Trait for formatting an entity tree as a string
pub trait Formatter {
    fn format(&self, entity: &Entity, config: &FormatConfig) -> String;
}
