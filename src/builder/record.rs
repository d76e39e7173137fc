//! Statically declared field metadata for plain records.

use super::adapter::AdapterFactory;

/// A plain record: a fixed set of named fields with no hidden state.
///
/// Implementors list their fields once, in declaration order, and the
/// builder turns that description into an entity tree.
pub trait XmlRecord {
    /// Name used for the entity when the shape declares none
    fn type_name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    fn describe(&self) -> RecordShape<'_>;
}

/// Input value handed to the builder
#[derive(Clone)]
pub enum Value<'a> {
    Record(&'a dyn XmlRecord),
    /// Textual form of a scalar; `None` for an absent value
    Text(Option<String>),
    List(Vec<Value<'a>>),
}

impl<'a> Value<'a> {
    pub fn record<R: XmlRecord>(record: &'a R) -> Self {
        Self::Record(record)
    }

    pub fn text<T: ToXmlText + ?Sized>(value: &T) -> Self {
        Self::Text(Some(value.to_xml_text()))
    }

    pub fn optional<T: ToXmlText>(value: Option<&T>) -> Self {
        Self::Text(value.map(ToXmlText::to_xml_text))
    }

    pub fn records<R: XmlRecord>(records: &'a [R]) -> Self {
        Self::List(records.iter().map(|r| Self::Record(r)).collect())
    }

    pub fn list(items: Vec<Value<'a>>) -> Self {
        Self::List(items)
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Self::Record(_) => "record",
            Self::Text(_) => "scalar",
            Self::List(_) => "list",
        }
    }
}

impl std::fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Record(record) => write!(f, "Record({})", record.type_name()),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::List(items) => f.debug_list().entries(items).finish(),
        }
    }
}

/// How a field takes part in the tree
#[derive(Clone, Copy)]
pub enum Role {
    /// Becomes a child entity (or a list of them)
    Entity { hide_wrapper: bool },
    /// Becomes an attribute of the current entity
    Attribute { adapter: Option<AdapterFactory> },
    /// Left out of the tree
    Ignored,
}

/// One declared field together with its current value
#[derive(Debug)]
pub struct Field<'a> {
    pub(crate) name: String,
    pub(crate) role: Role,
    pub(crate) value: Value<'a>,
}

impl<'a> Field<'a> {
    pub fn entity(name: impl Into<String>, value: Value<'a>) -> Self {
        Self {
            name: name.into(),
            role: Role::Entity {
                hide_wrapper: false,
            },
            value,
        }
    }

    pub fn attribute(name: impl Into<String>, value: Value<'a>) -> Self {
        Self {
            name: name.into(),
            role: Role::Attribute { adapter: None },
            value,
        }
    }

    pub fn ignored(name: impl Into<String>, value: Value<'a>) -> Self {
        Self {
            name: name.into(),
            role: Role::Ignored,
            value,
        }
    }

    /// Splices list elements straight into the owning entity. Only
    /// meaningful on entity fields.
    pub fn hide_wrapper(mut self) -> Self {
        if let Role::Entity { hide_wrapper } = &mut self.role {
            *hide_wrapper = true;
        }
        self
    }

    /// Runs the attribute text through a string adapter. Only meaningful on
    /// attribute fields.
    pub fn with_adapter(mut self, factory: AdapterFactory) -> Self {
        if let Role::Attribute { adapter } = &mut self.role {
            *adapter = Some(factory);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn value(&self) -> &Value<'a> {
        &self.value
    }
}

impl std::fmt::Debug for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entity { hide_wrapper } => f
                .debug_struct("Entity")
                .field("hide_wrapper", hide_wrapper)
                .finish(),
            Self::Attribute { adapter } => f
                .debug_struct("Attribute")
                .field("adapter", &adapter.is_some())
                .finish(),
            Self::Ignored => write!(f, "Ignored"),
        }
    }
}

/// Everything the builder needs to know about one record
#[derive(Debug, Default)]
pub struct RecordShape<'a> {
    pub(crate) entity_name: Option<String>,
    pub(crate) fields: Vec<Field<'a>>,
    pub(crate) adapter: Option<AdapterFactory>,
}

impl<'a> RecordShape<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity_name(mut self, name: impl Into<String>) -> Self {
        self.entity_name = Some(name.into());
        self
    }

    /// Whole-entity adapter applied once every field has been processed
    pub fn adapter(mut self, factory: AdapterFactory) -> Self {
        self.adapter = Some(factory);
        self
    }

    pub fn field(mut self, field: Field<'a>) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }
}

/// Textual form of a scalar as it appears in attributes and nested text
pub trait ToXmlText {
    fn to_xml_text(&self) -> String;
}

macro_rules! display_text {
    ($($t:ty),*) => {
        $(impl ToXmlText for $t {
            fn to_xml_text(&self) -> String {
                self.to_string()
            }
        })*
    };
}

display_text!(
    str, String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

// Floats keep a fractional part: 6.0 renders as "6.0", not "6".
impl ToXmlText for f64 {
    fn to_xml_text(&self) -> String {
        format!("{:?}", self)
    }
}

impl ToXmlText for f32 {
    fn to_xml_text(&self) -> String {
        format!("{:?}", self)
    }
}

impl<T: ToXmlText> ToXmlText for Option<T> {
    fn to_xml_text(&self) -> String {
        match self {
            Some(value) => value.to_xml_text(),
            None => "null".to_string(),
        }
    }
}

impl<T: ToXmlText + ?Sized> ToXmlText for &T {
    fn to_xml_text(&self) -> String {
        (**self).to_xml_text()
    }
}
