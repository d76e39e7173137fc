use super::adapters::{AddPercentage, CourseUnitOrder};
use crate::builder::{Adapter, Field, RecordShape, Value, XmlRecord};

/// One graded component of a course unit
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentComponent {
    pub name: String,
    pub weight: i32,
}

/// A course unit sheet
#[derive(Debug, Clone, PartialEq)]
pub struct CourseUnit {
    pub code: String,
    pub name: String,
    pub ects: f64,
    pub notes: String,
    pub assessment: Vec<AssessmentComponent>,
}

/// A study plan listing its course units
#[derive(Debug, Clone, PartialEq)]
pub struct StudyPlan {
    pub units: Vec<CourseUnit>,
}

fn add_percentage() -> Box<dyn Adapter> {
    Box::new(AddPercentage)
}

fn course_unit_order() -> Box<dyn Adapter> {
    Box::new(CourseUnitOrder)
}

impl XmlRecord for AssessmentComponent {
    fn describe(&self) -> RecordShape<'_> {
        RecordShape::new()
            .entity_name("componente")
            .field(Field::attribute("nome", Value::text(&self.name)))
            .field(
                Field::attribute("peso", Value::text(&self.weight)).with_adapter(add_percentage),
            )
    }
}

impl XmlRecord for CourseUnit {
    fn describe(&self) -> RecordShape<'_> {
        RecordShape::new()
            .entity_name("FUC")
            .adapter(course_unit_order)
            .field(Field::attribute("codigo", Value::text(&self.code)))
            .field(Field::entity("nome", Value::text(&self.name)))
            .field(Field::entity("ects", Value::text(&self.ects)))
            .field(Field::entity("observacoes", Value::text(&self.notes)))
            .field(Field::entity("avaliacao", Value::records(&self.assessment)).hide_wrapper())
    }
}

impl XmlRecord for StudyPlan {
    fn describe(&self) -> RecordShape<'_> {
        RecordShape::new()
            .entity_name("plano")
            .field(Field::entity("fucs", Value::records(&self.units)).hide_wrapper())
    }
}

fn component(name: &str, weight: i32) -> AssessmentComponent {
    AssessmentComponent {
        name: name.to_string(),
        weight,
    }
}

pub fn sample_course_unit() -> CourseUnit {
    CourseUnit {
        code: "M4310".to_string(),
        name: "Programação Avançada".to_string(),
        ects: 6.0,
        notes: "la la...".to_string(),
        assessment: vec![component("Quizzes", 20), component("Projeto", 80)],
    }
}

pub fn sample_plan() -> StudyPlan {
    let dissertation = CourseUnit {
        code: "03782".to_string(),
        name: "Dissertação".to_string(),
        ects: 42.0,
        notes: "la la...".to_string(),
        assessment: vec![
            component("Dissertação", 60),
            component("Apresentação", 20),
            component("Discussão", 20),
        ],
    };
    StudyPlan {
        units: vec![sample_course_unit(), dissertation],
    }
}

pub const SAMPLE_COURSE_UNIT_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<FUC codigo=\"M4310\">\n\
\t<ects>6.0</ects>\n\
\t<nome>Programação Avançada</nome>\n\
\t<componente nome=\"Quizzes\" peso=\"20%\"/>\n\
\t<componente nome=\"Projeto\" peso=\"80%\"/>\n\
</FUC>";

pub const SAMPLE_PLAN_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<plano>\n\
\t<FUC codigo=\"M4310\">\n\
\t\t<ects>6.0</ects>\n\
\t\t<nome>Programação Avançada</nome>\n\
\t\t<componente nome=\"Quizzes\" peso=\"20%\"/>\n\
\t\t<componente nome=\"Projeto\" peso=\"80%\"/>\n\
\t</FUC>\n\
\t<FUC codigo=\"03782\">\n\
\t\t<ects>42.0</ects>\n\
\t\t<nome>Dissertação</nome>\n\
\t\t<componente nome=\"Dissertação\" peso=\"60%\"/>\n\
\t\t<componente nome=\"Apresentação\" peso=\"20%\"/>\n\
\t\t<componente nome=\"Discussão\" peso=\"20%\"/>\n\
\t</FUC>\n\
</plano>";
