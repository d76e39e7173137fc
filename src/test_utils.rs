//! Sample records shared by tests, benchmarks and the command-line demo.

mod adapters;
mod data;

pub use adapters::{AddPercentage, CourseUnitOrder};
pub use data::{
    sample_course_unit, sample_plan, AssessmentComponent, CourseUnit, StudyPlan,
    SAMPLE_COURSE_UNIT_XML, SAMPLE_PLAN_XML,
};

// Re-export common test types/traits
pub use crate::{
    build_entity, build_record, generate_xml, pretty_print, query, render, Entity, FormatConfig,
    Formatter, Value, XmlFormatter,
};
