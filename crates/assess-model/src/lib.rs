pub mod answer;
pub mod config;
pub mod error;
pub mod ops;
pub mod report;
pub mod result;
pub mod value;

pub use answer::{AnswerSet, AnswerValue};
pub use config::{
    AssessmentConfig, ChoiceOption, ConditionExpression, ConditionGroup, EligibilityExpression,
    MappingKind, Message, Meta, Question, QuestionKind, RuleOutput, RuleSet, VaccineRule,
    VariableMapping,
};
pub use error::{EvalError, Result};
pub use ops::{CompareOp, Logic};
pub use report::ValidationReport;
pub use result::{AssessmentResult, CTA_SEE_LOCATIONS, VaccineOutcome};
pub use value::VariableValue;
