use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::spec::question::{OptionId, QuestionId};

/// Combinator applied across the single conditions of a `QuestionCondition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConditionLogic {
    #[default]
    And,
    Or,
}

/// Comparison applied to the answer of the referenced question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    Answered,
    NotAnswered,
    Equals,
    NotEquals,
    Contains,
    NotContains,
}

/// One comparison against a prior answer.
///
/// Depending on the operator, either `selected_option_ids` or `text_value`
/// carries the value to compare; the operators define their own fallback when
/// the payload kind does not match the recorded answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SingleCondition {
    pub question_id: QuestionId,
    pub operator: ConditionOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option_ids: Option<Vec<OptionId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_value: Option<String>,
}

/// Visibility condition of a question: single conditions combined with
/// AND or OR. An empty condition list is vacuously true under AND and
/// vacuously false under OR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionCondition {
    #[serde(default)]
    pub logic: ConditionLogic,
    #[serde(default)]
    pub conditions: Vec<SingleCondition>,
}
