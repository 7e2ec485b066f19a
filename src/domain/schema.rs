//! Input Schema - 任务输入的声明式校验
//!
//! 按 schema 声明的字段（必填/可选 + 类型）校验原始输入，
//! 收集字段级错误信息。校验失败时处理器直接短路返回错误，
//! 不会触发模型调用。

use serde_json::{Map, Value};

use super::job::JobInput;

/// 字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
    Bool,
}

impl FieldType {
    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::Text => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Bool => value.is_boolean(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            FieldType::Text => "string",
            FieldType::Number => "number",
            FieldType::Bool => "boolean",
        }
    }
}

/// 单个字段的声明
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    /// 可选字段缺失时的默认值
    pub default: Option<Value>,
}

/// 输入 schema
#[derive(Debug, Clone, Default)]
pub struct InputSchema {
    fields: Vec<FieldSpec>,
}

impl InputSchema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn required(mut self, name: &'static str, field_type: FieldType) -> Self {
        self.fields.push(FieldSpec {
            name,
            field_type,
            required: true,
            default: None,
        });
        self
    }

    pub fn optional(mut self, name: &'static str, field_type: FieldType) -> Self {
        self.fields.push(FieldSpec {
            name,
            field_type,
            required: false,
            default: None,
        });
        self
    }

    pub fn optional_with_default(
        mut self,
        name: &'static str,
        field_type: FieldType,
        default: Value,
    ) -> Self {
        self.fields.push(FieldSpec {
            name,
            field_type,
            required: false,
            default: Some(default),
        });
        self
    }

    /// 校验并归一化原始输入
    ///
    /// 返回按 schema 过滤后的字段表（缺失的可选字段填入默认值），
    /// 或全部字段级错误信息
    pub fn validate(&self, raw: &Value) -> Result<Map<String, Value>, Vec<String>> {
        let object = match raw.as_object() {
            Some(o) => o,
            None => return Err(vec!["input must be a JSON object".to_string()]),
        };

        let mut errors = Vec::new();
        let mut validated = Map::new();

        for spec in &self.fields {
            match object.get(spec.name) {
                Some(Value::Null) | None => {
                    if spec.required {
                        errors.push(format!("{} is a required input", spec.name));
                    } else if let Some(default) = &spec.default {
                        validated.insert(spec.name.to_string(), default.clone());
                    }
                }
                Some(value) => {
                    if spec.field_type.matches(value) {
                        validated.insert(spec.name.to_string(), value.clone());
                    } else {
                        errors.push(format!(
                            "{} must be a {}",
                            spec.name,
                            spec.field_type.name()
                        ));
                    }
                }
            }
        }

        // 未声明的字段视为错误
        for key in object.keys() {
            if !self.fields.iter().any(|spec| spec.name == key) {
                errors.push(format!("{} is not a valid input option", key));
            }
        }

        if errors.is_empty() {
            Ok(validated)
        } else {
            Err(errors)
        }
    }
}

/// 生成任务的输入 schema
///
/// - `text_prompt`: string，必填
/// - `voice_preset`: string，可选
pub fn job_input_schema() -> InputSchema {
    InputSchema::new()
        .required("text_prompt", FieldType::Text)
        .optional("voice_preset", FieldType::Text)
}

/// 校验任务输入并转换为 [`JobInput`]
pub fn validate_job_input(raw: &Value) -> Result<JobInput, Vec<String>> {
    let validated = job_input_schema().validate(raw)?;

    let text_prompt = validated
        .get("text_prompt")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| vec!["text_prompt is a required input".to_string()])?;

    let voice_preset = validated
        .get("voice_preset")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    Ok(JobInput {
        text_prompt,
        voice_preset,
    })
}
