use serde::Serialize;
use serde_json::{json, Value};

/// Response schema sent alongside a structured generation request.
///
/// Plain JSON Schema, as accepted by Gemini's `responseJsonSchema` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResponseSchema(Value);

impl ResponseSchema {
    /// An ordered array of `{ path: string, content: string }` objects.
    pub fn file_records() -> Self {
        Self(json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Relative path for the file (e.g., 'src/components/Button/Button.tsx')"
                    },
                    "content": {
                        "type": "string",
                        "description": "The full source code or content of the file."
                    }
                },
                "required": ["path", "content"]
            }
        }))
    }

    /// The raw schema document.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_records_schema_shape() {
        let schema = ResponseSchema::file_records();
        let value = schema.as_value();

        assert_eq!(value["type"], "array");
        assert_eq!(value["items"]["type"], "object");
        assert_eq!(value["items"]["properties"]["path"]["type"], "string");
        assert_eq!(value["items"]["properties"]["content"]["type"], "string");
        assert_eq!(value["items"]["required"], json!(["path", "content"]));
    }

    #[test]
    fn test_schema_serializes_transparently() {
        let schema = ResponseSchema::file_records();
        let serialized = serde_json::to_value(&schema).unwrap();
        assert_eq!(&serialized, schema.as_value());
    }
}
