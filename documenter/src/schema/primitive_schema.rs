use serde::Deserialize;

/// A serde mirror of the raw schema document. Every field is optional so
/// that an incomplete document still deserializes; defaults are substituted
/// during conversion into [`super::Schema`].
#[derive(Debug, Default, Deserialize)]
pub struct PrimitiveDocument {
    #[serde(default)]
    pub model: PrimitiveModel,
}

#[derive(Debug, Default, Deserialize)]
pub struct PrimitiveModel {
    #[serde(default)]
    pub tables: Vec<PrimitiveTable>,
    #[serde(default)]
    pub relationships: Vec<PrimitiveRelationship>,
}

#[derive(Debug, Deserialize)]
pub struct PrimitiveTable {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub columns: Vec<PrimitiveColumn>,
    #[serde(default)]
    pub measures: Vec<PrimitiveMeasure>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimitiveColumn {
    pub name: Option<String>,
    pub data_type: Option<String>,
    pub description: Option<String>,
    pub is_hidden: Option<bool>,
    pub is_unique: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct PrimitiveMeasure {
    pub name: Option<String>,
    pub expression: Option<PrimitiveExpression>,
}

/// Measure expressions appear either as a single string or as a list of
/// source lines in real template files.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveExpression {
    Text(String),
    Lines(Vec<String>),
}

impl PrimitiveExpression {
    pub fn into_text(self) -> String {
        match self {
            PrimitiveExpression::Text(text) => text,
            PrimitiveExpression::Lines(lines) => lines.join("\n"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimitiveRelationship {
    pub from_table: Option<String>,
    pub from_column: Option<String>,
    pub to_table: Option<String>,
    pub to_column: Option<String>,
    pub cardinality: Option<String>,
}
