use super::primitive_schema::{
    PrimitiveColumn, PrimitiveDocument, PrimitiveExpression, PrimitiveMeasure,
    PrimitiveRelationship, PrimitiveTable,
};

const MISSING_NAME: &str = "N/A";
const MISSING_DATA_TYPE: &str = "unknown";
const MISSING_CARDINALITY: &str = "N/A";

/// The flattened data model extracted from a schema document. Tables and
/// relationships keep their source-document order.
#[derive(Debug)]
pub struct Schema {
    pub tables: Vec<Table>,
    pub relationships: Vec<Relationship>,
}

#[derive(Debug)]
pub struct Table {
    pub name: String,
    pub description: String,
    pub columns: Vec<Column>,
    pub measures: Vec<Measure>,
}

#[derive(Debug)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub description: String,
    pub is_hidden: bool,
    pub is_unique: bool,
}

#[derive(Debug)]
pub struct Measure {
    pub name: String,
    pub expression: String,
}

/// A declared relationship between two tables. References are carried
/// verbatim; nothing checks them against the extracted table list.
#[derive(Debug)]
pub struct Relationship {
    pub from_table: String,
    pub from_column: String,
    pub to_table: String,
    pub to_column: String,
    pub cardinality: String,
}

impl From<PrimitiveDocument> for Schema {
    fn from(document: PrimitiveDocument) -> Schema {
        Schema {
            tables: document.model.tables.into_iter().map(Table::from).collect(),
            relationships: document
                .model
                .relationships
                .into_iter()
                .map(Relationship::from)
                .collect(),
        }
    }
}

impl From<PrimitiveTable> for Table {
    fn from(primitive: PrimitiveTable) -> Table {
        Table {
            name: primitive.name.unwrap_or_else(|| MISSING_NAME.to_string()),
            description: primitive.description.unwrap_or_default(),
            columns: primitive.columns.into_iter().map(Column::from).collect(),
            measures: primitive.measures.into_iter().map(Measure::from).collect(),
        }
    }
}

impl From<PrimitiveColumn> for Column {
    fn from(primitive: PrimitiveColumn) -> Column {
        Column {
            name: primitive.name.unwrap_or_else(|| MISSING_NAME.to_string()),
            data_type: primitive
                .data_type
                .unwrap_or_else(|| MISSING_DATA_TYPE.to_string()),
            description: primitive.description.unwrap_or_default(),
            is_hidden: primitive.is_hidden.unwrap_or(false),
            is_unique: primitive.is_unique.unwrap_or(false),
        }
    }
}

impl From<PrimitiveMeasure> for Measure {
    fn from(primitive: PrimitiveMeasure) -> Measure {
        Measure {
            name: primitive.name.unwrap_or_else(|| MISSING_NAME.to_string()),
            expression: primitive
                .expression
                .map(PrimitiveExpression::into_text)
                .unwrap_or_default(),
        }
    }
}

impl From<PrimitiveRelationship> for Relationship {
    fn from(primitive: PrimitiveRelationship) -> Relationship {
        let name_or_default =
            |name: Option<String>| name.unwrap_or_else(|| MISSING_NAME.to_string());
        Relationship {
            from_table: name_or_default(primitive.from_table),
            from_column: name_or_default(primitive.from_column),
            to_table: name_or_default(primitive.to_table),
            to_column: name_or_default(primitive.to_column),
            cardinality: primitive
                .cardinality
                .unwrap_or_else(|| MISSING_CARDINALITY.to_string()),
        }
    }
}
