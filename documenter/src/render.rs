use itertools::Itertools;

use crate::schema::{Column, Measure, Relationship, Schema, Table};

/// Serializes a value into its fragment of the Markdown report.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Schema {
    fn render(&self) -> String {
        let tables = self.tables.iter().map(Render::render).join("");
        let relationships = self.relationships.iter().map(Render::render).join("");
        format!(
            "# Power BI Model Documentation\n\n\
             ## Tables\n\
             {tables}\n\
             ## Relationships\n\
             | From Table | From Column | To Table | To Column | Cardinality |\n\
             |------------|-------------|----------|-----------|-------------|\n\
             {relationships}"
        )
    }
}

impl Render for Table {
    fn render(&self) -> String {
        let columns = self.columns.iter().map(Render::render).join("");
        let measures = self.measures.iter().map(Render::render).join("");
        format!(
            "### {name}\n\
             *Description*: {description}\n\n\
             #### Columns\n\
             | Name | Type | Description | Hidden | Unique |\n\
             |------|------|-------------|--------|--------|\n\
             {columns}\n\
             #### Measures\n\
             {measures}\n\
             ---\n",
            name = self.name,
            description = self.description,
        )
    }
}

impl Render for Column {
    fn render(&self) -> String {
        format!(
            "| {} | {} | {} | {} | {} |\n",
            self.name, self.data_type, self.description, self.is_hidden, self.is_unique
        )
    }
}

impl Render for Measure {
    fn render(&self) -> String {
        format!("- **{}**: `{}`\n", self.name, self.expression)
    }
}

impl Render for Relationship {
    fn render(&self) -> String {
        format!(
            "| {} | {} | {} | {} | {} |\n",
            self.from_table, self.from_column, self.to_table, self.to_column, self.cardinality
        )
    }
}
