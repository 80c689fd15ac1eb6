//! Typed positional row schemas
//!
//! Vendor exports carry no header row, so every column is identified by its
//! position. Each pipeline variant fixes one schema up front; rows are then
//! read through named accessors instead of ad hoc indices.

/// Named columns across all supported layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Place,
    AthleteId,
    FirstName,
    LastName,
    Year,
    TeamAbbr,
    TeamName,
    /// Seed (start lists) or result (result files)
    Mark,
    AltMark,
    Qualifier,
    Wind,
    Heat,
    Lane,
    /// Aggregate combined-event score
    Points,
    Behind,
}

/// Ordered column layout of one file variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSchema {
    pub name: &'static str,
    columns: &'static [(Column, usize)],
    /// Fixed row width, or `None` when the width is inferred per file
    pub width: Option<usize>,
}

impl RowSchema {
    /// Start-list data rows; width is the widest data row in the file
    pub const START_LIST: RowSchema = RowSchema {
        name: "start-list",
        columns: &[
            (Column::Place, 0),
            (Column::AthleteId, 1),
            (Column::FirstName, 2),
            (Column::LastName, 3),
            (Column::TeamName, 6),
            (Column::TeamAbbr, 7),
            (Column::Mark, 8),
            (Column::Points, 10),
        ],
        width: None,
    };

    /// Result rows of running, field and relay events
    pub const RESULT_STANDARD: RowSchema = RowSchema {
        name: "result-standard",
        columns: &[
            (Column::Place, 0),
            (Column::FirstName, 1),
            (Column::LastName, 2),
            (Column::AthleteId, 3),
            (Column::Year, 4),
            (Column::TeamAbbr, 5),
            (Column::TeamName, 6),
            (Column::Mark, 7),
            (Column::AltMark, 8),
            (Column::Qualifier, 9),
            (Column::Wind, 10),
            (Column::Heat, 11),
            (Column::Lane, 12),
        ],
        width: Some(13),
    };

    /// Result rows of combined events
    pub const RESULT_MULTI: RowSchema = RowSchema {
        name: "result-multi",
        columns: &[
            (Column::Place, 0),
            (Column::FirstName, 1),
            (Column::LastName, 2),
            (Column::AthleteId, 3),
            (Column::Year, 4),
            (Column::TeamAbbr, 5),
            (Column::TeamName, 6),
            (Column::Points, 7),
            (Column::Behind, 8),
        ],
        width: Some(9),
    };

    pub fn index_of(&self, column: Column) -> Option<usize> {
        self.columns
            .iter()
            .find(|(candidate, _)| *candidate == column)
            .map(|(_, index)| *index)
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.index_of(column).is_some()
    }

    /// Pad or truncate raw fields to the schema width
    pub fn fit(&self, mut fields: Vec<String>) -> Vec<String> {
        if let Some(width) = self.width {
            fields.resize(width, String::new());
        }
        fields
    }
}

/// One rectangular data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AthleteRow {
    /// Index of the owning block in the parse result
    pub block: usize,

    /// Trimmed positional values, padded to the table width
    pub fields: Vec<String>,
}

impl AthleteRow {
    pub fn new(block: usize, fields: Vec<String>) -> Self {
        Self { block, fields }
    }

    /// Non-empty value of a column under the given schema
    pub fn get(&self, schema: &RowSchema, column: Column) -> Option<&str> {
        let index = schema.index_of(column)?;
        self.fields
            .get(index)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Value of a column, or an empty string
    pub fn get_or_empty(&self, schema: &RowSchema, column: Column) -> &str {
        self.get(schema, column).unwrap_or("")
    }

    /// Numeric place from the first field
    pub fn place(&self) -> Option<u32> {
        self.fields.first().and_then(|value| value.trim().parse().ok())
    }

    /// `"First Last"`, or whichever half is present
    pub fn athlete_name(&self, schema: &RowSchema) -> String {
        let first = self.get_or_empty(schema, Column::FirstName);
        let last = self.get_or_empty(schema, Column::LastName);
        format!("{} {}", first, last).trim().to_string()
    }

    pub fn width(&self) -> usize {
        self.fields.len()
    }
}
