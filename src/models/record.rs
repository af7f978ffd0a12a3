use crate::utils::constants::PLACE_TAG;

/// Fields decoded from one source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRow {
    pub line_number: usize,
    pub fields: Vec<String>,
}

impl DecodedRow {
    pub fn new(line_number: usize, fields: Vec<String>) -> Self {
        Self {
            line_number,
            fields,
        }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Converted row ready to be written, place tag included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    fields: Vec<String>,
}

impl OutputRow {
    /// Appends the place tag to `fields`
    pub fn new(mut fields: Vec<String>) -> Self {
        fields.push(PLACE_TAG.to_string());
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Comma-joined form, as written to the output file
    pub fn to_line(&self) -> String {
        self.fields.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_row_ends_with_place_tag() {
        let row = OutputRow::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(row.fields().len(), 3);
        assert_eq!(row.to_line(), "a,b,isolated_dwelling");
    }

    #[test]
    fn test_decoded_row_field_access() {
        let row = DecodedRow::new(3, vec!["x".to_string()]);
        assert_eq!(row.field(0), Some("x"));
        assert_eq!(row.field(1), None);
        assert_eq!(row.len(), 1);
        assert!(!row.is_empty());
    }
}
