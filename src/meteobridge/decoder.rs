use csv::{ReaderBuilder, Trim};

use crate::meteobridge::{DecodeError, TEMPLATE_ARITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFieldRow {
    fields: Vec<String>,
}

impl RawFieldRow {
    /// Token at `index`. Rows only come out of [`decode`], which guarantees
    /// `TEMPLATE_ARITY` tokens.
    pub fn get(&self, index: usize) -> &str {
        &self.fields[index]
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split a `template.cgi` response into rows of exactly `TEMPLATE_ARITY`
/// tokens. Blank lines are skipped; any other line of the wrong width fails
/// the whole response.
pub fn decode(body: &str) -> Result<Vec<RawFieldRow>, DecodeError> {
    if body.trim().is_empty() {
        return Err(DecodeError::EmptyBody);
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;

        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        if record.len() != TEMPLATE_ARITY {
            return Err(DecodeError::FieldCount {
                line: record.position().map_or(0, |p| p.line()),
                expected: TEMPLATE_ARITY,
                actual: record.len(),
            });
        }

        rows.push(RawFieldRow {
            fields: record.iter().map(str::to_owned).collect(),
        });
    }

    if rows.is_empty() {
        return Err(DecodeError::EmptyBody);
    }

    Ok(rows)
}
