use super::{InputError, NumericSource};

/// In-memory source over a slice of values
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    values: &'a [f64],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Create a source that yields `values` in order
    pub fn new(values: &'a [f64]) -> Self {
        Self { values, pos: 0 }
    }

    /// Values not read yet
    pub fn remaining(&self) -> &'a [f64] {
        &self.values[self.pos..]
    }
}

impl NumericSource for SliceSource<'_> {
    fn has_more(&mut self) -> Result<bool, InputError> {
        Ok(self.pos < self.values.len())
    }

    fn read_f64(&mut self) -> Result<f64, InputError> {
        let value = *self.values.get(self.pos).ok_or(InputError::Exhausted)?;
        self.pos += 1;
        Ok(value)
    }
}
