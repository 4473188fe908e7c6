use super::Sheet;

impl Sheet {
    /// Store `value` under `id`, replacing any previous value.
    /// Returns the stored value.
    pub fn put(&mut self, id: &str, value: &str) -> String {
        log::trace!("put {} = {:?}", id, value);
        self.grid.insert(id.to_string(), value.to_string());
        value.to_string()
    }

    /// Evaluated display value of `id`.
    ///
    /// Integer literals come back trimmed, other literals verbatim, formulas
    /// as their result or `#Error` / `#Circular`. Missing cells read as `""`.
    pub fn get(&self, id: &str) -> String {
        self.evaluator().display_cell(id)
    }

    /// Raw stored string of `id`, never evaluated. Missing cells read as `""`.
    pub fn get_literal(&self, id: &str) -> String {
        self.grid
            .get(id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Delete a cell, returning its raw value if it had one.
    pub fn remove(&mut self, id: &str) -> Option<String> {
        self.grid.remove(id).map(|(_, value)| value)
    }

    /// Evaluate a formula body (without the leading `=`) against this sheet
    /// without storing it.
    pub fn calculate(&self, body: &str) -> String {
        self.evaluator().calculate(body)
    }

    /// Number of stored cells.
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Ids of all stored cells, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.grid.iter().map(|entry| entry.key().clone()).collect();
        ids.sort();
        ids
    }
}
