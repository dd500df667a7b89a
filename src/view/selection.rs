/// Result of toggling a skill in the battle selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    /// Selection already full; nothing changed.
    Rejected,
}

/// Ordered set of skill names picked for the next battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSelection {
    names: Vec<String>,
    limit: usize,
}

impl SkillSelection {
    pub fn new(limit: usize) -> Self {
        Self {
            names: Vec::with_capacity(limit),
            limit,
        }
    }

    pub fn toggle(&mut self, name: &str) -> Toggle {
        if let Some(index) = self.names.iter().position(|n| n == name) {
            self.names.remove(index);
            Toggle::Removed
        } else if self.names.len() < self.limit {
            self.names.push(name.to_string());
            Toggle::Added
        } else {
            Toggle::Rejected
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Hand over the picks for submission, leaving the selection empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.names)
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}
