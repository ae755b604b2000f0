//! Template field to source column mapping

/// Template fields that get populated from the client file, in prompt order
pub const TEMPLATE_FIELDS: [&str; 7] = [
    "Res_Date",
    "Facility",
    "Departure",
    "Start Date",
    "End Date",
    "Arrival",
    "Weight Ton",
];

/// Compiled-in source column names, aligned with `TEMPLATE_FIELDS`
const STATIC_SOURCE_COLUMNS: [&str; 7] = [
    "Job Close Date",
    "Consolidation Type",
    "POL",
    "ATD",
    "ATA",
    "POD",
    "Weight(Tons)",
];

/// Check if a name is one of the fixed template fields
pub fn is_template_field(name: &str) -> bool {
    TEMPLATE_FIELDS.contains(&name)
}

/// One template column fed by one source column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    pub template: String,
    pub source: String,
}

/// Ordered template-column to source-column mapping
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldMapping {
    entries: Vec<FieldEntry>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// The hardcoded mapping used for the standard client export layout
    pub fn static_mapping() -> Self {
        let mut mapping = Self::new();
        for (template, source) in TEMPLATE_FIELDS.iter().zip(STATIC_SOURCE_COLUMNS) {
            mapping.set(*template, source);
        }
        mapping
    }

    /// Set the source column for a template field.
    /// Replaces an existing entry in place, otherwise appends.
    pub fn set(&mut self, template: impl Into<String>, source: impl Into<String>) {
        let template = template.into();
        let source = source.into();
        match self.entries.iter_mut().find(|e| e.template == template) {
            Some(entry) => entry.source = source,
            None => self.entries.push(FieldEntry { template, source }),
        }
    }

    /// Source column for a template field
    pub fn source_for(&self, template: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.template == template)
            .map(|e| e.source.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(String, String)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut mapping = FieldMapping::new();
        for (template, source) in iter {
            mapping.set(template, source);
        }
        mapping
    }
}
