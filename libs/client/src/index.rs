//! Index definitions sent to the cluster on creation.

use bunny_names::{field_names, IndexAliases, IndexName};
use serde_json::{Map, Value};

/// An index the client can create or look up.
///
/// Settings and mappings are passed through to the cluster untouched.
pub trait Index: Send + Sync {
    /// Name of the index.
    fn name(&self) -> &IndexName;

    fn settings(&self) -> Option<&Value> {
        None
    }

    fn mappings(&self) -> Option<&Value> {
        None
    }

    fn aliases(&self) -> Option<&IndexAliases> {
        None
    }
}

/// Builds the body of a create-index request.
///
/// Sections the index does not define are left out; empty alias sets are
/// omitted as well.
pub fn create_body<I: Index + ?Sized>(index: &I) -> serde_json::Result<Value> {
    let mut body = Map::new();
    if let Some(settings) = index.settings() {
        body.insert(field_names::SETTINGS.to_string(), settings.clone());
    }
    if let Some(mappings) = index.mappings() {
        body.insert(field_names::MAPPINGS.to_string(), mappings.clone());
    }
    if let Some(aliases) = index.aliases().filter(|a| !a.is_empty()) {
        body.insert(field_names::ALIASES.to_string(), serde_json::to_value(aliases)?);
    }
    Ok(Value::Object(body))
}

/// A plain index definition.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexDefinition {
    name: IndexName,
    settings: Option<Value>,
    mappings: Option<Value>,
    aliases: IndexAliases,
}

impl IndexDefinition {
    pub fn new(name: IndexName) -> Self {
        Self {
            name,
            settings: None,
            mappings: None,
            aliases: IndexAliases::new(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = Some(settings);
        self
    }

    #[must_use]
    pub fn with_mappings(mut self, mappings: Value) -> Self {
        self.mappings = Some(mappings);
        self
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: IndexAliases) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn aliases_mut(&mut self) -> &mut IndexAliases {
        &mut self.aliases
    }
}

impl Index for IndexDefinition {
    fn name(&self) -> &IndexName {
        &self.name
    }

    fn settings(&self) -> Option<&Value> {
        self.settings.as_ref()
    }

    fn mappings(&self) -> Option<&Value> {
        self.mappings.as_ref()
    }

    fn aliases(&self) -> Option<&IndexAliases> {
        Some(&self.aliases)
    }
}
