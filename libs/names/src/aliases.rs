//! Alias definitions attached to an index.
//!
//! [`IndexAliases`] serializes to the cluster's `aliases` object, keyed by
//! alias name:
//!
//! ```json
//! { "logs-current": { "is_hidden": false, "is_write_index": true } }
//! ```

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::field_names;
use crate::AliasName;

/// A single alias definition.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexAlias {
    name: AliasName,

    /// Query limiting the documents the alias can access.
    pub filter: Option<serde_json::Value>,

    /// Routes indexing operations to a specific shard.
    ///
    /// Overrides `routing` for indexing operations.
    pub index_routing: Option<String>,

    /// Whether the alias is hidden.
    pub is_hidden: bool,

    /// Whether the index is the write index for the alias.
    pub is_write_index: bool,

    /// Routes indexing and search operations to a specific shard.
    pub routing: Option<String>,

    /// Routes search operations to a specific shard.
    ///
    /// Overrides `routing` for search operations.
    pub search_routing: Option<String>,
}

impl IndexAlias {
    /// Creates an alias definition with no filter or routing.
    pub fn new(name: AliasName) -> Self {
        Self {
            name,
            filter: None,
            index_routing: None,
            is_hidden: false,
            is_write_index: false,
            routing: None,
            search_routing: None,
        }
    }

    pub fn name(&self) -> &AliasName {
        &self.name
    }

    #[must_use]
    pub fn with_filter(mut self, filter: serde_json::Value) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn with_routing(mut self, routing: impl Into<String>) -> Self {
        self.routing = Some(routing.into());
        self
    }

    #[must_use]
    pub fn with_index_routing(mut self, routing: impl Into<String>) -> Self {
        self.index_routing = Some(routing.into());
        self
    }

    #[must_use]
    pub fn with_search_routing(mut self, routing: impl Into<String>) -> Self {
        self.search_routing = Some(routing.into());
        self
    }

    #[must_use]
    pub fn hidden(mut self, is_hidden: bool) -> Self {
        self.is_hidden = is_hidden;
        self
    }

    #[must_use]
    pub fn write_index(mut self, is_write_index: bool) -> Self {
        self.is_write_index = is_write_index;
        self
    }

    fn from_body(name: AliasName, body: AliasBody) -> Self {
        Self {
            name,
            filter: body.filter,
            index_routing: body.index_routing,
            is_hidden: body.is_hidden,
            is_write_index: body.is_write_index,
            routing: body.routing,
            search_routing: body.search_routing,
        }
    }
}

/// Serializes the alias body only; the name is the key of the enclosing map.
impl Serialize for IndexAlias {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if let Some(filter) = &self.filter {
            map.serialize_entry(field_names::FILTER, filter)?;
        }
        if let Some(index_routing) = &self.index_routing {
            map.serialize_entry(field_names::INDEX_ROUTING, index_routing)?;
        }
        map.serialize_entry(field_names::IS_HIDDEN, &self.is_hidden)?;
        map.serialize_entry(field_names::IS_WRITE_INDEX, &self.is_write_index)?;
        if let Some(routing) = &self.routing {
            map.serialize_entry(field_names::ROUTING, routing)?;
        }
        if let Some(search_routing) = &self.search_routing {
            map.serialize_entry(field_names::SEARCH_ROUTING, search_routing)?;
        }
        map.end()
    }
}

/// Wire form of an alias body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AliasBody {
    filter: Option<serde_json::Value>,
    index_routing: Option<String>,
    is_hidden: bool,
    is_write_index: bool,
    routing: Option<String>,
    search_routing: Option<String>,
}

/// The aliases of an index, keyed by alias name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexAliases {
    aliases: BTreeMap<AliasName, IndexAlias>,
}

impl IndexAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an alias, returning the previous definition with the same name.
    pub fn insert(&mut self, alias: IndexAlias) -> Option<IndexAlias> {
        self.aliases.insert(alias.name.clone(), alias)
    }

    pub fn remove(&mut self, name: &str) -> Option<IndexAlias> {
        self.aliases.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&IndexAlias> {
        self.aliases.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut IndexAlias> {
        self.aliases.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn clear(&mut self) {
        self.aliases.clear();
    }

    /// Alias names, in order.
    pub fn names(&self) -> impl Iterator<Item = &AliasName> {
        self.aliases.keys()
    }

    /// Alias definitions, ordered by name.
    pub fn iter(&self) -> btree_map::Values<'_, AliasName, IndexAlias> {
        self.aliases.values()
    }
}

impl<'a> IntoIterator for &'a IndexAliases {
    type Item = &'a IndexAlias;
    type IntoIter = btree_map::Values<'a, AliasName, IndexAlias>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<IndexAlias> for IndexAliases {
    fn from_iter<I: IntoIterator<Item = IndexAlias>>(iter: I) -> Self {
        let mut aliases = Self::new();
        aliases.extend(iter);
        aliases
    }
}

impl Extend<IndexAlias> for IndexAliases {
    fn extend<I: IntoIterator<Item = IndexAlias>>(&mut self, iter: I) {
        for alias in iter {
            self.insert(alias);
        }
    }
}

impl Serialize for IndexAliases {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.aliases.len()))?;
        for (name, alias) in &self.aliases {
            map.serialize_entry(name, alias)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IndexAliases {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AliasesVisitor;

        impl<'de> Visitor<'de> for AliasesVisitor {
            type Value = IndexAliases;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of alias names to alias definitions")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut aliases = IndexAliases::new();
                while let Some((name, body)) = access.next_entry::<AliasName, AliasBody>()? {
                    aliases.insert(IndexAlias::from_body(name, body));
                }
                Ok(aliases)
            }
        }

        deserializer.deserialize_map(AliasesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alias(name: &str) -> IndexAlias {
        IndexAlias::new(AliasName::parse(name).unwrap())
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut aliases = IndexAliases::new();
        assert!(aliases.is_empty());

        assert!(aliases.insert(alias("current")).is_none());
        assert!(aliases.contains("current"));
        assert!(!aliases.contains("Current"));
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases.get("current").map(|a| a.name().as_str()), Some("current"));
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut aliases = IndexAliases::new();
        aliases.insert(alias("current"));
        let previous = aliases.insert(alias("current").write_index(true));
        assert_eq!(previous.map(|a| a.is_write_index), Some(false));
        assert_eq!(aliases.len(), 1);
        assert!(aliases.get("current").unwrap().is_write_index);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut aliases: IndexAliases = [alias("a"), alias("b"), alias("c")].into_iter().collect();
        assert_eq!(aliases.remove("b").map(|a| a.name().to_string()), Some("b".to_string()));
        assert!(aliases.remove("b").is_none());
        assert_eq!(aliases.len(), 2);

        aliases.clear();
        assert!(aliases.is_empty());
    }

    #[test]
    fn test_iteration_is_ordered_by_name() {
        let aliases: IndexAliases = [alias("zeta"), alias("alpha"), alias("mid")]
            .into_iter()
            .collect();
        let names: Vec<_> = aliases.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
        assert_eq!((&aliases).into_iter().count(), 3);
    }

    #[test]
    fn test_get_mut_updates_definition() {
        let mut aliases: IndexAliases = [alias("current")].into_iter().collect();
        if let Some(a) = aliases.get_mut("current") {
            a.is_hidden = true;
        }
        assert!(aliases.get("current").unwrap().is_hidden);
    }

    #[test]
    fn test_serializes_as_aliases_object() {
        let aliases: IndexAliases = [
            alias("logs-current").write_index(true),
            alias("logs-eu")
                .with_filter(json!({ "term": { "region": "eu" } }))
                .with_routing("1")
                .with_search_routing("1,2"),
        ]
        .into_iter()
        .collect();

        let value = serde_json::to_value(&aliases).unwrap();
        assert_eq!(
            value,
            json!({
                "logs-current": { "is_hidden": false, "is_write_index": true },
                "logs-eu": {
                    "filter": { "term": { "region": "eu" } },
                    "is_hidden": false,
                    "is_write_index": false,
                    "routing": "1",
                    "search_routing": "1,2"
                }
            })
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let aliases: IndexAliases = [alias("a").hidden(true).with_index_routing("7"), alias("b")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&aliases).unwrap();
        let parsed: IndexAliases = serde_json::from_str(&json).unwrap();
        assert_eq!(aliases, parsed);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let parsed: IndexAliases = serde_json::from_value(json!({ "current": {} })).unwrap();
        let current = parsed.get("current").unwrap();
        assert!(!current.is_hidden);
        assert!(current.filter.is_none());
    }

    #[test]
    fn test_deserialize_rejects_invalid_alias_name() {
        let result: Result<IndexAliases, _> =
            serde_json::from_value(json!({ "_Current": {} }));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("cannot contain uppercase letters"));
    }
}
