//! Data-source value types: records, queries, schemas and class configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single record as a JSON object map.
pub type Record = serde_json::Map<String, Value>;

/// A query against one entity: equality conditions plus paging hints.
///
/// Built by chaining; accessors expose the parts adapters need.
///
/// ```rust
/// use trellis_source::Query;
///
/// let query = Query::new("posts").filter("author", "arthur").take(10).skip(20);
/// assert_eq!(query.entity(), "posts");
/// assert_eq!(query.limit(), Some(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    entity: String,
    conditions: Record,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl Query {
    /// Creates a query against the given entity.
    #[must_use]
    pub fn new(entity: impl Into<String>) -> Self {
        Self { entity: entity.into(), ..Self::default() }
    }

    /// Adds an equality condition, chainable.
    #[must_use]
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.insert(field.into(), value.into());
        self
    }

    /// Caps the number of returned records.
    #[must_use]
    pub const fn take(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skips the first `offset` matching records.
    #[must_use]
    pub const fn skip(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn entity(&self) -> &str {
        &self.entity
    }

    #[must_use]
    pub const fn conditions(&self) -> &Record {
        &self.conditions
    }

    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Whether a record satisfies every condition of this query.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.conditions.iter().all(|(field, expected)| record.get(field) == Some(expected))
    }
}

/// Field value kinds a schema can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Id,
    String,
    Integer,
    Float,
    Boolean,
    DateTime,
}

/// One named, typed field of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

/// An ordered field list describing one entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, chainable. A repeated name replaces the earlier kind.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|f| f.name == name) {
            slot.kind = kind;
        } else {
            self.fields.push(Field { name, kind });
        }
        self
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Class names filling each data-layer role for a bound model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleClasses {
    pub entity: String,
    pub set: String,
    pub relationship: String,
    pub schema: String,
}

impl Default for RoleClasses {
    fn default() -> Self {
        Self {
            entity: "Record".to_owned(),
            set: "RecordSet".to_owned(),
            relationship: "Relationship".to_owned(),
            schema: "Schema".to_owned(),
        }
    }
}

/// Per-model metadata governing key assignment and schema enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMeta {
    /// Primary key field name.
    pub key: String,
    /// When locked, fields absent from the schema are dropped during casting.
    pub locked: bool,
}

impl Default for SourceMeta {
    fn default() -> Self {
        Self { key: "id".to_owned(), locked: true }
    }
}

/// The merged configuration a model receives from its source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassConfig {
    pub classes: RoleClasses,
    pub meta: SourceMeta,
}

/// A partial [`ClassConfig`], registered per model at build time; unset
/// fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassOverride {
    pub entity: Option<String>,
    pub set: Option<String>,
    pub relationship: Option<String>,
    pub schema: Option<String>,
    pub key: Option<String>,
    pub locked: Option<bool>,
}

impl ClassOverride {
    pub(crate) fn apply(&self, config: &mut ClassConfig) {
        if let Some(entity) = &self.entity {
            config.classes.entity.clone_from(entity);
        }
        if let Some(set) = &self.set {
            config.classes.set.clone_from(set);
        }
        if let Some(relationship) = &self.relationship {
            config.classes.relationship.clone_from(relationship);
        }
        if let Some(schema) = &self.schema {
            config.classes.schema.clone_from(schema);
        }
        if let Some(key) = &self.key {
            config.meta.key.clone_from(key);
        }
        if let Some(locked) = self.locked {
            config.meta.locked = locked;
        }
    }
}

/// Model association kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    BelongsTo,
    HasOne,
    HasMany,
}

/// A resolved association between two entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub name: String,
    pub kind: RelationshipKind,
    pub from: String,
    pub to: String,
    /// Foreign key field linking the two sides.
    pub key: String,
}

/// Options for a single `is_connected_with` probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectOptions {
    /// Connect first when currently disconnected.
    pub auto_connect: bool,
}

/// Source-wide behavior options.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    /// Connect lazily on the first data operation.
    pub auto_connect: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self { auto_connect: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_matches_on_every_condition() {
        let query = Query::new("posts").filter("author", "arthur").filter("draft", false);
        let mut record = Record::new();
        record.insert("author".to_owned(), "arthur".into());
        record.insert("draft".to_owned(), false.into());
        record.insert("title".to_owned(), "untitled".into());
        assert!(query.matches(&record));

        record.insert("draft".to_owned(), true.into());
        assert!(!query.matches(&record));
    }

    #[test]
    fn schema_replaces_repeated_field_names() {
        let schema =
            Schema::new().field("id", FieldKind::Id).field("id", FieldKind::String);
        assert_eq!(schema.names(), ["id"]);
        assert_eq!(schema.get("id").map(|f| f.kind), Some(FieldKind::String));
    }

    #[test]
    fn overrides_fall_back_to_defaults() {
        let mut config = ClassConfig::default();
        ClassOverride { locked: Some(false), ..ClassOverride::default() }.apply(&mut config);
        assert!(!config.meta.locked);
        assert_eq!(config.meta.key, "id");
        assert_eq!(config.classes.entity, "Record");
    }
}
