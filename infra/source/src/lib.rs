//! # Data-Source Infrastructure
//!
//! This crate provides the scaffolding shared by all persistence backends:
//! the [`Adapter`] contract concrete backends implement and the [`Source`]
//! wrapper that adds connection-state tracking, lazy auto-connect, class
//! configuration and record casting on top of it.
//!
//! ## Key Features
//! - **Backend Agnostic**: adapters only implement data operations; the
//!   lifecycle and configuration plumbing lives here.
//! - **Lazy Connectivity**: data operations connect on first use when the
//!   source allows it, and fail fast otherwise.
//! - **Builder Pattern**: fluent API for registering per-model overrides.
//!
//! ## Example
//!
//! ```rust,ignore
//! use trellis_source::{Query, Source};
//!
//! let source = Source::builder(adapter).auto_connect(false).init();
//! source.connect().await?;
//! let posts = source.read(&Query::new("posts").take(10)).await?;
//! ```

mod cast;
mod error;
mod types;

pub use error::{SourceError, SourceErrorExt};
pub use types::{
    ClassConfig, ClassOverride, ConnectOptions, Field, FieldKind, Query, Record, Relationship,
    RelationshipKind, RoleClasses, Schema, SourceMeta, SourceOptions,
};

use fxhash::FxHashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, trace};
use trellis_kernel::safe_nanoid;

/// Operation names every source supports, before adapter extras.
const BASE_METHODS: &[&str] = &[
    "connect",
    "disconnect",
    "sources",
    "describe",
    "create",
    "read",
    "update",
    "delete",
    "schema",
    "cast",
    "relationship",
    "name",
];

/// The abstract-method contract concrete backends implement.
///
/// Data operations are async; the `name`, `relationship` and `methods`
/// hooks are synchronous and carry defaults so minimal adapters only
/// implement what their backend supports.
#[allow(async_fn_in_trait)]
pub trait Adapter: Send + Sync + 'static {
    async fn connect(&self) -> Result<(), SourceError>;
    async fn disconnect(&self) -> Result<(), SourceError>;

    /// Names of the entities available in the backend.
    async fn sources(&self) -> Result<Vec<String>, SourceError>;

    /// Schema of one entity.
    async fn describe(&self, entity: &str) -> Result<Schema, SourceError>;

    async fn create(&self, query: &Query, record: Record) -> Result<Record, SourceError>;
    async fn read(&self, query: &Query) -> Result<Vec<Record>, SourceError>;
    async fn update(&self, query: &Query, record: Record) -> Result<Record, SourceError>;

    /// Deletes matching records, returning how many were removed.
    async fn delete(&self, query: &Query) -> Result<u64, SourceError>;

    /// Quotes an identifier for the backend; passthrough by default.
    fn name(&self, identifier: &str) -> String {
        identifier.to_owned()
    }

    /// Resolves a model association; unsupported by default.
    fn relationship(
        &self,
        kind: RelationshipKind,
        name: &str,
    ) -> Result<Relationship, SourceError> {
        let _ = kind;
        Err(SourceError::Unsupported {
            message: format!("relationship `{name}` cannot be resolved by this adapter").into(),
            context: None,
        })
    }

    /// Extra capability names beyond the base operations.
    fn methods(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

/// Inner state of the [`Source`] wrapper.
#[derive(Debug)]
struct SourceInner<A> {
    adapter: A,
    options: SourceOptions,
    overrides: FxHashMap<String, ClassOverride>,
    connected: AtomicBool,
    // Serializes state transitions so concurrent first operations perform a
    // single backend handshake.
    transition: Mutex<()>,
}

/// Adapter wrapper that provides thread-safety, connection-state tracking
/// and contextual error handling.
///
/// Cheap to clone; all state is behind an `Arc`.
#[derive(Debug)]
pub struct Source<A> {
    inner: Arc<SourceInner<A>>,
}

impl<A> Clone for Source<A> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<A: Adapter> Source<A> {
    /// Creates a new [`SourceBuilder`] around the given adapter.
    pub fn builder(adapter: A) -> SourceBuilder<A> {
        SourceBuilder::new(adapter)
    }

    /// Establishes the backend connection; a no-op when already connected.
    ///
    /// Concurrent callers race for one transition: the winner performs the
    /// handshake, the rest wait for it and return without reaching the
    /// adapter again.
    ///
    /// # Errors
    /// Propagates the adapter's connection failure.
    #[instrument(skip(self))]
    pub async fn connect(&self) -> Result<(), SourceError> {
        if self.is_connected() {
            return Ok(());
        }
        let _transition = self.inner.transition.lock().await;
        if self.is_connected() {
            return Ok(());
        }
        self.inner.adapter.connect().await.context("Establishing connection")?;
        self.inner.connected.store(true, Ordering::Release);
        debug!("data source connected");
        Ok(())
    }

    /// Tears down the backend connection; a no-op when already disconnected.
    ///
    /// # Errors
    /// Propagates the adapter's teardown failure; the source stays marked
    /// connected in that case.
    #[instrument(skip(self))]
    pub async fn disconnect(&self) -> Result<(), SourceError> {
        if !self.is_connected() {
            return Ok(());
        }
        let _transition = self.inner.transition.lock().await;
        if !self.is_connected() {
            return Ok(());
        }
        self.inner.adapter.disconnect().await.context("Closing connection")?;
        self.inner.connected.store(false, Ordering::Release);
        debug!("data source disconnected");
        Ok(())
    }

    /// Current connection state; never triggers a connect.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.inner.connected.load(Ordering::Acquire)
    }

    /// Connection state with an optional lazy connect.
    ///
    /// # Errors
    /// Propagates the connection failure when `auto_connect` is requested.
    pub async fn is_connected_with(
        &self,
        options: ConnectOptions,
    ) -> Result<bool, SourceError> {
        if !self.is_connected() && options.auto_connect {
            self.connect().await?;
        }
        Ok(self.is_connected())
    }

    /// The merged class configuration for one model: defaults overlaid with
    /// the override registered at build time, if any.
    #[must_use]
    pub fn configure_class(&self, model: &str) -> ClassConfig {
        let mut config = ClassConfig::default();
        if let Some(overlay) = self.inner.overrides.get(model) {
            overlay.apply(&mut config);
        }
        config
    }

    /// Operation names this source supports: the base set plus whatever the
    /// adapter declares on top.
    #[must_use]
    pub fn methods(&self) -> Vec<&'static str> {
        let mut methods = BASE_METHODS.to_vec();
        for extra in self.inner.adapter.methods() {
            if !methods.contains(&extra) {
                methods.push(extra);
            }
        }
        methods
    }

    /// Entities available in the backend.
    ///
    /// # Errors
    /// [`SourceError::NotConnected`] when disconnected without auto-connect,
    /// or the adapter's failure.
    pub async fn sources(&self) -> Result<Vec<String>, SourceError> {
        self.ensure_connected().await?;
        self.inner.adapter.sources().await
    }

    /// Schema of one entity.
    ///
    /// # Errors
    /// [`SourceError::NotConnected`] when disconnected without auto-connect,
    /// or the adapter's failure.
    pub async fn describe(&self, entity: &str) -> Result<Schema, SourceError> {
        self.ensure_connected().await?;
        self.inner.adapter.describe(entity).await
    }

    /// Schema of the entity a query addresses.
    ///
    /// # Errors
    /// See [`Source::describe`].
    pub async fn schema(&self, query: &Query) -> Result<Schema, SourceError> {
        self.describe(query.entity()).await
    }

    /// Coerces record values to the schema's field kinds.
    ///
    /// Under `locked` metadata, fields absent from the schema are dropped;
    /// otherwise they pass through unchanged.
    #[must_use]
    pub fn cast(&self, meta: &SourceMeta, schema: &Schema, record: Record) -> Record {
        let mut out = Record::new();
        for (field, value) in record {
            match schema.get(&field) {
                Some(known) => {
                    out.insert(field, cast::cast_value(known.kind, value));
                }
                None if meta.locked => {
                    trace!(%field, "dropping field absent from locked schema");
                }
                None => {
                    out.insert(field, value);
                }
            }
        }
        out
    }

    /// Inserts a record, assigning the configured primary key when absent.
    ///
    /// # Errors
    /// [`SourceError::NotConnected`] when disconnected without auto-connect,
    /// or the adapter's failure.
    pub async fn create(&self, query: &Query, mut record: Record) -> Result<Record, SourceError> {
        self.ensure_connected().await?;
        let key = self.configure_class(query.entity()).meta.key;
        if !record.contains_key(&key) {
            record.insert(key, safe_nanoid!().into());
        }
        self.inner.adapter.create(query, record).await
    }

    /// Reads all records matching the query.
    ///
    /// # Errors
    /// [`SourceError::NotConnected`] when disconnected without auto-connect,
    /// or the adapter's failure.
    pub async fn read(&self, query: &Query) -> Result<Vec<Record>, SourceError> {
        self.ensure_connected().await?;
        self.inner.adapter.read(query).await
    }

    /// Updates records matching the query with the given values.
    ///
    /// # Errors
    /// [`SourceError::NotConnected`] when disconnected without auto-connect,
    /// or the adapter's failure.
    pub async fn update(&self, query: &Query, record: Record) -> Result<Record, SourceError> {
        self.ensure_connected().await?;
        self.inner.adapter.update(query, record).await
    }

    /// Deletes records matching the query, returning how many were removed.
    ///
    /// # Errors
    /// [`SourceError::NotConnected`] when disconnected without auto-connect,
    /// or the adapter's failure.
    pub async fn delete(&self, query: &Query) -> Result<u64, SourceError> {
        self.ensure_connected().await?;
        self.inner.adapter.delete(query).await
    }

    /// Quotes an identifier for the backend.
    #[must_use]
    pub fn name(&self, identifier: &str) -> String {
        self.inner.adapter.name(identifier)
    }

    /// Resolves a model association through the adapter.
    ///
    /// # Errors
    /// [`SourceError::Unsupported`] when the adapter has no association
    /// support.
    pub fn relationship(
        &self,
        kind: RelationshipKind,
        name: &str,
    ) -> Result<Relationship, SourceError> {
        self.inner.adapter.relationship(kind, name)
    }

    async fn ensure_connected(&self) -> Result<(), SourceError> {
        if self.is_connected() {
            return Ok(());
        }
        if self.inner.options.auto_connect {
            trace!("auto-connecting on first data operation");
            return self.connect().await;
        }
        Err(SourceError::NotConnected {
            message: "operation requires an established connection".into(),
            context: None,
        })
    }
}

/// A fluent builder for configuring a [`Source`].
///
/// `init` never touches the backend; the first connection happens through
/// [`Source::connect`] or lazily on the first data operation.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug)]
pub struct SourceBuilder<A> {
    adapter: A,
    options: SourceOptions,
    overrides: FxHashMap<String, ClassOverride>,
}

impl<A: Adapter> SourceBuilder<A> {
    fn new(adapter: A) -> Self {
        Self { adapter, options: SourceOptions::default(), overrides: FxHashMap::default() }
    }

    /// Replaces the source-wide options.
    pub const fn options(mut self, options: SourceOptions) -> Self {
        self.options = options;
        self
    }

    /// Enables or disables lazy connection on first data access.
    pub const fn auto_connect(mut self, auto_connect: bool) -> Self {
        self.options.auto_connect = auto_connect;
        self
    }

    /// Registers a per-model class-configuration override.
    pub fn configure(mut self, model: impl Into<String>, overlay: ClassOverride) -> Self {
        self.overrides.insert(model.into(), overlay);
        self
    }

    /// Consumes the builder, producing a disconnected [`Source`].
    pub fn init(self) -> Source<A> {
        info!(models = self.overrides.len(), "data source initialized");
        Source {
            inner: Arc::new(SourceInner {
                adapter: self.adapter,
                options: self.options,
                overrides: self.overrides,
                connected: AtomicBool::new(false),
                transition: Mutex::new(()),
            }),
        }
    }
}
