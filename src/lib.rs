//! blogview: the in-memory engine behind a blog listing view.
//!
//! blogview provides:
//! - An asynchronously loaded post collection with stale-result discarding
//! - A filter made of a free-text title search and a set of required tags
//! - A derived listing that is recomputed from its inputs on every read
//! - Case-insensitive title search backed by a linear-time KMP matcher
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Store handle (store)                               │  ← UI-facing API
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and actions                       │
//! │  - Load lifecycle with generations                  │
//! │  - Filter state and derived view                    │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Search        │   │ Storage       │   │ Worker        │
//! │ (search/)     │   │ (storage/)    │   │ (worker/)     │
//! │ - KMP matcher │   │ - PostLoader  │   │ - Run loader  │
//! │               │   │ - JSON file   │   │ - Catch fails │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! │  - Post model and errors (domain/)                  │
//! │  - Paths (infrastructure/)                          │
//! │  - tracing subscriber setup (observability/)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: State container, event handler, filters, derived view
//! - [`domain`]: Post model and error types
//! - [`infrastructure`]: Path helpers
//! - [`observability`]: Tracing subscriber initialization
//! - [`search`]: KMP substring matcher
//! - [`storage`]: Post loaders
//! - [`store`]: The shared handle handed to the UI
//! - [`worker`]: Loader execution and reply protocol
//!
//! # Examples
//!
//! ```rust
//! use blogview::storage::StaticLoader;
//! use blogview::{BlogStore, Post};
//!
//! let (store, initial) = BlogStore::provide(StaticLoader::new(vec![
//!     Post::new(1, "Vue.js Best Practices").with_tags(["vue", "javascript"]),
//!     Post::new(2, "TypeScript Tips").with_tags(["typescript", "javascript"]),
//!     Post::new(3, "React vs Vue").with_tags(["react", "vue"]),
//! ]));
//! futures::executor::block_on(initial);
//!
//! store.set_search("vue");
//! let titles: Vec<String> = store.filtered_posts().into_iter().map(|p| p.title).collect();
//! assert_eq!(titles, ["Vue.js Best Practices", "React vs Vue"]);
//!
//! store.reset_filters();
//! assert!(!store.filters_active());
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod search;
pub mod storage;
pub mod store;
pub mod worker;

pub use app::{BlogState, BlogView, FilterState, LoadStatus};
pub use domain::{BlogviewError, LoadFailure, Post, PostComment, PostId, Result};
pub use store::{BlogStore, LoadOutcome, LoadTask};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use storage::JsonFileLoader;

/// Store configuration.
///
/// Can be built from a flat key/value map handed over by the host
/// ([`Config::from_map`]) or from a TOML document ([`Config::from_toml_str`],
/// [`Config::from_file`]).
///
/// # Example
///
/// ```toml
/// posts_path = "~/blog/posts.json"
/// trace_level = "debug"
/// log_file = "~/.local/state/blogview.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the JSON posts file.
    ///
    /// A leading `~` is expanded. Default: `posts.json` in the data
    /// directory (see [`infrastructure::get_data_dir`]).
    pub posts_path: Option<String>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// File to append log lines to instead of stderr.
    pub log_file: Option<String>,
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// Unknown keys are ignored; blank values count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use blogview::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("posts_path".to_string(), "/srv/blog/posts.json".to_string());
    /// map.insert("trace_level".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.posts_path.as_deref(), Some("/srv/blog/posts.json"));
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            posts_path: get("posts_path"),
            trace_level: get("trace_level"),
            log_file: get("log_file"),
        }
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`BlogviewError::Config`] if the document is not valid TOML or
    /// a value has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| BlogviewError::Config(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`BlogviewError::Config`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Resolved location of the posts file.
    #[must_use]
    pub fn resolved_posts_path(&self) -> PathBuf {
        self.posts_path
            .as_deref()
            .map_or_else(infrastructure::default_posts_path, infrastructure::expand_tilde)
    }
}

/// Initializes logging and a file-backed store, and starts the first load.
///
/// # Side Effects
///
/// - Installs the tracing subscriber (see [`observability::init_tracing`])
/// - Invokes the loader; the returned task applies its result when driven
///
/// # Example
///
/// ```rust,no_run
/// use blogview::{initialize, Config};
///
/// let config = Config::from_toml_str(r#"posts_path = "/srv/blog/posts.json""#)?;
/// let (store, initial) = initialize(&config);
/// futures::executor::block_on(initial);
/// println!("{} posts", store.posts().len());
/// # Ok::<(), blogview::BlogviewError>(())
/// ```
#[must_use = "the initial load only commits when the task is driven"]
pub fn initialize(config: &Config) -> (BlogStore, LoadTask) {
    observability::init_tracing(config);

    let posts_path = config.resolved_posts_path();
    tracing::debug!(posts_path = ?posts_path, "initializing blog store");

    BlogStore::provide(JsonFileLoader::new(posts_path))
}
