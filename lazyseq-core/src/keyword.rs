// lazyseq-core - Interned keywords used as metadata keys
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Keywords name metadata entries attached to sequences.
//!
//! Keywords are interned through a global table, so two keywords with the
//! same namespace and name share storage and compare by pointer. Interned
//! keywords are never deallocated; metadata keys are expected to come from a
//! small, fixed vocabulary.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// A metadata key with optional namespace, printed as `:name` or `:ns/name`.
#[derive(Clone)]
pub struct Keyword {
    inner: Arc<KeywordInner>,
}

#[derive(Debug)]
struct KeywordInner {
    namespace: Option<Arc<str>>,
    name: Arc<str>,
}

type InternKey = (Option<Arc<str>>, Arc<str>);

static INTERNER: OnceLock<Mutex<HashMap<InternKey, Arc<KeywordInner>>>> = OnceLock::new();

fn intern(namespace: Option<&str>, name: &str) -> Arc<KeywordInner> {
    let key: InternKey = (namespace.map(Arc::from), Arc::from(name));
    let mut table = INTERNER
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        // The table is only ever inserted into, so a poisoned guard is still consistent.
        .unwrap_or_else(PoisonError::into_inner);

    Arc::clone(table.entry(key.clone()).or_insert_with(|| {
        Arc::new(KeywordInner {
            namespace: key.0,
            name: key.1,
        })
    }))
}

impl Keyword {
    /// Create a keyword with no namespace.
    pub fn new(name: &str) -> Self {
        Keyword {
            inner: intern(None, name),
        }
    }

    /// Create a namespaced keyword.
    pub fn with_namespace(namespace: &str, name: &str) -> Self {
        Keyword {
            inner: intern(Some(namespace), name),
        }
    }

    /// Parse `:foo` or `:ns/foo`. The leading colon is optional.
    pub fn parse(s: &str) -> Self {
        let s = s.strip_prefix(':').unwrap_or(s);
        match s.split_once('/') {
            Some((ns, name)) => Keyword::with_namespace(ns, name),
            None => Keyword::new(s),
        }
    }

    #[inline]
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.inner.namespace.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.namespace {
            Some(ns) => write!(f, ":{}/{}", ns, self.inner.name),
            None => write!(f, ":{}", self.inner.name),
        }
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keyword({})", self)
    }
}

impl PartialEq for Keyword {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Keyword {}

impl PartialOrd for Keyword {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyword {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Un-namespaced keywords sort first
        self.inner
            .namespace
            .is_some()
            .cmp(&other.inner.namespace.is_some())
            .then_with(|| self.inner.namespace.cmp(&other.inner.namespace))
            .then_with(|| self.inner.name.cmp(&other.inner.name))
    }
}

impl Hash for Keyword {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.inner).hash(state);
    }
}
