//! Provider registry
//!
//! [`LogFactory`] maps provider names to [`LoggerProvider`]s and remembers which
//! one is the default. Logger creation is total: an unknown provider falls back
//! to the default provider, and a missing default falls back to a plain
//! [`ConsoleLogger`] that cannot be unregistered.

use crate::adapters::{ConsoleLogger, ConsoleLoggerProvider, StdLoggerProvider};
use crate::core::{ConfigMap, Logger, LoggerConfig, LoggerProvider};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

pub const CONSOLE_PROVIDER: &str = "console";
pub const STD_PROVIDER: &str = "std";
#[cfg(feature = "tracing-backend")]
pub const TRACING_PROVIDER: &str = "tracing";
#[cfg(feature = "log-backend")]
pub const LOG_PROVIDER: &str = "log";

/// Default provider name of a fresh factory
pub const DEFAULT_PROVIDER: &str = CONSOLE_PROVIDER;

static GLOBAL_FACTORY: Lazy<LogFactory> = Lazy::new(LogFactory::with_builtin_providers);

/// The process-wide factory, created with the built-in providers on first access
pub fn global_factory() -> &'static LogFactory {
    &GLOBAL_FACTORY
}

struct FactoryState {
    providers: HashMap<String, Arc<dyn LoggerProvider>>,
    default_provider: String,
}

/// Thread-safe registry of logger providers
///
/// # Example
///
/// ```
/// use logface::{LogFactory, StdLoggerProvider};
///
/// let factory = LogFactory::with_builtin_providers();
/// factory.register_provider("plain", StdLoggerProvider);
/// factory.set_default_provider("plain");
///
/// let logger = factory.create_logger("jobs");
/// logger.info("scheduler started", &[]);
/// ```
pub struct LogFactory {
    state: RwLock<FactoryState>,
}

impl LogFactory {
    /// Empty factory whose default provider name is `console`
    pub fn new() -> Self {
        Self {
            state: RwLock::new(FactoryState {
                providers: HashMap::new(),
                default_provider: DEFAULT_PROVIDER.to_string(),
            }),
        }
    }

    /// Factory with every bundled backend registered and `console` as default
    pub fn with_builtin_providers() -> Self {
        let factory = Self::new();
        factory.install_builtin_providers();
        factory
    }

    fn install_builtin_providers(&self) {
        self.register_provider(CONSOLE_PROVIDER, ConsoleLoggerProvider);
        self.register_provider(STD_PROVIDER, StdLoggerProvider);
        #[cfg(feature = "tracing-backend")]
        self.register_provider(TRACING_PROVIDER, crate::adapters::TracingLoggerProvider);
        #[cfg(feature = "log-backend")]
        self.register_provider(LOG_PROVIDER, crate::adapters::LogCrateLoggerProvider);
        self.set_default_provider(DEFAULT_PROVIDER);
    }

    /// Insert or replace a provider
    pub fn register_provider<P>(&self, name: impl Into<String>, provider: P)
    where
        P: LoggerProvider + 'static,
    {
        self.register_shared_provider(name, Arc::new(provider));
    }

    /// Insert or replace an already shared provider
    pub fn register_shared_provider(&self, name: impl Into<String>, provider: Arc<dyn LoggerProvider>) {
        self.state.write().providers.insert(name.into(), provider);
    }

    /// Remove a provider; unknown names are ignored
    pub fn unregister_provider(&self, name: &str) {
        self.state.write().providers.remove(name);
    }

    /// Set the default provider name; it does not have to be registered yet
    pub fn set_default_provider(&self, name: impl Into<String>) {
        self.state.write().default_provider = name.into();
    }

    pub fn default_provider(&self) -> String {
        self.state.read().default_provider.clone()
    }

    pub fn get_provider(&self, name: &str) -> Option<Arc<dyn LoggerProvider>> {
        self.state.read().providers.get(name).cloned()
    }

    /// Registered provider names, sorted
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.read().providers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Drop every registration and restore the built-in providers
    pub fn reset(&self) {
        {
            let mut state = self.state.write();
            state.providers.clear();
            state.default_provider = DEFAULT_PROVIDER.to_string();
        }
        self.install_builtin_providers();
    }

    /// Resolve `provider_name`, then the default provider
    ///
    /// Both lookups happen under one read lock so a concurrent default switch
    /// cannot be observed halfway.
    fn resolve(&self, provider_name: Option<&str>) -> Option<Arc<dyn LoggerProvider>> {
        let state = self.state.read();
        provider_name
            .and_then(|name| state.providers.get(name))
            .or_else(|| state.providers.get(&state.default_provider))
            .cloned()
    }

    /// Create a logger with the default provider
    pub fn create_logger(&self, name: &str) -> Box<dyn Logger> {
        match self.resolve(None) {
            Some(provider) => provider.create(name),
            None => Box::new(ConsoleLogger::new(name)),
        }
    }

    /// Create a logger with `provider_name`, falling back to the default provider
    pub fn create_logger_with_provider(&self, name: &str, provider_name: &str) -> Box<dyn Logger> {
        match self.resolve(Some(provider_name)) {
            Some(provider) => provider.create(name),
            None => Box::new(ConsoleLogger::new(name)),
        }
    }

    /// Create a logger from a configuration map
    ///
    /// The `provider` key selects the provider (default provider otherwise) and
    /// the whole map is handed to it.
    pub fn create_logger_with_config(&self, name: &str, config: &ConfigMap) -> Box<dyn Logger> {
        let parsed = LoggerConfig::from_map(config);
        match self.resolve(parsed.provider.as_deref()) {
            Some(provider) => provider.create_with_config(name, config),
            None => ConsoleLoggerProvider.create_with_config(name, config),
        }
    }
}

impl Default for LogFactory {
    fn default() -> Self {
        Self::new()
    }
}
