//! Provider trait: constructs loggers for one backend

use super::logger::Logger;
use super::options::ConfigMap;

/// Factory capability registered with the [`LogFactory`](crate::LogFactory).
///
/// Providers are stateless apart from what they need to build their backend
/// and never keep the loggers they return. Both methods are total: invalid or
/// missing configuration falls back to defaults.
pub trait LoggerProvider: Send + Sync {
    /// Build a logger with default options
    fn create(&self, name: &str) -> Box<dyn Logger>;

    /// Build a logger from a loosely typed configuration map
    fn create_with_config(&self, name: &str, config: &ConfigMap) -> Box<dyn Logger>;
}
