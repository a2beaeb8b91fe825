//! Process-wide default logger and free logging functions
//!
//! The default logger is created once, on first use, from the global
//! factory's default provider under the name `global`. It can be replaced at
//! any time with [`set_global_logger`]; replacement is an atomic pointer swap,
//! so a concurrent caller sees either the old or the new logger. Every free
//! function looks the logger up again, so a replacement applies to all later
//! calls.

use crate::core::{ConfigMap, Field, Logger};
use crate::factory::global_factory;
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

/// Name given to the lazily created default logger
pub const GLOBAL_LOGGER_NAME: &str = "global";

static GLOBAL_LOGGER: Lazy<ArcSwap<Arc<dyn Logger>>> =
    Lazy::new(|| ArcSwap::from_pointee(create_default_logger()));

fn create_default_logger() -> Arc<dyn Logger> {
    Arc::from(global_factory().create_logger(GLOBAL_LOGGER_NAME))
}

/// The process-wide default logger
pub fn get_logger() -> Arc<dyn Logger> {
    let current = GLOBAL_LOGGER.load();
    Arc::clone(&**current)
}

/// Replace the process-wide default logger
pub fn set_global_logger(logger: impl Into<Arc<dyn Logger>>) {
    GLOBAL_LOGGER.store(Arc::new(logger.into()));
}

/// Rebuild the default logger from the global factory's current default provider
pub fn reset_global_logger() {
    GLOBAL_LOGGER.store(Arc::new(create_default_logger()));
}

/// New logger from the global factory's default provider
pub fn logger_named(name: &str) -> Box<dyn Logger> {
    global_factory().create_logger(name)
}

/// New logger from a named provider of the global factory
pub fn logger_with_provider(name: &str, provider: &str) -> Box<dyn Logger> {
    global_factory().create_logger_with_provider(name, provider)
}

/// New logger from a configuration map, via the global factory
pub fn logger_with_config(name: &str, config: &ConfigMap) -> Box<dyn Logger> {
    global_factory().create_logger_with_config(name, config)
}

pub fn debug(message: &str, fields: &[Field]) {
    get_logger().debug(message, fields);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    get_logger().debugf(args);
}

pub fn info(message: &str, fields: &[Field]) {
    get_logger().info(message, fields);
}

pub fn infof(args: fmt::Arguments<'_>) {
    get_logger().infof(args);
}

pub fn warn(message: &str, fields: &[Field]) {
    get_logger().warn(message, fields);
}

pub fn warnf(args: fmt::Arguments<'_>) {
    get_logger().warnf(args);
}

pub fn error(message: &str, fields: &[Field]) {
    get_logger().error(message, fields);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    get_logger().errorf(args);
}

/// Emit through the default logger, then terminate
pub fn fatal(message: &str, fields: &[Field]) {
    get_logger().fatal(message, fields);
}

pub fn fatalf(args: fmt::Arguments<'_>) {
    get_logger().fatalf(args);
}

/// Emit through the default logger, then unwind
pub fn panic(message: &str, fields: &[Field]) {
    get_logger().panic(message, fields);
}

pub fn panicf(args: fmt::Arguments<'_>) {
    get_logger().panicf(args);
}
