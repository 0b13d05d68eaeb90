/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod decorators;
pub mod formatters;
pub mod info;
pub mod memory;
pub mod native;
pub mod streams;
