mod formatter_factory;
mod info_factory;

pub use formatter_factory::{render, FormatterFactory};
pub use info_factory::InfoFactory;
