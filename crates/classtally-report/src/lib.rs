pub mod console;
pub mod json;
pub mod text;

pub use console::ConsoleReporter;
