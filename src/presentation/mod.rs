// Presentation layer - console output
pub mod console;
