// Application layer - rule checkers, color autofix and the reporter
pub mod chart_checkers;
pub mod checker;
pub mod color_autofix;
pub mod color_checker;
pub mod index_checker;
pub mod prose;
pub mod query_checker;
pub mod query_checks;
pub mod reporter;
