// Domain layer - colors, palette, dashboard tree and findings
pub mod color;
pub mod dashboard;
pub mod issue;
pub mod palette;
