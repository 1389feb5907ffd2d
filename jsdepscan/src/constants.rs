/// Qualified name of the declaration call matched by the scanner.
pub const ADD_DEPENDENCY: &str = "goog.addDependency";

/// Qualified name of the provide call recognized by the ordering check.
pub const PROVIDE: &str = "goog.provide";

/// Qualified name of the require call recognized by the ordering check.
pub const REQUIRE: &str = "goog.require";

/// Qualified name of the module-declare call; treated as provide-equivalent
/// for ordering purposes.
pub const MODULE: &str = "goog.module";
