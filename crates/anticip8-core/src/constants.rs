/// Minimum size of the insurance set injected during hybrid fusion.
pub const INSURANCE_MIN: usize = 5;

/// Insurance set size per requested result.
pub const INSURANCE_PER_LIMIT: usize = 3;

/// Number of raw fields reported per table by the explain view.
pub const EXPLAIN_TOP_N: usize = 10;

/// Separator between service and path in counter-store hash fields.
pub const FIELD_SEPARATOR: &str = "|";

/// Separator between service and path in embedding artifact keys and items.
pub const NODE_SEPARATOR: &str = "::";

/// Placeholder substituted for integer path segments.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Placeholder substituted for UUID path segments.
pub const UUID_PLACEHOLDER: &str = "{uuid}";

/// User key recorded when an event carries none.
pub const ANONYMOUS_USER: &str = "anon";
