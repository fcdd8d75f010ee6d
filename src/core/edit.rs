/// Notice shown by the edit affordance.
pub const EDIT_NOT_IMPLEMENTED: &str = "Editing items is not implemented yet.";

/// Edit entry point. Performs no mutation and only returns the notice to show.
pub fn edit_item(_id: i64) -> &'static str {
    EDIT_NOT_IMPLEMENTED
}
