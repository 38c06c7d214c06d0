// Form state: the edit vocabulary the form-state provider sends.
// Edits are applied to a copy of the posted snapshot, then everything is recomputed.

pub mod edits;
pub mod handlers;
