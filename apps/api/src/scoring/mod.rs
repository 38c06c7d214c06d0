// ATS scoring: weighted heuristic over a resume snapshot.
// Recomputed from scratch on every request; there is no cached or incremental score.

pub mod ats;
pub mod handlers;
