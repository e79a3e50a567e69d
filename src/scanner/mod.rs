pub mod candidate;
pub mod selector;
pub mod walk;

pub use candidate::Candidate;
pub use selector::{Exclusion, Selector};
pub use walk::walk_files;
