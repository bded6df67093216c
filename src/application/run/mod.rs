//! Run Use Case
//!
//! Configure and build with the external build tool, then collect
//! executables into `bin/`.

mod options;
mod result;
mod use_case;


pub use options::RunOptions;
pub use result::RunResult;
pub use use_case::{collect_artifacts, RunUseCase};
