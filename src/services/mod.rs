pub mod auto_flag;
pub mod gate;
pub mod safety;
pub mod sentiment;

pub use auto_flag::AutoFlagReporter;
pub use gate::ContentGate;
pub use safety::{SafetyEvaluator, SafetyPolicy};
