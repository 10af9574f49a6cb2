// Library interface for trainlog modules
// This allows integration tests to access the calculation layer

pub mod dispatch;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod report;
pub mod running;
pub mod swimming;
pub mod walking;

// Re-export commonly used types for convenience
pub use dispatch::read_package;
pub use error::{DispatchError, Result, TrainlogError};
pub use metrics::TrainingMetrics;
pub use models::{Sport, Workout};
pub use report::TrainingSummary;
pub use running::RunningWorkout;
pub use swimming::SwimmingWorkout;
pub use walking::WalkingWorkout;
