pub mod context;
pub mod evaluator;
pub mod geometry;
pub mod overlay;
pub mod service;
pub mod session;
pub mod throttle;
pub mod validity;

pub use evaluator::FormDefect;
pub use overlay::{skeleton_geometry, SkeletonGeometry};
pub use service::{ClassifyPipeline, ClassifyService};
pub use session::{FrameOutput, RepPhase, SessionEngine, SessionState};
pub use throttle::EvalThrottle;
pub use validity::is_pose_valid;
