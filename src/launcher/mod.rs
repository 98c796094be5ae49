//! Launch argument construction and session execution.

pub mod features;
pub mod locate;
pub mod plan;
pub mod request;
pub mod spawn;

pub use features::{partition, FeatureFlag, FeaturePartition, RECOGNIZED_FLAGS};
pub use locate::{find_release, installed_releases, Installation};
pub use plan::{build_launch_plan, LaunchPlan, LaunchPlanError, LaunchWarning, DEBUG_STOP_ENV};
pub use request::{LaunchMode, LaunchRequest};
