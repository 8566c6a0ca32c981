//! One pure builder per chart family.
//!
//! Every builder takes typed input, applies the dashboard's encoding policy
//! and returns a [PlotDescriptor](crate::chart::PlotDescriptor) bound to the
//! chart's mount point. Builders never synthesize data and never render.

pub mod error;

mod cascade;
mod roc;
mod scatter;
mod seasonal;
mod time_series;

pub use cascade::build_cascade;
pub use roc::build_roc;
pub use scatter::build_scatter_with_trend;
pub use seasonal::build_seasonal;
pub use time_series::build_time_series;
