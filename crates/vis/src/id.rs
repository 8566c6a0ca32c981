//! Identifiers of mount points and individual draws.

use std::borrow::Cow;
use std::fmt::Display;
use std::fmt::Formatter;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use serde::Deserialize;
use serde::Serialize;

/// The name of a container in the host document into which a chart is drawn.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MountId(Cow<'static, str>);

impl MountId {
    /// The mount point of the delay by hour of day chart.
    pub const TIME_OF_DAY: MountId = MountId::from_static("time-of-day-plot");

    /// The mount point of the delay by month chart.
    pub const SEASONAL: MountId = MountId::from_static("seasonal-plot");

    /// The mount point of the aircraft age scatter chart.
    pub const AIRCRAFT_AGE: MountId = MountId::from_static("aircraft-age-plot");

    /// The mount point of the airport cascade network.
    pub const CASCADE: MountId = MountId::from_static("cascade-plot");

    /// The mount point of the ROC curve.
    pub const MODEL_PERFORMANCE: MountId = MountId::from_static("model-performance-plot");

    /// Creates a mount id from a string known at compile time.
    pub const fn from_static(id: &'static str) -> MountId {
        Self(Cow::Borrowed(id))
    }

    /// Creates a mount id from an owned string.
    pub fn new(id: impl Into<String>) -> MountId {
        Self(Cow::Owned(id.into()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for MountId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Process-unique identity of a single draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct DrawId(u64);

impl DrawId {
    pub(crate) fn next() -> DrawId {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);

        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for DrawId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
