//! `use garnish::prelude::*;` brings every extension trait and the temporal value types into scope.

pub use crate::config::{Config, SentenceConnectors, WeekStart};
pub use crate::ext::{
    Change, Compact, DateTimeExt, Dig, FloatExt, IntegerExt, MapExt, MatrixExt, PluckExt,
    Segment, SliceExt, StrExt, VecExt,
};
pub use crate::temporal::{DateRange, DateSteps, Duration, IntoDuration};
pub use crate::types::Granularity;
