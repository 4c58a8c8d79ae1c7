pub mod color;
pub mod dataset;
pub mod debounce;
pub mod groups;
pub mod history;
pub mod item;
pub mod selection;

mod error;

pub use color::{ColorDomain, ColorMapper, LegendEntry, Palette, Rgb, ScoreBand};
pub use dataset::{Dataset, PercentileWindow, Subset};
pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use groups::{Group, GroupAggregator, GroupEntry, GroupMember, GroupView};
pub use history::FilterHistory;
pub use item::{Item, ResultSet};
pub use selection::{Highlight, HighlightState, SelectionSet};
