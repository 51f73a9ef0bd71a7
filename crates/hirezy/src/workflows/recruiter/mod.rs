pub mod applications;
pub mod live;

pub use applications::{
    Application, ApplicationFilter, ApplicationStats, ComparisonSelection, FilterState, Gig,
    RecruiterApplicationService,
};
pub use live::LiveCounters;
