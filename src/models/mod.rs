//! Takt planning domain models.
//!
//! Provides the input description of a building project and the genes a
//! takt plan is made of.
//!
//! # Domain Mappings
//!
//! | u-takt | Construction site | Generic scheduling |
//! |--------|-------------------|--------------------|
//! | Project | Building | Problem instance |
//! | Floor | Storey | Location group |
//! | Zone | Takt area | Location |
//! | WorkItem / Team | Trade / Crew | Task / Resource |
//! | TaktSchedule | Takt train | Schedule |

mod project;
mod schedule;
mod team;
mod zone;

pub use project::{Floor, Project, WorkItem};
pub use schedule::{Assignment, TaktSchedule};
pub use team::{Team, MAX_HEADCOUNT, MIN_HEADCOUNT};
pub use zone::{Zone, MAX_ZONE_AREA, MIN_ZONE_AREA};
