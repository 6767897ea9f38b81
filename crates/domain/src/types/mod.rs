//! Domain type definitions

pub mod canvas;
pub mod roster;

pub use canvas::{Drawing, Point, Stroke};
pub use roster::{Member, MemberPayload, Roster, RosterPayload, RosterRow};
