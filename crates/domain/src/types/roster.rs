//! Group roster types
//!
//! The `*Payload` structs are the literal wire shape of the roster
//! endpoint and exist only as transient decode targets; everything above
//! the transfer layer works with [`Roster`] and [`Member`].

use serde::Deserialize;

/// Wire payload returned by the roster endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterPayload {
    #[serde(rename = "memberList")]
    pub member_list: Vec<MemberPayload>,
}

/// Wire representation of a single group member.
///
/// `activityname` and `mbti` are renamed on the way in; the renames are
/// a wire-naming contract, not a semantic change.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberPayload {
    #[serde(rename = "activityname")]
    pub activity_name: String,
    pub name: String,
    #[serde(rename = "mbti")]
    pub personality_code: String,
}

/// The group roster, fully constructed or not constructed at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub members: Vec<Member>,
}

/// A single group member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub activity_name: String,
    pub name: String,
    pub personality_code: String,
}

/// Presentation projection of a [`Member`], one row per member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub display_name: String,
}

impl From<RosterPayload> for Roster {
    fn from(payload: RosterPayload) -> Self {
        Self { members: payload.member_list.into_iter().map(Member::from).collect() }
    }
}

impl From<MemberPayload> for Member {
    fn from(payload: MemberPayload) -> Self {
        Self {
            activity_name: payload.activity_name,
            name: payload.name,
            personality_code: payload.personality_code,
        }
    }
}

impl From<&Member> for RosterRow {
    fn from(member: &Member) -> Self {
        Self { display_name: member.name.clone() }
    }
}
