use super::Mentor;
use crate::slots::Slot;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MenteeId(pub usize);

#[derive(Clone, Debug)]
pub struct Mentee {
    pub id: MenteeId,
    pub name: String,
    pub sessions: Vec<Slot>,
    pub preferred_mentor: Option<String>,
    pub email: String,
    pub course: String,
    pub position: String,
}

impl Mentee {
    pub fn new(id: MenteeId, name: impl Into<String>, sessions: Vec<Slot>) -> Self {
        Mentee {
            id,
            name: name.into(),
            sessions,
            preferred_mentor: None,
            email: String::new(),
            course: String::new(),
            position: String::new(),
        }
    }

    pub fn prefers(&self, mentor: &str) -> bool {
        self.preferred_mentor.as_deref() == Some(mentor)
    }

    /// True if one of the acceptable sessions is in the mentor availability.
    pub fn can_meet(&self, mentor: &Mentor) -> bool {
        self.sessions.iter().any(|s| mentor.is_available_at(s))
    }
}

impl fmt::Display for Mentee {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
