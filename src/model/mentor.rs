use crate::slots::Slot;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MentorId(pub usize);

#[derive(Clone, Debug)]
pub struct Mentor {
    pub id: MentorId,
    pub name: String,
    pub availability: Vec<Slot>,
}

impl Mentor {
    pub fn new(id: MentorId, name: impl Into<String>, availability: Vec<Slot>) -> Self {
        Mentor {
            id,
            name: name.into(),
            availability,
        }
    }

    pub fn is_available_at(&self, slot: &Slot) -> bool {
        self.availability.contains(slot)
    }
}

impl fmt::Display for Mentor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
