use super::*;
use crate::config::Limits;
use eyre::{Error, ensure};
use std::fmt;

/// The pass which placed a mentee with its mentor.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Pass {
    Preference,
    Availability,
    Leftover,
}

impl Pass {
    pub const ALL: [Pass; 3] = [Pass::Preference, Pass::Availability, Pass::Leftover];

    /// Leftover placements ignore availability and SI Leader quota.
    pub fn is_constrained(self) -> bool {
        self != Pass::Leftover
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Pass::Preference => "preference",
            Pass::Availability => "availability",
            Pass::Leftover => "leftover",
        })
    }
}

/// Mentor to mentees mapping for a single run. Mentors are kept in input
/// order, and mentees of a mentor in placement order.
#[derive(Clone, Debug)]
pub struct Assignments {
    pub mentors: Vec<Mentor>,
    pub mentees: Vec<Mentee>,
    pub limits: Limits,
    assigned_to: Vec<Option<(MentorId, Pass)>>,
    assigned: Vec<Vec<MenteeId>>,
}

impl Assignments {
    pub fn new(mentors: Vec<Mentor>, mentees: Vec<Mentee>, limits: Limits) -> Assignments {
        assert!(
            mentors.iter().enumerate().all(|(i, m)| m.id == MentorId(i)),
            "mentor identifiers must follow input order"
        );
        assert!(
            mentees.iter().enumerate().all(|(i, m)| m.id == MenteeId(i)),
            "mentee identifiers must follow input order"
        );
        let mlen = mentors.len();
        let slen = mentees.len();
        Assignments {
            mentors,
            mentees,
            limits,
            assigned_to: vec![None; slen],
            assigned: vec![Vec::new(); mlen],
        }
    }

    pub fn mentor(&self, MentorId(mentor): MentorId) -> &Mentor {
        &self.mentors[mentor]
    }

    pub fn mentee(&self, MenteeId(mentee): MenteeId) -> &Mentee {
        &self.mentees[mentee]
    }

    pub fn all_mentors(&self) -> Vec<MentorId> {
        self.filter_mentors(|_| true)
    }

    pub fn filter_mentors<F>(&self, condition: F) -> Vec<MentorId>
    where
        F: Fn(MentorId) -> bool,
    {
        (0..self.mentors.len())
            .map(MentorId)
            .filter(|&m| condition(m))
            .collect()
    }

    pub fn all_mentees(&self) -> Vec<MenteeId> {
        (0..self.mentees.len()).map(MenteeId).collect()
    }

    pub fn mentor_by_name(&self, name: &str) -> Option<MentorId> {
        self.mentors.iter().find(|m| m.name == name).map(|m| m.id)
    }

    pub fn mentor_for(&self, MenteeId(mentee): MenteeId) -> Option<MentorId> {
        self.assigned_to[mentee].map(|(m, _)| m)
    }

    pub fn pass_for(&self, MenteeId(mentee): MenteeId) -> Option<Pass> {
        self.assigned_to[mentee].map(|(_, p)| p)
    }

    pub fn mentees_for(&self, MentorId(mentor): MentorId) -> &[MenteeId] {
        &self.assigned[mentor]
    }

    pub fn assign_to(&mut self, mentee: MenteeId, mentor: MentorId, pass: Pass) {
        assert!(
            self.mentor_for(mentee).is_none(),
            "a mentor is already assigned to this mentee"
        );
        assert!(!self.is_full(mentor), "cannot assign to a full mentor");
        self.assigned_to[mentee.0] = Some((mentor, pass));
        self.assigned[mentor.0].push(mentee);
    }

    pub fn unassigned_mentees(&self) -> Vec<MenteeId> {
        self.assigned_to
            .iter()
            .enumerate()
            .filter_map(|(id, assignment)| {
                if assignment.is_none() {
                    Some(MenteeId(id))
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn size(&self, mentor: MentorId) -> usize {
        self.mentees_for(mentor).len()
    }

    pub fn is_full(&self, mentor: MentorId) -> bool {
        self.size(mentor) >= self.limits.max_mentees
    }

    pub fn is_si_leader(&self, mentee: MenteeId) -> bool {
        self.mentee(mentee).position == self.limits.si_leader_position
    }

    pub fn si_leaders_for(&self, mentor: MentorId) -> usize {
        self.mentees_for(mentor)
            .iter()
            .filter(|&&s| self.is_si_leader(s))
            .count()
    }

    pub fn has_si_leader_room(&self, mentor: MentorId) -> bool {
        self.si_leaders_for(mentor) < self.limits.max_si_leaders
    }

    pub fn is_open(&self, mentor: MentorId) -> bool {
        !self.mentees_for(mentor).is_empty()
    }

    /// True if the mentee is placed with the mentor it asked for.
    pub fn got_preferred(&self, mentee: MenteeId) -> bool {
        self.mentor_for(mentee)
            .is_some_and(|m| self.mentee(mentee).prefers(&self.mentor(m).name))
    }

    pub fn seats(&self) -> usize {
        self.mentors.len() * self.limits.max_mentees
    }

    /// Check that there are enough seats for all mentees.
    pub fn check_number_of_seats(&self) -> Result<(), Error> {
        ensure!(
            self.seats() >= self.mentees.len(),
            "insufficient number of mentors, can host {} mentees out of {}",
            self.seats(),
            self.mentees.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Assignments {
        let mentors = (0..2)
            .map(|i| Mentor::new(MentorId(i), format!("mentor{i}"), Vec::new()))
            .collect();
        let mentees = (0..3)
            .map(|i| {
                let mut m = Mentee::new(MenteeId(i), format!("mentee{i}"), Vec::new());
                if i < 2 {
                    m.position = "SI Leader".into();
                }
                m
            })
            .collect();
        let limits = Limits {
            max_mentees: 2,
            ..Limits::default()
        };
        Assignments::new(mentors, mentees, limits)
    }

    #[test]
    fn test_assign_to() {
        let mut a = sample();
        a.assign_to(MenteeId(1), MentorId(1), Pass::Availability);
        a.assign_to(MenteeId(0), MentorId(1), Pass::Leftover);
        assert_eq!(a.mentees_for(MentorId(1)), &[MenteeId(1), MenteeId(0)]);
        assert_eq!(a.mentor_for(MenteeId(0)), Some(MentorId(1)));
        assert_eq!(a.pass_for(MenteeId(0)), Some(Pass::Leftover));
        assert_eq!(a.unassigned_mentees(), vec![MenteeId(2)]);
        assert!(a.is_full(MentorId(1)));
        assert!(!a.is_open(MentorId(0)));
        assert_eq!(a.si_leaders_for(MentorId(1)), 2);
        assert!(!a.has_si_leader_room(MentorId(1)));
        assert!(a.has_si_leader_room(MentorId(0)));
    }

    #[test]
    #[should_panic(expected = "already assigned")]
    fn test_assign_twice() {
        let mut a = sample();
        a.assign_to(MenteeId(0), MentorId(0), Pass::Availability);
        a.assign_to(MenteeId(0), MentorId(1), Pass::Availability);
    }

    #[test]
    #[should_panic(expected = "full mentor")]
    fn test_assign_over_capacity() {
        let mut a = sample();
        for s in 0..3 {
            a.assign_to(MenteeId(s), MentorId(0), Pass::Leftover);
        }
    }

    #[test]
    fn test_check_number_of_seats() {
        let a = sample();
        assert!(a.check_number_of_seats().is_ok());
        let limits = Limits {
            max_mentees: 1,
            ..Limits::default()
        };
        let a = Assignments::new(a.mentors, a.mentees, limits);
        assert!(a.check_number_of_seats().is_err());
    }

    #[test]
    fn test_got_preferred() {
        let mut a = sample();
        a.mentees[2].preferred_mentor = Some("mentor0".into());
        assert!(!a.got_preferred(MenteeId(2)));
        a.assign_to(MenteeId(2), MentorId(1), Pass::Leftover);
        assert!(!a.got_preferred(MenteeId(2)));
        let mut b = sample();
        b.mentees[2].preferred_mentor = Some("mentor0".into());
        b.assign_to(MenteeId(2), MentorId(0), Pass::Leftover);
        assert!(b.got_preferred(MenteeId(2)));
    }
}
