use crate::model::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument, trace};

/// First-fit matcher running a preference pass, an availability pass and
/// a leftover pass over the mentees which are not assigned yet.
pub struct Greedy<'a> {
    assignments: &'a mut Assignments,
    incompatibilities: &'a Incompatibilities,
    rng: Option<StdRng>,
}

impl<'a> Greedy<'a> {
    pub fn new(
        assignments: &'a mut Assignments,
        incompatibilities: &'a Incompatibilities,
    ) -> Greedy<'a> {
        Greedy {
            assignments,
            incompatibilities,
            rng: None,
        }
    }

    /// Shuffle the working set before running the passes.
    pub fn shuffled(mut self, rng: StdRng) -> Greedy<'a> {
        self.rng = Some(rng);
        self
    }

    pub fn assign(&mut self) {
        let mut working = self.assignments.unassigned_mentees();
        if let Some(rng) = &mut self.rng {
            working.shuffle(rng);
        }
        let working = self.preference_pass(working);
        let working = self.availability_pass(working);
        self.leftover_pass(working);
    }

    /// True if the mentee cannot join the mentor, because of the mentor
    /// itself or of one of its current mentees.
    fn is_incompatible(&self, mentor: MentorId, mentee: MenteeId) -> bool {
        let name = &self.assignments.mentee(mentee).name;
        self.incompatibilities
            .conflicts(&self.assignments.mentor(mentor).name, name)
            || self.assignments.mentees_for(mentor).iter().any(|&other| {
                self.incompatibilities
                    .conflicts(&self.assignments.mentee(other).name, name)
            })
    }

    fn can_meet(&self, mentor: MentorId, mentee: MenteeId) -> bool {
        self.assignments
            .mentee(mentee)
            .can_meet(self.assignments.mentor(mentor))
    }

    fn place(&mut self, mentee: MenteeId, mentor: MentorId, pass: Pass) {
        trace!(
            mentee = %self.assignments.mentee(mentee),
            mentor = %self.assignments.mentor(mentor),
            %pass,
            "Assigning mentee",
        );
        self.assignments.assign_to(mentee, mentor, pass);
    }

    /// Place mentees with their preferred mentor when possible. The SI
    /// Leader quota of the mentor is checked for every mentee here.
    #[instrument(skip_all)]
    fn preference_pass(&mut self, working: Vec<MenteeId>) -> Vec<MenteeId> {
        let mut remaining = Vec::new();
        for mentee in working {
            let Some(preferred) = self.assignments.mentee(mentee).preferred_mentor.clone() else {
                remaining.push(mentee);
                continue;
            };
            let Some(mentor) = self.assignments.mentor_by_name(&preferred) else {
                debug!(mentee = %self.assignments.mentee(mentee), %preferred, "preferred mentor does not exist");
                remaining.push(mentee);
                continue;
            };
            if self.can_meet(mentor, mentee)
                && !self.assignments.is_full(mentor)
                && self.assignments.has_si_leader_room(mentor)
                && !self.is_incompatible(mentor, mentee)
            {
                self.place(mentee, mentor, Pass::Preference);
            } else {
                debug!(mentee = %self.assignments.mentee(mentee), %preferred, "preferred mentor cannot be granted");
                remaining.push(mentee);
            }
        }
        info!(remaining = remaining.len(), "Preference pass done");
        remaining
    }

    /// Place every mentee with the first mentor sharing a slot with them.
    #[instrument(skip_all)]
    fn availability_pass(&mut self, working: Vec<MenteeId>) -> Vec<MenteeId> {
        let mut remaining = Vec::new();
        for mentee in working {
            let si_leader = self.assignments.is_si_leader(mentee);
            let found = self.assignments.all_mentors().into_iter().find(|&mentor| {
                !self.assignments.is_full(mentor)
                    && self.can_meet(mentor, mentee)
                    && (!si_leader || self.assignments.has_si_leader_room(mentor))
                    && !self.is_incompatible(mentor, mentee)
            });
            match found {
                Some(mentor) => self.place(mentee, mentor, Pass::Availability),
                None => remaining.push(mentee),
            }
        }
        info!(remaining = remaining.len(), "Availability pass done");
        remaining
    }

    /// Place the remaining mentees with the first mentor with room and no
    /// incompatibility, regardless of availability and quota.
    #[instrument(skip_all)]
    fn leftover_pass(&mut self, working: Vec<MenteeId>) -> Vec<MenteeId> {
        let mut remaining = Vec::new();
        for mentee in working {
            let found = self.assignments.all_mentors().into_iter().find(|&mentor| {
                !self.assignments.is_full(mentor) && !self.is_incompatible(mentor, mentee)
            });
            match found {
                Some(mentor) => self.place(mentee, mentor, Pass::Leftover),
                None => remaining.push(mentee),
            }
        }
        info!(remaining = remaining.len(), "Leftover pass done");
        remaining
    }
}
