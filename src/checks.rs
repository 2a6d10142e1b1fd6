use crate::model::{Assignments, Incompatibilities, MenteeId, Pass};
use eyre::{Error, bail, ensure};
use tracing::warn;

/// Warn about mentees who asked for a mentor and were placed elsewhere.
pub fn check_preferences(a: &Assignments) {
    for s in a.all_mentees() {
        let mentee = a.mentee(s);
        if let (Some(preferred), Some(m)) = (&mentee.preferred_mentor, a.mentor_for(s)) {
            if !a.got_preferred(s) && a.mentor_by_name(preferred).is_some() {
                warn!(
                    mentee = %mentee,
                    preferred_mentor = %preferred,
                    mentor = %a.mentor(m),
                    "mentee did not get preferred mentor"
                );
            }
        }
    }
}

/// Warn about every mentee left without a mentor.
pub fn check_unassigned(a: &Assignments) -> Vec<MenteeId> {
    let unassigned = a.unassigned_mentees();
    for &s in &unassigned {
        warn!(mentee = %a.mentee(s), "mentee could not be assigned to any mentor");
    }
    unassigned
}

/// Verify the assignment invariants: capacity, SI Leader quota and
/// shared availability for every placement made before the leftover
/// pass, and incompatibilities for every placement.
pub fn ensure_valid(a: &Assignments, incompatibilities: &Incompatibilities) -> Result<(), Error> {
    let mut seen = vec![false; a.mentees.len()];
    for m in a.all_mentors() {
        let mentor = a.mentor(m);
        let mentees = a.mentees_for(m);
        ensure!(
            mentees.len() <= a.limits.max_mentees,
            "mentor {mentor} has {} mentees",
            mentees.len()
        );
        let constrained_si_leaders = mentees
            .iter()
            .filter(|&&s| a.is_si_leader(s) && a.pass_for(s).is_some_and(Pass::is_constrained))
            .count();
        ensure!(
            constrained_si_leaders <= a.limits.max_si_leaders,
            "mentor {mentor} has {constrained_si_leaders} SI Leaders"
        );
        for (i, &s) in mentees.iter().enumerate() {
            let mentee = a.mentee(s);
            if std::mem::replace(&mut seen[s.0], true) {
                bail!("mentee {mentee} is assigned more than once");
            }
            ensure!(
                a.mentor_for(s) == Some(m),
                "mentee {mentee} is listed under mentor {mentor} but not assigned to it"
            );
            if a.pass_for(s).is_some_and(Pass::is_constrained) {
                ensure!(
                    mentee.can_meet(mentor),
                    "mentee {mentee} shares no slot with mentor {mentor}"
                );
            }
            ensure!(
                !incompatibilities.conflicts(&mentor.name, &mentee.name),
                "mentee {mentee} is incompatible with mentor {mentor}"
            );
            for &other in &mentees[..i] {
                let other = a.mentee(other);
                ensure!(
                    !incompatibilities.conflicts(&other.name, &mentee.name),
                    "mentees {other} and {mentee} are incompatible but share mentor {mentor}"
                );
            }
        }
    }
    Ok(())
}
