use crate::model::{Assignments, Pass};

/// Number of mentees placed by each pass, in pass order.
pub fn statistics(a: &Assignments) -> Vec<(Pass, usize)> {
    Pass::ALL
        .iter()
        .map(|&pass| {
            let n = a
                .all_mentees()
                .into_iter()
                .filter(|&s| a.pass_for(s) == Some(pass))
                .count();
            (pass, n)
        })
        .collect()
}

/// Number of mentees who asked for a mentor, and how many got them.
pub fn preferences(a: &Assignments) -> (usize, usize) {
    let asked = a
        .mentees
        .iter()
        .filter(|m| m.preferred_mentor.is_some())
        .count();
    let granted = a
        .all_mentees()
        .into_iter()
        .filter(|&s| a.got_preferred(s))
        .count();
    (asked, granted)
}
