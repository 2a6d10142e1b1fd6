use crate::model::{Assignments, MenteeId};
use crate::stats;

pub fn display_details(a: &Assignments) {
    for m in a.filter_mentors(|m| a.is_open(m)) {
        println!("{}:", a.mentor(m).name);
        for &s in a.mentees_for(m) {
            print!("  - {}", a.mentee(s).name);
            if a.is_si_leader(s) {
                print!(" ({})", a.limits.si_leader_position);
            }
            if a.got_preferred(s) {
                print!(" (preferred)");
            }
            if let Some(pass) = a.pass_for(s) {
                print!(" [{pass}]");
            }
            println!();
        }
        println!();
    }
}

pub fn display_stats(a: &Assignments) {
    let mentees = a.mentees.len();
    let unassigned = a.unassigned_mentees().len();
    println!(
        "Mentees assigned/unassigned/total: {}/{}/{}",
        mentees - unassigned,
        unassigned,
        mentees
    );
    let (asked, granted) = stats::preferences(a);
    if asked > 0 {
        println!(
            "Preferred mentor granted: {}/{} ({:.2}%)",
            granted,
            asked,
            100.0 * granted as f32 / asked as f32
        );
    }
    println!("Placements by pass:");
    for (pass, n) in stats::statistics(a) {
        println!("  - {pass}: {n}");
    }
}

pub fn display_empty(a: &Assignments) {
    let mentors = a.filter_mentors(|m| !a.is_open(m));
    if !mentors.is_empty() {
        println!("Mentors without mentees:");
        for m in mentors {
            println!("  - {}", a.mentor(m).name);
        }
    }
}

pub fn display_unassigned(a: &Assignments, unassigned: &[MenteeId]) {
    if !unassigned.is_empty() {
        println!("Unassigned mentees:");
        for &s in unassigned {
            println!("  - {}", a.mentee(s).name);
        }
    }
}
