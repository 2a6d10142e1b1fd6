use crate::model::Assignments;
use crate::workbook::{Cell, Workbook};
use eyre::{Error, WrapErr};
use tracing::info;

pub const HEADER: [&str; 5] = ["Mentor Name", "Mentee Name", "Email", "Course", "Position"];

/// Lay out the assignments: a header, then for every mentor a row with
/// its name followed by one row per mentee. A mentee name is bold when
/// the mentee got the mentor it asked for.
pub fn render(a: &Assignments) -> Vec<Vec<Cell>> {
    let mut rows = vec![HEADER.iter().map(|&h| Cell::plain(h)).collect::<Vec<_>>()];
    for m in a.all_mentors() {
        let mentor = a.mentor(m);
        let mut row = vec![Cell::plain(&mentor.name)];
        row.resize(HEADER.len(), Cell::default());
        rows.push(row);
        for &s in a.mentees_for(m) {
            let mentee = a.mentee(s);
            let name = if mentee.prefers(&mentor.name) {
                Cell::bold(&mentee.name)
            } else {
                Cell::plain(&mentee.name)
            };
            rows.push(vec![
                Cell::default(),
                name,
                Cell::plain(&mentee.email),
                Cell::plain(&mentee.course),
                Cell::plain(&mentee.position),
            ]);
        }
    }
    rows
}

/// Create or overwrite the report table.
pub fn save(workbook: &mut dyn Workbook, table: &str, a: &Assignments) -> Result<(), Error> {
    let rows = render(a);
    workbook
        .write_table(table, &rows)
        .wrap_err_with(|| format!("cannot save report {table:?}"))?;
    info!(table, rows = rows.len(), "Report saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;
    use crate::model::{Mentee, MenteeId, Mentor, MentorId, Pass};
    use crate::workbook::MemoryWorkbook;

    fn sample() -> Assignments {
        let mentors = vec![
            Mentor::new(MentorId(0), "Ada", Vec::new()),
            Mentor::new(MentorId(1), "Grace", Vec::new()),
            Mentor::new(MentorId(2), "Edsger", Vec::new()),
        ];
        let mentees = vec![
            Mentee {
                preferred_mentor: Some("Grace".into()),
                email: "bob@example.edu".into(),
                course: "CS 101".into(),
                position: "SI Leader".into(),
                ..Mentee::new(MenteeId(0), "Bob", Vec::new())
            },
            Mentee {
                preferred_mentor: Some("Ada".into()),
                ..Mentee::new(MenteeId(1), "Carol", Vec::new())
            },
            Mentee::new(MenteeId(2), "Dan", Vec::new()),
        ];
        let mut a = Assignments::new(mentors, mentees, Limits::default());
        a.assign_to(MenteeId(2), MentorId(1), Pass::Availability);
        a.assign_to(MenteeId(0), MentorId(1), Pass::Leftover);
        a.assign_to(MenteeId(1), MentorId(2), Pass::Availability);
        a
    }

    fn values(row: &[Cell]) -> Vec<&str> {
        row.iter().map(|c| c.value.as_str()).collect()
    }

    #[test]
    fn test_render() {
        let rows = render(&sample());
        assert_eq!(rows.len(), 7);
        assert_eq!(values(&rows[0]), HEADER);
        assert_eq!(values(&rows[1]), ["Ada", "", "", "", ""]);
        assert_eq!(values(&rows[2]), ["Grace", "", "", "", ""]);
        assert_eq!(values(&rows[3]), ["", "Dan", "", "", ""]);
        assert_eq!(
            values(&rows[4]),
            ["", "Bob", "bob@example.edu", "CS 101", "SI Leader"]
        );
        assert_eq!(values(&rows[5]), ["Edsger", "", "", "", ""]);
        assert_eq!(values(&rows[6]), ["", "Carol", "", "", ""]);
    }

    #[test]
    fn test_bold_preferred() {
        let rows = render(&sample());
        let bold = rows
            .iter()
            .flatten()
            .filter(|c| c.bold)
            .map(|c| c.value.as_str())
            .collect::<Vec<_>>();
        // Bob got Grace through the leftover pass, Carol did not get Ada.
        assert_eq!(bold, ["Bob"]);
    }

    #[test]
    fn test_save_overwrites() {
        let mut workbook = MemoryWorkbook::default().with_table("Final Assignments", &[&["stale"]]);
        save(&mut workbook, "Final Assignments", &sample()).unwrap();
        assert_eq!(workbook.tables["Final Assignments"].len(), 7);
    }
}
