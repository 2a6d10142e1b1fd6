use crate::config::Tables;
use crate::model::{Mentee, MenteeId, Mentor, MentorId};
use crate::slots::parse_schedule;
use crate::workbook::Workbook;
use eyre::{Error, WrapErr, bail, eyre};
use std::collections::HashSet;
use tracing::{debug, trace, warn};

pub struct Loader<'a> {
    workbook: &'a dyn Workbook,
}

fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map_or("", |c| c.trim())
}

impl<'a> Loader<'a> {
    pub fn new(workbook: &'a dyn Workbook) -> Self {
        Self { workbook }
    }

    pub fn load(&self, tables: &Tables) -> Result<(Vec<Mentor>, Vec<Mentee>), Error> {
        let mentees = self
            .load_mentees(&tables.mentees)
            .wrap_err("cannot load mentees")?;
        let mentors = self
            .load_mentors(&tables.mentors)
            .wrap_err("cannot load mentors")?;
        for mentee in &mentees {
            if let Some(preferred) = &mentee.preferred_mentor {
                if !mentors.iter().any(|m| &m.name == preferred) {
                    warn!(mentee = %mentee, preferred_mentor = %preferred, "unknown preferred mentor");
                }
            }
        }
        Ok((mentors, mentees))
    }

    /// Data rows of a table, without the header row and without rows
    /// whose name column is blank.
    fn rows(&self, table: &str) -> Result<Vec<Vec<String>>, Error> {
        let rows = self
            .workbook
            .read_table(table)?
            .ok_or_else(|| eyre!("cannot find table {table:?}"))?;
        Ok(rows
            .into_iter()
            .skip(1)
            .filter(|row| {
                let blank = cell(row, 1).is_empty();
                if blank {
                    trace!(table, "skipping row without name");
                }
                !blank
            })
            .collect())
    }

    fn load_mentors(&self, table: &str) -> Result<Vec<Mentor>, Error> {
        let mut seen = HashSet::new();
        let mut mentors = Vec::new();
        for row in self.rows(table)? {
            let name = cell(&row, 1);
            if !seen.insert(name.to_owned()) {
                bail!("duplicate mentor {name:?}");
            }
            let availability = parse_schedule(cell(&row, 2))
                .wrap_err_with(|| format!("invalid availability for mentor {name:?}"))?;
            if availability.is_empty() {
                debug!(mentor = name, "mentor has no availability");
            }
            mentors.push(Mentor::new(MentorId(mentors.len()), name, availability));
        }
        debug!(count = mentors.len(), "mentors loaded");
        Ok(mentors)
    }

    fn load_mentees(&self, table: &str) -> Result<Vec<Mentee>, Error> {
        let mut seen = HashSet::new();
        let mut mentees = Vec::new();
        for row in self.rows(table)? {
            let name = cell(&row, 1);
            if !seen.insert(name.to_owned()) {
                warn!(mentee = name, "duplicate mentee name");
            }
            let sessions = parse_schedule(cell(&row, 2))
                .wrap_err_with(|| format!("invalid session times for mentee {name:?}"))?;
            let preferred = cell(&row, 3);
            mentees.push(Mentee {
                preferred_mentor: (!preferred.is_empty()).then(|| preferred.to_owned()),
                email: cell(&row, 4).to_owned(),
                course: cell(&row, 5).to_owned(),
                position: cell(&row, 6).to_owned(),
                ..Mentee::new(MenteeId(mentees.len()), name, sessions)
            });
        }
        debug!(count = mentees.len(), "mentees loaded");
        Ok(mentees)
    }
}
