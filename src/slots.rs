use eyre::{Error, WrapErr, bail, eyre};
use std::fmt;
use std::str::FromStr;

const HALVES_PER_DAY: u8 = 48;

/// A wall-clock time on a half-hour boundary, stored as the number of
/// half hours since midnight. `48` stands for the following midnight and
/// is only used as the end of a range.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ClockTime(u8);

impl ClockTime {
    pub fn from_halves(halves: u8) -> Self {
        assert!(halves <= HALVES_PER_DAY, "clock time out of range");
        ClockTime(halves)
    }

    pub fn halves(self) -> u8 {
        self.0
    }

    fn next(self) -> Self {
        ClockTime::from_halves(self.0 + 1)
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let lower = s.trim().to_ascii_lowercase();
        let (hour, rest) = lower
            .split_once(':')
            .ok_or_else(|| eyre!("missing ':' in time {s:?}"))?;
        let (minute, pm) = if let Some(m) = rest.strip_suffix("pm") {
            (m.trim_end(), true)
        } else if let Some(m) = rest.strip_suffix("am") {
            (m.trim_end(), false)
        } else {
            bail!("missing am/pm in time {s:?}");
        };
        let hour = hour
            .parse::<u8>()
            .wrap_err_with(|| format!("invalid hour in time {s:?}"))?;
        if !(1..=12).contains(&hour) {
            bail!("hour out of range in time {s:?}");
        }
        let half = match minute {
            "00" => 0,
            "30" => 1,
            _ => bail!("minutes must be 00 or 30 in time {s:?}"),
        };
        let hour = hour % 12 + if pm { 12 } else { 0 };
        Ok(ClockTime(hour * 2 + half))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let halves = self.0 % HALVES_PER_DAY;
        let hour = halves / 2;
        let period = if hour >= 12 { "pm" } else { "am" };
        let display_hour = if hour % 12 == 0 { 12 } else { hour % 12 };
        let minute = if halves % 2 == 0 { "00" } else { "30" };
        write!(f, "{display_hour}:{minute}{period}")
    }
}

/// A half-hour session on a given day. Its string form is the canonical
/// slot token, e.g. `Mon 2:00pm-2:30pm`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Slot {
    pub day: String,
    pub start: ClockTime,
}

impl Slot {
    pub fn new(day: impl Into<String>, start: ClockTime) -> Self {
        assert!(start.halves() < HALVES_PER_DAY, "slot cannot start at midnight of the next day");
        Slot {
            day: day.into(),
            start,
        }
    }

    pub fn end(&self) -> ClockTime {
        self.start.next()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end())
    }
}

/// Split a free-text cell into trimmed, non-empty entries. Entries are
/// separated by commas or line breaks.
pub fn parse_multi_line_text(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Parse a `<Day> <start>-<end>` range.
pub fn parse_range(range: &str) -> Result<(String, ClockTime, ClockTime), Error> {
    let (day, times) = range
        .trim()
        .split_once(char::is_whitespace)
        .ok_or_else(|| eyre!("missing day or times in range {range:?}"))?;
    let (start, end) = times
        .split_once('-')
        .ok_or_else(|| eyre!("missing '-' in range {range:?}"))?;
    let start = start
        .parse::<ClockTime>()
        .wrap_err_with(|| format!("invalid start in range {range:?}"))?;
    let mut end = end
        .parse::<ClockTime>()
        .wrap_err_with(|| format!("invalid end in range {range:?}"))?;
    if end.halves() == 0 && start.halves() > 0 {
        end = ClockTime::from_halves(HALVES_PER_DAY);
    }
    if end <= start {
        bail!("range {range:?} does not end after it starts");
    }
    Ok((day.to_owned(), start, end))
}

/// Expand ranges into half-hour slots, dropping repeated slots.
pub fn expand_availability<S: AsRef<str>>(ranges: &[S]) -> Result<Vec<Slot>, Error> {
    let mut expanded = Vec::new();
    for range in ranges {
        let (day, start, end) = parse_range(range.as_ref())?;
        for halves in start.halves()..end.halves() {
            let slot = Slot::new(day.clone(), ClockTime::from_halves(halves));
            if !expanded.contains(&slot) {
                expanded.push(slot);
            }
        }
    }
    Ok(expanded)
}

/// Parse and expand a schedule cell.
pub fn parse_schedule(text: &str) -> Result<Vec<Slot>, Error> {
    expand_availability(&parse_multi_line_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(slots: &[Slot]) -> Vec<String> {
        slots.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_expand_availability() {
        let slots = expand_availability(&["Mon 2:00pm-4:00pm"]).unwrap();
        assert_eq!(
            tokens(&slots),
            vec![
                "Mon 2:00pm-2:30pm",
                "Mon 2:30pm-3:00pm",
                "Mon 3:00pm-3:30pm",
                "Mon 3:30pm-4:00pm",
            ]
        );
    }

    #[test]
    fn test_expand_half_hour_is_identity() {
        let slots = expand_availability(&["Tue 9:30am-10:00am"]).unwrap();
        assert_eq!(tokens(&slots), vec!["Tue 9:30am-10:00am"]);
    }

    #[test]
    fn test_expand_drops_duplicates() {
        let slots = expand_availability(&["Mon 9:00am-10:00am", "Mon 9:30am-10:30am"]).unwrap();
        assert_eq!(
            tokens(&slots),
            vec!["Mon 9:00am-9:30am", "Mon 9:30am-10:00am", "Mon 10:00am-10:30am"]
        );
    }

    #[test]
    fn test_expand_across_noon_and_midnight() {
        let slots = expand_availability(&["Wed 11:30am-12:30pm", "Fri 11:00pm-12:00am"]).unwrap();
        assert_eq!(
            tokens(&slots),
            vec![
                "Wed 11:30am-12:00pm",
                "Wed 12:00pm-12:30pm",
                "Fri 11:00pm-11:30pm",
                "Fri 11:30pm-12:00am",
            ]
        );
    }

    #[test]
    fn test_round_trip() {
        for halves in 0..HALVES_PER_DAY {
            let s = ClockTime(halves).to_string();
            assert_eq!(s.parse::<ClockTime>().unwrap().to_string(), s);
            assert_eq!(s.parse::<ClockTime>().unwrap().halves(), halves);
        }
    }

    #[test]
    fn test_noon_and_midnight() {
        assert_eq!("12:00pm".parse::<ClockTime>().unwrap().halves(), 24);
        assert_eq!("12:30am".parse::<ClockTime>().unwrap().halves(), 1);
        assert_eq!("12:00AM".parse::<ClockTime>().unwrap().halves(), 0);
        assert_eq!("2:30 pm".parse::<ClockTime>().unwrap().halves(), 29);
    }

    #[test]
    fn test_malformed_ranges() {
        for range in [
            "Mon",
            "2:00pm-4:00pm",
            "Mon 2:00pm",
            "Mon 2:00pm-4:15pm",
            "Mon 13:00pm-2:00pm",
            "Mon 2:00-3:00",
            "Mon 4:00pm-2:00pm",
            "Mon 2:00pm-2:00pm",
        ] {
            assert!(expand_availability(&[range]).is_err(), "{range} accepted");
        }
    }

    #[test]
    fn test_parse_multi_line_text() {
        assert!(parse_multi_line_text("").is_empty());
        assert_eq!(
            parse_multi_line_text(" Mon 9:00am-9:30am ,Tue 1:00pm-1:30pm,\nWed 3:00pm-3:30pm,"),
            vec!["Mon 9:00am-9:30am", "Tue 1:00pm-1:30pm", "Wed 3:00pm-3:30pm"]
        );
    }

    #[test]
    fn test_parse_schedule() {
        let slots = parse_schedule("Mon 9:00am-10:00am, Tue 1:00pm-1:30pm").unwrap();
        assert_eq!(slots.len(), 3);
        assert!(parse_schedule("Mon 9:00am").is_err());
        assert!(parse_schedule("  ").unwrap().is_empty());
    }
}
