pub use self::assignments::{Assignments, Pass};
pub use self::incompatibility::Incompatibilities;
pub use self::mentee::{Mentee, MenteeId};
pub use self::mentor::{Mentor, MentorId};

mod assignments;
mod incompatibility;
mod mentee;
mod mentor;
