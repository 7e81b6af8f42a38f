mod enumerate;
mod rank;
mod types;

pub use types::SearchOptions;

use crate::calendar::Calendar;
use crate::model::SolutionSet;

/// Solver : encapsule un calendrier figé et pilote l'énumération.
#[derive(Debug)]
pub struct Solver<'a> {
    calendar: &'a Calendar,
}

impl<'a> Solver<'a> {
    pub fn new(calendar: &'a Calendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &Calendar {
        self.calendar
    }

    /// Énumère toutes les solutions acceptées puis les classe.
    ///
    /// Pour un calendrier donné, l'appartenance à l'ensemble résultat est
    /// déterministe ; deux appels successifs rendent la même séquence.
    pub fn solve(&self, opts: SearchOptions) -> SolutionSet {
        let mut set = enumerate::enumerate(self.calendar, opts);
        rank::rank(&mut set.solutions);
        set
    }
}
