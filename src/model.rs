use crate::calendar::Calendar;
use serde::{Deserialize, Serialize};

/// Décision prise pour un jour du mois.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assignment {
    DayShift,
    NightShift,
    Leave,
    Off,
}

impl Assignment {
    /// Vrai pour une garde, de jour comme de nuit.
    pub fn is_shift(self) -> bool {
        matches!(self, Assignment::DayShift | Assignment::NightShift)
    }

    /// Lettre compacte pour les exports : D/N pour les gardes, C pour congé.
    pub fn code(self) -> char {
        match self {
            Assignment::DayShift => 'D',
            Assignment::NightShift => 'N',
            Assignment::Leave => 'C',
            Assignment::Off => '-',
        }
    }
}

/// Planning complet d'un mois : une décision par jour plus les agrégats.
///
/// Les agrégats restent en permanence égaux au recomptage de `assignments` ;
/// la recherche les maintient par mutation/annulation exacte et chaque
/// solution acceptée est une copie indépendante de l'état courant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub assignments: Vec<Assignment>,
    pub total_hours: u32,
    pub holiday_shifts: u32,
    pub leave_count: u32,
}

impl Solution {
    /// Planning vide : tous les jours `Off`, agrégats à zéro.
    pub fn empty(day_count: usize) -> Self {
        Self {
            assignments: vec![Assignment::Off; day_count],
            total_hours: 0,
            holiday_shifts: 0,
            leave_count: 0,
        }
    }

    /// Recompte (heures, gardes fériées, congés) depuis `assignments`.
    pub fn recount(&self, calendar: &Calendar) -> (u32, u32, u32) {
        let mut hours = 0;
        let mut holiday_shifts = 0;
        let mut leaves = 0;
        for (day, assignment) in calendar.days().iter().zip(&self.assignments) {
            match assignment {
                Assignment::DayShift | Assignment::NightShift => {
                    hours += calendar.shift_hours();
                    if day.holiday {
                        holiday_shifts += 1;
                    }
                }
                Assignment::Leave => {
                    hours += calendar.leave_hours();
                    leaves += 1;
                }
                Assignment::Off => {}
            }
        }
        (hours, holiday_shifts, leaves)
    }
}

/// Ensemble des solutions collectées, classé en fin de recherche.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionSet {
    pub solutions: Vec<Solution>,
}

impl SolutionSet {
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Meilleure solution une fois l'ensemble classé.
    pub fn best(&self) -> Option<&Solution> {
        self.solutions.first()
    }
}
