use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Heures comptées pour une garde (jour ou nuit).
pub const SHIFT_HOURS: u32 = 12;
/// Heures comptées pour un jour de congé.
pub const LEAVE_HOURS: u32 = 8;
/// Total mensuel exact à atteindre.
pub const TARGET_HOURS: u32 = 164;

/// Erreurs de configuration, détectées avant toute recherche.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("day count must be > 0")]
    EmptyMonth,
    #[error("{list}: day {day} out of range 1..={day_count}")]
    DayOutOfRange {
        list: &'static str,
        day: u32,
        day_count: u32,
    },
    #[error("{field} must be > 0")]
    InvalidHours { field: &'static str },
    #[error("invalid month {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
}

/// Configuration d'un mois : listes de jours et constantes horaires.
///
/// Les listes sont exprimées en numéros de jour 1..=`day_count` ; les
/// samedis et dimanches comptent comme fériés au même titre que
/// `holiday_days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthConfig {
    pub day_count: u32,
    #[serde(default)]
    pub holiday_days: Vec<u32>,
    #[serde(default)]
    pub saturdays: Vec<u32>,
    #[serde(default)]
    pub sundays: Vec<u32>,
    #[serde(default)]
    pub day_shift_days: Vec<u32>,
    #[serde(default)]
    pub night_shift_days: Vec<u32>,
    #[serde(default = "default_shift_hours")]
    pub shift_hours: u32,
    #[serde(default = "default_leave_hours")]
    pub leave_hours: u32,
    #[serde(default = "default_target_hours")]
    pub target_hours: u32,
}

fn default_shift_hours() -> u32 {
    SHIFT_HOURS
}
fn default_leave_hours() -> u32 {
    LEAVE_HOURS
}
fn default_target_hours() -> u32 {
    TARGET_HOURS
}

impl MonthConfig {
    /// Instance de référence : décembre 2025 (le 1er tombe un lundi).
    pub fn december_2025() -> Self {
        Self {
            day_count: 31,
            holiday_days: vec![1, 25, 26],
            saturdays: vec![6, 13, 20, 27],
            sundays: vec![7, 14, 21, 28],
            day_shift_days: vec![4, 8, 12, 16, 20, 24, 28],
            night_shift_days: vec![1, 5, 9, 13, 17, 21, 25, 29],
            shift_hours: SHIFT_HOURS,
            leave_hours: LEAVE_HOURS,
            target_hours: TARGET_HOURS,
        }
    }

    /// Squelette de configuration pour un mois réel : nombre de jours et
    /// week-ends calculés, listes de gardes et de fériés à remplir.
    pub fn for_month(year: i32, month: u32) -> Result<Self, CalendarError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CalendarError::InvalidMonth { year, month })?;

        let mut day_count = 0;
        let mut saturdays = Vec::new();
        let mut sundays = Vec::new();
        let mut current = first;
        while current.year() == year && current.month() == month {
            day_count = current.day();
            match current.weekday() {
                Weekday::Sat => saturdays.push(current.day()),
                Weekday::Sun => sundays.push(current.day()),
                _ => {}
            }
            current = match current.succ_opt() {
                Some(d) => d,
                None => break,
            };
        }

        Ok(Self {
            day_count,
            holiday_days: Vec::new(),
            saturdays,
            sundays,
            day_shift_days: Vec::new(),
            night_shift_days: Vec::new(),
            shift_hours: SHIFT_HOURS,
            leave_hours: LEAVE_HOURS,
            target_hours: TARGET_HOURS,
        })
    }

    fn validate(&self) -> Result<(), CalendarError> {
        if self.day_count == 0 {
            return Err(CalendarError::EmptyMonth);
        }
        if self.shift_hours == 0 {
            return Err(CalendarError::InvalidHours {
                field: "shift_hours",
            });
        }
        if self.leave_hours == 0 {
            return Err(CalendarError::InvalidHours {
                field: "leave_hours",
            });
        }
        if self.target_hours == 0 {
            return Err(CalendarError::InvalidHours {
                field: "target_hours",
            });
        }
        self.check_list("holiday_days", &self.holiday_days)?;
        self.check_list("saturdays", &self.saturdays)?;
        self.check_list("sundays", &self.sundays)?;
        self.check_list("day_shift_days", &self.day_shift_days)?;
        self.check_list("night_shift_days", &self.night_shift_days)?;
        Ok(())
    }

    fn check_list(&self, list: &'static str, days: &[u32]) -> Result<(), CalendarError> {
        for &day in days {
            if !(1..=self.day_count).contains(&day) {
                return Err(CalendarError::DayOutOfRange {
                    list,
                    day,
                    day_count: self.day_count,
                });
            }
        }
        Ok(())
    }

    /// Valide la configuration puis fige le calendrier du mois.
    pub fn build(&self) -> Result<Calendar, CalendarError> {
        self.validate()?;

        let mut days: Vec<Day> = (1..=self.day_count)
            .map(|number| Day {
                number,
                holiday: false,
                day_shift: false,
                night_shift: false,
            })
            .collect();

        for &d in self
            .holiday_days
            .iter()
            .chain(&self.saturdays)
            .chain(&self.sundays)
        {
            days[(d - 1) as usize].holiday = true;
        }
        for &d in &self.day_shift_days {
            days[(d - 1) as usize].day_shift = true;
        }
        for &d in &self.night_shift_days {
            days[(d - 1) as usize].night_shift = true;
        }

        Ok(Calendar {
            days,
            shift_hours: self.shift_hours,
            leave_hours: self.leave_hours,
            target_hours: self.target_hours,
        })
    }
}

/// Descripteur d'un jour du mois, immuable après construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Numéro du jour dans le mois (base 1).
    pub number: u32,
    /// Férié ou week-end.
    pub holiday: bool,
    /// Une garde de jour y est proposée.
    pub day_shift: bool,
    /// Une garde de nuit y est proposée.
    pub night_shift: bool,
}

impl Day {
    /// Au moins un type de garde proposé ce jour.
    pub fn offers_shift(&self) -> bool {
        self.day_shift || self.night_shift
    }
}

/// Calendrier figé d'un mois : séquence de descripteurs + constantes horaires.
///
/// Construit une seule fois via [`MonthConfig::build`], puis passé par
/// référence partagée à la recherche.
#[derive(Debug, Clone)]
pub struct Calendar {
    days: Vec<Day>,
    shift_hours: u32,
    leave_hours: u32,
    target_hours: u32,
}

impl Calendar {
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn shift_hours(&self) -> u32 {
        self.shift_hours
    }

    pub fn leave_hours(&self) -> u32 {
        self.leave_hours
    }

    pub fn target_hours(&self) -> u32 {
        self.target_hours
    }
}
