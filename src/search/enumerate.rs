use super::SearchOptions;
use crate::calendar::{Calendar, Day};
use crate::model::{Assignment, Solution, SolutionSet};

/// État partagé par tout l'arbre de récursion : un seul planning courant,
/// muté puis restauré à l'identique autour de chaque appel récursif.
struct Frame<'a> {
    calendar: &'a Calendar,
    opts: SearchOptions,
    current: Solution,
    found: Vec<Solution>,
}

pub(super) fn enumerate(calendar: &Calendar, opts: SearchOptions) -> SolutionSet {
    let mut frame = Frame {
        calendar,
        opts,
        current: Solution::empty(calendar.day_count()),
        found: Vec::new(),
    };
    walk(&mut frame, 0);
    SolutionSet {
        solutions: frame.found,
    }
}

fn capped(frame: &Frame) -> bool {
    frame
        .opts
        .max_solutions
        .is_some_and(|cap| frame.found.len() >= cap)
}

fn walk(frame: &mut Frame, day_idx: usize) {
    if capped(frame) {
        return;
    }

    if day_idx == frame.calendar.day_count() {
        if frame.current.total_hours == frame.calendar.target_hours()
            && frame.current.leave_count > 0
        {
            // copie indépendante : le planning courant continue d'être muté
            frame.found.push(frame.current.clone());
        }
        return;
    }

    // Élagage sur l'état accumulé, avant d'essayer la moindre option : les
    // contributions étant positives, un dépassement est définitif, et le
    // maximum atteignable plafonne à une garde par jour restant.
    if frame.opts.prune {
        let remaining = (frame.calendar.day_count() - day_idx) as u32;
        let max_possible = frame.current.total_hours + remaining * frame.calendar.shift_hours();
        if max_possible < frame.calendar.target_hours()
            || frame.current.total_hours > frame.calendar.target_hours()
        {
            return;
        }
    }

    let day = frame.calendar.days()[day_idx];

    // Option 1 : garde de jour
    if day.day_shift {
        take_shift(frame, day_idx, day, Assignment::DayShift);
    }

    // Option 2 : garde de nuit
    if day.night_shift {
        take_shift(frame, day_idx, day, Assignment::NightShift);
    }

    // Option 3 : congé (jamais sur un férié)
    if !day.holiday {
        frame.current.assignments[day_idx] = Assignment::Leave;
        frame.current.total_hours += frame.calendar.leave_hours();
        frame.current.leave_count += 1;

        walk(frame, day_idx + 1);

        frame.current.assignments[day_idx] = Assignment::Off;
        frame.current.total_hours -= frame.calendar.leave_hours();
        frame.current.leave_count -= 1;
    }

    // Option 4 : repos
    walk(frame, day_idx + 1);
}

fn take_shift(frame: &mut Frame, day_idx: usize, day: Day, kind: Assignment) {
    frame.current.assignments[day_idx] = kind;
    frame.current.total_hours += frame.calendar.shift_hours();
    if day.holiday {
        frame.current.holiday_shifts += 1;
    }

    walk(frame, day_idx + 1);

    frame.current.assignments[day_idx] = Assignment::Off;
    frame.current.total_hours -= frame.calendar.shift_hours();
    if day.holiday {
        frame.current.holiday_shifts -= 1;
    }
}
