//! Console formatting for solved planning runs: Q-values are printed to
//! five significant digits, fixed-point for ordinary magnitudes with a
//! scientific fallback for extreme ones.

use std::fmt::Write;

use crate::model::Action;
use crate::solver::Solution;

/// Formats `value` to `digits` significant digits.
pub fn significant(value: f64, digits: usize) -> String {
    debug_assert!(digits > 0);
    if value == 0.0 || !value.is_finite() {
        return format!("{:.*}", digits - 1, value);
    }
    let magnitude = value.abs().log10().floor() as i32;
    if magnitude >= digits as i32 || magnitude < -4 {
        format!("{:.*e}", digits - 1, value)
    } else {
        let decimals = (digits as i32 - 1 - magnitude).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}

/// Renders the three-line report: both Q-values and the chosen policy.
pub fn render(solution: &Solution) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Q{}({}, {}) = {}",
        solution.horizon,
        solution.start,
        Action::Exercise,
        significant(solution.q_exercise, 5)
    );
    let _ = writeln!(
        out,
        "Q{}({}, {}) = {}",
        solution.horizon,
        solution.start,
        Action::Relax,
        significant(solution.q_relax, 5)
    );
    let _ = write!(out, "\u{3c0} = {}", solution.action);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::State;

    #[test]
    fn five_significant_digits() {
        assert_eq!(significant(8.0, 5), "8.0000");
        assert_eq!(significant(10.0, 5), "10.000");
        assert_eq!(significant(9.5, 5), "9.5000");
        assert_eq!(significant(5.4, 5), "5.4000");
        assert_eq!(significant(0.0, 5), "0.0000");
        assert_eq!(significant(-9.5, 5), "-9.5000");
        assert_eq!(significant(99999.0, 5), "99999");
    }

    #[test]
    fn extreme_magnitudes_fall_back_to_scientific() {
        assert_eq!(significant(1234560.0, 5), "1.2346e6");
        assert_eq!(significant(0.0000123456, 5), "1.2346e-5");
    }

    #[test]
    fn report_layout() {
        let solution = Solution {
            start: State::Fit,
            horizon: 0,
            q_exercise: 8.0,
            q_relax: 10.0,
            action: Action::Relax,
        };
        let report = render(&solution);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Q0(fit, exercise) = 8.0000");
        assert_eq!(lines[1], "Q0(fit, relax) = 10.000");
        assert_eq!(lines[2], "\u{3c0} = relax");
    }
}
