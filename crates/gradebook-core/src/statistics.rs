//! Grade averaging and the "better or equal" comparison.
//!
//! Averages are rounded half-up to the scale of the sum they are computed
//! from, so grades written with one decimal place produce averages with one
//! decimal place: `{2, 3, 2.3, 5, 3.7, 1.3}` sums to `17.3` and averages to
//! `2.9`. No fixed number of places is imposed at this layer; display
//! rounding is a separate step ([`round_half_up`]).

use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::Course;

/// Arithmetic mean of `values`, rounded half-up to the scale of their sum.
///
/// Returns `None` for an empty input.
pub fn mean_half_up<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let mut sum = Decimal::ZERO;
    let mut count = 0u32;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(round_half_up(sum / Decimal::from(count), sum.scale()))
}

/// Round `value` half-up to exactly `places` decimal places.
///
/// The result always carries `places` digits, so `1` becomes `1.0` for one
/// place.
pub fn round_half_up(value: Decimal, places: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded
}

/// Institution average: the mean of each graded course's own average.
///
/// Courses without any grade are left out entirely, so this is an average
/// of course averages and not weighted by the number of students.
pub fn average_of_course_averages<'a, I>(courses: I) -> Option<Decimal>
where
    I: IntoIterator<Item = &'a Course>,
{
    mean_half_up(courses.into_iter().filter_map(Course::average_grade))
}

/// Whether `average` is numerically at most `threshold`. Lower grades are
/// better; a missing average counts as one unit worse than the threshold.
pub fn is_better_or_equal(average: Option<Decimal>, threshold: Decimal) -> bool {
    average.is_some_and(|average| average <= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Student, Teacher};
    use rust_decimal_macros::dec;

    #[test]
    fn mean_of_nothing_is_none() {
        assert_eq!(mean_half_up(Vec::new()), None);
    }

    #[test]
    fn mean_rounds_at_sum_scale() {
        let mean = mean_half_up([dec!(2), dec!(3), dec!(2.3), dec!(5), dec!(3.7), dec!(1.3)]);
        assert_eq!(mean, Some(dec!(2.9)));
        assert_eq!(mean.unwrap().scale(), 1);
    }

    #[test]
    fn mean_of_integers_rounds_to_integer() {
        // 7 / 2 = 3.5, half-up at scale 0.
        assert_eq!(mean_half_up([dec!(5), dec!(2)]), Some(dec!(4)));
        // 6.3 / 2 = 3.15, half-up at scale 1.
        assert_eq!(mean_half_up([dec!(2.3), dec!(4)]), Some(dec!(3.2)));
    }

    #[test]
    fn mean_keeps_trailing_zero_scale() {
        let mean = mean_half_up([dec!(1.5), dec!(1.5)]).unwrap();
        assert_eq!(mean.to_string(), "1.5");
        let mean = mean_half_up([dec!(2.0), dec!(4)]).unwrap();
        assert_eq!(mean.to_string(), "3.0");
    }

    #[test]
    fn round_half_up_pads_and_rounds() {
        assert_eq!(round_half_up(dec!(1), 1).to_string(), "1.0");
        assert_eq!(round_half_up(dec!(2.25), 1).to_string(), "2.3");
        assert_eq!(round_half_up(dec!(2.0375), 1).to_string(), "2.0");
    }

    #[test]
    fn missing_average_is_never_better() {
        assert!(!is_better_or_equal(None, dec!(3.0)));
        assert!(!is_better_or_equal(None, dec!(6)));
        assert!(is_better_or_equal(Some(dec!(3.0)), dec!(3.0)));
        assert!(is_better_or_equal(Some(dec!(1.3)), dec!(3.0)));
        assert!(!is_better_or_equal(Some(dec!(3.1)), dec!(3.0)));
    }

    #[test]
    fn extreme_thresholds_do_not_overflow() {
        assert!(is_better_or_equal(Some(Decimal::ONE), Decimal::MAX));
        assert!(!is_better_or_equal(None, Decimal::MAX));
        assert!(!is_better_or_equal(Some(Decimal::ONE), Decimal::MIN));
    }

    #[test]
    fn institution_average_skips_ungraded_courses() {
        let teacher = Teacher::new("1", "Dewey Finn", "Unknown Address").unwrap();
        let mut graded = Course::new("a", "Rock Band 101", teacher.clone()).unwrap();
        let mut ungraded = Course::new("b", "Advanced Rock Theory", teacher).unwrap();

        for (i, grade) in ["2", "3", "2.3", "5", "3.7", "1.3"].iter().enumerate() {
            let mut student = Student::new(i.to_string(), "Student", "Unknown Address").unwrap();
            graded.add_student(&mut student);
            ungraded.add_student(&mut student);
            graded.set_grade(student.id(), grade).unwrap();
        }

        assert_eq!(
            average_of_course_averages([&graded, &ungraded]),
            Some(dec!(2.9))
        );
        assert_eq!(average_of_course_averages([&ungraded]), None);
        assert_eq!(average_of_course_averages(Vec::new()), None);
    }

    #[test]
    fn institution_average_is_not_student_weighted() {
        let teacher = Teacher::new("1", "Dewey Finn", "Unknown Address").unwrap();
        let mut big = Course::new("big", "Big", teacher.clone()).unwrap();
        let mut small = Course::new("small", "Small", teacher).unwrap();

        for i in 0..3 {
            let mut student = Student::new(i.to_string(), "Student", "Unknown Address").unwrap();
            big.add_student(&mut student);
            big.set_grade(student.id(), "1.0").unwrap();
        }
        let mut student = Student::new("x", "Student", "Unknown Address").unwrap();
        small.add_student(&mut student);
        small.set_grade("x", "5.0").unwrap();

        // Course averages 1.0 and 5.0; a weighted mean would give 2.0.
        assert_eq!(average_of_course_averages([&big, &small]), Some(dec!(3.0)));
    }
}
