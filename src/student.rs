use std::{cmp::Ordering, fmt};

/// One row of the student habits dataset.
///
/// Records are identified by `student_id` alone: equality and ordering ignore every other field.
#[derive(Debug, Clone, Default)]
pub struct Student {
    pub student_id: String,
    pub age: i32,
    pub gender: String,
    pub study_hours_per_day: f64,
    pub social_media_hours: f64,
    pub netflix_hours: f64,
    pub part_time_job: bool,
    pub attendance_percentage: f64,
    pub sleep_hours: f64,
    pub diet_quality: String,
    pub exercise_frequency: i32,
    pub parental_education_level: String,
    pub internet_quality: String,
    pub mental_health_rating: i32,
    pub extracurricular_participation: bool,
    pub exam_score: f64,
}

impl Student {
    /// A record with only the identifying field set.
    pub fn with_id(student_id: impl Into<String>) -> Self {
        Student {
            student_id: student_id.into(),
            ..Default::default()
        }
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.student_id == other.student_id
    }
}

impl Eq for Student {}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Student {
    fn cmp(&self, other: &Self) -> Ordering {
        self.student_id.cmp(&other.student_id)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student {{ id: {}, age: {}, exam score: {} }}",
            self.student_id, self.age, self.exam_score
        )
    }
}
