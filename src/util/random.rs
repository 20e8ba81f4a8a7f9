use rand::{distributions::Alphanumeric, seq::SliceRandom, Rng};

use crate::student::Student;

pub trait Random {
    fn gen<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

const RANDOM_STRING_MIN: usize = 0;
const RANDOM_STRING_MAX: usize = 10;

const GENDERS: [&str; 3] = ["Female", "Male", "Other"];
const QUALITIES: [&str; 3] = ["Poor", "Fair", "Good"];
const EDUCATION_LEVELS: [&str; 4] = ["None", "High School", "Bachelor", "Master"];

impl Random for String {
    // get random string whose length is in [RANDOM_STRING_MIN, RANDOM_STRING_MAX)
    fn gen<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let length: usize = rng.gen_range(RANDOM_STRING_MIN..RANDOM_STRING_MAX);

        rng.sample_iter(&Alphanumeric)
            .map(char::from)
            .take(length)
            .collect()
    }
}

impl Random for u64 {
    fn gen<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[&str]) -> String {
    choices.choose(rng).copied().unwrap_or_default().to_string()
}

impl Random for Student {
    // the id is drawn from a space of one million, so collisions are possible
    fn gen<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Student {
            student_id: format!("S{:06}", rng.gen_range(0..1_000_000)),
            age: rng.gen_range(17..=24),
            gender: pick(rng, &GENDERS),
            study_hours_per_day: rng.gen_range(0.0..8.0),
            social_media_hours: rng.gen_range(0.0..6.0),
            netflix_hours: rng.gen_range(0.0..5.0),
            part_time_job: rng.gen(),
            attendance_percentage: rng.gen_range(50.0..100.0),
            sleep_hours: rng.gen_range(4.0..10.0),
            diet_quality: pick(rng, &QUALITIES),
            exercise_frequency: rng.gen_range(0..=6),
            parental_education_level: pick(rng, &EDUCATION_LEVELS),
            internet_quality: pick(rng, &QUALITIES),
            mental_health_rating: rng.gen_range(1..=10),
            extracurricular_participation: rng.gen(),
            exam_score: rng.gen_range(0.0..100.0),
        }
    }
}

/// `count` random students with distinct ids, in random order.
pub fn distinct_students<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Student> {
    let mut students: Vec<Student> = (0..count)
        .map(|i| Student {
            student_id: format!("S{:07}", i),
            ..Student::gen(rng)
        })
        .collect();

    students.shuffle(rng);
    students
}
