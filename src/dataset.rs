use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use log::{debug, info, warn};

use crate::{
    error::{LoadError, ParseError},
    student::Student,
};

/// The number of comma separated fields a row must have.
pub const FIELD_COUNT: usize = 16;

/// The records that parsed, and how many rows were rejected.
#[derive(Debug, Default)]
pub struct Dataset {
    pub students: Vec<Student>,
    pub skipped: usize,
}

/// Load the dataset from a CSV file whose first line is a header.
///
/// A file that cannot be opened or read is an error. A row that cannot be parsed is logged and
/// skipped.
pub fn load(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let into_load_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(into_load_error)?;
    let dataset = read(BufReader::new(file)).map_err(into_load_error)?;

    info!(
        "loaded {} students from {} ({} rows skipped)",
        dataset.students.len(),
        path.display(),
        dataset.skipped
    );

    Ok(dataset)
}

/// Read the dataset from any buffered source. The first line is the header.
pub fn read<R: BufRead>(reader: R) -> io::Result<Dataset> {
    let mut dataset = Dataset::default();
    let mut lines = reader.lines();

    match lines.next() {
        Some(header) => debug!("dataset header: {}", header?),
        None => return Ok(dataset),
    }

    // line numbers are 1-based and the header is line 1
    for (number, line) in (2usize..).zip(lines) {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        match parse_student(&line) {
            Ok(student) => dataset.students.push(student),
            Err(e) => {
                warn!("skipping line {}: {} ({:?})", number, e, line);
                dataset.skipped += 1;
            }
        }
    }

    Ok(dataset)
}

/// Parse one data row into a record. Fields map to the record by position.
pub fn parse_student(line: &str) -> Result<Student, ParseError> {
    let values: Vec<&str> = line.split(',').collect();

    if values.len() < FIELD_COUNT {
        return Err(ParseError::FieldCount {
            expected: FIELD_COUNT,
            found: values.len(),
        });
    }

    Ok(Student {
        student_id: values[0].to_string(),
        age: parse_int("age", values[1])?,
        gender: values[2].to_string(),
        study_hours_per_day: parse_float("study_hours_per_day", values[3])?,
        social_media_hours: parse_float("social_media_hours", values[4])?,
        netflix_hours: parse_float("netflix_hours", values[5])?,
        part_time_job: parse_bool(values[6]),
        attendance_percentage: parse_float("attendance_percentage", values[7])?,
        sleep_hours: parse_float("sleep_hours", values[8])?,
        diet_quality: values[9].to_string(),
        exercise_frequency: parse_int("exercise_frequency", values[10])?,
        parental_education_level: values[11].to_string(),
        internet_quality: values[12].to_string(),
        mental_health_rating: parse_int("mental_health_rating", values[13])?,
        extracurricular_participation: parse_bool(values[14]),
        exam_score: parse_float("exam_score", values[15])?,
    })
}

/// Empty values and the literal `null` stand for a missing number.
fn is_missing(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("null")
}

fn parse_number<T: FromStr + Default>(value: &str) -> Option<T> {
    let value = value.trim();

    if is_missing(value) {
        return Some(T::default());
    }

    value.parse().ok()
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, ParseError> {
    parse_number(value).ok_or_else(|| ParseError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

fn parse_float(field: &'static str, value: &str) -> Result<f64, ParseError> {
    parse_number(value).ok_or_else(|| ParseError::InvalidFloat {
        field,
        value: value.to_string(),
    })
}

/// `Yes` in any case is true, anything else is false.
fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("yes")
}
