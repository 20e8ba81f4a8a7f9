use std::{
    fmt,
    time::{Duration, Instant},
};

use log::{error, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{avltree::AVLTree, set::SequentialSet, student::Student};

/// How many records of the traversal are kept to show the order.
pub const SHOWN_IN_ORDER: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct Insertion {
    pub elapsed: Duration,
    pub records: usize,
    pub size: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Search {
    pub elapsed: Duration,
    pub searches: usize,
    pub found: usize,
    /// The record searched at the midpoint of the phase, and whether it was found.
    pub example: Option<(Student, bool)>,
}

#[derive(Debug, Clone, Default)]
pub struct Traversal {
    pub elapsed: Duration,
    pub len: usize,
    pub first: Vec<Student>,
}

#[derive(Debug, Clone, Default)]
pub struct Removal {
    pub elapsed: Duration,
    pub attempted: usize,
    pub removed: usize,
    pub size: usize,
}

/// The outcome of all four phases.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub insertion: Insertion,
    pub search: Search,
    pub traversal: Traversal,
    pub removal: Removal,
}

/// average time per operation in milliseconds, 0 if there was no operation
fn average_ms(total: Duration, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total.as_secs_f64() * 1000.0 / count as f64
    }
}

fn ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

impl Report {
    pub fn avg_insertion_ms(&self) -> f64 {
        average_ms(self.insertion.elapsed, self.insertion.records)
    }

    pub fn avg_search_ms(&self) -> f64 {
        average_ms(self.search.elapsed, self.search.searches)
    }

    pub fn avg_removal_ms(&self) -> f64 {
        average_ms(self.removal.elapsed, self.removal.attempted)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== AVL Tree Performance Summary =====")?;
        writeln!(f, "Records: {}", self.insertion.records)?;
        writeln!(
            f,
            "Insertion: {:.3} ms total, {:.6} ms per record, tree size {}",
            ms(self.insertion.elapsed),
            self.avg_insertion_ms(),
            self.insertion.size
        )?;
        writeln!(
            f,
            "Search:    {:.3} ms total, {:.6} ms per search, found {} of {}",
            ms(self.search.elapsed),
            self.avg_search_ms(),
            self.search.found,
            self.search.searches
        )?;
        if let Some((student, found)) = &self.search.example {
            writeln!(
                f,
                "  example: {} was {}",
                student,
                if *found { "found" } else { "not found" }
            )?;
        }
        writeln!(
            f,
            "Traversal: {:.3} ms total, {} records in order",
            ms(self.traversal.elapsed),
            self.traversal.len
        )?;
        for (i, student) in self.traversal.first.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, student)?;
        }
        writeln!(
            f,
            "Removal:   {:.3} ms total, {:.6} ms per removal, removed {} of {}, tree size {}",
            ms(self.removal.elapsed),
            self.avg_removal_ms(),
            self.removal.removed,
            self.removal.attempted,
            self.removal.size
        )?;
        write!(f, "========================================")
    }
}

/// Drive an [`AVLTree`] of students through timed insert, search, traverse and remove phases.
pub struct Analyzer {
    students: Vec<Student>,
    tree: AVLTree<Student>,
    rng: StdRng,
}

impl Analyzer {
    pub fn new(students: Vec<Student>, seed: Option<u64>) -> Analyzer {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Analyzer {
            students,
            tree: AVLTree::new(),
            rng,
        }
    }

    pub fn tree(&self) -> &AVLTree<Student> {
        &self.tree
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    fn check_tree(&self, phase: &str) {
        if let Err(e) = self.tree.verify() {
            error!("tree is broken after {}: {}", phase, e);
        }
    }

    /// Insert every record in load order.
    pub fn measure_insertion(&mut self) -> Insertion {
        info!("inserting {} students", self.students.len());

        let start = Instant::now();
        for student in &self.students {
            let _ = self.tree.insert(student.clone());
        }
        let elapsed = start.elapsed();

        self.check_tree("insertion");
        info!(
            "insertion took {:.3} ms, tree size {}",
            ms(elapsed),
            self.tree.len()
        );

        Insertion {
            elapsed,
            records: self.students.len(),
            size: self.tree.len(),
        }
    }

    /// Search `searches` records drawn uniformly, with replacement, from the loaded list.
    pub fn measure_search(&mut self, searches: usize) -> Search {
        if self.tree.is_empty() || self.students.is_empty() {
            info!("tree is empty, skipping search");
            return Search::default();
        }

        info!("searching {} random students", searches);

        let mut found = 0;
        let mut example = None;

        let start = Instant::now();
        for i in 0..searches {
            let student = &self.students[self.rng.gen_range(0..self.students.len())];
            let hit = self.tree.search(student);

            if hit {
                found += 1;
            }

            if i == searches / 2 && example.is_none() {
                example = Some((student.clone(), hit));
            }
        }
        let elapsed = start.elapsed();

        info!(
            "search took {:.3} ms, found {} of {}",
            ms(elapsed),
            found,
            searches
        );

        Search {
            elapsed,
            searches,
            found,
            example,
        }
    }

    /// Collect the whole tree in order once.
    pub fn measure_traversal(&mut self) -> Traversal {
        if self.tree.is_empty() {
            info!("tree is empty, skipping traversal");
            return Traversal::default();
        }

        info!("traversing the tree in order");

        let start = Instant::now();
        let in_order = self.tree.traverse();
        let elapsed = start.elapsed();

        let first = in_order
            .iter()
            .take(SHOWN_IN_ORDER)
            .map(|&student| student.clone())
            .collect();

        info!(
            "traversal took {:.3} ms, {} students",
            ms(elapsed),
            in_order.len()
        );

        Traversal {
            elapsed,
            len: in_order.len(),
            first,
        }
    }

    /// Remove the first `removals` records in load order.
    pub fn measure_removal(&mut self, removals: usize) -> Removal {
        if self.tree.is_empty() {
            info!("tree is empty, skipping removal");
            return Removal::default();
        }

        let attempted = removals.min(self.students.len());
        info!("removing {} students", attempted);

        let mut removed = 0;

        let start = Instant::now();
        for student in &self.students[..attempted] {
            if self.tree.remove(student) {
                removed += 1;
            }
        }
        let elapsed = start.elapsed();

        self.check_tree("removal");
        info!(
            "removal took {:.3} ms, removed {} of {}, tree size {}",
            ms(elapsed),
            removed,
            attempted,
            self.tree.len()
        );

        Removal {
            elapsed,
            attempted,
            removed,
            size: self.tree.len(),
        }
    }

    /// Run all phases in order: insertion, search, traversal, removal.
    pub fn run(&mut self, searches: usize, removals: usize) -> Report {
        let insertion = self.measure_insertion();
        let search = self.measure_search(searches);
        let traversal = self.measure_traversal();
        let removal = self.measure_removal(removals);

        Report {
            insertion,
            search,
            traversal,
            removal,
        }
    }
}
