use rand::prelude::*;
use colored::Colorize;
use plotters::prelude::*;
use serde::{Serialize, Deserialize};

use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::common::checker::*;
use crate::error::{Id3Error, Result};
use crate::tree::{Id3, Id3Builder};
use super::loss_functions::accuracy;


const WIDTH: usize = 9;
const HEADER: &str = "Size,Accuracy,Time\n";
const PLOT_SIZE: (u32, u32) = (800, 600);


/// The averaged test accuracy of trees
/// trained on the first `size` training examples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Number of training examples (header excluded).
    pub size: usize,
    /// Mean accuracy over the trials, in `[0, 1]`.
    pub accuracy: f64,
}


/// A struct that measures the learning curve of [`Id3`]:
/// for every `size` in `1..=n` it trains on the header plus
/// the first `size` training examples and records the accuracy
/// on the test rows, averaged over several trials.
///
/// Without shuffling every trial sees the same prefix.
/// With shuffling every trial draws its own order of the
/// training examples from a seeded generator.
/// # Example
/// ```no_run
/// use id3_tree::read_csv;
/// use id3_tree::research::{LearningCurve, plot_learning_curve};
///
/// let train = read_csv("/path/to/train.csv").unwrap();
/// let test = read_csv("/path/to/test.csv").unwrap();
///
/// let points = LearningCurve::new(&train, &test)
///     .trials(20)
///     .seed(777)
///     .shuffle(true)
///     .verbose(true)
///     .log_file("learning_curve.csv")
///     .run()
///     .unwrap();
///
/// plot_learning_curve(&points, "learning_curve.png", "Learning curve")
///     .unwrap();
/// ```
pub struct LearningCurve<'a, S> {
    train: &'a [Vec<S>],
    test: &'a [Vec<S>],
    id3: Id3,
    trials: usize,
    seed: u64,
    shuffle: bool,
    verbose: bool,
    log_file: Option<PathBuf>,
}


impl<'a, S> LearningCurve<'a, S> {
    /// Construct a new instance of `LearningCurve`.
    /// Both `train` and `test` start with a header row.
    #[inline]
    pub fn new(train: &'a [Vec<S>], test: &'a [Vec<S>]) -> Self {
        Self {
            train,
            test,
            id3: Id3Builder::new().build(),
            trials: 20,
            seed: 1234,
            shuffle: false,
            verbose: false,
            log_file: None,
        }
    }


    /// Set the learner.
    /// Default is `Id3Builder::new().build()`.
    #[inline]
    pub fn learner(mut self, id3: Id3) -> Self {
        self.id3 = id3;
        self
    }


    /// Set the number of trials per training size.
    /// Default value is `20.`
    #[inline]
    pub fn trials(mut self, trials: usize) -> Self {
        assert!(trials > 0, "The number of trials must be positive.");
        self.trials = trials;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Shuffle the training examples before taking prefixes.
    /// Default vaule is `false.`
    #[inline]
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }


    /// If `true`, prints the accuracy for every training size.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Write the curve to a CSV file while running.
    #[inline]
    pub fn log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.log_file = Some(path.as_ref().to_path_buf());
        self
    }
}


impl<S> LearningCurve<'_, S>
    where S: AsRef<str>
{
    /// Run the experiment.
    pub fn run(&self) -> Result<Vec<CurvePoint>> {
        let n_column = check_training_rows(self.train)?;
        let n_sample = self.train.len() - 1;
        if n_sample == 0 {
            return Err(Id3Error::NoExamples);
        }
        for (row, values) in self.test.iter().enumerate().skip(1) {
            check_row_length(row, values.len(), n_column)?;
        }

        let mut log = match &self.log_file {
            Some(path) => {
                let mut file = File::create(path)?;
                file.write_all(HEADER.as_bytes())?;
                Some(file)
            },
            None => None,
        };

        let orders = self.orders(n_sample);
        if self.verbose {
            self.print_log_header();
        }

        // Cumulative time
        let mut time_acc = 0_u128;
        let mut points = Vec::with_capacity(n_sample);
        for size in 1..=n_sample {
            let now = Instant::now();

            let mut acc = 0f64;
            for order in orders.iter() {
                let rows = self.prefix(order, size);
                let f = self.id3.fit(&rows)?;
                acc += accuracy(&f, self.test, true)?;
            }
            let acc = acc / self.trials as f64;

            time_acc += now.elapsed().as_millis();

            if let Some(file) = log.as_mut() {
                let line = format!("{size},{acc},{time_acc}\n");
                file.write_all(line.as_bytes())?;
            }
            if self.verbose {
                println!(
                    "{:>WIDTH$}\t{:>WIDTH$.4}\t{:>WIDTH$}",
                    size.to_string().red(),
                    acc,
                    format!("{time_acc}ms").cyan(),
                );
            }

            points.push(CurvePoint { size, accuracy: acc });
        }

        Ok(points)
    }


    /// One order of the training examples per trial.
    /// Indices are positions in `self.train` (the header is `0`).
    fn orders(&self, n_sample: usize) -> Vec<Vec<usize>> {
        let order = (1..=n_sample).collect::<Vec<_>>();
        if !self.shuffle {
            return vec![order; self.trials];
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.trials)
            .map(|_| {
                let mut order = order.clone();
                order.shuffle(&mut rng);
                order
            })
            .collect()
    }


    /// The header followed by the first `size` examples of `order`.
    fn prefix(&self, order: &[usize], size: usize) -> Vec<Vec<&str>> {
        std::iter::once(0)
            .chain(order[..size].iter().copied())
            .map(|ix| self.train[ix].iter().map(|v| v.as_ref()).collect())
            .collect()
    }


    fn print_log_header(&self) {
        println!(
            "{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "SIZE".bold().red(),
            "ACC.".bold().green(),
            "TIME".bold().cyan(),
        );
    }
}


/// Draw `points` as a line chart into a PNG file at `path`.
pub fn plot_learning_curve<P>(points: &[CurvePoint], path: P, caption: &str)
    -> Result<()>
    where P: AsRef<Path>
{
    let path = path.as_ref();
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let max_size = points.iter()
        .map(|point| point.size)
        .max()
        .unwrap_or(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..max_size, 0f64..1f64)
        .map_err(plot_error)?;

    chart.configure_mesh()
        .x_desc("# of training examples")
        .y_desc("Accuracy")
        .draw()
        .map_err(plot_error)?;

    let line = points.iter()
        .map(|point| (point.size as f64, point.accuracy));
    chart.draw_series(LineSeries::new(line, &BLUE))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}


fn plot_error<E: std::fmt::Display>(e: E) -> Id3Error {
    Id3Error::Plot(e.to_string())
}
