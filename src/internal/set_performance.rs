#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]

use plotters::prelude::*;
use rand::Rng;
use simple_sets::{
    ChainedHashSet, CollectionFacadeSet, ProbingHashSet, SimpleSet, build_from, file_to_array,
};
use std::{
    collections::{BTreeSet, HashSet, LinkedList},
    env,
    error::Error,
    hint::black_box,
    time::Instant,
};

// Structures measured, in the order `structures` builds them
const STRUCTURE_NAMES: [&str; 5] =
    ["ChainedHashSet", "ProbingHashSet", "TreeSet", "LinkedList", "HashSet"];
const LINKED_LIST_INDEX: usize = 3;

// Iterations per contains measurement; the linked list is too slow for the full count
const CONTAINS_ITERATIONS: u32 = 70_000;
const LINKED_LIST_ITERATIONS: u32 = 7_000;

// Values generated when no data file is given
const SYNTHETIC_VALUES: usize = 20_000;

const PLOT_PATH: &str = "contains_timings.png";

struct Dataset {
    name: String,
    values: Vec<String>,
}

fn structures() -> Vec<Box<dyn SimpleSet>> {
    let mut sets: Vec<Box<dyn SimpleSet>> = Vec::with_capacity(STRUCTURE_NAMES.len());
    sets.push(Box::new(ChainedHashSet::new()));
    sets.push(Box::new(ProbingHashSet::new()));
    sets.push(Box::new(CollectionFacadeSet::new(BTreeSet::<String>::new())));
    sets.push(Box::new(CollectionFacadeSet::new(LinkedList::<String>::new())));
    sets.push(Box::new(CollectionFacadeSet::new(HashSet::<String>::new())));
    sets
}

// Loads `path` if given, otherwise generates numeric strings like the ones in the data files
fn load_dataset(
    path: Option<String>,
    fallback_name: &str,
    rng: &mut impl Rng,
) -> Result<Dataset, Box<dyn Error>> {
    if let Some(path) = path {
        let values = file_to_array(&path)?;
        return Ok(Dataset { name: path, values });
    }

    let values = (0..SYNTHETIC_VALUES)
        .map(|_| rng.random_range(-20_000_000_000_i64..20_000_000_000).to_string())
        .collect();
    Ok(Dataset { name: format!("{fallback_name} (synthetic)"), values })
}

fn test_build_data(data: &Dataset) {
    for (set, name) in structures().iter_mut().zip(STRUCTURE_NAMES) {
        let start = Instant::now();
        build_from(&mut **set, &data.values);
        let elapsed = start.elapsed();
        println!("initialized {} with {}. Time: {}ms.", name, data.name, elapsed.as_millis());
    }
    println!();
}

// Average time of one `contains` call, in nanoseconds
fn analyze_contains(set: &dyn SimpleSet, probe: &str, iterations: u32, warm_up: bool) -> f64 {
    if warm_up {
        for _ in 0..iterations {
            black_box(set.contains(black_box(probe)));
        }
    }
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(set.contains(black_box(probe)));
    }
    start.elapsed().as_nanos() as f64 / f64::from(iterations)
}

fn test_contains(data: &Dataset, probe: &str) -> Vec<f64> {
    let mut timings = Vec::with_capacity(STRUCTURE_NAMES.len());
    for (index, (mut set, name)) in structures().into_iter().zip(STRUCTURE_NAMES).enumerate() {
        build_from(&mut *set, &data.values);
        let average = if index == LINKED_LIST_INDEX {
            analyze_contains(&*set, probe, LINKED_LIST_ITERATIONS, false)
        } else {
            analyze_contains(&*set, probe, CONTAINS_ITERATIONS, true)
        };
        println!("{} Contains '{}' In {}: {:.0}ns.", name, probe, data.name, average);
        timings.push(average);
    }
    println!();
    timings
}

fn plot_contains(labels: &[String], timings: &[Vec<f64>]) -> Result<(), Box<dyn Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
        RGBColor(180, 50, 180), // Bright magenta
        RGBColor(230, 150, 30), // Orange
    ];
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    let root = BitMapBackend::new(PLOT_PATH, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_time = timings
        .iter()
        .flat_map(|v| v.iter())
        .fold(0.0, |max, &x| if x > max { x } else { max }) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Average contains time per structure", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..labels.len(), 0.0..max_time.max(1.0))?;

    chart
        .configure_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|x| labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Contains test")
        .y_desc("Average time (ns)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (structure_idx, &name) in STRUCTURE_NAMES.iter().enumerate() {
        let color = &colors[structure_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                timings.iter().enumerate().map(|(test_idx, row)| (test_idx, row[structure_idx])),
                line_style,
            ))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(timings.iter().enumerate().map(|(test_idx, row)| {
            Circle::new((test_idx, row[structure_idx]), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let mut rng = rand::rng();
    let data1 = load_dataset(args.next(), "data1", &mut rng)?;
    let data2 = load_dataset(args.next(), "data2", &mut rng)?;

    println!("Starting Test 1.........");
    test_build_data(&data1);

    println!("Starting Test 2.........");
    test_build_data(&data2);

    let contains_tests = [
        (&data1, "hi"),
        (&data1, "-13170890158"),
        (&data2, "23"),
        (&data2, "hi"),
    ];
    let mut labels = Vec::with_capacity(contains_tests.len());
    let mut timings = Vec::with_capacity(contains_tests.len());
    for (test_idx, (data, probe)) in contains_tests.into_iter().enumerate() {
        println!("Starting Test {}.........", test_idx + 3);
        timings.push(test_contains(data, probe));
        labels.push(format!("'{probe}' in {}", data.name));
    }

    plot_contains(&labels, &timings)?;
    println!("Generated plot image: {PLOT_PATH}");

    Ok(())
}
