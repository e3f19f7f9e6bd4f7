use std::time::{Duration, Instant};

use sorts::generator::{DataCase, generate_case};
use sorts::{SortAlgorithm, algorithm_name, all_algorithms, is_ascending, sort_f64};

const DATASET_SEED: u64 = 0x5EED_2026;
const MAX_SAMPLE: usize = 9_000_000;
/// Escalation for an algorithm stops after a run exceeds this ceiling.
const RUN_CEILING: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug)]
struct RunRecord {
    algorithm: SortAlgorithm,
    size: usize,
    elapsed: Duration,
}

/// Sample sizes 10, 20, .. 90, 100, 200, .. up to [`MAX_SAMPLE`], ascending.
fn size_schedule() -> Vec<usize> {
    let mut schedule = Vec::new();
    let mut decade = 10_usize;
    while decade <= MAX_SAMPLE / 9 {
        for step in 1..=9 {
            schedule.push(step * decade);
        }
        decade *= 10;
    }
    schedule
}

fn elapsed_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1_000.0
}

fn throughput(record: &RunRecord) -> f64 {
    record.size as f64 / elapsed_ms(record.elapsed).max(1e-3)
}

/// Largest sorted size first; ties broken by the faster run.
fn rank(records: &mut [RunRecord]) {
    records.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.elapsed.cmp(&b.elapsed)));
}

fn main() {
    println!("Initializing {MAX_SAMPLE} pseudo-random samples.");
    let dataset = generate_case(DataCase::Uniform01, MAX_SAMPLE, DATASET_SEED);
    let schedule = size_schedule();

    let mut leaderboard: Vec<RunRecord> = Vec::new();
    for &algo in all_algorithms() {
        println!();
        let mut latest: Option<RunRecord> = None;

        for &size in &schedule {
            let mut work = dataset[..size].to_vec();
            let start = Instant::now();
            sort_f64(algo, &mut work);
            let elapsed = start.elapsed();

            println!(
                "{}: {} f64 numbers in {:.1} ms.",
                algorithm_name(algo),
                size,
                elapsed_ms(elapsed),
            );
            if !is_ascending(&work) {
                println!("    incorrectly sorted result");
            }

            latest = Some(RunRecord {
                algorithm: algo,
                size,
                elapsed,
            });
            if elapsed > RUN_CEILING {
                break;
            }
        }

        if let Some(record) = latest {
            leaderboard.push(record);
        }
    }

    rank(&mut leaderboard);
    println!();
    for (place, record) in leaderboard.iter().enumerate() {
        println!(
            "#{} {}\t{} elements in {:.1} ms. {:.0} el/ms.",
            place + 1,
            algorithm_name(record.algorithm),
            record.size,
            elapsed_ms(record.elapsed),
            throughput(record),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_is_ascending_and_bounded() {
        let schedule = size_schedule();
        assert_eq!(schedule.first(), Some(&10));
        assert_eq!(schedule.last(), Some(&MAX_SAMPLE));
        assert!(schedule.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(schedule.len(), 54);
    }

    #[test]
    fn ranking_prefers_larger_then_faster() {
        let mut records = vec![
            RunRecord {
                algorithm: SortAlgorithm::BubbleSort,
                size: 100,
                elapsed: Duration::from_millis(50),
            },
            RunRecord {
                algorithm: SortAlgorithm::HeapSort,
                size: 1000,
                elapsed: Duration::from_millis(900),
            },
            RunRecord {
                algorithm: SortAlgorithm::QuickSortInward,
                size: 1000,
                elapsed: Duration::from_millis(300),
            },
        ];

        rank(&mut records);

        assert_eq!(records[0].algorithm, SortAlgorithm::QuickSortInward);
        assert_eq!(records[1].algorithm, SortAlgorithm::HeapSort);
        assert_eq!(records[2].algorithm, SortAlgorithm::BubbleSort);
    }

    #[test]
    fn throughput_is_elements_per_ms() {
        let record = RunRecord {
            algorithm: SortAlgorithm::HeapSort,
            size: 5000,
            elapsed: Duration::from_millis(250),
        };
        assert!((throughput(&record) - 20.0).abs() < 1e-9);
    }
}
