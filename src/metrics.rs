// ABOUTME: Converts paired cumulative usage counters into CPU and memory percentages.
// ABOUTME: Pure functions; absent readings are decided by the caller, never encoded as zero.

use crate::runtime::{StatsPair, UsageSample};
use serde::Serialize;

/// Instantaneous resource usage of one running container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsReading {
    /// CPU utilisation; 100.0 means one full CPU. Never negative.
    pub cpu_percent: f64,
    pub memory_used: u64,
    pub memory_limit: u64,
    /// Memory used as a share of the limit; 0 when there is no limit.
    pub memory_percent: f64,
}

/// Derive a reading from two consecutive samples of the same container.
pub fn derive(pair: &StatsPair) -> MetricsReading {
    let StatsPair { previous, current } = pair;

    let cpu_delta = i128::from(current.container_cpu_time) - i128::from(previous.container_cpu_time);
    let system_delta = i128::from(current.system_cpu_time) - i128::from(previous.system_cpu_time);

    MetricsReading {
        cpu_percent: cpu_percent(cpu_delta, system_delta, online_cpus(current)),
        memory_used: current.memory_usage,
        memory_limit: current.memory_limit,
        memory_percent: memory_percent(current.memory_usage, current.memory_limit),
    }
}

/// `(cpu_delta / system_delta) * cpus * 100`, or 0 when the host counter did
/// not advance. A negative container delta (counter reset) clamps to 0.
pub fn cpu_percent(cpu_delta: i128, system_delta: i128, cpus: u32) -> f64 {
    if system_delta <= 0 || cpu_delta <= 0 {
        return 0.0;
    }
    (cpu_delta as f64 / system_delta as f64) * f64::from(cpus) * 100.0
}

/// `usage / limit * 100`, or 0 when there is no limit.
pub fn memory_percent(usage: u64, limit: u64) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    usage as f64 / limit as f64 * 100.0
}

/// Online CPUs, falling back to the per-CPU counter count, then to 1.
fn online_cpus(sample: &UsageSample) -> u32 {
    match (sample.online_cpus, sample.percpu_count) {
        (0, 0) => 1,
        (0, percpu) => percpu,
        (online, _) => online,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample(container: u64, system: u64, cpus: u32) -> UsageSample {
        UsageSample {
            container_cpu_time: container,
            system_cpu_time: system,
            online_cpus: cpus,
            ..Default::default()
        }
    }

    #[test]
    fn cpu_share_scales_by_online_cpus() {
        let pair = StatsPair {
            previous: sample(1_000, 10_000, 4),
            current: sample(1_200, 11_000, 4),
        };
        assert_eq!(derive(&pair).cpu_percent, 80.0);
    }

    #[test]
    fn half_of_limit_is_fifty_percent() {
        let mut current = sample(0, 0, 1);
        current.memory_usage = 512 * 1024 * 1024;
        current.memory_limit = 1024 * 1024 * 1024;
        let reading = derive(&StatsPair {
            previous: UsageSample::default(),
            current,
        });
        assert_eq!(reading.memory_percent, 50.0);
        assert_eq!(reading.memory_used, 512 * 1024 * 1024);
        assert_eq!(reading.memory_limit, 1024 * 1024 * 1024);
    }

    #[test]
    fn stalled_system_counter_means_zero_cpu() {
        let pair = StatsPair {
            previous: sample(100, 5_000, 2),
            current: sample(300, 5_000, 2),
        };
        assert_eq!(derive(&pair).cpu_percent, 0.0);
    }

    #[test]
    fn counter_reset_does_not_go_negative() {
        let pair = StatsPair {
            previous: sample(900, 1_000, 2),
            current: sample(100, 2_000, 2),
        };
        assert_eq!(derive(&pair).cpu_percent, 0.0);
    }

    #[test]
    fn missing_online_cpus_falls_back_to_percpu_then_one() {
        let mut current = sample(200, 1_000, 0);
        current.percpu_count = 2;
        let pair = StatsPair {
            previous: sample(0, 0, 0),
            current,
        };
        assert_eq!(derive(&pair).cpu_percent, 40.0);

        let pair = StatsPair {
            previous: sample(0, 0, 0),
            current: sample(200, 1_000, 0),
        };
        assert_eq!(derive(&pair).cpu_percent, 20.0);
    }

    proptest! {
        #[test]
        fn non_positive_system_delta_is_zero(
            cpu_delta in any::<i64>(),
            system_delta in i64::MIN..=0i64,
            cpus in 0u32..256,
        ) {
            prop_assert_eq!(cpu_percent(cpu_delta.into(), system_delta.into(), cpus), 0.0);
        }

        #[test]
        fn zero_limit_is_zero_percent(usage in any::<u64>()) {
            prop_assert_eq!(memory_percent(usage, 0), 0.0);
        }

        #[test]
        fn cpu_percent_is_never_negative(
            prev in any::<(u64, u64)>(),
            cur in any::<(u64, u64)>(),
            cpus in 0u32..256,
        ) {
            let pair = StatsPair {
                previous: sample(prev.0, prev.1, cpus),
                current: sample(cur.0, cur.1, cpus),
            };
            let reading = derive(&pair);
            prop_assert!(reading.cpu_percent >= 0.0);
            prop_assert!(reading.cpu_percent.is_finite());
        }
    }
}
