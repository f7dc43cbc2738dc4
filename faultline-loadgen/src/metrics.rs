//! Latency and outcome tracking across virtual users

use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;
use tracing::info;

use crate::tasks::Task;

/// Per-task request counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub requests: u64,
    pub failures: u64,
}

/// Aggregate results of a run
#[derive(Debug, Clone)]
pub struct LoadMetrics {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub total_duration_ms: u64,
    pub average_latency_ms: f64,
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    pub p95_latency_ms: u64,
    pub requests_per_second: f64,
    pub error_rate: f64,
    pub per_task: BTreeMap<Task, TaskCounts>,
}

impl LoadMetrics {
    /// Emit the run summary through `tracing`
    pub fn log_summary(&self) {
        info!("=== Load Test Summary ===");
        info!(
            "Requests: {} ({} ok, {} failed, error rate {:.1}%)",
            self.total_requests,
            self.successful_requests,
            self.failed_requests,
            self.error_rate * 100.0
        );
        info!(
            "Latency: avg {:.1}ms, min {}ms, max {}ms, p95 {}ms",
            self.average_latency_ms, self.min_latency_ms, self.max_latency_ms, self.p95_latency_ms
        );
        info!(
            "Throughput: {:.2} req/s over {:.1}s",
            self.requests_per_second,
            self.total_duration_ms as f64 / 1000.0
        );
        for (task, counts) in &self.per_task {
            info!("  {:<14} {:>6} requests, {:>5} failures", task.name(), counts.requests, counts.failures);
        }
    }
}

/// Shared recorder handed to every virtual user
#[derive(Clone, Default)]
pub struct RequestTracker {
    latencies: Arc<tokio::sync::Mutex<Vec<u64>>>,
    per_task: Arc<tokio::sync::Mutex<BTreeMap<Task, TaskCounts>>>,
    successful_requests: Arc<AtomicU64>,
    failed_requests: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, task: Task, latency: Duration, success: bool) {
        if success {
            self.successful_requests.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed_requests.fetch_add(1, Ordering::Relaxed);
        }

        let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self.latencies.lock().await.push(latency_ms);

        let mut per_task = self.per_task.lock().await;
        let counts = per_task.entry(task).or_default();
        counts.requests += 1;
        if !success {
            counts.failures += 1;
        }
    }

    pub async fn calculate_metrics(&self, total_duration: Duration) -> LoadMetrics {
        let mut latencies = self.latencies.lock().await.clone();
        latencies.sort_unstable();

        let successful = self.successful_requests.load(Ordering::Relaxed);
        let failed = self.failed_requests.load(Ordering::Relaxed);
        let total = successful + failed;
        let total_duration_ms = u64::try_from(total_duration.as_millis()).unwrap_or(u64::MAX);

        let mut metrics = LoadMetrics {
            total_requests: total,
            successful_requests: successful,
            failed_requests: failed,
            total_duration_ms,
            average_latency_ms: 0.0,
            min_latency_ms: 0,
            max_latency_ms: 0,
            p95_latency_ms: 0,
            requests_per_second: 0.0,
            error_rate: 0.0,
            per_task: self.per_task.lock().await.clone(),
        };

        if let (Some(min), Some(max)) = (latencies.first(), latencies.last()) {
            metrics.min_latency_ms = *min;
            metrics.max_latency_ms = *max;
            metrics.average_latency_ms = latencies.iter().sum::<u64>() as f64 / latencies.len() as f64;
            let p95_index = (latencies.len() * 95 / 100).min(latencies.len() - 1);
            metrics.p95_latency_ms = latencies[p95_index];
        }

        if total > 0 {
            metrics.error_rate = failed as f64 / total as f64;
        }

        if total_duration_ms > 0 {
            metrics.requests_per_second = (total as f64 * 1000.0) / total_duration_ms as f64;
        }

        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_tracker() {
        let metrics = RequestTracker::new().calculate_metrics(Duration::from_secs(1)).await;
        assert_eq!(metrics.total_requests, 0);
        assert_eq!(metrics.error_rate, 0.0);
        assert_eq!(metrics.requests_per_second, 0.0);
        assert!(metrics.per_task.is_empty());
    }

    #[tokio::test]
    async fn test_metrics_calculation() {
        let tracker = RequestTracker::new();
        for latency in 1..=20u64 {
            tracker.record(Task::Health, Duration::from_millis(latency), true).await;
        }
        tracker.record(Task::RandomError, Duration::from_millis(100), false).await;

        let metrics = tracker.calculate_metrics(Duration::from_secs(2)).await;
        assert_eq!(metrics.total_requests, 21);
        assert_eq!(metrics.successful_requests, 20);
        assert_eq!(metrics.failed_requests, 1);
        assert_eq!(metrics.min_latency_ms, 1);
        assert_eq!(metrics.max_latency_ms, 100);
        assert_eq!(metrics.p95_latency_ms, 20);
        assert_eq!(metrics.average_latency_ms, 310.0 / 21.0);
        assert_eq!(metrics.requests_per_second, 10.5);
        assert_eq!(metrics.error_rate, 1.0 / 21.0);

        assert_eq!(metrics.per_task[&Task::Health], TaskCounts { requests: 20, failures: 0 });
        assert_eq!(metrics.per_task[&Task::RandomError], TaskCounts { requests: 1, failures: 1 });
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let tracker = RequestTracker::new();
        let clone = tracker.clone();
        clone.record(Task::GetUser, Duration::from_millis(5), true).await;

        let metrics = tracker.calculate_metrics(Duration::from_millis(500)).await;
        assert_eq!(metrics.total_requests, 1);
        assert_eq!(metrics.requests_per_second, 2.0);
    }
}
