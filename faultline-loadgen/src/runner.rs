//! Virtual-user driver

use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::metrics::{LoadMetrics, RequestTracker};
use crate::tasks::TaskMix;

/// Load generator errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Invalid load configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Run parameters
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Base URL of the target, e.g. `http://localhost:8000`
    pub host: String,
    /// Number of concurrent virtual users
    pub users: usize,
    pub duration: Duration,
    /// Pause between requests is drawn uniformly from `min_wait..=max_wait`
    pub min_wait: Duration,
    pub max_wait: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Seed for reproducible task sequences
    pub seed: Option<u64>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:8000".to_string(),
            users: 10,
            duration: Duration::from_secs(60),
            min_wait: Duration::from_secs(1),
            max_wait: Duration::from_secs(3),
            request_timeout: Duration::from_secs(30),
            seed: None,
        }
    }
}

impl LoadConfig {
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.users == 0 {
            return Err(LoadError::InvalidConfig("at least one user is required".to_string()));
        }
        if self.min_wait > self.max_wait {
            return Err(LoadError::InvalidConfig(format!(
                "min wait {:?} exceeds max wait {:?}",
                self.min_wait, self.max_wait
            )));
        }
        if !(self.host.starts_with("http://") || self.host.starts_with("https://")) {
            return Err(LoadError::InvalidConfig(format!(
                "host '{}' must start with http:// or https://",
                self.host
            )));
        }
        Ok(())
    }
}

/// Drives `users` concurrent request loops against one host
pub struct LoadGenerator {
    config: LoadConfig,
    mix: TaskMix,
    client: reqwest::Client,
}

impl LoadGenerator {
    /// Generator using the standard task mix
    pub fn new(config: LoadConfig) -> Result<Self, LoadError> {
        Self::with_mix(config, TaskMix::standard())
    }

    pub fn with_mix(config: LoadConfig, mix: TaskMix) -> Result<Self, LoadError> {
        config.validate()?;
        let client = reqwest::Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { config, mix, client })
    }

    /// Run until the configured duration elapses and in-flight requests finish
    pub async fn run(&self) -> LoadMetrics {
        let tracker = RequestTracker::new();
        let started = Instant::now();
        let deadline = started + self.config.duration;

        info!(
            "Starting {} users against {} for {:?}",
            self.config.users, self.config.host, self.config.duration
        );

        let mut handles = Vec::with_capacity(self.config.users);
        for user in 0..self.config.users {
            let rng = match self.config.seed {
                Some(seed) => fastrand::Rng::with_seed(seed.wrapping_add(user as u64)),
                None => fastrand::Rng::new(),
            };
            let worker = VirtualUser {
                id: user,
                base_url: self.config.host.trim_end_matches('/').to_string(),
                client: self.client.clone(),
                mix: self.mix.clone(),
                tracker: tracker.clone(),
                min_wait_ms: duration_ms(self.config.min_wait),
                max_wait_ms: duration_ms(self.config.max_wait),
                rng,
            };
            handles.push(tokio::spawn(worker.run(deadline)));
        }

        for handle in handles {
            if let Err(e) = handle.await {
                warn!("Virtual user task failed: {}", e);
            }
        }

        tracker.calculate_metrics(started.elapsed()).await
    }
}

struct VirtualUser {
    id: usize,
    base_url: String,
    client: reqwest::Client,
    mix: TaskMix,
    tracker: RequestTracker,
    min_wait_ms: u64,
    max_wait_ms: u64,
    rng: fastrand::Rng,
}

impl VirtualUser {
    async fn run(mut self, deadline: Instant) {
        while Instant::now() < deadline {
            let Some(task) = self.mix.pick(&mut self.rng) else {
                return;
            };
            let url = format!("{}{}", self.base_url, task.path(&mut self.rng));

            let started = Instant::now();
            let success = match self.client.get(&url).send().await {
                Ok(response) => {
                    let status = response.status();
                    // Drain the body so the latency covers the full response
                    let _ = response.bytes().await;
                    !(status.is_client_error() || status.is_server_error())
                }
                Err(e) => {
                    debug!("User {} request to {} failed: {}", self.id, url, e);
                    false
                }
            };
            self.tracker.record(task, started.elapsed(), success).await;

            let wait = Duration::from_millis(self.rng.u64(self.min_wait_ms..=self.max_wait_ms));
            let remaining = deadline.saturating_duration_since(Instant::now());
            tokio::time::sleep(wait.min(remaining)).await;
        }
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
