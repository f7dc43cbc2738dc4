//! Fault-injection endpoints
//!
//! Each endpoint validates its knob against [`FaultLimits`](crate::context::FaultLimits)
//! before doing any work, so an over-limit request costs nothing.

use axum::{extract::State, Json};
use faultline_web::QueryParams;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::{
    context::AppContext,
    errors::{RestError, RestResult},
    models::faults::{
        CascadeQuery, CpuQuery, CpuResponse, MemoryQuery, MemoryResponse, RandomErrorQuery, RandomErrorResponse,
        SlowQuery, TimedMessage,
    },
};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Sleep for `delay` seconds without blocking a worker thread
pub async fn slow_endpoint(
    State(ctx): State<AppContext>,
    QueryParams(query): QueryParams<SlowQuery>,
) -> RestResult<Json<TimedMessage>> {
    if query.delay > ctx.limits.max_delay_seconds {
        warn!("Rejected delay of {}s", query.delay);
        return Err(RestError::invalid_parameter(format!(
            "Delay cannot exceed {} seconds",
            ctx.limits.max_delay_seconds
        )));
    }

    debug!("Sleeping for {}s", query.delay);
    tokio::time::sleep(Duration::from_secs(query.delay)).await;

    Ok(Json(TimedMessage::now(format!("Completed after {} seconds", query.delay))))
}

/// Sum of squares on the blocking pool
pub async fn cpu_intensive(
    State(ctx): State<AppContext>,
    QueryParams(query): QueryParams<CpuQuery>,
) -> RestResult<Json<CpuResponse>> {
    if query.iterations > ctx.limits.max_iterations {
        warn!("Rejected {} iterations", query.iterations);
        return Err(RestError::invalid_parameter("Iterations too high"));
    }

    let iterations = query.iterations;
    let result = tokio::task::spawn_blocking(move || sum_of_squares_mod_1000(iterations))
        .await
        .map_err(|e| RestError::internal(format!("CPU task failed: {}", e)))?;

    Ok(Json(CpuResponse {
        message: "CPU intensive task completed".to_string(),
        iterations,
        result,
    }))
}

/// Fail with probability `failure_rate`
pub async fn random_error(
    State(ctx): State<AppContext>,
    QueryParams(query): QueryParams<RandomErrorQuery>,
) -> RestResult<Json<RandomErrorResponse>> {
    let rate = query.failure_rate;
    // `contains` is false for NaN
    if !(0.0..=1.0).contains(&rate) {
        warn!("Rejected failure rate {}", rate);
        return Err(RestError::invalid_parameter("Failure rate must be between 0 and 1"));
    }

    if ctx.random.chance(rate) {
        info!("Injecting random failure (rate {})", rate);
        return Err(RestError::SimulatedFailure("Simulated random failure".to_string()));
    }

    Ok(Json(RandomErrorResponse {
        message: "Request succeeded".to_string(),
        failure_rate: rate,
    }))
}

/// Allocate and touch `size_mb` megabytes, released when the request ends
pub async fn memory_spike(
    State(ctx): State<AppContext>,
    QueryParams(query): QueryParams<MemoryQuery>,
) -> RestResult<Json<MemoryResponse>> {
    if query.size_mb > ctx.limits.max_memory_mb {
        warn!("Rejected allocation of {} MB", query.size_mb);
        return Err(RestError::invalid_parameter(format!(
            "Size cannot exceed {} MB",
            ctx.limits.max_memory_mb
        )));
    }

    let size_mb = query.size_mb;
    let data_length = tokio::task::spawn_blocking(move || allocate_filler(size_mb))
        .await
        .map_err(|e| RestError::internal(format!("Allocation task failed: {}", e)))?;

    Ok(Json(MemoryResponse {
        message: format!("Allocated {} MB", size_mb),
        data_length,
        timestamp: chrono::Utc::now(),
    }))
}

/// Report an outage with probability `failure_probability`
///
/// The probability is not range-checked: values at or below 0 never fail and
/// values at or above 1 always do.
pub async fn cascade_failure(
    State(ctx): State<AppContext>,
    QueryParams(query): QueryParams<CascadeQuery>,
) -> RestResult<Json<TimedMessage>> {
    if ctx.random.chance(query.failure_probability) {
        info!("Injecting cascade failure (probability {})", query.failure_probability);
        return Err(RestError::SimulatedOutage(
            "Service temporarily unavailable - simulated cascade".to_string(),
        ));
    }

    Ok(Json(TimedMessage::now("Service healthy")))
}

/// `sum(i * i for i in 0..iterations) % 1000`
pub fn sum_of_squares_mod_1000(iterations: u64) -> u64 {
    let mut total: u128 = 0;
    for i in 0..iterations {
        let i = u128::from(std::hint::black_box(i));
        total += i * i;
    }
    (total % 1000) as u64
}

/// Fill a buffer of `size_mb` megabytes and return its length
pub fn allocate_filler(size_mb: u64) -> usize {
    let data = vec![b'x'; size_mb.saturating_mul(BYTES_PER_MB) as usize];
    std::hint::black_box(&data).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_squares() {
        assert_eq!(sum_of_squares_mod_1000(0), 0);
        assert_eq!(sum_of_squares_mod_1000(3), 5);
        assert_eq!(sum_of_squares_mod_1000(1_000), 500);
        assert_eq!(sum_of_squares_mod_1000(12_345), 420);
    }

    #[test]
    fn test_allocate_filler_length() {
        assert_eq!(allocate_filler(0), 0);
        assert_eq!(allocate_filler(2), 2 * 1024 * 1024);
    }
}
