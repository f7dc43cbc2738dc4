//! Load generator runs against an in-process server

use faultline_loadgen::{LoadConfig, LoadGenerator, Task, TaskMix};
use faultline_rest_api::{create_rest_app, AppConfig, AppContext, FastrandSource};
use faultline_storage::InMemoryRepositoryFactory;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let context = AppContext::new(
        Arc::new(InMemoryRepositoryFactory::seeded()),
        Arc::new(FastrandSource::with_seed(1)),
    );
    let app = create_rest_app(context, AppConfig::default());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn quick_config(host: String) -> LoadConfig {
    LoadConfig {
        host,
        users: 3,
        duration: Duration::from_millis(500),
        min_wait: Duration::from_millis(0),
        max_wait: Duration::from_millis(5),
        request_timeout: Duration::from_secs(5),
        seed: Some(17),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_run_against_live_server() {
    let host = spawn_server().await;
    let mix = TaskMix::new(vec![
        (Task::Health, 4),
        (Task::ListItems, 2),
        (Task::GetUser, 2),
        (Task::Analytics, 1),
    ]);

    let generator = LoadGenerator::with_mix(quick_config(host), mix).unwrap();
    let metrics = generator.run().await;

    assert!(metrics.total_requests > 0);
    assert_eq!(metrics.failed_requests, 0);
    assert_eq!(metrics.error_rate, 0.0);
    assert!(metrics.requests_per_second > 0.0);

    let per_task_total: u64 = metrics.per_task.values().map(|counts| counts.requests).sum();
    assert_eq!(per_task_total, metrics.total_requests);
    assert!(!metrics.per_task.contains_key(&Task::SlowEndpoint));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_injected_failures_are_counted() {
    let host = spawn_server().await;
    let mix = TaskMix::new(vec![(Task::RandomError, 1), (Task::Health, 1)]);

    let generator = LoadGenerator::with_mix(quick_config(host), mix).unwrap();
    let metrics = generator.run().await;

    let health = metrics.per_task[&Task::Health];
    assert_eq!(health.failures, 0);
    assert_eq!(
        metrics.failed_requests,
        metrics.per_task[&Task::RandomError].failures
    );
}

#[tokio::test]
async fn test_unreachable_host_counts_failures() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = LoadConfig {
        users: 1,
        duration: Duration::from_millis(200),
        ..quick_config(format!("http://{}", addr))
    };
    let metrics = LoadGenerator::new(config).unwrap().run().await;

    assert!(metrics.total_requests > 0);
    assert_eq!(metrics.successful_requests, 0);
    assert_eq!(metrics.error_rate, 1.0);
}
