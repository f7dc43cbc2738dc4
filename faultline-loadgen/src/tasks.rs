//! Request mix issued by each virtual user

/// One kind of request in the mix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Task {
    Health,
    ListItems,
    ListUsers,
    GetItem,
    GetUser,
    SlowEndpoint,
    RandomError,
    CpuIntensive,
    Analytics,
}

impl Task {
    pub const ALL: [Task; 9] = [
        Task::Health,
        Task::ListItems,
        Task::ListUsers,
        Task::GetItem,
        Task::GetUser,
        Task::SlowEndpoint,
        Task::RandomError,
        Task::CpuIntensive,
        Task::Analytics,
    ];

    /// Relative frequency in the standard mix
    pub fn weight(self) -> u32 {
        match self {
            Task::Health => 10,
            Task::ListItems => 8,
            Task::ListUsers => 8,
            Task::GetItem => 5,
            Task::GetUser => 5,
            Task::SlowEndpoint => 3,
            Task::RandomError => 2,
            Task::CpuIntensive => 1,
            Task::Analytics => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Task::Health => "health",
            Task::ListItems => "list_items",
            Task::ListUsers => "list_users",
            Task::GetItem => "get_item",
            Task::GetUser => "get_user",
            Task::SlowEndpoint => "slow_endpoint",
            Task::RandomError => "random_error",
            Task::CpuIntensive => "cpu_intensive",
            Task::Analytics => "analytics",
        }
    }

    /// Path and query for one request of this kind
    pub fn path(self, rng: &mut fastrand::Rng) -> String {
        match self {
            Task::Health => "/health".to_string(),
            Task::ListItems => "/items".to_string(),
            Task::ListUsers => "/users".to_string(),
            Task::GetItem => format!("/items/{}", rng.i64(1..=2)),
            Task::GetUser => format!("/users/{}", rng.i64(1..=2)),
            Task::SlowEndpoint => "/slow-endpoint?delay=1".to_string(),
            Task::RandomError => "/random-error?failure_rate=0.2".to_string(),
            Task::CpuIntensive => "/cpu-intensive?iterations=100000".to_string(),
            Task::Analytics => {
                if rng.bool() {
                    "/analytics/items-summary".to_string()
                } else {
                    "/analytics/users-summary".to_string()
                }
            }
        }
    }
}

/// Weighted selection over a set of tasks
#[derive(Debug, Clone)]
pub struct TaskMix {
    entries: Vec<(Task, u32)>,
    total_weight: u32,
}

impl TaskMix {
    /// Mix with tasks of zero weight dropped
    pub fn new(entries: Vec<(Task, u32)>) -> Self {
        let entries: Vec<(Task, u32)> = entries.into_iter().filter(|(_, weight)| *weight > 0).collect();
        let total_weight = entries.iter().map(|(_, weight)| weight).sum();
        Self { entries, total_weight }
    }

    /// Every task at its default weight
    pub fn standard() -> Self {
        Self::new(Task::ALL.iter().map(|task| (*task, task.weight())).collect())
    }

    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// Task owning `ticket`, where tickets `0..total_weight` are laid out in entry order
    pub fn task_for_ticket(&self, ticket: u32) -> Option<Task> {
        let mut remaining = ticket;
        for (task, weight) in &self.entries {
            if remaining < *weight {
                return Some(*task);
            }
            remaining -= weight;
        }
        None
    }

    /// Draw a task; `None` only for an empty mix
    pub fn pick(&self, rng: &mut fastrand::Rng) -> Option<Task> {
        if self.total_weight == 0 {
            return None;
        }
        self.task_for_ticket(rng.u32(0..self.total_weight))
    }
}

impl Default for TaskMix {
    fn default() -> Self {
        Self::standard()
    }
}
