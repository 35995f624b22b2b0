//! Shared application state: the two boards, the team directory, and the
//! persisted configuration.

use crate::api::{ApiClient, Resource};
use crate::config::AppConfig;
use crate::controller::BoardController;
use crate::error::Result;
use crate::project::Project;
use crate::task::Task;
use crate::toast::{Toast, ToastQueue};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use trellis_board::defaults::default_statuses;
use trellis_board::{GroupBy, GroupColumn, GroupContext, Member, Notify, StatusDef};

/// How many undelivered toasts to hold before dropping.
const TOAST_CAPACITY: usize = 32;

/// The shared application state, one per window.
pub struct AppState {
    pub api: ApiClient,
    pub projects: BoardController<Project>,
    pub tasks: BoardController<Task>,
    /// The board's workflow statuses, in column order.
    pub statuses: Vec<StatusDef>,
    /// Team directory for assignee grouping; refreshed with the boards.
    pub team: RwLock<Vec<Member>>,
    pub config: RwLock<AppConfig>,
}

impl AppState {
    /// Wire up both boards from config. Returns the state and the toast
    /// receiver for the notification area to drain.
    pub fn new(config: AppConfig) -> (Self, mpsc::Receiver<Toast>) {
        let (toasts, toast_rx) = ToastQueue::channel(TOAST_CAPACITY);
        let notify: Arc<dyn Notify> = Arc::new(toasts);

        let api = ApiClient::new(&config.api_base_url);
        let projects = BoardController::new(
            config.project_group_by,
            Arc::new(api.group_field_writer(Resource::Projects)),
            notify.clone(),
        );
        let tasks = BoardController::new(
            config.task_group_by,
            Arc::new(api.group_field_writer(Resource::Tasks)),
            notify,
        );

        let state = Self {
            api,
            projects,
            tasks,
            statuses: default_statuses(),
            team: RwLock::new(Vec::new()),
            config: RwLock::new(config),
        };
        (state, toast_rx)
    }

    /// Fetch everything the boards render from: projects, tasks, and the
    /// team directory.
    pub async fn load_boards(&self) -> Result<()> {
        let (projects, tasks, members) = tokio::try_join!(
            self.api.list_projects(),
            self.api.list_tasks(),
            self.api.list_members(),
        )?;

        self.projects.refresh(projects).await;
        self.tasks.refresh(tasks).await;
        *self.team.write().await = members.into_iter().map(Member::from).collect();
        Ok(())
    }

    /// Project board columns against the current team and today's date.
    pub async fn project_columns(&self) -> Vec<GroupColumn<Project>> {
        let team = self.team.read().await.clone();
        let ctx = GroupContext::new(&self.statuses, &team, chrono::Local::now().date_naive());
        self.projects.columns(&ctx).await
    }

    /// Task board columns against the current team and today's date.
    pub async fn task_columns(&self) -> Vec<GroupColumn<Task>> {
        let team = self.team.read().await.clone();
        let ctx = GroupContext::new(&self.statuses, &team, chrono::Local::now().date_naive());
        self.tasks.columns(&ctx).await
    }

    /// Switch the project board's grouping and remember the choice.
    pub async fn set_project_group_by(&self, group_by: GroupBy) {
        self.projects.set_group_by(group_by).await;
        let mut config = self.config.write().await;
        config.project_group_by = group_by;
        let _ = config.save();
    }

    /// Switch the task board's grouping and remember the choice.
    pub async fn set_task_group_by(&self, group_by: GroupBy) {
        self.tasks.set_group_by(group_by).await;
        let mut config = self.config.write().await;
        config.task_group_by = group_by;
        let _ = config.save();
    }
}
