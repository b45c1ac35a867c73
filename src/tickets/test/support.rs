//! Test doubles for the orchestrator's remote seams.
//!
//! [`MockThreadApi`] keeps simulated thread state in memory and records every
//! call in order, so scenarios can assert both the final state and the exact
//! call sequence. [`RecordingResponder`] captures the ephemeral replies.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sea_orm::DatabaseConnection;
use serenity::all::{AutoArchiveDuration, ChannelId, RoleId, UserId};
use serenity::async_trait;
use test_utils::builder::TestBuilder;

use crate::error::AppError;
use crate::model::trigger::TicketTrigger;
use crate::tickets::guard::RecentCreationGuard;
use crate::tickets::orchestrator::TicketOrchestrator;
use crate::tickets::registry::TicketSystemRegistry;
use crate::tickets::responder::TicketResponder;
use crate::tickets::thread_api::{ThreadApi, ThreadPatch};

/// One recorded remote call, in invocation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    CreateThread { parent: ChannelId, name: String },
    PatchThread { thread: ChannelId, patch: ThreadPatch },
    AddMember { thread: ChannelId, user: UserId },
    PostMessage { thread: ChannelId },
}

/// Simulated remote state of one thread.
#[derive(Clone, Debug, Default)]
pub struct ThreadState {
    pub name: String,
    pub archived: bool,
    pub locked: bool,
    pub invitable: bool,
    pub members: Vec<UserId>,
    pub messages: Vec<String>,
}

pub struct MockThreadApi {
    next_thread_id: AtomicU64,
    threads: Mutex<HashMap<ChannelId, ThreadState>>,
    calls: Mutex<Vec<ApiCall>>,
    fail_create: AtomicBool,
    fail_patch: AtomicBool,
}

impl MockThreadApi {
    pub fn new() -> Self {
        Self {
            next_thread_id: AtomicU64::new(9_000),
            threads: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            fail_create: AtomicBool::new(false),
            fail_patch: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent create call fail with a transport error.
    pub fn fail_creates(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent patch call fail with a transport error.
    pub fn fail_patches(&self, fail: bool) {
        self.fail_patch.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, ApiCall::CreateThread { .. }))
            .count()
    }

    pub fn thread(&self, thread: ChannelId) -> Option<ThreadState> {
        self.threads.lock().unwrap().get(&thread).cloned()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn transport_error() -> AppError {
        AppError::from(serenity::Error::Other("mock transport failure"))
    }
}

#[async_trait]
impl ThreadApi for MockThreadApi {
    async fn create_thread(
        &self,
        parent: ChannelId,
        name: &str,
        _auto_archive: AutoArchiveDuration,
        _reason: &str,
    ) -> Result<ChannelId, AppError> {
        self.record(ApiCall::CreateThread {
            parent,
            name: name.to_string(),
        });

        if self.fail_create.load(Ordering::SeqCst) {
            return Err(Self::transport_error());
        }

        let thread = ChannelId::new(self.next_thread_id.fetch_add(1, Ordering::SeqCst));
        self.threads.lock().unwrap().insert(
            thread,
            ThreadState {
                name: name.to_string(),
                invitable: true,
                ..Default::default()
            },
        );

        Ok(thread)
    }

    async fn patch_thread(
        &self,
        thread: ChannelId,
        patch: ThreadPatch,
        _reason: &str,
    ) -> Result<(), AppError> {
        self.record(ApiCall::PatchThread {
            thread,
            patch: patch.clone(),
        });

        if self.fail_patch.load(Ordering::SeqCst) {
            return Err(Self::transport_error());
        }

        let mut threads = self.threads.lock().unwrap();
        let state = threads.get_mut(&thread).ok_or_else(Self::transport_error)?;
        state.name = patch.name;
        state.archived = patch.archived;
        state.locked = patch.locked;
        state.invitable = patch.invitable;

        Ok(())
    }

    async fn add_thread_member(&self, thread: ChannelId, user: UserId) -> Result<(), AppError> {
        self.record(ApiCall::AddMember { thread, user });

        let mut threads = self.threads.lock().unwrap();
        let state = threads.get_mut(&thread).ok_or_else(Self::transport_error)?;
        if state.archived {
            return Err(Self::transport_error());
        }
        if !state.members.contains(&user) {
            state.members.push(user);
        }

        Ok(())
    }

    async fn post_message(&self, thread: ChannelId, content: &str) -> Result<(), AppError> {
        self.record(ApiCall::PostMessage { thread });

        let mut threads = self.threads.lock().unwrap();
        let state = threads.get_mut(&thread).ok_or_else(Self::transport_error)?;
        state.messages.push(content.to_string());

        Ok(())
    }
}

/// Responder capturing ephemeral reply contents in order.
#[derive(Default)]
pub struct RecordingResponder {
    replies: Mutex<Vec<String>>,
}

impl RecordingResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl TicketResponder for RecordingResponder {
    async fn reply_ephemeral(&self, content: &str) -> Result<(), AppError> {
        self.replies.lock().unwrap().push(content.to_string());
        Ok(())
    }
}

/// An orchestrator wired to the mock thread API and an in-memory database.
pub struct Scenario {
    pub orchestrator: TicketOrchestrator,
    pub api: Arc<MockThreadApi>,
    pub db: DatabaseConnection,
}

pub async fn scenario() -> Scenario {
    build_scenario(RecentCreationGuard::new()).await
}

/// Like [`scenario`], with a shortened recreation cooldown so tests can wait
/// out the window.
pub async fn scenario_with_cooldown(cooldown: Duration) -> Scenario {
    build_scenario(RecentCreationGuard::with_cooldown(cooldown)).await
}

async fn build_scenario(guard: RecentCreationGuard) -> Scenario {
    let test = TestBuilder::new()
        .with_ticket_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let api = Arc::new(MockThreadApi::new());
    let registry = Arc::new(TicketSystemRegistry::loritta().unwrap());
    let orchestrator =
        TicketOrchestrator::new(registry, api.clone(), db.clone()).with_guard(guard);

    Scenario {
        orchestrator,
        api,
        db,
    }
}

pub fn trigger(user_id: u64) -> TicketTrigger {
    trigger_with_roles(user_id, Vec::new())
}

pub fn trigger_with_roles(user_id: u64, member_roles: Vec<RoleId>) -> TicketTrigger {
    TicketTrigger {
        user_id: UserId::new(user_id),
        user_name: format!("user{user_id}"),
        member_roles,
    }
}
