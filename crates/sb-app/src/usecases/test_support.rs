//! In-memory port implementations shared by the use-case tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use sb_core::ids::SnippetId;
use sb_core::ports::{
    ClockPort, SettingsPort, SnippetRemotePort, SnippetRepositoryPort, SystemClipboardPort, ToastTimerPort,
};
use sb_core::settings::Settings;
use sb_core::{Snippet, ToastExpiry, ToastKind};

#[derive(Default)]
pub struct InMemorySnippetRepository {
    pub snippets: Mutex<Vec<Snippet>>,
    pub writes: Mutex<usize>,
}

impl InMemorySnippetRepository {
    pub fn with(snippets: Vec<Snippet>) -> Self {
        Self {
            snippets: Mutex::new(snippets),
            writes: Mutex::new(0),
        }
    }

    pub fn snapshot(&self) -> Vec<Snippet> {
        self.snippets.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn record_write(&self) {
        *self.writes.lock().unwrap() += 1;
    }

    fn modify(&self, id: &SnippetId, f: impl FnOnce(&mut Snippet)) -> bool {
        self.record_write();
        let mut snippets = self.snippets.lock().unwrap();
        match snippets.iter_mut().find(|s| &s.id == id) {
            Some(s) => {
                f(s);
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl SnippetRepositoryPort for InMemorySnippetRepository {
    async fn insert(&self, snippet: &Snippet) -> Result<()> {
        self.record_write();
        self.snippets.lock().unwrap().push(snippet.clone());
        Ok(())
    }

    async fn update(&self, snippet: &Snippet) -> Result<bool> {
        Ok(self.modify(&snippet.id, |s| *s = snippet.clone()))
    }

    async fn get(&self, id: &SnippetId) -> Result<Option<Snippet>> {
        Ok(self.snippets.lock().unwrap().iter().find(|s| &s.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Snippet>> {
        Ok(self.snapshot())
    }

    async fn touch(&self, id: &SnippetId, accessed_at_ms: i64) -> Result<bool> {
        Ok(self.modify(id, |s| s.touch(accessed_at_ms)))
    }

    async fn soft_delete(&self, id: &SnippetId, deleted_at_ms: i64) -> Result<bool> {
        Ok(self.modify(id, |s| s.soft_delete(deleted_at_ms)))
    }

    async fn upsert_many(&self, incoming: &[Snippet]) -> Result<()> {
        self.record_write();
        let mut snippets = self.snippets.lock().unwrap();
        for snippet in incoming {
            match snippets.iter_mut().find(|s| s.id == snippet.id) {
                Some(existing) => *existing = snippet.clone(),
                None => snippets.push(snippet.clone()),
            }
        }
        Ok(())
    }
}

/// Clock that advances by one millisecond on every read.
pub struct StepClock {
    now: AtomicI64,
}

impl StepClock {
    pub fn starting_at(now_ms: i64) -> Self {
        Self {
            now: AtomicI64::new(now_ms),
        }
    }
}

impl ClockPort for StepClock {
    fn now_ms(&self) -> i64 {
        self.now.fetch_add(1, Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub written: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn last(&self) -> Option<String> {
        self.written.lock().unwrap().last().cloned()
    }
}

impl SystemClipboardPort for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingTimer {
    pub scheduled: Mutex<Vec<(ToastExpiry, Duration)>>,
}

impl RecordingTimer {
    pub fn kinds(&self) -> Vec<(ToastKind, Duration)> {
        self.scheduled.lock().unwrap().iter().map(|(e, ttl)| (e.kind, *ttl)).collect()
    }

    pub fn last(&self) -> Option<ToastExpiry> {
        self.scheduled.lock().unwrap().last().map(|(e, _)| *e)
    }
}

#[async_trait]
impl ToastTimerPort for RecordingTimer {
    async fn schedule(&self, expiry: ToastExpiry, ttl: Duration) -> Result<()> {
        self.scheduled.lock().unwrap().push((expiry, ttl));
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryRemote {
    pub snippets: Mutex<Vec<Snippet>>,
}

#[async_trait]
impl SnippetRemotePort for InMemoryRemote {
    async fn pull(&self) -> Result<Vec<Snippet>> {
        Ok(self.snippets.lock().unwrap().clone())
    }

    async fn push(&self, snippets: &[Snippet]) -> Result<()> {
        *self.snippets.lock().unwrap() = snippets.to_vec();
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySettings {
    pub settings: Mutex<Settings>,
}

impl InMemorySettings {
    pub fn with(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }

    pub fn current(&self) -> Settings {
        self.settings.lock().unwrap().clone()
    }
}

#[async_trait]
impl SettingsPort for InMemorySettings {
    async fn load(&self) -> Result<Settings> {
        Ok(self.current())
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        *self.settings.lock().unwrap() = settings.clone();
        Ok(())
    }
}

pub fn snippet(id: &str, description: &str, content: &str, created_at_ms: i64) -> Snippet {
    Snippet::new(SnippetId::from(id), description, content, created_at_ms)
}
