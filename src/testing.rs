//! Test doubles shared by the unit tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::chart::{ChartOptions, ChartSurface, RenderError};
use crate::summary::{PeriodKey, SummaryError, SummaryProvider, SummaryResponse, SummaryResult};

/// One scripted provider answer
pub struct Reply {
    result: Result<SummaryResponse, String>,
    delay: Duration,
}

impl Reply {
    pub fn summary(summary: SummaryResponse) -> Self {
        Self {
            result: Ok(summary),
            delay: Duration::ZERO,
        }
    }

    /// Fails with an RPC error carrying `message`
    pub fn fail(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Provider answering from a queue and recording requested periods
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<PeriodKey>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<PeriodKey> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryProvider for ScriptedProvider {
    async fn fetch_summary(&self, period: &PeriodKey) -> SummaryResult<SummaryResponse> {
        self.requests.lock().unwrap().push(period.clone());
        let reply = self.replies.lock().unwrap().pop_front();

        let Some(reply) = reply else {
            return Err(SummaryError::Malformed("no scripted reply".to_string()));
        };

        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }

        reply
            .result
            .map_err(|message| SummaryError::Rpc { code: 200, message })
    }
}

#[derive(Debug, Clone)]
pub enum SurfaceEvent {
    Clear(String),
    Draw(String, ChartOptions),
}

struct SurfaceLog {
    library: bool,
    mounted: bool,
    fail_draw: bool,
    events: Vec<SurfaceEvent>,
}

/// Chart surface that records every clear/draw
#[derive(Clone)]
pub struct RecordingSurface {
    log: Arc<Mutex<SurfaceLog>>,
}

impl RecordingSurface {
    fn with(library: bool, mounted: bool, fail_draw: bool) -> Self {
        Self {
            log: Arc::new(Mutex::new(SurfaceLog {
                library,
                mounted,
                fail_draw,
                events: Vec::new(),
            })),
        }
    }

    pub fn mounted() -> Self {
        Self::with(true, true, false)
    }

    pub fn unmounted() -> Self {
        Self::with(true, false, false)
    }

    pub fn without_library() -> Self {
        Self::with(false, true, false)
    }

    pub fn failing_draw() -> Self {
        Self::with(true, true, true)
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.log.lock().unwrap().events.clone()
    }

    pub fn last_drawn(&self) -> Option<ChartOptions> {
        self.events().into_iter().rev().find_map(|event| match event {
            SurfaceEvent::Draw(_, options) => Some(options),
            SurfaceEvent::Clear(_) => None,
        })
    }
}

impl ChartSurface for RecordingSurface {
    fn library_available(&self) -> bool {
        self.log.lock().unwrap().library
    }

    fn has_target(&self, _target: &str) -> bool {
        self.log.lock().unwrap().mounted
    }

    fn clear(&mut self, target: &str) -> Result<(), RenderError> {
        self.log
            .lock()
            .unwrap()
            .events
            .push(SurfaceEvent::Clear(target.to_string()));
        Ok(())
    }

    fn draw(&mut self, target: &str, options: &ChartOptions) -> Result<(), RenderError> {
        let mut log = self.log.lock().unwrap();
        if log.fail_draw {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full").into());
        }
        log.events
            .push(SurfaceEvent::Draw(target.to_string(), options.clone()));
        Ok(())
    }
}

/// In-memory log sink for asserting on emitted diagnostics
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        let writer = self.clone();
        tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Number of log lines emitted at `level` ("WARN", "ERROR", ...)
    pub fn count_level(&self, level: &str) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.split_whitespace().any(|token| token == level))
            .count()
    }
}
