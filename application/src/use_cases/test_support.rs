//! Hand-written doubles shared by the use case tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use advisor_domain::tool::{ToolCall, ToolResult, ToolSpec};
use advisor_domain::{FailureReason, SpecialistCategory};
use async_trait::async_trait;

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{AgentOutput, AgentRequest, GatewayError, LlmGateway};
use crate::ports::progress::DispatchProgress;
use crate::ports::tool_executor::ToolExecutorPort;

/// What the gateway does for one invocation
#[derive(Debug, Clone)]
pub(crate) enum Step {
    Reply(String),
    Fail(GatewayError),
    Hang,
    Panic,
}

pub(crate) fn reply(text: &str) -> Step {
    Step::Reply(text.to_string())
}

pub(crate) const GOOD_ANSWER: &str =
    "I recommend the Toyota Camry Hybrid at $28,000: 5-star safety and 39 highway MPG.";

type Responder = Box<dyn Fn(&AgentRequest) -> Step + Send + Sync>;

enum Script {
    /// Steps consumed in order; the last one repeats
    Sequence(Mutex<VecDeque<Step>>),
    /// Step chosen from the request
    PerRequest(Responder),
}

pub(crate) struct ScriptedGateway {
    script: Script,
    calls: AtomicUsize,
    requests: Mutex<Vec<AgentRequest>>,
}

impl ScriptedGateway {
    pub(crate) fn sequence(steps: Vec<Step>) -> Self {
        Self::with_script(Script::Sequence(Mutex::new(steps.into())))
    }

    pub(crate) fn per_request(f: impl Fn(&AgentRequest) -> Step + Send + Sync + 'static) -> Self {
        Self::with_script(Script::PerRequest(Box::new(f)))
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requests(&self) -> Vec<AgentRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_step(&self, request: &AgentRequest) -> Step {
        match &self.script {
            Script::Sequence(steps) => {
                let mut steps = steps.lock().unwrap();
                if steps.len() > 1 {
                    steps.pop_front().unwrap()
                } else {
                    steps.front().cloned().unwrap()
                }
            }
            Script::PerRequest(f) => f(request),
        }
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn invoke(
        &self,
        request: &AgentRequest,
        _tools: &dyn ToolExecutorPort,
    ) -> Result<AgentOutput, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        match self.next_step(request) {
            Step::Reply(text) => Ok(AgentOutput::new(text)),
            Step::Fail(e) => Err(e),
            Step::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            Step::Panic => panic!("scripted gateway panic"),
        }
    }
}

/// Tool executor offering nothing
pub(crate) struct NoTools(ToolSpec);

impl NoTools {
    pub(crate) fn new() -> Self {
        Self(ToolSpec::new())
    }
}

#[async_trait]
impl ToolExecutorPort for NoTools {
    fn tool_spec(&self) -> &ToolSpec {
        &self.0
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        ToolResult::success(&call.tool_name, "[]")
    }
}

/// Records every progress callback as a line of text
#[derive(Default)]
pub(crate) struct RecordingProgress {
    pub(crate) events: Mutex<Vec<String>>,
    pub(crate) delays: Mutex<Vec<Duration>>,
}

impl DispatchProgress for RecordingProgress {
    fn on_dispatch_start(&self, categories: &[SpecialistCategory]) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start {}", categories.len()));
    }

    fn on_specialist_complete(&self, category: SpecialistCategory, success: bool) {
        self.events
            .lock()
            .unwrap()
            .push(format!("{} {}", category, success));
    }

    fn on_dispatch_complete(&self, succeeded: usize, total: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("done {}/{}", succeeded, total));
    }

    fn on_retry(&self, _agent: &str, _reason: &FailureReason, delay: Duration) {
        self.delays.lock().unwrap().push(delay);
    }
}

/// Collects conversation event types
#[derive(Default)]
pub(crate) struct RecordingLogger {
    pub(crate) events: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub(crate) fn types(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events.lock().unwrap().push(event.event_type.to_string());
    }
}
