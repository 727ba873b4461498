//! OpenAI Chat Completions gateway
//!
//! Implements [`LlmGateway`] against any OpenAI-compatible
//! `/v1/chat/completions` endpoint. One `invoke` is a full agent run: the
//! model may request tool calls for up to `max_tool_rounds` rounds, after
//! which a final request without tools forces a text answer.

use super::types::{
    ChatMessage, ChatRequest, ChatResponse, decode_tool_call, error_message, opening_messages,
};
use crate::config::FileOpenAiConfig;
use crate::tools::JsonSchemaToolConverter;
use advisor_application::ports::llm_gateway::{AgentOutput, AgentRequest, GatewayError, LlmGateway};
use advisor_application::ports::tool_executor::ToolExecutorPort;
use advisor_application::ports::tool_schema::ToolSchemaPort;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct OpenAiGateway {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    max_tokens: u32,
    max_tool_rounds: usize,
    schema: Arc<dyn ToolSchemaPort>,
}

impl OpenAiGateway {
    /// Build a gateway from the `[providers.openai]` config.
    ///
    /// Fails with [`GatewayError::MissingApiKey`] when neither the env var
    /// nor the config carries a key.
    pub fn new(config: &FileOpenAiConfig) -> Result<Self, GatewayError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| GatewayError::MissingApiKey(config.api_key_env.clone()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::from_parts(client, api_key, config))
    }

    fn from_parts(client: reqwest::Client, api_key: String, config: &FileOpenAiConfig) -> Self {
        Self {
            client,
            api_key,
            endpoint: chat_endpoint(&config.base_url),
            max_tokens: config.max_tokens,
            max_tool_rounds: config.max_tool_rounds,
            schema: Arc::new(JsonSchemaToolConverter),
        }
    }

    pub fn with_schema(mut self, schema: Arc<dyn ToolSchemaPort>) -> Self {
        self.schema = schema;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(error_message(
                status.as_u16(),
                &body,
            )));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}

/// `{base}/v1/chat/completions`, tolerating a base that already ends in `/v1`.
fn chat_endpoint(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.ends_with("/v1") {
        format!("{}/chat/completions", base)
    } else {
        format!("{}/v1/chat/completions", base)
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn invoke(
        &self,
        request: &AgentRequest,
        tools: &dyn ToolExecutorPort,
    ) -> Result<AgentOutput, GatewayError> {
        let profile = &request.profile;
        let tool_schema = self.schema.all_tools_schema(tools.tool_spec());
        let mut messages =
            opening_messages(&profile.instructions, &request.history, &request.query);
        let mut executed = 0usize;

        info!(agent = %profile.name, model = %profile.model, tools = tool_schema.len(), "Invoking agent");

        for round in 0..=self.max_tool_rounds {
            let offer_tools = round < self.max_tool_rounds && !tool_schema.is_empty();
            let chat = ChatRequest {
                model: profile.model.clone(),
                messages: messages.clone(),
                max_tokens: Some(self.max_tokens),
                tools: if offer_tools {
                    tool_schema.clone()
                } else {
                    Vec::new()
                },
            };

            let response = self.send(&chat).await?;
            let choice = response
                .choices
                .into_iter()
                .next()
                .ok_or_else(|| GatewayError::InvalidResponse("response has no choices".into()))?;
            let reply = choice.message;

            if reply.tool_calls.is_empty() || !offer_tools {
                if !reply.tool_calls.is_empty() {
                    warn!(agent = %profile.name, "Ignoring tool calls requested after the last tool round");
                }
                debug!(agent = %profile.name, round, tool_calls = executed, "Agent finished");
                return Ok(AgentOutput {
                    final_output: reply.content.unwrap_or_default(),
                    tool_calls: executed,
                });
            }

            debug!(agent = %profile.name, round, calls = reply.tool_calls.len(), "Model requested tools");
            let calls = reply.tool_calls.clone();
            messages.push(reply);

            for wire_call in &calls {
                let result = match decode_tool_call(wire_call) {
                    Ok(call) => tools.execute(&call).await,
                    Err(failure) => failure,
                };
                executed += 1;
                messages.push(ChatMessage::tool_reply(
                    wire_call.id.clone(),
                    result.to_model_content(),
                ));
            }
        }

        Err(GatewayError::InvalidResponse(
            "tool loop ended without a final answer".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::tool::{ToolCall, ToolResult, ToolSpec, capabilities};
    use advisor_domain::AgentProfile;
    use std::sync::Mutex;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Minimal HTTP/1.1 server: answers each connection with the next canned
    /// response and records the request bodies.
    async fn serve(responses: Vec<(u16, String)>) -> (String, Arc<Mutex<Vec<serde_json::Value>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let bodies = Arc::new(Mutex::new(Vec::new()));
        let recorded = bodies.clone();

        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().await.unwrap();
                let mut buf = Vec::new();
                let mut chunk = [0u8; 4096];
                let header_end = loop {
                    let n = stream.read(&mut chunk).await.unwrap();
                    buf.extend_from_slice(&chunk[..n]);
                    if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                        break pos + 4;
                    }
                };
                let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
                let length: usize = headers
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .map(|v| v.trim().parse().unwrap())
                    .unwrap_or(0);
                while buf.len() < header_end + length {
                    let n = stream.read(&mut chunk).await.unwrap();
                    buf.extend_from_slice(&chunk[..n]);
                }
                let request: serde_json::Value =
                    serde_json::from_slice(&buf[header_end..header_end + length]).unwrap();
                recorded.lock().unwrap().push(request);

                let reply = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream.write_all(reply.as_bytes()).await.unwrap();
                stream.shutdown().await.unwrap();
            }
        });

        (format!("http://{}", addr), bodies)
    }

    fn gateway(base_url: &str, max_tool_rounds: usize) -> OpenAiGateway {
        let config = FileOpenAiConfig {
            base_url: base_url.to_string(),
            max_tool_rounds,
            ..FileOpenAiConfig::default()
        };
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        OpenAiGateway::from_parts(client, "sk-test".to_string(), &config)
    }

    fn text_reply(text: &str) -> (u16, String) {
        (
            200,
            serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": text}, "finish_reason": "stop"}]
            })
            .to_string(),
        )
    }

    fn tool_reply(name: &str, arguments: &str) -> (u16, String) {
        (
            200,
            serde_json::json!({
                "choices": [{
                    "message": {
                        "role": "assistant",
                        "content": null,
                        "tool_calls": [{"id": "call_1", "type": "function", "function": {"name": name, "arguments": arguments}}]
                    },
                    "finish_reason": "tool_calls"
                }]
            })
            .to_string(),
        )
    }

    struct EchoTools {
        spec: ToolSpec,
        calls: Mutex<Vec<ToolCall>>,
    }

    impl EchoTools {
        fn new() -> Self {
            Self {
                spec: capabilities::inventory_tools(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ToolExecutorPort for EchoTools {
        fn tool_spec(&self) -> &ToolSpec {
            &self.spec
        }

        async fn execute(&self, call: &ToolCall) -> ToolResult {
            self.calls.lock().unwrap().push(call.clone());
            ToolResult::success(&call.tool_name, r#"[{"make":"Toyota","model":"Camry"}]"#)
        }
    }

    fn request() -> AgentRequest {
        AgentRequest::new(AgentProfile::manager("gpt-4o-mini"), "cheap sedan?")
    }

    #[test]
    fn test_chat_endpoint() {
        assert_eq!(
            chat_endpoint("https://api.openai.com"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            chat_endpoint("http://localhost:8080/v1/"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_missing_api_key() {
        let config = FileOpenAiConfig {
            api_key_env: "VEHICLE_ADVISOR_TEST_NO_SUCH_KEY".to_string(),
            api_key: None,
            ..FileOpenAiConfig::default()
        };
        match OpenAiGateway::new(&config) {
            Err(GatewayError::MissingApiKey(var)) => {
                assert_eq!(var, "VEHICLE_ADVISOR_TEST_NO_SUCH_KEY")
            }
            other => panic!("expected MissingApiKey, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_plain_answer() {
        let (base, bodies) = serve(vec![text_reply("The Camry fits your budget.")]).await;
        let tools = EchoTools::new();

        let output = gateway(&base, 4).invoke(&request(), &tools).await.unwrap();

        assert_eq!(output.final_output, "The Camry fits your budget.");
        assert_eq!(output.tool_calls, 0);
        let bodies = bodies.lock().unwrap();
        assert_eq!(bodies[0]["model"], "gpt-4o-mini");
        assert_eq!(bodies[0]["messages"][0]["role"], "system");
        assert_eq!(bodies[0]["tools"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_tool_round_trip() {
        let (base, bodies) = serve(vec![
            tool_reply("search_vehicles_by_budget", r#"{"max_budget": 30000}"#),
            text_reply("Found a Camry."),
        ])
        .await;
        let tools = EchoTools::new();

        let output = gateway(&base, 4).invoke(&request(), &tools).await.unwrap();

        assert_eq!(output.final_output, "Found a Camry.");
        assert_eq!(output.tool_calls, 1);
        assert_eq!(
            tools.calls.lock().unwrap()[0].get_f64("max_budget"),
            Some(30000.0)
        );

        let bodies = bodies.lock().unwrap();
        let second = bodies[1]["messages"].as_array().unwrap();
        let last = second.last().unwrap();
        assert_eq!(last["role"], "tool");
        assert_eq!(last["tool_call_id"], "call_1");
    }

    #[tokio::test]
    async fn test_final_round_offers_no_tools() {
        let (base, bodies) = serve(vec![
            tool_reply("search_vehicles", r#"{"query": "suv"}"#),
            text_reply("Here is an SUV."),
        ])
        .await;
        let tools = EchoTools::new();

        let output = gateway(&base, 1).invoke(&request(), &tools).await.unwrap();

        assert_eq!(output.final_output, "Here is an SUV.");
        let bodies = bodies.lock().unwrap();
        assert!(bodies[0].get("tools").is_some());
        assert!(bodies[1].get("tools").is_none());
    }

    #[tokio::test]
    async fn test_bad_arguments_reported_to_model() {
        let (base, bodies) = serve(vec![
            tool_reply("search_vehicles", "{oops"),
            text_reply("Sorry, let me try again."),
        ])
        .await;
        let tools = EchoTools::new();

        gateway(&base, 4).invoke(&request(), &tools).await.unwrap();

        assert!(tools.calls.lock().unwrap().is_empty());
        let bodies = bodies.lock().unwrap();
        let last = bodies[1]["messages"].as_array().unwrap().last().unwrap().clone();
        assert!(
            last["content"]
                .as_str()
                .unwrap()
                .starts_with("Error: [INVALID_ARGUMENT]")
        );
    }

    #[tokio::test]
    async fn test_http_error_maps_to_request_failed() {
        let body = r#"{"error":{"message":"Rate limit reached","type":"rate_limit"}}"#;
        let (base, _) = serve(vec![(429, body.to_string())]).await;

        let err = gateway(&base, 4)
            .invoke(&request(), &EchoTools::new())
            .await
            .unwrap_err();

        match err {
            GatewayError::RequestFailed(msg) => assert!(msg.contains("Rate limit reached")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_invalid() {
        let (base, _) = serve(vec![(200, r#"{"choices":[]}"#.to_string())]).await;

        let err = gateway(&base, 4)
            .invoke(&request(), &EchoTools::new())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }
}
