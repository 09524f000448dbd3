//! テスト用のインメモリTransport

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{ApiClient, Transport};
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// 記録された呼び出し
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

impl Call {
    pub fn get(url: &str) -> Self {
        Self { method: "GET", url: url.to_string(), body: None }
    }

    pub fn post(url: &str, body: serde_json::Value) -> Self {
        Self { method: "POST", url: url.to_string(), body: Some(body) }
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Status(u16),
    Timeout,
}

#[derive(Default)]
struct State {
    replies: HashMap<String, Reply>,
    calls: Vec<Call>,
}

/// "GET /export" のようなキーで応答を決めるTransport
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Rc<RefCell<State>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, key: &str, body: &str) -> Self {
        self.set(key, Reply::Body(body.to_string()))
    }

    pub fn fail_status(self, key: &str, status: u16) -> Self {
        self.set(key, Reply::Status(status))
    }

    pub fn timeout(self, key: &str) -> Self {
        self.set(key, Reply::Timeout)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    /// 呼ばれたURLのパス部分（ベースURL除く）
    pub fn paths(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|c| format!("{} {}", c.method, path_of(&c.url)))
            .collect()
    }

    pub fn client(&self) -> ApiClient<FakeTransport> {
        ApiClient::new(self.clone(), ClientConfig::default())
    }

    fn set(self, key: &str, reply: Reply) -> Self {
        self.state.borrow_mut().replies.insert(key.to_string(), reply);
        self
    }

    fn reply(&self, call: Call) -> Result<String> {
        let key = format!("{} {}", call.method, path_of(&call.url));
        let mut state = self.state.borrow_mut();
        state.calls.push(call);

        match state.replies.get(&key).cloned() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status)) => Err(Error::from_status(status, "")),
            Some(Reply::Timeout) => Err(Error::Timeout { millis: 10_000 }),
            None => Err(Error::Network(format!("no route for {}", key))),
        }
    }
}

fn path_of(url: &str) -> &str {
    url.strip_prefix(crate::config::DEFAULT_BASE_URL).unwrap_or(url)
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn get(&self, url: &str) -> Result<String> {
        self.reply(Call::get(url))
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String> {
        self.reply(Call::post(url, body.clone()))
    }
}
