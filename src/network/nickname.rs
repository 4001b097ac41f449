use serde::Serialize;
use serde_json::Value;

use crate::common::User;
use crate::error::{ClientError, Result};

/// Status string the server answers with when a nickname is already held.
pub const NICKNAME_TAKEN_STATUS: &str = "This nickname is taken";

#[derive(Serialize)]
struct NicknameRequest<'a> {
    name: &'a str,
}

/// Claims a nickname via `POST /nickname`.
pub struct NicknameClaimer {
    http: reqwest::Client,
    url: String,
}

impl NicknameClaimer {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Sends one claim. The response status code is not inspected; the body decides.
    pub async fn claim(&self, nickname: &str) -> Result<User> {
        log::info!("Claiming nickname `{nickname}` at {}", self.url);

        let answer: Value = self
            .http
            .post(&self.url)
            .json(&NicknameRequest { name: nickname })
            .send()
            .await?
            .json()
            .await?;

        interpret_answer(nickname, answer)
    }
}

/// Maps the server's answer to either the assigned user or a rejection.
pub fn interpret_answer(nickname: &str, answer: Value) -> Result<User> {
    if answer.get("status").and_then(Value::as_str) == Some(NICKNAME_TAKEN_STATUS) {
        return Err(ClientError::NicknameTaken(nickname.to_string()));
    }
    Ok(serde_json::from_value(answer)?)
}
