//! HTTP client for the Astrarium backend REST API

use std::time::Duration;

use astrarium_logic::entities::{
    AnswerHistory, AnswerResult, AnswerSubmission, AuthToken, DecayInfo, DecayRateResult,
    DecayRateUpdate, DeleteResponse, ForceEvolveResult, PetInteractionResult, PetRecord, PetState,
    Question, QuestionGenerate, SkillCreate, SkillRecommendation, SkillRecord, SkillUpdate,
    UserCreate, UserLogin, UserProfile,
};
use reqwest::{header, Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::session::{Session, TokenStore};

/// Fallback when an error response carries no readable `detail`.
const GENERIC_ERROR_DETAIL: &str = "An error occurred";

/// Typed client for the Astrarium backend.
///
/// The client owns the [`Session`] it was given. Logging in or registering
/// stores the returned token in that session; logging out clears it.
///
/// # Example
///
/// ```rust,no_run
/// use astrarium_client::{AstrariumClient, ClientConfig, Session};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AstrariumClient::new(ClientConfig::from_env(), Session::anonymous())?;
/// let _skills = client.my_skills().await?;
/// # Ok(())
/// # }
/// ```
pub struct AstrariumClient<S: TokenStore> {
    config: ClientConfig,
    http: Client,
    session: Session<S>,
}

impl<S: TokenStore> AstrariumClient<S> {
    pub fn new(config: ClientConfig, session: Session<S>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            config,
            http,
            session,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Give the session back, e.g. to hand it to a new client.
    pub fn into_session(self) -> Session<S> {
        self.session
    }

    // ==================== Auth ====================

    pub async fn register(&mut self, user: &UserCreate) -> Result<AuthToken> {
        let token: AuthToken = self.post("/auth/register", user).await?;
        self.session.set_token(token.access_token.clone())?;
        log::info!("Registered as {}", token.user.username);
        Ok(token)
    }

    pub async fn login(&mut self, credentials: &UserLogin) -> Result<AuthToken> {
        let token: AuthToken = self.post("/auth/login", credentials).await?;
        self.session.set_token(token.access_token.clone())?;
        log::info!("Logged in as {}", token.user.username);
        Ok(token)
    }

    pub async fn current_user(&self) -> Result<UserProfile> {
        self.get("/auth/me").await
    }

    /// Drop the bearer token. No request is made.
    pub fn logout(&mut self) -> Result<()> {
        self.session.clear()
    }

    // ==================== Skills ====================

    pub async fn add_skill(&self, skill: &SkillCreate) -> Result<SkillRecord> {
        self.post("/skills/add", skill).await
    }

    pub async fn my_skills(&self) -> Result<Vec<SkillRecord>> {
        self.get("/skills/my-skills").await
    }

    pub async fn skill(&self, skill_id: i64) -> Result<SkillRecord> {
        self.get(&format!("/skills/skill/{}", skill_id)).await
    }

    pub async fn update_skill(&self, skill_id: i64, update: &SkillUpdate) -> Result<SkillRecord> {
        self.request(
            Method::PATCH,
            &format!("/skills/skill/{}", skill_id),
            Some(update),
        )
        .await
    }

    pub async fn delete_skill(&self, skill_id: i64) -> Result<DeleteResponse> {
        self.request::<_, ()>(Method::DELETE, &format!("/skills/skill/{}", skill_id), None)
            .await
    }

    pub async fn decaying_skills(&self) -> Result<Vec<DecayInfo>> {
        self.get("/skills/decaying").await
    }

    pub async fn skills_due_today(&self) -> Result<Vec<SkillRecord>> {
        self.get("/skills/due-today").await
    }

    pub async fn recommendations(&self) -> Result<Vec<SkillRecommendation>> {
        self.get("/skills/recommendations").await
    }

    // ==================== Questions ====================

    pub async fn generate_question(&self, request: &QuestionGenerate) -> Result<Question> {
        self.post("/questions/generate", request).await
    }

    pub async fn submit_answer(&self, submission: &AnswerSubmission) -> Result<AnswerResult> {
        self.post("/questions/answer", submission).await
    }

    pub async fn question_history(&self, skill_id: i64) -> Result<Vec<AnswerHistory>> {
        self.get(&format!("/questions/history/{}", skill_id)).await
    }

    // ==================== Pets ====================

    pub async fn my_pet(&self) -> Result<PetRecord> {
        self.get("/pets/my-pet").await
    }

    pub async fn pet_state(&self) -> Result<PetState> {
        self.get("/pets/my-pet/state").await
    }

    pub async fn interact(&self) -> Result<PetInteractionResult> {
        self.request::<_, ()>(Method::POST, "/pets/interact", None)
            .await
    }

    pub async fn update_pet_decay(&self) -> Result<PetRecord> {
        self.request::<_, ()>(Method::POST, "/pets/update-decay", None)
            .await
    }

    // ==================== Pet debug ====================

    /// Grant the pet a fixed XP boost and re-check its stage. Backend
    /// testing hook; the stage may stay the same.
    pub async fn force_evolve(&self) -> Result<ForceEvolveResult> {
        let result: ForceEvolveResult = self
            .request::<_, ()>(Method::POST, "/pets/debug/force-evolve", None)
            .await?;
        if result.old_stage != result.new_stage {
            log::info!(
                "Pet evolved {} -> {}",
                result.old_stage.as_str(),
                result.new_stage.as_str()
            );
        }
        Ok(result)
    }

    /// Scale the backend's pet decay rate. Backend testing hook.
    pub async fn set_decay_rate(&self, multiplier: f64) -> Result<DecayRateResult> {
        self.post("/pets/debug/set-decay-rate", &DecayRateUpdate { multiplier })
            .await
    }

    // ==================== Transport ====================

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request::<T, ()>(Method::GET, endpoint, None).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> Result<T> {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = self.config.url(endpoint);
        log::debug!("{} {}", method, url);

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() {
                log::warn!("Backend unreachable at {}: {}", self.config.base_url, e);
                ClientError::Connect {
                    base_url: self.config.base_url.clone(),
                }
            } else {
                ClientError::Http(e)
            }
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            let detail = error_detail(&bytes);
            log::warn!("{} {} failed with {}: {}", method, url, status, detail);
            return Err(ClientError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Pull `detail` out of an error body. String details are returned as-is;
/// structured ones (validation errors) are returned as compact JSON.
fn error_detail(body: &[u8]) -> String {
    let parsed: serde_json::Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(_) => return GENERIC_ERROR_DETAIL.to_string(),
    };
    match parsed.get("detail") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => GENERIC_ERROR_DETAIL.to_string(),
        Some(other) => other.to_string(),
    }
}
